//! One-shot section reveals
//!
//! A triggered section expands its plan into a fixed timeline of tweens;
//! the rendering layer samples element progress every frame.

mod orchestrator;
pub mod plan;

pub use orchestrator::{RevealOrchestrator, RevealState, TriggerOutcome};
pub use plan::{RevealElement, RevealPlan, Timeline};

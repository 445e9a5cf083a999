//! Smooth page scrolling
//!
//! - `config` - frame and scroll timing read from the `[ui]` table
//! - `animation` - row-based animator built on `vista_core::motion::Tween`
//!
//! ```ignore
//! let mut animator = ScrollAnimator::new(config.ui.clone());
//! animator.scroll_by(10, max_scroll);
//!
//! // In main loop, update each frame and get current row
//! let row = animator.update(max_scroll, Instant::now());
//! ```

pub mod animation;
pub mod config;

pub use animation::ScrollAnimator;
pub use config::ScrollConfigExt;

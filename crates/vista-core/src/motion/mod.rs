//! Motion primitives shared by reveals, the carousel and page scrolling
//!
//! - `timing` - progress and interpolation helpers
//! - `tween` - a scheduled play-once 0→1 transition and its easing curve

pub mod timing;
pub mod tween;

pub use crate::config::EasingType;
pub use timing::{lerp, lerp_u16};
pub use tween::Tween;

mod controller;
mod timer;

pub use controller::{CarouselController, CarouselState, SlideChange};
pub use timer::{AutoplayTick, AutoplayTimer};

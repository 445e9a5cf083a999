pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod motion;
pub mod nav;
pub mod observer;
pub mod page;
pub mod registry;
pub mod reveal;
pub mod section;

pub use config::{AppConfig, CarouselConfig, EasingType, ScrollConfig, UiConfig};
pub use error::{Error, Result};
pub use page::{PageEvent, PageSession};
pub use section::SectionKey;

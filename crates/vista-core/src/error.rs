use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Carousel needs at least one slide")]
    EmptyCarousel,

    #[error("Slide index {index} out of range (carousel has {count} slides)")]
    SlideOutOfRange { index: usize, count: usize },

    #[error("Unknown slide: {0}")]
    UnknownSlide(String),
}

pub type Result<T> = std::result::Result<T, Error>;

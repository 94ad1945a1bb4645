use thiserror::Error;

/// Result type for fallible carousel operations.
pub type Result<T> = std::result::Result<T, CarouselError>;

#[derive(Error, Debug)]
pub enum CarouselError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("card deck is empty")]
    EmptyDeck,

    #[error("duplicate card id {0}")]
    DuplicateCardId(u32),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

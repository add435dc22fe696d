use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Target element not found, use a valid node reference")]
    TargetNotFound,

    #[error("Target selector is not valid: {0}")]
    InvalidSelector(String),

    #[error("The target has already been initialized")]
    AlreadyInitialized,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

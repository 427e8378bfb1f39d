use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Missing or malformed required field `{0}`")]
    MalformedPayload(&'static str),
    #[error("No game with id {0}")]
    GameNotFound(Uuid),
}

pub type Result<T> = std::result::Result<T, LibraryError>;

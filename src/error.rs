use thiserror::Error;

/// Common result type used across the SDK.
pub type Result<T> = std::result::Result<T, MilvusError>;

/// Unified error enum surfaced by all public APIs.
#[derive(Error, Debug)]
pub enum MilvusError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("connection error: {0}")]
    Connection(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server error {code}: {reason}")]
    Server { code: String, reason: String },
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("protobuf encode error: {0}")]
    Encode(#[from] prost::EncodeError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MilvusError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        MilvusError::InvalidArgument(message.into())
    }

    /// True for errors raised by local request validation; nothing was sent.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, MilvusError::InvalidArgument(_))
    }
}

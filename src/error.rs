use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("input unavailable: {0}")]
    InputUnavailable(String),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AuditError>;

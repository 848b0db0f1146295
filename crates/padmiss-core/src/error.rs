use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("required field '{field}' missing on {record}")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    #[error("not authenticated, call authenticate first")]
    NotAuthenticated,

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("cab registration failed: {0}")]
    CabRegistration(String),

    #[error("score submission rejected: {0}")]
    ScoreSubmission(String),

    #[error("missing configuration value: {0}")]
    MissingConfig(&'static str),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error carries a message the remote service produced
    pub fn is_remote_rejection(&self) -> bool {
        matches!(
            self,
            Error::Authentication(_) | Error::CabRegistration(_) | Error::ScoreSubmission(_)
        )
    }
}

use reqwest::StatusCode;

/// Errors returned by every call in this crate.
///
/// Validation errors are produced before any request is sent. Network
/// failures are passed through as [`Error::Http`] without retry.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("apiMethod has an unexpected format: {0}")]
    InvalidApiMethod(String),

    #[error("invalid endpoint `{endpoint}`: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("invalid argument: {0}")]
    InvalidArgs(String),

    #[error("invalid token (cannot be sent in an HTTP header)")]
    InvalidToken,

    #[error("{0}")]
    NotImplemented(&'static str),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("error from HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    /// The call reached Dropbox but was answered with a non-success status.
    #[error("Dropbox API returned HTTP {status}: {summary}")]
    Api {
        status: StatusCode,
        summary: String,
        body: String,
    },

    #[error("Dropbox API returned something unexpected: {0}")]
    UnexpectedResponse(String),
}

impl Error {
    /// HTTP status the failed call was answered with: the status of an
    /// [`Error::Api`] response, or the status carried by an [`Error::Http`]
    /// error. `None` for every other variant.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

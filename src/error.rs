use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status; the message is the
    /// error string it reported.
    #[error("{0}")]
    RequestFailed(String),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("invalid profile page url: {0}")]
    InvalidProfileUrl(String),

    #[error("unresolved placeholder in url template: {0}")]
    UrlInterpolation(String),
}

/// Error body sent by the backend: `{"error": {"error": "..."}}`.
#[derive(Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

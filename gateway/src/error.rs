use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The envelope came back with a non-success status.
    #[error("{message}")]
    Api { message: String },
    /// No response was received, or the response carried no usable
    /// envelope.
    #[error("transport error: {message}")]
    Transport { message: String },
    /// HTTP 401 that the refresh protocol could not recover.
    #[error("{message}")]
    Unauthorized { message: String },
    /// The refresh call itself failed. The session has been cleared and
    /// the caller should treat the user as signed out.
    #[error("session refresh failed: {message}")]
    RefreshFailed { message: String },
    /// The envelope `data` did not decode into the caller's type.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport {
            message: err.to_string(),
        }
    }
}

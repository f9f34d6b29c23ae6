/// Shared error type used across all siterep crates.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP: {0}")]
    Http(String),

    #[error("timeout: {0}")]
    Timeout(String),

    #[error("provider {provider}: {message}")]
    Provider { provider: String, message: String },

    #[error("config: {0}")]
    Config(String),

    #[error("auth: {0}")]
    Auth(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether a failed model call is worth retrying once.
    ///
    /// Transport-level failures (connection reset, timeout) are transient;
    /// provider-reported errors (bad request, quota, auth) are not.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Timeout(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_classification() {
        assert!(Error::Http("connection reset".into()).is_transient());
        assert!(Error::Timeout("deadline exceeded".into()).is_transient());
        assert!(!Error::Provider {
            provider: "google".into(),
            message: "HTTP 429 - quota".into(),
        }
        .is_transient());
        assert!(!Error::Config("bad port".into()).is_transient());
    }
}

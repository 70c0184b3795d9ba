//! Error types for the update monitoring glue.

/// Top-level error type for update monitoring.
#[derive(Debug, thiserror::Error)]
pub enum OtaError {
    /// Host update-check call failed.
    #[error("update check error: {0}")]
    Check(String),

    /// Host update-fetch call failed.
    #[error("update fetch error: {0}")]
    Fetch(String),

    /// Host application reload failed.
    #[error("reload error: {0}")]
    Reload(String),

    /// Background task definition or registration failed.
    #[error("schedule error: {0}")]
    Schedule(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, OtaError>;

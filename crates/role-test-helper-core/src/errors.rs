//! Error types for host operations and authentication outcomes.

/// Error returned by host user-store operations.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// A user with this login already exists.
    #[error("login '{0}' is already taken")]
    DuplicateLogin(String),

    /// A user with this email already exists.
    #[error("email '{0}' is already in use")]
    DuplicateEmail(String),

    /// The login did not pass host validation.
    #[error("invalid login '{0}'")]
    InvalidLogin(String),

    /// Storage-level failure (backing store unavailable, rejected write, etc.).
    #[error("user store error: {0}")]
    Storage(String),
}

impl HostError {
    /// Create a storage error from any error type.
    #[inline]
    pub fn storage<E: std::fmt::Display>(err: E) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Terminal authentication failure carried by a
/// [`Resolution`](crate::Resolution).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthFailure {
    /// No handler could resolve the attempt.
    #[error("invalid credentials for '{0}'")]
    InvalidCredentials(String),
}

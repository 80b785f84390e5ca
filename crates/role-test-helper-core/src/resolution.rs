//! The authentication chain's evolving result value.

use crate::errors::AuthFailure;
use crate::user::UserRecord;

/// Result-so-far of an authentication attempt as it moves through the
/// handler chain.
///
/// Handlers receive the current resolution and return the one to pass along;
/// returning the input unchanged means "no opinion".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No handler has resolved the attempt yet.
    Unresolved,

    /// A handler rejected the attempt. Later handlers may still override.
    Failed(AuthFailure),

    /// A handler resolved the attempt to a user. Never overridden.
    Authenticated(UserRecord),
}

impl Resolution {
    /// Whether this resolution carries an authenticated user.
    #[inline]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The authenticated user, if any.
    pub fn user(&self) -> Option<&UserRecord> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// The failure, if any.
    pub fn failure(&self) -> Option<&AuthFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::Unresolved
    }
}

impl From<UserRecord> for Resolution {
    fn from(user: UserRecord) -> Self {
        Self::Authenticated(user)
    }
}

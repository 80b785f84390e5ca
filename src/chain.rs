//! Chain-of-responsibility authentication pipeline.
//!
//! The host login flow dispatches one attempt through an ordered list of
//! handlers. Each handler receives the resolution-so-far plus the submitted
//! username and password, and returns the resolution to pass along;
//! returning the input unchanged means "no opinion".

use tracing::debug;

use role_test_helper_core::errors::AuthFailure;
use role_test_helper_core::host::{CredentialStore, Host};
use role_test_helper_core::resolution::Resolution;

/// Priority of the stock username/password check.
pub const PASSWORD_CHECK_PRIORITY: i32 = 20;

/// Priority of the role-login interceptor. Runs after the stock check so it
/// can observe and override a failed password result.
pub const ROLE_LOGIN_PRIORITY: i32 = 30;

/// A single handler in the authentication chain.
pub trait AuthHandler {
    /// Attempt to advance the resolution for this login.
    fn attempt(&self, current: Resolution, username: &str, password: &str) -> Resolution;
}

/// Ordered handler list, invoked by ascending priority (stable for ties).
#[derive(Default)]
pub struct AuthChain {
    handlers: Vec<(i32, Box<dyn AuthHandler>)>,
}

impl AuthChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler at the given priority.
    pub fn register(&mut self, priority: i32, handler: Box<dyn AuthHandler>) {
        let index = self.handlers.partition_point(|(p, _)| *p <= priority);
        self.handlers.insert(index, (priority, handler));
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run one authentication attempt through every handler.
    ///
    /// A resolution still [`Resolution::Unresolved`] after the full chain is
    /// mapped to a credential failure, as the host login flow does.
    pub fn authenticate(&self, username: &str, password: &str) -> Resolution {
        let mut resolution = Resolution::Unresolved;
        for (priority, handler) in &self.handlers {
            resolution = handler.attempt(resolution, username, password);
            debug!(priority, authenticated = resolution.is_authenticated(), "handler ran");
        }

        match resolution {
            Resolution::Unresolved => {
                Resolution::Failed(AuthFailure::InvalidCredentials(username.to_string()))
            }
            resolved => resolved,
        }
    }
}

/// The stock credential check: exact login match plus verified password.
pub struct PasswordAuthHandler<H> {
    host: H,
}

impl<H> PasswordAuthHandler<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }
}

impl<H: Host + CredentialStore> AuthHandler for PasswordAuthHandler<H> {
    fn attempt(&self, current: Resolution, username: &str, password: &str) -> Resolution {
        if current.is_authenticated() {
            return current;
        }
        if username.is_empty() {
            return current;
        }

        match self.host.find_user_by_login(username) {
            Some(user) if self.host.verify_credentials(username, password) => {
                Resolution::Authenticated(user)
            }
            _ => Resolution::Failed(AuthFailure::InvalidCredentials(username.to_string())),
        }
    }
}

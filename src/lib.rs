//! # Role Test Helper
//!
//! Log in as any registered role name on non-production sites, for testing
//! role-based capabilities. Two cooperating pieces:
//!
//! - [`gate`]: the environment gate deciding whether the helper is enabled
//! - [`interceptor`]: the role-login bypass/provisioning handler
//!
//! plus the plumbing around them:
//!
//! - [`chain`]: the chain-of-responsibility authentication pipeline
//! - [`status`]: admin-facing status report
//! - [`config`]: environment-variable configuration for the CLI host
//! - [`logging`]: tracing setup
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use role_test_helper::login_chain;
//! use role_test_helper_memory::MemoryHost;
//!
//! let host = Arc::new(MemoryHost::new("development", "http://mysite.local"));
//! let chain = login_chain(Arc::clone(&host));
//!
//! // "editor" names a stock role, so the attempt provisions and logs in
//! // an editor user with no password check.
//! let resolution = chain.authenticate("editor", "");
//! assert_eq!(resolution.user().unwrap().login, "editor");
//! ```

pub mod chain;
pub mod config;
pub mod gate;
pub mod interceptor;
pub mod logging;
pub mod status;

pub use chain::{
    AuthChain, AuthHandler, PASSWORD_CHECK_PRIORITY, PasswordAuthHandler, ROLE_LOGIN_PRIORITY,
};
pub use gate::ActivationGate;
pub use interceptor::RoleLoginInterceptor;
pub use status::HelperStatus;

use role_test_helper_core::host::{CredentialStore, Host};

/// Build the default login chain over a host handle: the stock password
/// check, then the role-login interceptor with a plain gate.
pub fn login_chain<H>(host: H) -> AuthChain
where
    H: Host + CredentialStore + Clone + 'static,
{
    let mut chain = AuthChain::new();
    chain.register(
        PASSWORD_CHECK_PRIORITY,
        Box::new(PasswordAuthHandler::new(host.clone())),
    );
    chain.register(
        ROLE_LOGIN_PRIORITY,
        Box::new(RoleLoginInterceptor::new(host)),
    );
    chain
}

//! Environment gate: decides whether the helper is enabled for the current
//! deployment.
//!
//! The decision is computed from the host's environment classification and
//! site URL, passed through optional injected filters, and cached for the
//! rest of the gate's (request-scoped) lifetime unless a forced recheck is
//! requested.

use std::cell::Cell;

use tracing::debug;

use role_test_helper_core::Host;

/// The only classification that disables the helper.
pub const PRODUCTION: &str = "production";

/// Site URL substrings that force the helper on, production or not.
///
/// This is a deliberate plain substring match, not a host/domain parse, so
/// `notlocalhost.example.com` also matches. Preserved for compatibility.
pub const LOCAL_URL_MARKERS: [&str; 2] = [".local", "localhost"];

/// Rewrites the environment classification before evaluation.
pub type EnvironmentFilter = Box<dyn Fn(String) -> String>;

/// Fully replaces the computed decision; receives the computed value, the
/// classification, and the site URL.
pub type ActivationFilter = Box<dyn Fn(bool, &str, &str) -> bool>;

/// Gate holding the host handle, optional filters, and the cached decision.
///
/// The cache is a `Cell`, which keeps the gate `!Sync` on purpose: decisions
/// are scoped to one logical request and must not leak between
/// differently-configured runs.
pub struct ActivationGate<H> {
    host: H,
    environment_filter: Option<EnvironmentFilter>,
    activation_filter: Option<ActivationFilter>,
    decision: Cell<Option<bool>>,
}

impl<H: Host> ActivationGate<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            environment_filter: None,
            activation_filter: None,
            decision: Cell::new(None),
        }
    }

    /// Install a classification rewrite filter.
    pub fn with_environment_filter(mut self, filter: impl Fn(String) -> String + 'static) -> Self {
        self.environment_filter = Some(Box::new(filter));
        self
    }

    /// Install a full-override activation filter.
    pub fn with_activation_filter(
        mut self,
        filter: impl Fn(bool, &str, &str) -> bool + 'static,
    ) -> Self {
        self.activation_filter = Some(Box::new(filter));
        self
    }

    /// The host handle this gate evaluates against.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The environment classification after the rewrite filter.
    pub fn environment_type(&self) -> String {
        let environment = self.host.environment_type();
        match &self.environment_filter {
            Some(filter) => filter(environment),
            None => environment,
        }
    }

    /// Cached activation check.
    pub fn is_active(&self) -> bool {
        self.check(false)
    }

    /// Activation check; recomputes when `force` is set or nothing is
    /// cached yet, and replaces the cache with the fresh decision.
    pub fn check(&self, force: bool) -> bool {
        if !force {
            if let Some(decision) = self.decision.get() {
                return decision;
            }
        }

        let decision = self.compute();
        self.decision.set(Some(decision));
        decision
    }

    fn compute(&self) -> bool {
        let environment = self.environment_type();
        let site_url = self.host.site_url();

        // Active everywhere except the literal "production" classification;
        // unknown classifications count as non-production.
        let mut allowed = environment != PRODUCTION;

        // A .local or localhost URL re-enables the helper unconditionally.
        if LOCAL_URL_MARKERS.iter().any(|m| site_url.contains(m)) {
            allowed = true;
        }

        let decision = match &self.activation_filter {
            Some(filter) => filter(allowed, &environment, &site_url),
            None => allowed,
        };

        debug!(%environment, %site_url, decision, "evaluated activation gate");
        decision
    }
}

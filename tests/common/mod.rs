use std::sync::Arc;

use role_test_helper::AuthChain;
use role_test_helper::login_chain;
use role_test_helper_memory::MemoryHost;

/// A development host on a non-local URL: active through the environment
/// classification alone.
pub fn dev_host() -> Arc<MemoryHost> {
    Arc::new(MemoryHost::new("development", "https://dev.example.com"))
}

/// A production host on a non-local URL: the gate is inactive.
pub fn production_host() -> Arc<MemoryHost> {
    Arc::new(MemoryHost::new("production", "https://example.com"))
}

/// Host plus the default chain (stock password check + role-login
/// interceptor) over a shared handle.
#[allow(dead_code)]
pub fn chain_over(host: &Arc<MemoryHost>) -> AuthChain {
    login_chain(Arc::clone(host))
}

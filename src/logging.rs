use tracing_subscriber::EnvFilter;

/// Initialize console logging with an env-filter default.
///
/// `RUST_LOG` overrides the default crate-level `info` filter.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=info,role_test_helper_memory=info",
            env!("CARGO_CRATE_NAME")
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

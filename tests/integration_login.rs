mod common;

use std::sync::Arc;

use common::{chain_over, dev_host, production_host};
use role_test_helper_core::{AuthFailure, Resolution};
use role_test_helper_memory::MemoryHost;

#[test]
fn role_named_login_provisions_a_user() {
    // Roles {administrator, editor, subscriber}, username "editor",
    // no existing "editor" user.
    let host = Arc::new(
        MemoryHost::new("development", "https://dev.example.com")
            .with_roles(["administrator", "editor", "subscriber"]),
    );
    let chain = chain_over(&host);

    let resolution = chain.authenticate("editor", "whatever");
    let user = resolution.user().expect("expected a provisioned user");

    assert_eq!(user.login, "editor");
    assert_eq!(user.roles, vec!["editor".to_string()]);
    assert_eq!(host.user_count(), 1);
    assert_eq!(host.notices().len(), 1);
}

#[test]
fn existing_role_user_logs_in_with_wrong_password() {
    let host = dev_host();
    let editor = host.seed_user("editor", "real-password", &["editor"]);
    let chain = chain_over(&host);

    // The stock check fails on the wrong password; the interceptor then
    // overrides with the existing record.
    let resolution = chain.authenticate("editor", "wrong-password");
    assert_eq!(resolution, Resolution::Authenticated(editor));
    assert_eq!(host.user_count(), 1, "no user was created");
}

#[test]
fn non_role_username_falls_through_to_failure() {
    let host = dev_host();
    let chain = chain_over(&host);

    let resolution = chain.authenticate("totally_not_a_role", "pw");
    assert_eq!(
        resolution,
        Resolution::Failed(AuthFailure::InvalidCredentials(
            "totally_not_a_role".to_string()
        ))
    );
    assert_eq!(host.user_count(), 0);
}

#[test]
fn regular_credentials_still_work_when_active() {
    let host = dev_host();
    let alice = host.seed_user("alice", "secret", &["author"]);
    let chain = chain_over(&host);

    let resolution = chain.authenticate("alice", "secret");
    assert_eq!(resolution, Resolution::Authenticated(alice));
}

#[test]
fn inactive_gate_leaves_every_attempt_to_the_stock_check() {
    let host = production_host();
    let chain = chain_over(&host);

    // A role-named login gets no special treatment.
    let resolution = chain.authenticate("editor", "pw");
    assert!(matches!(resolution, Resolution::Failed(_)));
    assert_eq!(host.user_count(), 0);

    // Real credentials still authenticate normally.
    let bob = host.seed_user("bob", "hunter2", &["editor"]);
    let resolution = chain.authenticate("bob", "hunter2");
    assert_eq!(resolution, Resolution::Authenticated(bob));
}

#[test]
fn provisioning_failure_falls_back_to_standard_failure() {
    let host = dev_host();
    host.set_read_only(true);
    let chain = chain_over(&host);

    let resolution = chain.authenticate("editor", "pw");
    assert!(matches!(resolution, Resolution::Failed(_)));
    assert_eq!(host.user_count(), 0);
    assert!(host.notices().is_empty());
}

#[test]
fn provisioned_user_can_log_in_again_through_the_bypass() {
    let host = dev_host();
    let chain = chain_over(&host);

    let first = chain.authenticate("subscriber", "");
    let first_user = first.user().expect("provisioned").clone();

    let second = chain.authenticate("subscriber", "a-different-password");
    let second_user = second.user().expect("bypassed").clone();

    assert_eq!(first_user.id, second_user.id);
    assert_eq!(host.user_count(), 1);
}

#[test]
fn empty_username_never_triggers_the_interceptor() {
    let host = dev_host();
    let chain = chain_over(&host);

    let resolution = chain.authenticate("", "");
    assert!(matches!(resolution, Resolution::Failed(_)));
    assert_eq!(host.user_count(), 0);
}

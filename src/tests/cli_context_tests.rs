use crate::cli_context::CliContextBuilder;
use crate::config::Config;
use crate::store::{AssignedOrdering, LoadState};

fn local_config() -> Config {
    Config {
        teams_url: "http://127.0.0.1:9/posts".to_string(),
        members_url: "http://127.0.0.1:9/users".to_string(),
        assigned_ordering: AssignedOrdering::ByCount,
    }
}

#[test]
fn test_builder_uses_given_config() {
    let context = CliContextBuilder::new()
        .with_config(local_config())
        .build();

    assert_eq!(context.config(), &local_config());
}

#[test]
fn test_client_is_reused() {
    let mut context = CliContextBuilder::new()
        .with_config(local_config())
        .build();

    let first = context.client().unwrap();
    let second = context.client().unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(first.teams_url(), "http://127.0.0.1:9/posts");
}

#[test]
fn test_new_store_carries_ordering() {
    let context = CliContextBuilder::new()
        .with_config(local_config())
        .build();

    let store = context.new_store();
    assert_eq!(store.assigned_ordering(), AssignedOrdering::ByCount);
    assert_eq!(store.load_state(), &LoadState::Idle);
}

//! Bootstrap lifecycle tests
//!
//! Init order, reverse shutdown order, best-effort shutdown and teardown
//! after a failed start.

use std::path::Path;
use std::sync::Arc;

use iri_bootstrap::config::{ConfigStore, SettingKey};
use iri_bootstrap::node::{ExtensionLoader, NodeComponent};
use iri_bootstrap::{Node, NodeError, Result};
use mockall::{mock, Sequence};

mock! {
    Component {}
    impl NodeComponent for Component {
        fn name(&self) -> &'static str;
        fn init(&mut self) -> Result<()>;
        fn shutdown(&mut self) -> Result<()>;
    }
}

mock! {
    Loader {}
    impl ExtensionLoader for Loader {
        fn init(&mut self, dir: &Path) -> Result<()>;
        fn shutdown(&mut self) -> Result<()>;
    }
}

fn component(name: &'static str) -> MockComponent {
    let mut mock = MockComponent::new();
    mock.expect_name().return_const(name);
    mock
}

fn store() -> Arc<ConfigStore> {
    let store = Arc::new(ConfigStore::new());
    store.set(SettingKey::IxiDir, "modules");
    store
}

#[test]
fn test_init_order() {
    let mut seq = Sequence::new();
    let mut iota = component("IOTA");
    let mut api = component("API");
    let mut ixi = MockLoader::new();

    iota.expect_init().times(1).in_sequence(&mut seq).returning(|| Ok(()));
    api.expect_init().times(1).in_sequence(&mut seq).returning(|| Ok(()));
    ixi.expect_init()
        .withf(|dir| dir == Path::new("modules"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));

    let mut node = Node::new(store(), Box::new(iota), Box::new(api), Box::new(ixi));
    node.init().unwrap();
}

#[test]
fn test_init_stops_at_first_failure() {
    let mut iota = component("IOTA");
    let mut api = component("API");
    let mut ixi = MockLoader::new();

    iota.expect_init().times(1).returning(|| Ok(()));
    api.expect_init().times(1).returning(|| {
        Err(NodeError::Init {
            component: "API",
            reason: "address in use".to_string(),
        })
    });
    ixi.expect_init().times(0);

    let mut node = Node::new(store(), Box::new(iota), Box::new(api), Box::new(ixi));
    let err = node.init().unwrap_err();
    assert!(matches!(err, NodeError::Init { component: "API", .. }));
}

#[test]
fn test_shutdown_reverse_order() {
    let mut seq = Sequence::new();
    let mut iota = component("IOTA");
    let mut api = component("API");
    let mut ixi = MockLoader::new();

    ixi.expect_shutdown().times(1).in_sequence(&mut seq).returning(|| Ok(()));
    api.expect_shutdown().times(1).in_sequence(&mut seq).returning(|| Ok(()));
    iota.expect_shutdown().times(1).in_sequence(&mut seq).returning(|| Ok(()));

    let mut node = Node::new(store(), Box::new(iota), Box::new(api), Box::new(ixi));
    assert!(node.shutdown().is_empty());
}

#[test]
fn test_shutdown_continues_after_failures() {
    let mut iota = component("IOTA");
    let mut api = component("API");
    let mut ixi = MockLoader::new();

    ixi.expect_shutdown()
        .times(1)
        .returning(|| Err(NodeError::Other("ixi stuck".to_string())));
    api.expect_shutdown().times(1).returning(|| Ok(()));
    iota.expect_shutdown().times(1).returning(|| {
        Err(NodeError::Other("database locked".to_string()))
    });

    let mut node = Node::new(store(), Box::new(iota), Box::new(api), Box::new(ixi));
    let failures = node.shutdown();

    assert_eq!(failures.len(), 2);
    assert!(failures[0].to_string().contains("ixi stuck"));
    assert!(failures[1].to_string().contains("database locked"));
}

#[test]
fn test_failed_start_shuts_everything_down() {
    let mut seq = Sequence::new();
    let mut iota = component("IOTA");
    let mut api = component("API");
    let mut ixi = MockLoader::new();

    iota.expect_init().times(1).in_sequence(&mut seq).returning(|| Ok(()));
    api.expect_init().times(1).in_sequence(&mut seq).returning(|| {
        Err(NodeError::Init {
            component: "API",
            reason: "address in use".to_string(),
        })
    });
    ixi.expect_init().times(0);
    ixi.expect_shutdown().times(1).in_sequence(&mut seq).returning(|| Ok(()));
    api.expect_shutdown().times(1).in_sequence(&mut seq).returning(|| Ok(()));
    iota.expect_shutdown().times(1).in_sequence(&mut seq).returning(|| Ok(()));

    let mut node = Node::new(store(), Box::new(iota), Box::new(api), Box::new(ixi));
    let err = node.start().unwrap_err();
    assert!(matches!(err, NodeError::Init { component: "API", .. }));
}

#[test]
fn test_successful_start_keeps_node_running() {
    let mut iota = component("IOTA");
    let mut api = component("API");
    let mut ixi = MockLoader::new();

    iota.expect_init().times(1).returning(|| Ok(()));
    api.expect_init().times(1).returning(|| Ok(()));
    ixi.expect_init().times(1).returning(|_| Ok(()));
    iota.expect_shutdown().times(0);
    api.expect_shutdown().times(0);
    ixi.expect_shutdown().times(0);

    let mut node = Node::new(store(), Box::new(iota), Box::new(api), Box::new(ixi));
    node.start().unwrap();
}

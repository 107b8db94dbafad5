//! Sharing one augmenter across threads.

mod common;

use std::sync::Arc;
use std::thread;

use augmentor_builtins::{ConnectionType, NetworkConnection};
use augmentor_core::Role;
use augmentor_test::{MockDriver, MockRemote, test_driver_capabilities};
use serde_json::json;

use common::default_augmenter;

#[test]
fn test_concurrent_augmentation_is_consistent() {
    let augmenter = Arc::new(default_augmenter());
    let remotes: Vec<Arc<MockRemote>> = (0..8)
        .map(|_| {
            Arc::new(
                MockRemote::new()
                    .with_capabilities(test_driver_capabilities())
                    .with_response("getNetworkConnection", json!(4)),
            )
        })
        .collect();

    thread::scope(|scope| {
        for remote in &remotes {
            let augmenter = Arc::clone(&augmenter);
            scope.spawn(move || {
                for _ in 0..16 {
                    let driver = MockDriver::new("worker", Arc::clone(remote));
                    let composite = augmenter
                        .augment(driver, Role::Driver)
                        .unwrap()
                        .into_augmented()
                        .unwrap();

                    assert_eq!(composite.interfaces(), vec!["NetworkConnection"]);
                    let network = composite.capability::<dyn NetworkConnection>().unwrap();
                    assert_eq!(network.network_connection().unwrap(), ConnectionType::DATA);
                }
            });
        }
    });

    for remote in &remotes {
        assert_eq!(remote.capability_fetches(), 16);
        assert_eq!(remote.executed_commands().len(), 16);
    }
}

#[test]
fn test_augmenter_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}
    assert_send_sync(&default_augmenter());
}

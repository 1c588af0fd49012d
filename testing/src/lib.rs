//! # Todo Store Testing
//!
//! Testing utilities and helpers for reducer-driven stores.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then harness for reducers
//! - Transition assertion helpers
//! - Helpers for draining store subscriptions in tests
//!
//! ## Example
//!
//! ```ignore
//! use todo_store_testing::helpers::drain_actions;
//!
//! let mut rx = store.subscribe_actions();
//! store.send(Action::DoSomething);
//! assert_eq!(drain_actions(&mut rx).len(), 1);
//! ```

pub mod reducer_test;

/// Test helpers and utilities
pub mod helpers {
    use tokio::sync::broadcast::{self, error::TryRecvError};

    /// Collect every action currently buffered in a subscription
    ///
    /// Never waits. Stops at the first empty or closed read; lagged
    /// positions are skipped.
    pub fn drain_actions<A: Clone>(rx: &mut broadcast::Receiver<A>) -> Vec<A> {
        let mut actions = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(action) => actions.push(action),
                Err(TryRecvError::Lagged(_)) => {}
                Err(TryRecvError::Empty | TryRecvError::Closed) => return actions,
            }
        }
    }
}

// Re-export commonly used items
pub use helpers::drain_actions;
pub use reducer_test::{ReducerTest, assertions};

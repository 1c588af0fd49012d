//! # Todo Store Runtime
//!
//! Runtime that owns reducer state and tells observers when it changes.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, runs the reducer, and fans changes out
//! - **Snapshot channel**: `watch` receiver woken on every applied action
//! - **Action channel**: `broadcast` receiver fed every applied action in order
//!
//! ## Example
//!
//! ```ignore
//! use todo_store_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//! let mut snapshots = store.subscribe();
//!
//! store.send(Action::DoSomething);
//! snapshots.changed().await?;
//!
//! let value = store.state(|s| s.some_field);
//! ```

use std::sync::Arc;
use todo_store_core::reducer::{Reducer, Transition};

/// Default number of applied actions buffered for each action subscriber
pub const DEFAULT_BROADCAST_CAPACITY: usize = 16;

/// Store runtime for coordinating reducer execution and change notification.
pub mod store {
    use super::{Arc, DEFAULT_BROADCAST_CAPACITY, Reducer, Transition};
    use tokio::sync::{broadcast, watch};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (inside a `watch` sender, so mutation and notification are a
    ///    single step under one lock)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Observers (snapshot and action subscribers)
    ///
    /// Cloning a `Store` yields another handle to the same state. Every clone
    /// sees every other clone's actions on its next read.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<watch::Sender<S>>,
        reducer: Arc<R>,
        environment: Arc<E>,
        /// Every applied action, in the order it was applied.
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        A: Clone,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Action subscribers buffer [`DEFAULT_BROADCAST_CAPACITY`] actions
        /// (change with [`Store::with_broadcast_capacity`]).
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_broadcast_capacity(
                initial_state,
                reducer,
                environment,
                DEFAULT_BROADCAST_CAPACITY,
            )
        }

        /// Create a new store with a custom action broadcast capacity
        ///
        /// A capacity of zero is raised to one.
        #[must_use]
        pub fn with_broadcast_capacity(
            initial_state: S,
            reducer: R,
            environment: E,
            capacity: usize,
        ) -> Self {
            let (state, _) = watch::channel(initial_state);
            let (action_broadcast, _) = broadcast::channel(capacity.max(1));

            Self {
                state: Arc::new(state),
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
                action_broadcast,
            }
        }

        /// Send an action to the store
        ///
        /// The reducer runs under the state write lock. When it reports
        /// [`Transition::Applied`], snapshot subscribers are woken and the
        /// action is broadcast before the lock is released, so action
        /// subscribers observe actions in application order.
        ///
        /// Never blocks on observers; slow action subscribers lag instead.
        ///
        /// Must not be called while a [`Store::state`] closure or a
        /// `watch::Ref` from this store is alive on the same thread.
        #[tracing::instrument(skip_all, name = "store_send")]
        pub fn send(&self, action: A) -> Transition {
            self.reduce_and_notify(action, |_, _| ()).0
        }

        /// Send an action and read the resulting state in the same critical
        /// section
        ///
        /// `read` sees the state exactly as the action left it, before any
        /// other handle can apply another action. It runs whether or not the
        /// action changed state, and is passed the transition.
        ///
        /// ```ignore
        /// let (transition, len) = store.send_and_read(Action::Push(1), |_, s| s.items.len());
        /// ```
        #[tracing::instrument(skip_all, name = "store_send_and_read")]
        pub fn send_and_read<F, T>(&self, action: A, read: F) -> (Transition, T)
        where
            F: FnOnce(Transition, &S) -> T,
        {
            self.reduce_and_notify(action, read)
        }

        /// Shared body of [`Store::send`] and [`Store::send_and_read`]
        fn reduce_and_notify<F, T>(&self, action: A, read: F) -> (Transition, T)
        where
            F: FnOnce(Transition, &S) -> T,
        {
            metrics::counter!("store.actions.total").increment(1);

            let mut output = None;
            let applied = self.state.send_if_modified(|state| {
                let observed = action.clone();
                let transition = self.reducer.reduce(state, action, &self.environment);

                if transition.is_applied() {
                    // No receivers is not an error here
                    let _ = self.action_broadcast.send(observed);
                }
                output = Some(read(transition, state));
                transition.is_applied()
            });

            if applied {
                tracing::debug!(
                    observers = self.state.receiver_count(),
                    "Action applied, observers notified"
                );
            } else {
                tracing::trace!("Action left state unchanged");
                metrics::counter!("store.actions.unchanged").increment(1);
            }

            let Some(output) = output else {
                unreachable!("send_if_modified always runs its closure");
            };
            (Transition::from_changed(applied), output)
        }

        /// Read current state via a closure
        ///
        /// Access state through a closure so the read lock is released
        /// promptly:
        ///
        /// ```ignore
        /// let count = store.state(|s| s.items.len());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.borrow();
            f(&state)
        }

        /// Subscribe to state snapshots
        ///
        /// The receiver starts with the current state marked as seen and is
        /// woken after each applied action. Several actions applied between
        /// two reads coalesce into a single wake-up.
        #[must_use]
        pub fn subscribe(&self) -> watch::Receiver<S> {
            self.state.subscribe()
        }

        /// Subscribe to applied actions
        ///
        /// Actions that left state unchanged are not broadcast. A receiver
        /// that falls more than the broadcast capacity behind gets
        /// `RecvError::Lagged` and skips ahead.
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// Number of live snapshot subscribers
        #[must_use]
        pub fn subscriber_count(&self) -> usize {
            self.state.receiver_count()
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                environment: Arc::clone(&self.environment),
                action_broadcast: self.action_broadcast.clone(),
            }
        }
    }

    impl<S, A, E, R> std::fmt::Debug for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("state", &*self.state.borrow())
                .field("subscribers", &self.state.receiver_count())
                .finish_non_exhaustive()
        }
    }
}

pub use store::Store;

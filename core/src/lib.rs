//! # Todo Store Core
//!
//! Core traits and types for reducer-driven state containers.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state owned by a store
//! - **Action**: All possible inputs to a reducer
//! - **Reducer**: Pure function `(State, Action, Environment) → State`
//! - **Transition**: Whether a reduced action changed the state
//! - **Environment**: Injected configuration and dependencies
//!
//! ## Example
//!
//! ```
//! use todo_store_core::reducer::{Reducer, Transition};
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = u32;
//!     type Action = u32;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut u32, action: u32, _env: &()) -> Transition {
//!         if action == 0 {
//!             return Transition::Unchanged;
//!         }
//!         *state += action;
//!         Transition::Applied
//!     }
//! }
//!
//! let mut state = 0;
//! assert!(CounterReducer.reduce(&mut state, 2, &()).is_applied());
//! assert_eq!(state, 2);
//! ```

/// Reducer module - the core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → State`.
/// They hold all domain logic and are deterministic and testable without a
/// runtime.
pub mod reducer {
    /// Outcome of reducing a single action
    ///
    /// Runtimes use this to decide whether observers need to hear about the
    /// action. A reducer must return [`Transition::Unchanged`] only when it
    /// left the state exactly as it found it.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[must_use]
    pub enum Transition {
        /// The action modified state
        Applied,
        /// The action was a no-op for the current state
        Unchanged,
    }

    impl Transition {
        /// Returns `true` if the action modified state
        #[must_use]
        pub const fn is_applied(self) -> bool {
            matches!(self, Self::Applied)
        }

        /// Builds a transition from a "did anything change" flag
        pub const fn from_changed(changed: bool) -> Self {
            if changed { Self::Applied } else { Self::Unchanged }
        }
    }

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into an in-place state change
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// [`Transition::Applied`] if `state` was modified
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Transition;
    }
}

pub use reducer::{Reducer, Transition};

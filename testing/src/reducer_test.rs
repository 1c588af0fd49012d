//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use todo_store_core::reducer::{Reducer, Transition};

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Type alias for transition assertion functions
type TransitionAssertion = Box<dyn FnOnce(Transition)>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// Several actions may be queued with repeated `when_action` calls; they are
/// reduced in order and transition assertions see the outcome of the last one.
///
/// # Example
///
/// ```ignore
/// use todo_store_testing::{ReducerTest, assertions};
///
/// ReducerTest::new(CounterReducer)
///     .with_env(test_environment())
///     .given_state(CounterState { count: 0 })
///     .when_action(CounterAction::Increment)
///     .then_state(|state| {
///         assert_eq!(state.count, 1);
///     })
///     .then_transition(assertions::assert_applied)
///     .run();
/// ```
pub struct ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    reducer: R,
    environment: Option<E>,
    initial_state: Option<S>,
    actions: Vec<A>,
    state_assertions: Vec<StateAssertion<S>>,
    transition_assertions: Vec<TransitionAssertion>,
}

impl<R, S, A, E> ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            initial_state: None,
            actions: Vec::new(),
            state_assertions: Vec::new(),
            transition_assertions: Vec::new(),
        }
    }

    /// Set the environment for the test
    #[must_use]
    pub fn with_env(mut self, env: E) -> Self {
        self.environment = Some(env);
        self
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Queue an action to reduce (When)
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.actions.push(action);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the last action's transition (Then)
    #[must_use]
    pub fn then_transition<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(Transition) + 'static,
    {
        self.transition_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if initial state, at least one action, or environment is not
    /// set, or if any assertions fail.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let mut state = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        assert!(
            !self.actions.is_empty(),
            "At least one action must be set with when_action()"
        );

        let env = self
            .environment
            .expect("Environment must be set with with_env()");

        let mut last = Transition::Unchanged;
        for action in self.actions {
            last = self.reducer.reduce(&mut state, action, &env);
        }

        for assertion in self.state_assertions {
            assertion(&state);
        }

        for assertion in self.transition_assertions {
            assertion(last);
        }
    }
}

/// Helper assertions for transitions
pub mod assertions {
    use todo_store_core::reducer::Transition;

    /// Assert that the action changed state
    ///
    /// # Panics
    ///
    /// Panics if the transition is [`Transition::Unchanged`].
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_applied(transition: Transition) {
        assert_eq!(
            transition,
            Transition::Applied,
            "Expected the action to change state"
        );
    }

    /// Assert that the action was a no-op
    ///
    /// # Panics
    ///
    /// Panics if the transition is [`Transition::Applied`].
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_unchanged(transition: Transition) {
        assert_eq!(
            transition,
            Transition::Unchanged,
            "Expected the action to leave state unchanged"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct TestState {
        count: i32,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Decrement,
        Noop,
    }

    struct TestReducer;

    struct TestEnv;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = TestEnv;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> Transition {
            match action {
                TestAction::Increment => {
                    state.count += 1;
                    Transition::Applied
                }
                TestAction::Decrement => {
                    state.count -= 1;
                    Transition::Applied
                }
                TestAction::Noop => Transition::Unchanged,
            }
        }
    }

    #[test]
    fn test_reducer_test_increment() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { count: 0 })
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .then_transition(assertions::assert_applied)
            .run();
    }

    #[test]
    fn test_reducer_test_sequence() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { count: 5 })
            .when_action(TestAction::Decrement)
            .when_action(TestAction::Decrement)
            .when_action(TestAction::Noop)
            .then_state(|state| {
                assert_eq!(state.count, 3);
            })
            .then_transition(assertions::assert_unchanged)
            .run();
    }

    #[test]
    #[should_panic(expected = "At least one action")]
    fn test_reducer_test_requires_action() {
        ReducerTest::<_, _, TestAction, _>::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { count: 0 })
            .run();
    }
}

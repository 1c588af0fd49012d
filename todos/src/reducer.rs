//! Reducer logic for the todo list.
//!
//! Every transition is a pure function of the current list and one action.
//! Neither action can fail: removing an unknown id is a no-op, and so is
//! adding once the sequential id counter has run out.

use crate::types::{IdStrategy, Todo, TodoAction, TodoId, TodoState};
use todo_store_core::reducer::{Reducer, Transition};

/// Environment for the todo reducer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TodoEnvironment {
    /// How appended todos get their ids
    pub id_strategy: IdStrategy,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub const fn new(id_strategy: IdStrategy) -> Self {
        Self { id_strategy }
    }
}

/// Reducer for the todo list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Picks the id for the next appended todo, advancing the counter
    ///
    /// Returns `None` when the sequential counter is exhausted.
    fn allocate_id(state: &mut TodoState, strategy: IdStrategy) -> Option<TodoId> {
        match strategy {
            IdStrategy::Sequential => {
                let id = state.next_id?;
                state.next_id = id.checked_add(1);
                Some(TodoId::new(id))
            }
            IdStrategy::ListLength => {
                let id = u64::try_from(state.todos.len()).ok()?;
                // Keep the counter past every id if the strategy is switched later
                state.next_id = match (state.next_id, id.checked_add(1)) {
                    (Some(next), Some(after)) => Some(next.max(after)),
                    _ => None,
                };
                Some(TodoId::new(id))
            }
        }
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Transition {
        match action {
            TodoAction::Add { text } => {
                let Some(id) = Self::allocate_id(state, env.id_strategy) else {
                    return Transition::Unchanged;
                };
                state.todos.push(Todo::new(id, text));
                Transition::Applied
            }

            TodoAction::Remove { id } => {
                let Some(index) = state.todos.iter().position(|todo| todo.id == id) else {
                    return Transition::Unchanged;
                };
                state.todos.remove(index);
                Transition::Applied
            }
        }
    }
}

//! The shared todo store handle.
//!
//! A [`TodoStore`] is built once and cloned into every consumer that needs
//! the list. All clones refer to the same state: a change made through one is
//! visible to every other clone's next read, and each subscriber is woken
//! after every applied change.

use crate::config::TodoConfig;
use crate::error::TodoError;
use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::types::{IdStrategy, Todo, TodoAction, TodoId, TodoState};
use todo_store_core::reducer::Transition;
use todo_store_runtime::{DEFAULT_BROADCAST_CAPACITY, Store};
use tokio::sync::{broadcast, watch};

/// The generic store specialised to todos
pub type TodoRuntime = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;

/// Shared handle to one todo list
///
/// Cheap to clone; clones share state.
#[derive(Clone, Debug)]
pub struct TodoStore {
    store: TodoRuntime,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    /// Creates an empty store with sequential ids
    #[must_use]
    pub fn new() -> Self {
        Self::with_todos(Vec::new())
    }

    /// Creates a store holding `initial`, with sequential ids
    #[must_use]
    pub fn with_todos(initial: Vec<Todo>) -> Self {
        Self::build(
            initial,
            IdStrategy::default(),
            DEFAULT_BROADCAST_CAPACITY,
        )
    }

    /// Creates a store from configuration, loading its seed file if set
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or the seed file cannot
    /// be loaded
    pub fn from_config(config: &TodoConfig) -> Result<Self, TodoError> {
        config.validate()?;
        let initial = config.load_seed()?;

        tracing::info!(
            id_strategy = %config.id_strategy,
            seeded = initial.len(),
            "Creating todo store"
        );

        Ok(Self::build(
            initial,
            config.id_strategy,
            config.broadcast_capacity,
        ))
    }

    fn build(initial: Vec<Todo>, id_strategy: IdStrategy, capacity: usize) -> Self {
        let store = Store::with_broadcast_capacity(
            TodoState::with_todos(initial),
            TodoReducer::new(),
            TodoEnvironment::new(id_strategy),
            capacity,
        );
        Self { store }
    }

    /// Appends a todo with the given text and returns its id
    ///
    /// Any text is accepted, including the empty string. The id is read in
    /// the same critical section as the append, so concurrent adds through
    /// other clones cannot be mistaken for this one. Returns `None`, and
    /// leaves the list unchanged, only when the sequential id counter is
    /// exhausted.
    pub fn add_todo(&self, text: impl Into<String>) -> Option<TodoId> {
        let (transition, id) = self
            .store
            .send_and_read(TodoAction::Add { text: text.into() }, |transition, s| {
                transition
                    .is_applied()
                    .then(|| s.todos.last().map(|todo| todo.id))
                    .flatten()
            });

        if !transition.is_applied() {
            tracing::warn!("No fresh todo id left, todo not added");
        }
        id
    }

    /// Removes the first todo with the given id
    ///
    /// Returns `false`, and notifies nobody, if no todo has that id.
    pub fn remove_todo(&self, id: TodoId) -> bool {
        let removed = self.dispatch(TodoAction::Remove { id }).is_applied();
        if !removed {
            tracing::debug!(%id, "No todo to remove");
        }
        removed
    }

    /// Sends a raw action to the store
    pub fn dispatch(&self, action: TodoAction) -> Transition {
        self.store.send(action)
    }

    /// Returns a snapshot of the list
    #[must_use]
    pub fn todos(&self) -> Vec<Todo> {
        self.store.state(|s| s.todos.clone())
    }

    /// Reads the list in place
    ///
    /// The closure runs under the read lock; it must not call back into any
    /// handle of this store that mutates.
    pub fn with_todos_ref<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&[Todo]) -> T,
    {
        self.store.state(|s| f(&s.todos))
    }

    /// Returns the number of todos
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.state(TodoState::count)
    }

    /// Returns `true` if the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Subscribes to list snapshots, see [`Store::subscribe`]
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TodoState> {
        self.store.subscribe()
    }

    /// Subscribes to applied actions, see [`Store::subscribe_actions`]
    #[must_use]
    pub fn subscribe_actions(&self) -> broadcast::Receiver<TodoAction> {
        self.store.subscribe_actions()
    }

    /// Returns a read-only handle to the same list
    #[must_use]
    pub fn reader(&self) -> TodoReader {
        TodoReader {
            store: self.store.clone(),
        }
    }
}

/// Read-only handle to a shared todo list
///
/// For consumers that display the list but never change it.
#[derive(Clone, Debug)]
pub struct TodoReader {
    store: TodoRuntime,
}

impl TodoReader {
    /// Returns a snapshot of the list
    #[must_use]
    pub fn todos(&self) -> Vec<Todo> {
        self.store.state(|s| s.todos.clone())
    }

    /// Returns the number of todos
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.state(TodoState::count)
    }

    /// Returns `true` if the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Subscribes to list snapshots
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TodoState> {
        self.store.subscribe()
    }
}

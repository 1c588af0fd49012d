//! Domain types for the todo list.
//!
//! A todo list is an ordered sequence of items that can be appended to and
//! removed from. Nothing ever marks an item done.

use serde::{Deserialize, Serialize};

/// Identifier of a todo item
///
/// Not guaranteed unique: a caller-supplied initial list may repeat ids, and
/// [`IdStrategy::ListLength`] reuses them after removals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from a raw integer
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw integer
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for TodoId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Identifier, see [`TodoId`]
    pub id: TodoId,
    /// Free text, may be empty
    pub text: String,
    /// Completion flag
    #[serde(default)]
    pub done: bool,
}

impl Todo {
    /// Creates a new, not yet done, todo item
    #[must_use]
    pub fn new(id: impl Into<TodoId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            done: false,
        }
    }
}

/// How the reducer picks the id of an appended todo
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Monotonic counter; ids are never reused
    #[default]
    Sequential,
    /// Length of the list before the append
    ///
    /// Collides after a removal followed by an add. Kept for compatibility
    /// with id assignment in lists produced by older clients. Removal is not
    /// affected: `Remove` still drops only the first todo with a matching
    /// id, where older clients dropped every match.
    ListLength,
}

impl std::fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::ListLength => write!(f, "length"),
        }
    }
}

/// State of the todo list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// Todos in insertion order
    pub todos: Vec<Todo>,
    /// Next id handed out by [`IdStrategy::Sequential`]
    ///
    /// `None` once `u64::MAX` has been handed out (or seeded); sequential
    /// adds are then no-ops.
    pub next_id: Option<u64>,
}

impl Default for TodoState {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoState {
    /// Creates a new empty todo state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: Some(0),
        }
    }

    /// Creates a state holding `todos`, with the counter past the largest id
    ///
    /// A seeded id of `u64::MAX` leaves the counter exhausted.
    #[must_use]
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos
            .iter()
            .map(|todo| todo.id.get())
            .max()
            .map_or(Some(0), |max| max.checked_add(1));

        Self { todos, next_id }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the first todo with the given id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Checks if any todo has the given id
    #[must_use]
    pub fn exists(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }
}

/// Actions accepted by the todo reducer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    /// Append a todo with the given text
    Add {
        /// Text of the new todo
        text: String,
    },

    /// Remove the first todo with the given id
    Remove {
        /// Todo to remove
        id: TodoId,
    },
}

//! A shared, in-memory todo list.
//!
//! The list lives in a reducer-driven store. Two actions change it:
//!
//! - `Add { text }` appends `{ id, text, done: false }`
//! - `Remove { id }` removes the first todo with that id, or does nothing
//!
//! A [`TodoStore`] handle is cloned into every consumer that shows or edits
//! the list. All clones see the same list, and subscribers are woken after
//! every change.
//!
//! # Quick Start
//!
//! ```
//! use todos::{Todo, TodoId, TodoStore};
//!
//! let store = TodoStore::new();
//! let panel = store.clone();
//!
//! let a = store.add_todo("a");
//! let b = store.add_todo("b");
//! assert_eq!((a, b), (Some(TodoId::new(0)), Some(TodoId::new(1))));
//!
//! assert!(panel.remove_todo(TodoId::new(0)));
//! assert_eq!(store.todos(), vec![Todo::new(1, "b")]);
//! ```

pub mod config;
pub mod error;
pub mod reducer;
pub mod shared;
pub mod types;

// Re-export commonly used types
pub use config::TodoConfig;
pub use error::TodoError;
pub use reducer::{TodoEnvironment, TodoReducer};
pub use shared::{TodoReader, TodoStore};
pub use types::{IdStrategy, Todo, TodoAction, TodoId, TodoState};

//! Configuration for the shared todo store.
//!
//! Values come from environment variables, falling back to defaults:
//!
//! | variable                   | meaning                                  | default      |
//! |----------------------------|------------------------------------------|--------------|
//! | `TODOS_ID_STRATEGY`        | `sequential` or `length`                 | `sequential` |
//! | `TODOS_BROADCAST_CAPACITY` | actions buffered per action subscriber   | `16`         |
//! | `TODOS_SEED`               | JSON file holding the initial todo list  | unset        |
//!
//! # Example
//!
//! ```no_run
//! use todos::config::TodoConfig;
//!
//! # fn main() -> Result<(), todos::TodoError> {
//! let config = TodoConfig::from_env()?;
//! let initial = config.load_seed()?;
//! println!("{} seeded todos, ids: {}", initial.len(), config.id_strategy);
//! # Ok(())
//! # }
//! ```

use crate::error::TodoError;
use crate::types::{IdStrategy, Todo};
use std::path::{Path, PathBuf};
use todo_store_runtime::DEFAULT_BROADCAST_CAPACITY;

/// Environment variable selecting the id strategy
pub const ID_STRATEGY_VAR: &str = "TODOS_ID_STRATEGY";
/// Environment variable setting the action broadcast capacity
pub const BROADCAST_CAPACITY_VAR: &str = "TODOS_BROADCAST_CAPACITY";
/// Environment variable pointing at a JSON seed file
pub const SEED_VAR: &str = "TODOS_SEED";

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// How appended todos get their ids
    pub id_strategy: IdStrategy,
    /// Actions buffered per action subscriber before it lags
    pub broadcast_capacity: usize,
    /// Optional JSON file with the initial list
    pub seed_path: Option<PathBuf>,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::default(),
            broadcast_capacity: DEFAULT_BROADCAST_CAPACITY,
            seed_path: None,
        }
    }
}

impl TodoConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::InvalidConfig`] if a variable is set to an
    /// unusable value.
    pub fn from_env() -> Result<Self, TodoError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::InvalidConfig`] if a variable is set to an
    /// unusable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TodoError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ID_STRATEGY_VAR) {
            config.id_strategy = parse_id_strategy(&value)?;
        }

        if let Some(value) = lookup(BROADCAST_CAPACITY_VAR) {
            config.broadcast_capacity =
                value
                    .trim()
                    .parse::<usize>()
                    .map_err(|e| TodoError::InvalidConfig {
                        var: BROADCAST_CAPACITY_VAR,
                        value: value.clone(),
                        reason: e.to_string(),
                    })?;
        }

        if let Some(value) = lookup(SEED_VAR).filter(|v| !v.trim().is_empty()) {
            config.seed_path = Some(PathBuf::from(value));
        }

        config.validate()?;
        Ok(config)
    }

    /// Set the id strategy
    #[must_use]
    pub const fn with_id_strategy(mut self, id_strategy: IdStrategy) -> Self {
        self.id_strategy = id_strategy;
        self
    }

    /// Set the action broadcast capacity
    #[must_use]
    pub const fn with_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = capacity;
        self
    }

    /// Set the seed file
    #[must_use]
    pub fn with_seed_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.seed_path = Some(path.into());
        self
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns error if the broadcast capacity is zero
    pub fn validate(&self) -> Result<(), TodoError> {
        if self.broadcast_capacity == 0 {
            return Err(TodoError::InvalidConfig {
                var: BROADCAST_CAPACITY_VAR,
                value: "0".to_string(),
                reason: "must be > 0".to_string(),
            });
        }
        Ok(())
    }

    /// Load the initial list from the seed file, or an empty list if unset
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not a JSON array of todos
    pub fn load_seed(&self) -> Result<Vec<Todo>, TodoError> {
        match &self.seed_path {
            Some(path) => load_seed(path),
            None => Ok(Vec::new()),
        }
    }
}

/// Read a JSON array of todos
///
/// Records without a `done` field load as not done.
///
/// # Errors
///
/// Returns [`TodoError::SeedIo`] or [`TodoError::SeedFormat`]
pub fn load_seed(path: &Path) -> Result<Vec<Todo>, TodoError> {
    let raw = std::fs::read_to_string(path).map_err(|source| TodoError::SeedIo {
        path: path.to_path_buf(),
        source,
    })?;

    let todos: Vec<Todo> =
        serde_json::from_str(&raw).map_err(|source| TodoError::SeedFormat {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), count = todos.len(), "Loaded seed todos");
    Ok(todos)
}

fn parse_id_strategy(value: &str) -> Result<IdStrategy, TodoError> {
    match value.trim().to_lowercase().as_str() {
        "sequential" | "monotonic" => Ok(IdStrategy::Sequential),
        "length" | "list_length" => Ok(IdStrategy::ListLength),
        _ => Err(TodoError::InvalidConfig {
            var: ID_STRATEGY_VAR,
            value: value.to_string(),
            reason: "expected `sequential` or `length`".to_string(),
        }),
    }
}

//! To-Do Store
//!
//! Single owner of the to-do collection and the id counter.
//! Every mutation goes through here and is mirrored to storage.
//!
//! The counter is never persisted on its own. On `initialize` it is
//! derived from the largest restored id, so it cannot fall behind the data.

use log::{debug, info, warn};

use crate::clock::Clock;
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::model::TodoRecord;
use crate::storage::KeyValueStorage;

#[derive(Debug, Clone)]
pub struct TodoStore<S, C> {
    /// Newest first
    todos: Vec<TodoRecord>,
    last_id: u32,
    storage: S,
    clock: C,
    config: StoreConfig,
}

impl<S: KeyValueStorage, C: Clock> TodoStore<S, C> {
    /// Empty store; call `initialize` to pull in persisted state
    pub fn new(storage: S, clock: C) -> Self {
        Self::with_config(storage, clock, StoreConfig::default())
    }

    pub fn with_config(storage: S, clock: C, config: StoreConfig) -> Self {
        Self {
            todos: Vec::new(),
            last_id: 0,
            storage,
            clock,
            config,
        }
    }

    /// Rehydrate from storage. Missing or unreadable data leaves the store
    /// as it is.
    pub fn initialize(&mut self) {
        match self.load() {
            Ok(Some(todos)) => {
                self.last_id = todos.iter().map(|t| t.id).max().unwrap_or(0);
                self.todos = todos;
                info!(
                    "Restored {} todos, last id {}",
                    self.todos.len(),
                    self.last_id
                );
            }
            Ok(None) => debug!("No persisted todos under '{}'", self.config.todos_key),
            Err(e) => warn!("Ignoring persisted todos: {}", e),
        }
    }

    fn load(&self) -> StoreResult<Option<Vec<TodoRecord>>> {
        let Some(raw) = self.storage.get_item(&self.config.todos_key)? else {
            return Ok(None);
        };
        let todos: Vec<TodoRecord> = serde_json::from_str(&raw)?;
        Ok(Some(todos))
    }

    /// Add a new todo at the front and return its id
    pub fn add(&mut self, content: &str) -> StoreResult<u32> {
        let content = content.trim();
        if content.is_empty() {
            return Err(StoreError::EmptyContent);
        }

        let id = self.last_id.checked_add(1).ok_or(StoreError::IdExhausted)?;
        self.last_id = id;
        let record = TodoRecord::new(id, content.to_string(), self.clock.now_string());
        self.todos.insert(0, record);
        debug!("Added todo {}", id);

        self.persist();
        Ok(id)
    }

    /// Remove a todo by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        let removed = self.todos.len() != before;
        if removed {
            debug!("Removed todo {}", id);
        }

        self.persist();
        removed
    }

    /// Flip `completed` on one todo. Returns the new value, or `None` if the
    /// id is unknown.
    pub fn toggle_completion(&mut self, id: u32) -> Option<bool> {
        let completed = self.todos.iter_mut().find(|t| t.id == id).map(|t| {
            t.completed = !t.completed;
            t.completed
        });
        if let Some(completed) = completed {
            debug!("Todo {} completed={}", id, completed);
        }

        self.persist();
        completed
    }

    /// Newest first
    pub fn list(&self) -> &[TodoRecord] {
        &self.todos
    }

    pub fn get(&self, id: u32) -> Option<&TodoRecord> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn last_id(&self) -> u32 {
        self.last_id
    }

    // Failures are logged, never surfaced
    fn persist(&self) {
        let result = serde_json::to_string(&self.todos)
            .map_err(StoreError::from)
            .and_then(|raw| self.storage.set_item(&self.config.todos_key, &raw));
        if let Err(e) = result {
            warn!("Failed to persist todos: {}", e);
        }
    }
}

//! In-memory to-do storage.
//!
//! # Design
//! `TodoStore` is a cheap, cloneable handle around a single
//! `RwLock<BTreeMap<u64, Todo>>`. The entry point builds one and hands it to
//! the router as state; tests build their own so nothing leaks between them.
//!
//! New ids are `max(existing ids) + 1`, computed while the write lock is held,
//! so two concurrent creates can never pick the same id. Deleting the record
//! with the highest id lets the next create reuse that id.

use std::{collections::BTreeMap, sync::Arc};

use thiserror::Error;
use tokio::sync::RwLock;

use crate::schema::Todo;

/// The only way a store operation can fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[error("Todo not found: {0}")]
    NotFound(u64),
}

#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Arc<RwLock<BTreeMap<u64, Todo>>>,
}

impl TodoStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the two records every fresh process starts with.
    pub fn seeded() -> Self {
        let seed = [
            Todo {
                id: 1,
                title: "Buy groceries".to_string(),
                description: Some("Milk, Cheese, Pizza, Fruit, Tylenol".to_string()),
                completed: false,
            },
            Todo {
                id: 2,
                title: "Learn Python".to_string(),
                description: Some("Need to find a good Python tutorial on the web".to_string()),
                completed: false,
            },
        ];
        Self {
            todos: Arc::new(RwLock::new(
                seed.into_iter().map(|todo| (todo.id, todo)).collect(),
            )),
        }
    }

    /// Inserts a new, not yet completed record and returns it.
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, title: String, description: Option<String>) -> Todo {
        let mut todos = self.todos.write().await;
        let id = todos.keys().next_back().copied().unwrap_or(0) + 1;
        let todo = Todo {
            id,
            title,
            description,
            completed: false,
        };
        todos.insert(id, todo.clone());
        tracing::debug!(id, "created todo");
        todo
    }

    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: u64) -> Result<Todo, StoreError> {
        let todos = self.todos.read().await;
        todos.get(&id).cloned().ok_or_else(|| {
            tracing::warn!(id, "todo not found");
            StoreError::NotFound(id)
        })
    }

    /// Replaces `title` and `description` of an existing record. `id` and
    /// `completed` are carried over unchanged.
    #[tracing::instrument(skip(self))]
    pub async fn update(
        &self,
        id: u64,
        title: String,
        description: Option<String>,
    ) -> Result<Todo, StoreError> {
        let mut todos = self.todos.write().await;
        let Some(current) = todos.get(&id) else {
            tracing::warn!(id, "todo not found");
            return Err(StoreError::NotFound(id));
        };
        let updated = Todo {
            title,
            description,
            ..current.clone()
        };
        todos.insert(id, updated.clone());
        tracing::debug!(id, "updated todo");
        Ok(updated)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut todos = self.todos.write().await;
        match todos.remove(&id) {
            Some(_) => {
                tracing::debug!(id, "deleted todo");
                Ok(())
            }
            None => {
                tracing::warn!(id, "todo not found");
                Err(StoreError::NotFound(id))
            }
        }
    }

    /// Snapshot of every record, ordered by id.
    #[tracing::instrument(skip(self))]
    pub async fn list_all(&self) -> BTreeMap<u64, Todo> {
        self.todos.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }
}

//! Remembers the last list page so detail pages can send the user back.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::warn;

pub const LAST_PAGE_KEY: &str = "lastPage";
pub const DEFAULT_DETAIL_MARKER: &str = "/post/";
pub const DEFAULT_FALLBACK: &str = "/";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt store: {0}")]
    Corrupt(String),
}

/// Durable key-value storage scoped to one site.
pub trait PageStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn store(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local store, used when nothing needs to survive a restart.
#[derive(Debug, Default)]
pub struct MemoryPageStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageStore for MemoryPageStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self
            .values
            .lock()
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A full-page navigation that replaces the current history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub path: String,
}

impl Redirect {
    pub fn replace(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// What a page learned about navigation when it loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageVisit {
    back: Redirect,
}

impl PageVisit {
    /// Target of the page's back control.
    pub fn back(&self) -> Redirect {
        self.back.clone()
    }
}

#[derive(Clone)]
pub struct NavigationMemory {
    store: Arc<dyn PageStore>,
    detail_marker: String,
    fallback: String,
}

impl std::fmt::Debug for NavigationMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationMemory")
            .field("detail_marker", &self.detail_marker)
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

impl NavigationMemory {
    pub fn new(store: Arc<dyn PageStore>) -> Self {
        Self::with_rules(store, DEFAULT_DETAIL_MARKER, DEFAULT_FALLBACK)
    }

    pub fn with_rules(
        store: Arc<dyn PageStore>,
        detail_marker: impl Into<String>,
        fallback: impl Into<String>,
    ) -> Self {
        Self {
            store,
            detail_marker: detail_marker.into(),
            fallback: fallback.into(),
        }
    }

    pub fn is_detail_view(&self, path: &str) -> bool {
        path.contains(&self.detail_marker)
    }

    /// Record a page load. The back target is whatever was stored before this
    /// page, and non-detail pages then become the new stored value.
    pub fn page_loaded(&self, path: &str) -> PageVisit {
        let back = self.last_page();
        if !self.is_detail_view(path)
            && let Err(error) = self.store.store(LAST_PAGE_KEY, path)
        {
            warn!(%error, path, "failed to remember last page");
        }
        PageVisit { back }
    }

    /// The currently stored last page, or the fallback when there is none.
    pub fn last_page(&self) -> Redirect {
        match self.store.load(LAST_PAGE_KEY) {
            Ok(Some(path)) if !path.is_empty() => Redirect::replace(path),
            Ok(_) => Redirect::replace(self.fallback.clone()),
            Err(error) => {
                warn!(%error, "failed to read last page; using fallback");
                Redirect::replace(self.fallback.clone())
            }
        }
    }
}

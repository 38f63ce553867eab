pub mod json_backend;
pub mod memory;

use crate::errors::StoreError;

pub use json_backend::JsonKeyValueStore;
pub use memory::MemoryKeyValueStore;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Namespace prefix for persisted collapse flags.
pub const COLLAPSE_KEY_PREFIX: &str = "menuCollapsed:";

/// String key-value medium that outlives the process (browser-style storage).
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Persistence key for a category. Distinct names may collide only if they
/// are byte-identical after the prefix, which the data model rules out.
pub fn collapse_key(category: &str) -> String {
    format!("{COLLAPSE_KEY_PREFIX}{category}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseMode {
    Persistent,
    /// Sections never collapse and nothing is written.
    AlwaysExpanded,
}

/// Per-category "collapsed" flag backed by a [`KeyValueStore`].
///
/// Medium failures never escape: reads fall back to collapsed, writes are
/// dropped after a warning.
pub struct CollapseStateStore {
    backend: Box<dyn KeyValueStore>,
    mode: CollapseMode,
}

impl CollapseStateStore {
    pub const DEFAULT_COLLAPSED: bool = true;

    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            mode: CollapseMode::Persistent,
        }
    }

    pub fn always_expanded() -> Self {
        Self {
            backend: Box::new(MemoryKeyValueStore::new()),
            mode: CollapseMode::AlwaysExpanded,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryKeyValueStore::new()))
    }

    pub fn mode(&self) -> CollapseMode {
        self.mode
    }

    pub fn get(&self, category: &str) -> bool {
        if self.mode == CollapseMode::AlwaysExpanded {
            return false;
        }
        let key = collapse_key(category);
        match self.backend.get_item(&key) {
            Ok(Some(value)) => match value.as_str() {
                "true" => true,
                "false" => false,
                other => {
                    tracing::debug!(%key, value = other, "unrecognized collapse flag");
                    Self::DEFAULT_COLLAPSED
                }
            },
            Ok(None) => Self::DEFAULT_COLLAPSED,
            Err(err) => {
                tracing::warn!(%key, error = %err, "collapse state unreadable; using default");
                Self::DEFAULT_COLLAPSED
            }
        }
    }

    pub fn set(&self, category: &str, collapsed: bool) {
        if self.mode == CollapseMode::AlwaysExpanded {
            return;
        }
        let key = collapse_key(category);
        let value = if collapsed { "true" } else { "false" };
        if let Err(err) = self.backend.set_item(&key, value) {
            tracing::warn!(%key, error = %err, "collapse state not persisted");
        }
    }

    /// Drops the stored flag so the category reads as the default again.
    pub fn forget(&self, category: &str) {
        if self.mode == CollapseMode::AlwaysExpanded {
            return;
        }
        let key = collapse_key(category);
        if let Err(err) = self.backend.remove_item(&key) {
            tracing::warn!(%key, error = %err, "collapse state not cleared");
        }
    }
}

impl std::fmt::Debug for CollapseStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollapseStateStore")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

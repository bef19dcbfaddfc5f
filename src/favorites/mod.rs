// SPDX-License-Identifier: MPL-2.0
//! Favorites set and its persistence capability.
//!
//! The lightbox never touches storage directly: it receives a
//! [`FavoritesStore`] at construction. The whole set is written back after
//! every toggle as a JSON array of locators, so the last writer wins.
//!
//! # Stores
//!
//! - [`JsonFileStore`] - `favorites.json` in the application data directory
//! - [`MemoryStore`] - process-local, for tests and embedders without a disk

use crate::app::paths;
use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Name of the storage slot holding the favorites array.
pub const FAVORITES_KEY: &str = "favorites";

/// Warning shown when the stored favorites could not be read.
pub const LOAD_ERROR_KEY: &str = "notification-favorites-load-error";

/// Warning shown when the favorites could not be written.
pub const SAVE_ERROR_KEY: &str = "notification-favorites-save-error";

/// Key-value slot holding the serialized favorites.
pub trait FavoritesStore: Send + Sync {
    /// Reads the stored locators. A slot that was never written yields an empty list.
    fn load(&self) -> Result<Vec<String>>;

    /// Replaces the stored locators.
    fn save(&self, favorites: &[String]) -> Result<()>;
}

/// File-backed store writing a JSON array of strings.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<data_dir>/favorites.json`, honoring the usual overrides.
    pub fn in_data_dir(base_dir: Option<PathBuf>) -> Option<Self> {
        paths::get_app_data_dir_with_override(base_dir)
            .map(|dir| Self::new(dir.join(format!("{FAVORITES_KEY}.json"))))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FavoritesStore for JsonFileStore {
    fn load(&self) -> Result<Vec<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, favorites: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(favorites)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with raw slot content, as another instance would have left it.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }

    /// Raw serialized content of the slot.
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl FavoritesStore for MemoryStore {
    fn load(&self) -> Result<Vec<String>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| Error::Favorites("store lock poisoned".into()))?;
        match slot.as_deref() {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, favorites: &[String]) -> Result<()> {
        let json = serde_json::to_string(favorites)?;
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| Error::Favorites("store lock poisoned".into()))?;
        *slot = Some(json);
        Ok(())
    }
}

/// Result of a toggle: the new membership, plus the save error if persisting failed.
#[derive(Debug, Clone)]
pub struct Toggled {
    pub is_favorite: bool,
    pub save_error: Option<Error>,
}

/// Set of favorite locators, kept in the order they were added.
pub struct Favorites {
    items: Vec<String>,
    store: Arc<dyn FavoritesStore>,
}

impl std::fmt::Debug for Favorites {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Favorites")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl Favorites {
    /// Reads the set once from `store`.
    ///
    /// An unreadable slot yields an empty set together with the load error.
    pub fn load(store: Arc<dyn FavoritesStore>) -> (Self, Option<Error>) {
        let (items, error) = match store.load() {
            Ok(items) => (dedup(items), None),
            Err(err) => {
                log::warn!("Could not read favorites, starting empty: {err}");
                (Vec::new(), Some(err))
            }
        };
        (Self { items, store }, error)
    }

    #[must_use]
    pub fn contains(&self, locator: &str) -> bool {
        self.items.iter().any(|item| item == locator)
    }

    /// Adds `locator` if absent, removes it otherwise, then writes the whole set.
    ///
    /// The in-memory change stands even when the write fails.
    pub fn toggle(&mut self, locator: &str) -> Toggled {
        let is_favorite = if let Some(pos) = self.items.iter().position(|item| item == locator) {
            self.items.remove(pos);
            false
        } else {
            self.items.push(locator.to_string());
            true
        };

        let save_error = self.store.save(&self.items).err();
        if let Some(err) = &save_error {
            log::warn!("Could not save favorites: {err}");
        }

        Toggled {
            is_favorite,
            save_error,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn dedup(items: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

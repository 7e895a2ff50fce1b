//! The one persisted setting: whether the dashboard renders dark.

use tracing::{debug, warn};

use super::storage::{PreferenceStore, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayPreference {
    pub dark_mode: bool,
}

impl DisplayPreference {
    /// Read the stored flag under `key`. A missing, unreadable or malformed
    /// entry falls back to the `ambient` host signal.
    pub fn load(store: &impl PreferenceStore, key: &str, ambient: impl FnOnce() -> bool) -> Self {
        let stored = match store.read(key) {
            Ok(Some(raw)) => match serde_json::from_str::<bool>(&raw) {
                Ok(flag) => Some(flag),
                Err(err) => {
                    warn!(key, %err, "ignoring malformed display preference");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(key, %err, "display preference unavailable");
                None
            }
        };

        let dark_mode = stored.unwrap_or_else(ambient);
        debug!(dark_mode, from_store = stored.is_some(), "display preference loaded");
        Self { dark_mode }
    }

    pub fn save(&self, store: &impl PreferenceStore, key: &str) -> Result<(), StorageError> {
        store.write(key, &serde_json::to_string(&self.dark_mode)?)
    }

    pub fn toggled(self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
        }
    }

    pub fn root_class(&self) -> &'static str {
        if self.dark_mode {
            "app app--dark"
        } else {
            "app"
        }
    }
}

/// Remembers the last value handed to the store, so only real changes are
/// written. A failed write still advances it: the in-memory preference keeps
/// driving the UI and the next toggle tries again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceSync {
    saved: DisplayPreference,
}

impl PreferenceSync {
    pub fn new(loaded: DisplayPreference) -> Self {
        Self { saved: loaded }
    }

    pub fn saved(&self) -> DisplayPreference {
        self.saved
    }

    /// `None` when `current` matches what was last synced and nothing was written.
    pub fn sync(
        &mut self,
        current: DisplayPreference,
        store: &impl PreferenceStore,
        key: &str,
    ) -> Option<Result<(), StorageError>> {
        if current == self.saved {
            return None;
        }
        self.saved = current;
        Some(current.save(store, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::memory::MemoryStore;

    const KEY: &str = "darkMode";

    #[test]
    fn stored_value_wins_over_ambient() {
        let store = MemoryStore::default();
        store.write(KEY, "false").unwrap();
        let pref = DisplayPreference::load(&store, KEY, || true);
        assert!(!pref.dark_mode);
    }

    #[test]
    fn absent_key_uses_ambient_signal() {
        let store = MemoryStore::default();
        assert!(DisplayPreference::load(&store, KEY, || true).dark_mode);
        assert!(!DisplayPreference::load(&store, KEY, || false).dark_mode);
    }

    #[test]
    fn malformed_or_unreadable_falls_back() {
        let store = MemoryStore::default();
        store.write(KEY, "definitely").unwrap();
        assert!(DisplayPreference::load(&store, KEY, || true).dark_mode);

        let broken = MemoryStore {
            fail_reads: true,
            ..Default::default()
        };
        assert!(DisplayPreference::load(&broken, KEY, || true).dark_mode);
    }

    #[test]
    fn toggle_then_save_round_trips() {
        let store = MemoryStore::default();
        let pref = DisplayPreference::default().toggled();
        pref.save(&store, KEY).unwrap();
        assert_eq!(store.values.borrow().get(KEY).map(String::as_str), Some("true"));
        assert_eq!(DisplayPreference::load(&store, KEY, || false), pref);
    }

    #[test]
    fn ambient_fallback_is_not_persisted() {
        let store = MemoryStore::default();
        let loaded = DisplayPreference::load(&store, KEY, || true);
        let mut sync = PreferenceSync::new(loaded);

        assert!(sync.sync(loaded, &store, KEY).is_none());
        assert!(store.values.borrow().is_empty());
    }

    #[test]
    fn toggle_is_written_once() {
        let store = MemoryStore::default();
        let loaded = DisplayPreference::load(&store, KEY, || false);
        let mut sync = PreferenceSync::new(loaded);

        let toggled = loaded.toggled();
        assert!(matches!(sync.sync(toggled, &store, KEY), Some(Ok(()))));
        assert_eq!(store.values.borrow().get(KEY).map(String::as_str), Some("true"));
        assert!(sync.sync(toggled, &store, KEY).is_none());

        assert!(matches!(sync.sync(toggled.toggled(), &store, KEY), Some(Ok(()))));
        assert_eq!(store.values.borrow().get(KEY).map(String::as_str), Some("false"));
    }

    #[test]
    fn failed_write_keeps_in_memory_value() {
        let store = MemoryStore {
            fail_writes: true,
            ..Default::default()
        };
        let loaded = DisplayPreference::load(&store, KEY, || false);
        let mut sync = PreferenceSync::new(loaded);

        let toggled = loaded.toggled();
        assert!(matches!(
            sync.sync(toggled, &store, KEY),
            Some(Err(StorageError::Rejected(_)))
        ));
        assert_eq!(sync.saved(), toggled);
        assert!(toggled.dark_mode);
        assert!(store.values.borrow().is_empty());
        assert!(sync.sync(toggled, &store, KEY).is_none());
    }
}

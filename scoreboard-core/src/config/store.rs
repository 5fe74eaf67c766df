//! Versioned configuration snapshot

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use super::types::DisplayConfig;

#[derive(Clone, Copy)]
struct Versioned {
    config: DisplayConfig,
    version: u32,
}

/// Shared configuration with a change counter
///
/// Readers take copies. The version grows by one on every change, so a
/// long-running reader can notice that its snapshot went stale.
pub struct ConfigStore<M: RawMutex> {
    inner: Mutex<M, Cell<Versioned>>,
}

impl<M: RawMutex> ConfigStore<M> {
    /// Create a store at version 0
    pub const fn new(config: DisplayConfig) -> Self {
        Self {
            inner: Mutex::new(Cell::new(Versioned { config, version: 0 })),
        }
    }

    /// Current configuration
    pub fn snapshot(&self) -> DisplayConfig {
        self.inner.lock(|c| c.get().config)
    }

    /// Current configuration together with its version
    pub fn versioned(&self) -> (DisplayConfig, u32) {
        self.inner.lock(|c| {
            let v = c.get();
            (v.config, v.version)
        })
    }

    /// Current version
    pub fn version(&self) -> u32 {
        self.inner.lock(|c| c.get().version)
    }

    /// Modify the configuration in place
    ///
    /// Returns the new configuration and whether it differs from the old
    /// one. The version only moves on a real change.
    pub fn update(&self, f: impl FnOnce(&mut DisplayConfig)) -> (DisplayConfig, bool) {
        self.inner.lock(|c| {
            let mut v = c.get();
            let mut config = v.config;
            f(&mut config);

            let changed = config != v.config;
            if changed {
                v.config = config;
                v.version = v.version.wrapping_add(1);
                c.set(v);
            }
            (config, changed)
        })
    }

    /// Replace the whole configuration
    pub fn replace(&self, config: DisplayConfig) -> bool {
        self.update(|c| *c = config).1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    #[test]
    fn test_update_bumps_version_on_change() {
        let store = ConfigStore::<NoopRawMutex>::new(DisplayConfig::default());
        assert_eq!(store.version(), 0);

        let (config, changed) = store.update(|c| c.use_time = true);
        assert!(changed);
        assert!(config.use_time);
        assert_eq!(store.version(), 1);
        assert_eq!(store.snapshot(), config);
    }

    #[test]
    fn test_redundant_update_keeps_version() {
        let store = ConfigStore::<NoopRawMutex>::new(DisplayConfig::default());
        let (_, changed) = store.update(|c| c.use_score = true);
        assert!(!changed);
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_replace() {
        let store = ConfigStore::<NoopRawMutex>::new(DisplayConfig::default());
        let config = DisplayConfig {
            scroll: true,
            ..DisplayConfig::default()
        };
        assert!(store.replace(config));
        assert!(!store.replace(config));
        assert_eq!(store.versioned(), (config, 1));
    }
}

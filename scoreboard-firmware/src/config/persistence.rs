//! Display settings persistence
//!
//! Loads the display configuration at boot and writes it back after
//! every accepted change. A missing or unreadable record falls back to
//! the defaults.

use defmt::*;

use scoreboard_core::config::{DisplayConfig, StoredConfig, MAX_ENCODED_LEN};

use super::flash::{FlashError, FlashStorage, StorageKey};

/// Configuration persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Flash operation failed
    Flash(FlashError),
    /// Record could not be encoded
    Serialize,
    /// Record is corrupt or from another firmware generation
    Deserialize,
}

impl From<FlashError> for ConfigError {
    fn from(e: FlashError) -> Self {
        ConfigError::Flash(e)
    }
}

/// Reads and writes the display configuration record
pub struct ConfigPersistence<'d> {
    storage: FlashStorage<'d>,
}

impl<'d> ConfigPersistence<'d> {
    pub fn new(storage: FlashStorage<'d>) -> Self {
        Self { storage }
    }

    /// Load the stored configuration, or the defaults
    pub async fn load_or_default(&mut self) -> DisplayConfig {
        match self.load().await {
            Ok(config) => {
                info!("Loaded display configuration from flash");
                log_config(&config);
                config
            }
            Err(ConfigError::Flash(FlashError::NotFound)) => {
                info!("No display configuration in flash, using defaults");
                DisplayConfig::default()
            }
            Err(e) => {
                warn!("Failed to load display configuration: {:?}, using defaults", e);
                DisplayConfig::default()
            }
        }
    }

    pub async fn load(&mut self) -> Result<DisplayConfig, ConfigError> {
        let mut buffer = [0u8; MAX_ENCODED_LEN];
        let len = self
            .storage
            .read(StorageKey::DisplayConfig, &mut buffer)
            .await?;

        debug!("Read {} bytes of configuration from flash", len);
        StoredConfig::decode(&buffer[..len]).ok_or(ConfigError::Deserialize)
    }

    pub async fn save(&mut self, config: &DisplayConfig) -> Result<(), ConfigError> {
        let mut buffer = [0u8; MAX_ENCODED_LEN];
        let encoded = StoredConfig::new(*config)
            .encode(&mut buffer)
            .map_err(|_| ConfigError::Serialize)?;

        self.storage
            .write(StorageKey::DisplayConfig, encoded)
            .await?;
        Ok(())
    }
}

fn log_config(config: &DisplayConfig) {
    debug!(
        "  score={} time={} scroll={} brightness={}",
        config.use_score, config.use_time, config.scroll, config.brightness
    );
}

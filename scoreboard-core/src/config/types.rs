//! Display configuration
//!
//! Stored in flash as postcard-serialized binary data.

use crate::traits::{INITIAL_BRIGHTNESS, MAX_BRIGHTNESS, MIN_BRIGHTNESS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Current on-flash format of [`StoredConfig`]
pub const CONFIG_FORMAT: u8 = 1;

/// Largest encoded [`StoredConfig`]
pub const MAX_ENCODED_LEN: usize = 16;

/// Saturate a requested brightness into the intensity register range
pub fn clamp_brightness(level: i32) -> u8 {
    level.clamp(MIN_BRIGHTNESS as i32, MAX_BRIGHTNESS as i32) as u8
}

/// What the board shows and how
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Show the score
    pub use_score: bool,
    /// Show the time of day
    pub use_time: bool,
    /// Scroll between items instead of alternating
    pub scroll: bool,
    /// Intensity register value (0-15)
    pub brightness: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            use_score: true,
            use_time: false,
            scroll: false,
            brightness: INITIAL_BRIGHTNESS,
        }
    }
}

impl DisplayConfig {
    /// Copy with a new brightness, saturated to 0-15
    pub fn with_brightness(self, level: i32) -> Self {
        Self {
            brightness: clamp_brightness(level),
            ..self
        }
    }
}

/// Configuration record as persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StoredConfig {
    /// Format marker, see [`CONFIG_FORMAT`]
    pub format: u8,
    pub config: DisplayConfig,
}

impl StoredConfig {
    /// Wrap a config in the current format
    pub const fn new(config: DisplayConfig) -> Self {
        Self {
            format: CONFIG_FORMAT,
            config,
        }
    }

    /// Check the record was written by this firmware generation
    pub fn is_valid(&self) -> bool {
        self.format == CONFIG_FORMAT && self.config.brightness <= MAX_BRIGHTNESS
    }

    /// Serialize into `buf`, returning the used prefix
    #[cfg(feature = "serde")]
    pub fn encode<'b>(&self, buf: &'b mut [u8]) -> Result<&'b mut [u8], postcard::Error> {
        postcard::to_slice(self, buf)
    }

    /// Deserialize a record, rejecting other formats
    #[cfg(feature = "serde")]
    pub fn decode(bytes: &[u8]) -> Option<DisplayConfig> {
        let stored: StoredConfig = postcard::from_bytes(bytes).ok()?;
        stored.is_valid().then_some(stored.config)
    }
}

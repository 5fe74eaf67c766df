//! Inter-task communication channels
//!
//! Commands flow from the UART receiver to the controller, replies from
//! both of them to the UART transmitter. Accepted configuration changes
//! are handed to the storage task through a signal, so a burst of
//! commands ends up as a single flash write.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use scoreboard_core::config::DisplayConfig;
use scoreboard_protocol::{Command, Reply};

/// Parsed commands waiting for the controller
const COMMAND_CHANNEL_SIZE: usize = 4;

/// Replies waiting for the transmitter
const REPLY_CHANNEL_SIZE: usize = 8;

/// Parsed remote commands
pub static COMMAND_CHANNEL: Channel<CriticalSectionRawMutex, Command, COMMAND_CHANNEL_SIZE> =
    Channel::new();

/// Replies to send back over the link
pub static REPLY_CHANNEL: Channel<CriticalSectionRawMutex, Reply, REPLY_CHANNEL_SIZE> =
    Channel::new();

/// Latest configuration to persist
pub static CONFIG_SAVE: Signal<CriticalSectionRawMutex, DisplayConfig> = Signal::new();

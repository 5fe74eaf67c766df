//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod command_rx;
pub mod config_save;
pub mod controller;
pub mod heartbeat;
pub mod reply_tx;
pub mod view;

pub use command_rx::command_rx_task;
pub use config_save::config_save_task;
pub use controller::controller_task;
pub use heartbeat::heartbeat_task;
pub use reply_tx::reply_tx_task;
pub use view::view_task;

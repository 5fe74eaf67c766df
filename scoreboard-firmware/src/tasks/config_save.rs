//! Configuration persistence task
//!
//! Owns the flash and writes the display configuration whenever the
//! controller signals a change. Flash writes stall the executor for a
//! few milliseconds, so they are kept out of the command path.

use defmt::*;

use crate::channels::CONFIG_SAVE;
use crate::config::ConfigPersistence;

#[embassy_executor::task]
pub async fn config_save_task(mut persistence: ConfigPersistence<'static>) {
    info!("Config save task started");

    loop {
        let config = CONFIG_SAVE.wait().await;

        match persistence.save(&config).await {
            Ok(()) => info!("Display configuration saved"),
            Err(e) => error!("Failed to save display configuration: {:?}", e),
        }
    }
}

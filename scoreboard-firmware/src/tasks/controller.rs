//! Controller task - executes remote commands in arrival order

use defmt::*;

use crate::channels::{COMMAND_CHANNEL, REPLY_CHANNEL};
use crate::controller::Controller;

#[embassy_executor::task]
pub async fn controller_task(mut controller: Controller) {
    info!("Controller task started");

    loop {
        let command = COMMAND_CHANNEL.receive().await;
        let reply = controller.handle(command).await;
        REPLY_CHANNEL.send(reply).await;
    }
}

//! Bluetooth UART transmit task

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use crate::channels::REPLY_CHANNEL;

#[embassy_executor::task]
pub async fn reply_tx_task(mut tx: BufferedUartTx) {
    info!("Reply TX task started");

    loop {
        let reply = REPLY_CHANNEL.receive().await;
        let line = reply.encode();

        if let Err(e) = tx.write_all(line.as_bytes()).await {
            warn!("Failed to send {:?}: {:?}", reply, e);
        } else {
            trace!("Sent {:?}", reply);
        }
    }
}

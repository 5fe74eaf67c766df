//! Bluetooth UART receive task
//!
//! Splits the byte stream into lines, parses them and queues the commands
//! for the controller. Lines that fail to frame or parse are answered
//! with `ERR` straight away.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use scoreboard_protocol::{Command, LineAssembler, Reply};

use crate::channels::{COMMAND_CHANNEL, REPLY_CHANNEL};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

#[embassy_executor::task]
pub async fn command_rx_task(mut rx: BufferedUartRx) {
    info!("Command RX task started");

    let mut assembler = LineAssembler::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match assembler.feed(byte) {
                        Ok(Some(line)) => dispatch(&line).await,
                        Ok(None) => {}
                        Err(e) => {
                            warn!("Dropped line: {:?}", e);
                            REPLY_CHANNEL.send(Reply::Err).await;
                        }
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

async fn dispatch(line: &str) {
    match Command::parse(line) {
        Ok(command) => {
            debug!("Command: {:?}", command);
            // Waits while the controller is busy animating a score change
            COMMAND_CHANNEL.send(command).await;
        }
        Err(e) => {
            warn!("Rejected '{}': {:?}", line, e);
            REPLY_CHANNEL.send(Reply::Err).await;
        }
    }
}

//! Status LED blink

use embassy_rp::gpio::Output;
use embassy_time::{Duration, Ticker};

/// Half period of the blink
const BLINK_INTERVAL_MS: u64 = 500;

#[embassy_executor::task]
pub async fn heartbeat_task(mut led: Output<'static>) {
    let mut ticker = Ticker::every(Duration::from_millis(BLINK_INTERVAL_MS));
    loop {
        led.toggle();
        ticker.next().await;
    }
}

//! View task - keeps the configured items cycling on the panel

use defmt::*;
use embassy_time::Delay;

use crate::board::Scheduler;

#[embassy_executor::task]
pub async fn view_task(view: &'static Scheduler) {
    info!("View task started");

    let mut delay = Delay;
    loop {
        if let Err(e) = view.run(&mut delay).await {
            warn!("Panel error in view loop: {:?}", e);
        }
        trace!("View loop ended");

        view.wait_restart(&mut delay).await;
        debug!("View restarting");
    }
}

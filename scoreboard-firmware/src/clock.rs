//! RP2040 real-time clock as the time-of-day source

use core::cell::RefCell;

use defmt::*;
use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::{DateTime, DayOfWeek, Rtc, RtcError};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use scoreboard_core::traits::{TimeOfDay, TimeSource};

/// Date the clock starts from after power-up; only the time is shown
const EPOCH: DateTime = DateTime {
    year: 2000,
    month: 1,
    day: 1,
    day_of_week: DayOfWeek::Saturday,
    hour: 0,
    minute: 0,
    second: 0,
};

/// Clock shared between the view loop and the controller
pub struct RtcClock {
    rtc: Mutex<CriticalSectionRawMutex, RefCell<Rtc<'static, RTC>>>,
}

impl RtcClock {
    /// Take the RTC, starting it at midnight if it is not running yet
    pub fn new(mut rtc: Rtc<'static, RTC>) -> Self {
        if !rtc.is_running() {
            if let Err(e) = rtc.set_datetime(EPOCH) {
                warn!("Failed to start RTC: {:?}", Debug2Format(&e));
            }
        }
        Self {
            rtc: Mutex::new(RefCell::new(rtc)),
        }
    }

    /// Set hours and minutes, keeping the date and zeroing the seconds
    pub fn set_time(&self, hours: u8, minutes: u8) -> Result<(), RtcError> {
        self.rtc.lock(|rtc| {
            let mut rtc = rtc.borrow_mut();
            let mut now = rtc.now().unwrap_or(EPOCH);
            now.hour = hours;
            now.minute = minutes;
            now.second = 0;
            rtc.set_datetime(now)
        })
    }
}

impl TimeSource for RtcClock {
    fn time_of_day(&self) -> TimeOfDay {
        self.rtc.lock(|rtc| match rtc.borrow().now() {
            Ok(now) => TimeOfDay::new(now.hour, now.minute),
            // Not running yet
            Err(_) => TimeOfDay::default(),
        })
    }
}

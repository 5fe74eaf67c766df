//! Time-of-day source for the time view

/// Hours and minutes as read from the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    /// Hours (0-23)
    pub hours: u8,
    /// Minutes (0-59)
    pub minutes: u8,
}

impl TimeOfDay {
    /// Create a time of day
    pub const fn new(hours: u8, minutes: u8) -> Self {
        Self { hours, minutes }
    }
}

/// Trait for real-time clock access
///
/// The time view pulls a fresh reading on every render and never caches
/// it, so implementations should be cheap to call.
pub trait TimeSource {
    /// Current time of day
    fn time_of_day(&self) -> TimeOfDay;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn time_of_day(&self) -> TimeOfDay {
        (**self).time_of_day()
    }
}

//! Host-side doubles for the panel, clock and delay

use core::cell::Cell;
use std::vec::Vec;

use embedded_hal_async::delay::DelayNs;

use crate::matrix::Framebuffer;
use crate::traits::{MatrixPanel, PanelError, TimeOfDay, TimeSource};

pub use embassy_futures::block_on;

/// Panel that records every flushed frame
#[derive(Default)]
pub struct MockPanel {
    fb: Framebuffer,
    flushed: Vec<Framebuffer>,
    fail: bool,
    brightness: Option<u8>,
}

impl MockPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent flush fail with a bus error
    pub fn fail_flushes(&mut self, fail: bool) {
        self.fail = fail;
    }

    pub fn fill_framebuffer(&mut self, on: bool) {
        self.fb.fill(on);
    }

    pub fn flush_count(&self) -> usize {
        self.flushed.len()
    }

    pub fn flushed(&self) -> &[Framebuffer] {
        &self.flushed
    }

    /// Flushed frames with consecutive duplicates collapsed
    pub fn distinct_frames(&self) -> Vec<Framebuffer> {
        let mut frames = self.flushed.clone();
        frames.dedup();
        frames
    }

    pub fn brightness(&self) -> Option<u8> {
        self.brightness
    }
}

impl MatrixPanel for MockPanel {
    fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.fb
    }

    fn initialize(&mut self, brightness: u8) -> Result<(), PanelError> {
        self.brightness = Some(brightness);
        self.redraw()
    }

    fn redraw(&mut self) -> Result<(), PanelError> {
        if self.fail {
            return Err(PanelError::Bus);
        }
        self.flushed.push(self.fb);
        Ok(())
    }

    fn turn_on(&mut self) -> Result<(), PanelError> {
        Ok(())
    }

    fn turn_off(&mut self) -> Result<(), PanelError> {
        Ok(())
    }

    fn set_brightness(&mut self, level: u8) -> Result<(), PanelError> {
        self.brightness = Some(level);
        Ok(())
    }

    fn set_test_mode(&mut self, _on: bool) -> Result<(), PanelError> {
        Ok(())
    }
}

/// Clock that reports whatever it was last set to
pub struct FixedClock {
    now: Cell<TimeOfDay>,
}

impl FixedClock {
    pub fn new(now: TimeOfDay) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: TimeOfDay) {
        self.now.set(now);
    }
}

impl TimeSource for FixedClock {
    fn time_of_day(&self) -> TimeOfDay {
        self.now.get()
    }
}

/// Delay that returns at once and remembers the requested milliseconds
#[derive(Default)]
pub struct RecordingDelay {
    delays: Vec<u32>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delays(&self) -> &[u32] {
        &self.delays
    }
}

impl DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.delays.push(ns / 1_000_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.delays.push(ms);
    }
}

/// Delay that runs a hook on every step
///
/// The hook gets the step index and the requested milliseconds, which lets
/// a test change shared state at a precise point of an animation.
pub struct HookDelay<F: FnMut(usize, u32)> {
    hook: F,
    steps: usize,
}

impl<F: FnMut(usize, u32)> HookDelay<F> {
    pub fn new(hook: F) -> Self {
        Self { hook, steps: 0 }
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl<F: FnMut(usize, u32)> DelayNs for HookDelay<F> {
    async fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns / 1_000_000).await;
    }

    async fn delay_ms(&mut self, ms: u32) {
        (self.hook)(self.steps, ms);
        self.steps += 1;
    }
}

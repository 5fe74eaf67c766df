//! Cooperative view scheduler
//!
//! Cycles through the configured items either by alternating whole frames
//! or by scrolling them horizontally. Every animation step is a short
//! synchronous frame followed by an awaited delay; the mode and the
//! configuration version are re-checked before each step, so
//! [`ViewScheduler::disable`] takes effect within one step.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embedded_hal_async::delay::DelayNs;

use super::render_set::RenderSet;
use crate::config::ConfigStore;
use crate::matrix::SharedPanel;
use crate::render::{InfoItem, Renderable};
use crate::score::ScoreModel;
use crate::traits::{MatrixPanel, PanelError, PanelExt, TimeSource};

/// How long each item stays up in alternate mode
pub const ALTERNATE_DWELL_MS: u32 = 2000;

/// Column step of the initial slide-in
pub const SCROLL_IN_STEP_MS: u32 = 10;

/// Column step of a scroll transition
pub const SCROLL_STEP_MS: u32 = 5;

/// Width of one item
pub const INFO_WIDTH: i16 = 32;

/// Blank columns between two scrolling items
pub const INFO_GAP: i16 = 8;

/// Poll period while waiting for the scheduler to stop or restart
pub const HALT_POLL_MS: u32 = 10;

/// What the scheduler is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ViewMode {
    Disabled,
    Alternate,
    Scroll,
}

#[derive(Clone, Copy)]
struct State {
    mode: ViewMode,
    running: bool,
    suspended: bool,
    /// Config version of the last entry
    version: u32,
    /// Last entry found nothing to show
    idle: bool,
}

/// Drives the configured items onto the panel
pub struct ViewScheduler<'a, M: RawMutex, P, T> {
    panel: &'a SharedPanel<M, P>,
    score: &'a ScoreModel<M>,
    clock: &'a T,
    config: &'a ConfigStore<M>,
    state: Mutex<M, Cell<State>>,
}

impl<'a, M: RawMutex, P, T> ViewScheduler<'a, M, P, T> {
    pub const fn new(
        panel: &'a SharedPanel<M, P>,
        score: &'a ScoreModel<M>,
        clock: &'a T,
        config: &'a ConfigStore<M>,
    ) -> Self {
        Self {
            panel,
            score,
            clock,
            config,
            state: Mutex::new(Cell::new(State {
                mode: ViewMode::Disabled,
                running: false,
                suspended: false,
                version: 0,
                idle: false,
            })),
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.state.lock(|s| s.get().mode)
    }

    /// An animation loop is active
    pub fn is_running(&self) -> bool {
        self.state.lock(|s| s.get().running)
    }

    pub fn is_suspended(&self) -> bool {
        self.state.lock(|s| s.get().suspended)
    }

    /// Stop the current loop at its next check point
    ///
    /// Never fails and never waits.
    pub fn disable(&self) {
        self.update_state(|st| st.mode = ViewMode::Disabled);
    }

    /// Stop the current loop and keep it from restarting until [`resume`](Self::resume)
    pub fn suspend(&self) {
        self.update_state(|st| {
            st.suspended = true;
            st.mode = ViewMode::Disabled;
        });
    }

    pub fn resume(&self) {
        self.update_state(|st| st.suspended = false);
    }

    /// Suspend and wait until the running loop has let go of the panel
    pub async fn halt<D: DelayNs>(&self, delay: &mut D) {
        self.suspend();
        while self.is_running() {
            delay.delay_ms(HALT_POLL_MS).await;
        }
    }

    /// Wait until [`run`](Self::run) has something to do again
    ///
    /// Always yields at least once. Returns once the scheduler is not
    /// suspended and, if the last entry found nothing to show, the
    /// configuration has changed since.
    pub async fn wait_restart<D: DelayNs>(&self, delay: &mut D) {
        loop {
            delay.delay_ms(HALT_POLL_MS).await;

            let st = self.state.lock(|s| s.get());
            if st.suspended {
                continue;
            }
            if st.idle && st.version == self.config.version() {
                continue;
            }
            return;
        }
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut State) -> R) -> R {
        self.state.lock(|s| {
            let mut st = s.get();
            let result = f(&mut st);
            s.set(st);
            result
        })
    }

    fn keep_going(&self, mode: ViewMode, version: u32) -> bool {
        self.mode() == mode && self.config.version() == version
    }
}

impl<'a, M, P, T> ViewScheduler<'a, M, P, T>
where
    M: RawMutex,
    P: MatrixPanel,
    T: TimeSource,
{
    /// Show the configured items until disabled or reconfigured
    ///
    /// Rebuilds the item set from the current configuration and applies
    /// its brightness on every entry. Returns at once when suspended or
    /// when there is nothing to show. Panel errors do not stop the
    /// animation; the first one is returned when the loop ends.
    pub async fn run<D: DelayNs>(&self, delay: &mut D) -> Result<(), PanelError> {
        let (config, version) = self.config.versioned();
        let mut set = RenderSet::build(&config, self.score, self.clock);
        let mode = if config.scroll {
            ViewMode::Scroll
        } else {
            ViewMode::Alternate
        };
        let empty = set.is_empty();

        let entry = self.update_state(|st| {
            if st.suspended {
                return None;
            }
            let first_idle = !(st.idle && st.version == version);
            st.version = version;
            st.idle = empty;
            st.running = !empty;
            st.mode = if empty { ViewMode::Disabled } else { mode };
            Some(first_idle)
        });

        match entry {
            None => return Ok(()),
            Some(first_idle) if empty => {
                return self.panel.frame(|p| {
                    let status = p.set_brightness(config.brightness);
                    if first_idle {
                        status.and(p.blank())
                    } else {
                        status
                    }
                });
            }
            Some(_) => {}
        }

        let status = self.panel.frame(|p| p.set_brightness(config.brightness));
        let status = status.and(match mode {
            ViewMode::Scroll => self.scroll(&mut set, version, delay).await,
            _ => self.alternate(&mut set, version, delay).await,
        });

        self.update_state(|st| {
            st.running = false;
            st.mode = ViewMode::Disabled;
        });
        status
    }

    async fn alternate<D: DelayNs>(
        &self,
        set: &mut RenderSet<'a, M, T>,
        version: u32,
        delay: &mut D,
    ) -> Result<(), PanelError> {
        let mut status = Ok(());

        while self.keep_going(ViewMode::Alternate, version) {
            let Some(item) = set.next() else { break };
            status = status.and(self.panel.frame(|p| item.render(p, 0, true, true)));

            // Dwell in short slices so a disable does not wait out the item
            let mut remaining = ALTERNATE_DWELL_MS;
            while remaining > 0 && self.keep_going(ViewMode::Alternate, version) {
                let step = remaining.min(HALT_POLL_MS);
                delay.delay_ms(step).await;
                remaining -= step;
            }
        }
        status
    }

    async fn scroll<D: DelayNs>(
        &self,
        set: &mut RenderSet<'a, M, T>,
        version: u32,
        delay: &mut D,
    ) -> Result<(), PanelError> {
        let mut status = Ok(());
        let Some(mut outgoing) = set.next() else {
            return status;
        };

        for x in (1..=INFO_WIDTH).rev() {
            if !self.keep_going(ViewMode::Scroll, version) {
                return status;
            }
            status = status.and(self.panel.frame(|p| outgoing.render(p, x, true, true)));
            delay.delay_ms(SCROLL_IN_STEP_MS).await;
        }

        while self.keep_going(ViewMode::Scroll, version) {
            let Some(incoming) = set.next() else { break };

            for x in (-(INFO_WIDTH + INFO_GAP) + 1..=0).rev() {
                if !self.keep_going(ViewMode::Scroll, version) {
                    return status;
                }
                status = status.and(self.panel.frame(|p| transition_frame(p, outgoing, incoming, x)));
                delay.delay_ms(SCROLL_STEP_MS).await;
            }
            outgoing = incoming;
        }
        status
    }
}

/// One column of a scroll: the outgoing item at `x`, the next one a gap behind
fn transition_frame<P, M, T>(
    panel: &mut P,
    outgoing: InfoItem<'_, M, T>,
    incoming: InfoItem<'_, M, T>,
    x: i16,
) -> Result<(), PanelError>
where
    P: MatrixPanel,
    M: RawMutex,
    T: TimeSource,
{
    panel.fill(false);
    outgoing.render(panel, x, false, false)?;
    incoming.render(panel, x + INFO_WIDTH + INFO_GAP, false, false)?;
    panel.redraw_twice()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use crate::matrix::Framebuffer;
    use crate::render::TimeView;
    use crate::testing::{block_on, FixedClock, HookDelay, MockPanel, RecordingDelay};
    use crate::traits::TimeOfDay;
    use embassy_futures::join::join;
    use embassy_futures::yield_now;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    type Panel = SharedPanel<NoopRawMutex, MockPanel>;

    struct Fixture {
        panel: Panel,
        score: ScoreModel<NoopRawMutex>,
        clock: FixedClock,
        config: ConfigStore<NoopRawMutex>,
    }

    impl Fixture {
        fn new(config: DisplayConfig) -> Self {
            let score = ScoreModel::new();
            score.set_score(3, 12);
            Self {
                panel: SharedPanel::new(MockPanel::new()),
                score,
                clock: FixedClock::new(TimeOfDay::new(10, 30)),
                config: ConfigStore::new(config),
            }
        }

        fn scheduler(&self) -> ViewScheduler<'_, NoopRawMutex, MockPanel, FixedClock> {
            ViewScheduler::new(&self.panel, &self.score, &self.clock, &self.config)
        }

        fn flush_count(&self) -> usize {
            self.panel.frame(|p| p.flush_count())
        }

        fn score_at(&self, x: i16) -> Framebuffer {
            let mut fb = Framebuffer::new();
            self.score.draw(&mut fb, x);
            fb
        }

        fn time_at(&self, x: i16) -> Framebuffer {
            let mut fb = Framebuffer::new();
            TimeView::new(&self.clock).draw(&mut fb, x);
            fb
        }

        fn joint_at(&self, x: i16) -> Framebuffer {
            let mut fb = self.score_at(x);
            TimeView::new(&self.clock).draw(&mut fb, x + INFO_WIDTH + INFO_GAP);
            fb
        }
    }

    /// Delay that hands control back to the executor once per call
    struct YieldingDelay;

    impl DelayNs for YieldingDelay {
        async fn delay_ns(&mut self, _ns: u32) {
            yield_now().await;
        }
    }

    fn scrolling() -> DisplayConfig {
        DisplayConfig {
            scroll: true,
            ..DisplayConfig::default()
        }
    }

    #[test]
    fn test_alternate_cycles_items() {
        let fx = Fixture::new(DisplayConfig {
            use_time: true,
            ..DisplayConfig::default()
        });
        let sched = fx.scheduler();
        let per_item = (ALTERNATE_DWELL_MS / HALT_POLL_MS) as usize;

        let mut delay = HookDelay::new(|step, ms| {
            assert_eq!(ms, HALT_POLL_MS);
            if step == 2 * per_item + 5 {
                sched.disable();
            }
        });
        block_on(sched.run(&mut delay)).unwrap();

        assert_eq!(delay.steps(), 2 * per_item + 6);
        let frames = fx.panel.frame(|p| p.distinct_frames());
        assert_eq!(frames, [fx.score_at(0), fx.time_at(0), fx.score_at(0)]);
        assert_eq!(sched.mode(), ViewMode::Disabled);
        assert!(!sched.is_running());
    }

    #[test]
    fn test_alternate_dwell_total() {
        let fx = Fixture::new(DisplayConfig::default());
        let sched = fx.scheduler();
        let mut total = 0;

        let mut delay = HookDelay::new(|_, ms| {
            total += ms;
            if total == ALTERNATE_DWELL_MS {
                sched.disable();
            }
        });
        block_on(sched.run(&mut delay)).unwrap();
        drop(delay);

        assert_eq!(total, ALTERNATE_DWELL_MS);
        assert_eq!(fx.flush_count(), 2);
    }

    #[test]
    fn test_scroll_in_then_transition() {
        let fx = Fixture::new(DisplayConfig {
            use_time: true,
            scroll: true,
            ..DisplayConfig::default()
        });
        let sched = fx.scheduler();
        let slide = INFO_WIDTH as usize;
        let transition = (INFO_WIDTH + INFO_GAP) as usize;

        let mut recorded = std::vec::Vec::new();
        let mut delay = HookDelay::new(|step, ms| {
            recorded.push(ms);
            if step + 1 == slide + transition {
                sched.disable();
            }
        });
        block_on(sched.run(&mut delay)).unwrap();
        drop(delay);

        assert!(recorded[..slide].iter().all(|&ms| ms == SCROLL_IN_STEP_MS));
        assert!(recorded[slide..].iter().all(|&ms| ms == SCROLL_STEP_MS));

        let flushed = fx.panel.frame(|p| p.flushed().to_vec());
        assert_eq!(flushed.len(), 2 * (slide + transition));
        // Slide-in starts fully off-panel and ends one column short
        assert!(flushed[0].is_blank());
        assert_eq!(flushed[2 * slide - 1], fx.score_at(1));
        // Transition starts with the score in place
        assert_eq!(flushed[2 * slide], fx.score_at(0));
        // Halfway both items share the frame
        assert_eq!(flushed[2 * (slide + 20)], fx.joint_at(-20));
        assert_eq!(flushed[2 * (slide + 20) + 1], fx.joint_at(-20));
        // and ends with the time one column short
        assert_eq!(flushed[flushed.len() - 1], fx.time_at(1));
    }

    #[test]
    fn test_disable_during_scroll_stops_within_one_step() {
        let fx = Fixture::new(scrolling());
        let sched = fx.scheduler();
        let mut flushed_at_disable = 0;

        let mut delay = HookDelay::new(|step, _| {
            if step == 40 {
                sched.disable();
                flushed_at_disable = fx.flush_count();
            }
        });
        block_on(sched.run(&mut delay)).unwrap();

        assert_eq!(delay.steps(), 41);
        drop(delay);
        assert_eq!(fx.flush_count(), flushed_at_disable);
    }

    #[test]
    fn test_config_change_ends_loop() {
        let fx = Fixture::new(DisplayConfig::default());
        let sched = fx.scheduler();

        let mut delay = HookDelay::new(|step, _| {
            if step == 3 {
                fx.config.update(|c| c.scroll = true);
            }
        });
        block_on(sched.run(&mut delay)).unwrap();

        assert_eq!(delay.steps(), 4);
        assert!(!sched.is_running());
    }

    #[test]
    fn test_entry_syncs_brightness() {
        let fx = Fixture::new(DisplayConfig::default().with_brightness(9));
        let sched = fx.scheduler();

        let mut delay = HookDelay::new(|_, _| sched.disable());
        block_on(sched.run(&mut delay)).unwrap();

        assert_eq!(fx.panel.frame(|p| p.brightness()), Some(9));
    }

    #[test]
    fn test_empty_set_returns_immediately() {
        let fx = Fixture::new(DisplayConfig {
            use_score: false,
            ..DisplayConfig::default()
        });
        fx.panel.frame(|p| p.fill_framebuffer(true));
        let sched = fx.scheduler();
        let mut delay = RecordingDelay::new();

        block_on(sched.run(&mut delay)).unwrap();
        assert!(delay.delays().is_empty());
        assert!(!sched.is_running());
        // Blanked once per configuration
        assert_eq!(fx.flush_count(), 2);
        assert!(fx.panel.frame(|p| p.framebuffer().is_blank()));

        block_on(sched.run(&mut delay)).unwrap();
        assert_eq!(fx.flush_count(), 2);
    }

    #[test]
    fn test_empty_set_syncs_brightness() {
        let fx = Fixture::new(DisplayConfig {
            use_score: false,
            ..DisplayConfig::default().with_brightness(9)
        });
        let sched = fx.scheduler();
        let mut delay = RecordingDelay::new();

        block_on(sched.run(&mut delay)).unwrap();
        assert_eq!(fx.panel.frame(|p| p.brightness()), Some(9));

        // Still applied when idling on an unchanged empty set
        fx.panel.frame(|p| p.set_brightness(1)).unwrap();
        block_on(sched.run(&mut delay)).unwrap();
        assert_eq!(fx.panel.frame(|p| p.brightness()), Some(9));
    }

    #[test]
    fn test_suspended_run_does_nothing() {
        let fx = Fixture::new(DisplayConfig::default());
        let sched = fx.scheduler();
        sched.suspend();

        let mut delay = RecordingDelay::new();
        block_on(sched.run(&mut delay)).unwrap();
        assert_eq!(fx.flush_count(), 0);
        assert!(delay.delays().is_empty());
    }

    #[test]
    fn test_halt_waits_for_loop_exit() {
        let fx = Fixture::new(scrolling());
        let sched = fx.scheduler();

        let (result, ()) = block_on(join(
            sched.run(&mut YieldingDelay),
            sched.halt(&mut YieldingDelay),
        ));

        assert_eq!(result, Ok(()));
        assert!(!sched.is_running());
        assert!(sched.is_suspended());
        assert_eq!(sched.mode(), ViewMode::Disabled);
    }

    #[test]
    fn test_wait_restart_after_resume() {
        let fx = Fixture::new(DisplayConfig::default());
        let sched = fx.scheduler();
        sched.suspend();

        let mut delay = HookDelay::new(|step, _| {
            if step == 2 {
                sched.resume();
            }
        });
        block_on(sched.wait_restart(&mut delay));
        assert_eq!(delay.steps(), 3);
    }

    #[test]
    fn test_wait_restart_idle_until_reconfigured() {
        let fx = Fixture::new(DisplayConfig {
            use_score: false,
            ..DisplayConfig::default()
        });
        let sched = fx.scheduler();
        block_on(sched.run(&mut RecordingDelay::new())).unwrap();

        let mut delay = HookDelay::new(|step, _| {
            if step == 4 {
                fx.config.update(|c| c.use_time = true);
            }
        });
        block_on(sched.wait_restart(&mut delay));
        assert_eq!(delay.steps(), 5);
    }

    #[test]
    fn test_flush_errors_reported_after_loop() {
        let fx = Fixture::new(DisplayConfig::default());
        fx.panel.frame(|p| p.fail_flushes(true));
        let sched = fx.scheduler();

        let mut delay = HookDelay::new(|step, _| {
            if step == 250 {
                sched.disable();
            }
        });
        let result = block_on(sched.run(&mut delay));

        assert_eq!(result, Err(PanelError::Bus));
        assert_eq!(delay.steps(), 251);
    }
}

//! Remote command handling
//!
//! Applies one parsed command at a time against the shared board state
//! and produces the reply. Score changes interrupt the view loop for the
//! change animation; configuration changes only bump the store version,
//! which the view loop picks up at its next check point.

use defmt::*;
use embassy_time::{Delay, Timer};

use scoreboard_core::config::{clamp_brightness, DisplayConfig};
use scoreboard_core::traits::{MatrixPanel, PanelError};
use scoreboard_protocol::{Command, Reply, ViewStyle};

use crate::board::{Config, Panel, Scheduler, Score};
use crate::channels::CONFIG_SAVE;
use crate::clock::RtcClock;

/// How long a new score stays on screen before the view loop resumes
pub const SETTING_HOLD_MS: u64 = 650;

/// Command executor owning references to everything a command can touch
pub struct Controller {
    panel: &'static Panel,
    score: &'static Score,
    clock: &'static RtcClock,
    config: &'static Config,
    view: &'static Scheduler,
    delay: Delay,
}

impl Controller {
    pub fn new(
        panel: &'static Panel,
        score: &'static Score,
        clock: &'static RtcClock,
        config: &'static Config,
        view: &'static Scheduler,
    ) -> Self {
        Self {
            panel,
            score,
            clock,
            config,
            view,
            delay: Delay,
        }
    }

    /// Execute a command and build its reply
    pub async fn handle(&mut self, command: Command) -> Reply {
        match command {
            Command::SetScore { left, right } => {
                let outcome = self.show_new_score(left, right).await;
                if let Err(e) = outcome {
                    warn!("Panel error while showing score: {:?}", e);
                }
                // The score is committed either way
                Reply::Ok
            }
            Command::SetTime { hours, minutes } => {
                let outcome = self.clock.set_time(hours, minutes);
                if outcome.is_err() {
                    warn!("Failed to set RTC to {}:{}", hours, minutes);
                }
                Reply::from_outcome(&outcome)
            }
            Command::SetBrightness(level) => {
                let level = clamp_brightness(level);
                self.configure(|c| c.brightness = level)
            }
            Command::SetView(style) => self.configure(|c| c.scroll = style == ViewStyle::Scroll),
            Command::ShowScore(on) => self.configure(|c| c.use_score = on),
            Command::ShowTime(on) => self.configure(|c| c.use_time = on),
            Command::Display(on) => {
                let outcome = self.panel.frame(|p| if on { p.turn_on() } else { p.turn_off() });
                self.panel_reply(outcome)
            }
            Command::Reinit => {
                let brightness = self.config.snapshot().brightness;
                let outcome = self.panel.frame(|p| p.initialize(brightness));
                self.panel_reply(outcome)
            }
            Command::GetScore => {
                let score = self.score.score();
                Reply::Score {
                    left: score.left,
                    right: score.right,
                }
            }
            Command::GetConfig => {
                let config = self.config.snapshot();
                Reply::Config {
                    use_score: config.use_score,
                    use_time: config.use_time,
                    scroll: config.scroll,
                    brightness: config.brightness,
                }
            }
        }
    }

    /// Halt the view, animate the change, hold it, then let the view resume
    async fn show_new_score(&mut self, left: i32, right: i32) -> Result<(), PanelError> {
        self.view.halt(&mut self.delay).await;
        let outcome = self
            .score
            .render_change(self.panel, &mut self.delay, left, right)
            .await;
        Timer::after_millis(SETTING_HOLD_MS).await;
        self.view.resume();

        let score = self.score.score();
        debug!("Score set to {}:{}", score.left, score.right);
        outcome
    }

    fn configure(&self, f: impl FnOnce(&mut DisplayConfig)) -> Reply {
        let (config, changed) = self.config.update(f);
        if changed {
            debug!(
                "Config: score={} time={} scroll={} brightness={}",
                config.use_score, config.use_time, config.scroll, config.brightness
            );
            CONFIG_SAVE.signal(config);
        }
        Reply::Ok
    }

    fn panel_reply(&self, outcome: Result<(), PanelError>) -> Reply {
        if let Err(e) = outcome {
            warn!("Panel error: {:?}", e);
        }
        Reply::from_outcome(&outcome)
    }
}

//! Game state machine.
//!
//! ```text
//! SelectSpeed ──start──▶ PlayRound ──start──▶ Ending ──start──▶ SelectSpeed
//! ```
//!
//! Each state is a blocking method. State is handed from one to the next by
//! value ([`RoundState`], [`Outcome`]); nothing lives in globals.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;
use embedded_io::Write;

use crate::OutputDriver;
use crate::audio::AudioModule;
use crate::chaser::Chaser;
use crate::config::{ConfigError, GameConfig};
use crate::input::Debouncer;
use crate::log::trace;
use crate::renderer::LedRenderer;
use crate::timing::sleep;

/// Everything a round carries from play into its ending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundState {
    pub level: u8,
    /// Pause between two chaser steps
    pub delay: Duration,
    pub chaser: Chaser,
}

impl RoundState {
    /// Win iff the chaser was stopped on the last playable cell
    pub const fn outcome(&self) -> Outcome {
        if self.chaser.at_target() {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }
}

/// Result of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

/// Hardware the game runs on
pub struct Peripherals<O, P, W, D>
where
    O: OutputDriver,
    P: InputPin,
    W: Write,
    D: DelayNs,
{
    pub strip: O,
    /// Start/stop button
    pub start: P,
    /// Speed selection button
    pub speed: P,
    /// Serial line to the audio module
    pub serial: W,
    pub delay: D,
}

/// The reaction game
pub struct Game<O, P, W, D, const N: usize>
where
    O: OutputDriver,
    P: InputPin,
    W: Write,
    D: DelayNs,
{
    config: GameConfig,
    renderer: LedRenderer<O, N>,
    audio: AudioModule<W>,
    start: Debouncer<P>,
    speed: Debouncer<P>,
    delay: D,
    level: u8,
}

impl<O, P, W, D, const N: usize> Game<O, P, W, D, N>
where
    O: OutputDriver,
    P: InputPin,
    W: Write,
    D: DelayNs,
{
    /// Create a game for a strip of `N` cells
    ///
    /// Refuses to start with an invalid configuration.
    pub fn new(
        config: GameConfig,
        peripherals: Peripherals<O, P, W, D>,
    ) -> Result<Self, ConfigError> {
        config.validate(N)?;
        let Peripherals {
            strip,
            start,
            speed,
            serial,
            delay,
        } = peripherals;
        let release_poll = config.timings.release_poll;
        Ok(Self {
            renderer: LedRenderer::new(strip, config.range, config.brightness)?,
            audio: AudioModule::new(serial),
            start: Debouncer::with_release_poll(start, release_poll),
            speed: Debouncer::with_release_poll(speed, release_poll),
            delay,
            level: config.initial_level,
            config,
        })
    }

    /// Currently selected level
    pub const fn level(&self) -> u8 {
        self.level
    }

    pub const fn renderer(&self) -> &LedRenderer<O, N> {
        &self.renderer
    }

    pub const fn audio(&self) -> &AudioModule<W> {
        &self.audio
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Run the game until power-off
    pub fn run(&mut self) -> ! {
        self.start();
        loop {
            self.cycle();
        }
    }

    /// One-time boot sequence
    pub fn start(&mut self) {
        trace!("game: starting with {} LEDs", N);
        self.renderer.clear();
        self.renderer.show();
        self.audio.prime(&mut self.delay, &self.config.priming);
    }

    /// Select a speed, play one round and show its outcome
    pub fn cycle(&mut self) -> Outcome {
        let level = self.select_speed();
        let round = self.play_round(level);
        self.finish_round(&round)
    }

    /// Speed selection, returns the chosen level
    ///
    /// The speed button steps through the levels, wrapping around; the
    /// start button confirms.
    pub fn select_speed(&mut self) -> u8 {
        let levels = self.config.speed.levels;
        let color = self.config.palette.progress;
        self.renderer.show_level(self.level, color);
        loop {
            if self.start.poll_press(&mut self.delay) {
                trace!("game: level {} selected", self.level);
                return self.level;
            }
            if self.speed.poll_press(&mut self.delay) {
                self.level = levels.next(self.level);
                self.renderer.show_level(self.level, color);
            }
            sleep(&mut self.delay, self.config.timings.select_poll);
        }
    }

    /// Run the chaser until the start button stops it
    pub fn play_round(&mut self, level: u8) -> RoundState {
        let mut round = RoundState {
            level,
            delay: self.config.speed.level_to_delay(level),
            chaser: Chaser::new(self.config.range),
        };
        trace!(
            "game: round at level {} ({}ms per step)",
            level,
            round.delay.as_millis()
        );
        self.audio.play_track(self.config.tracks.round_start);

        let color = self.config.palette.chaser;
        self.renderer.clear();
        self.renderer.step_chaser(round.chaser.position(), color);
        sleep(&mut self.delay, round.delay);
        loop {
            if self.start.poll_press(&mut self.delay) {
                return round;
            }
            round.chaser.step();
            self.renderer.step_chaser(round.chaser.position(), color);
            sleep(&mut self.delay, round.delay);
        }
    }

    /// Announce the outcome and hold the wipe until acknowledged
    pub fn finish_round(&mut self, round: &RoundState) -> Outcome {
        let outcome = round.outcome();
        let (track, color, boundary) = match outcome {
            Outcome::Win => (
                self.config.tracks.win,
                self.config.palette.win,
                self.config.range.last,
            ),
            Outcome::Lose => (
                self.config.tracks.lose,
                self.config.palette.lose,
                round.chaser.position(),
            ),
        };
        trace!(
            "game: {:?} at position {}",
            outcome,
            round.chaser.position()
        );
        self.audio.play_track(track);
        self.renderer.wipe(
            boundary,
            color,
            round.delay,
            &self.config.timings,
            &mut self.start,
            &mut self.delay,
        );
        outcome
    }
}

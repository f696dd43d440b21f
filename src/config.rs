//! Game configuration and its start-up validation.
//!
//! A bad configuration is a programming error: [`GameConfig::validate`]
//! rejects it before anything touches the hardware, values are never
//! silently clamped into shape.

use core::fmt;

use embassy_time::Duration;

use crate::audio::Priming;
use crate::bounds::LogicalRange;
use crate::color::{BLUE, GREEN, RED, Rgbw, WHITE};
use crate::input::RELEASE_POLL_INTERVAL;
use crate::speed::SpeedCurve;

/// Reasons a configuration is refused at start-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `first` is greater than `last`
    RangeReversed,
    /// `last` does not fit the pixel buffer
    RangeOutOfBuffer,
    /// Minimum level is above the maximum level
    LevelsReversed,
    /// Pivot level is outside of the level range
    PivotOutOfLevels,
    /// Boot level is not a selectable level
    InitialLevelOutOfRange,
    /// More levels than playable cells to show them on
    LevelsExceedRange,
    /// Delays do not go down from slow to fast
    SpeedCurveNotDecreasing,
    /// Delays shrink by less than a microsecond per level
    SpeedCurveTooFlat,
    /// A polling interval is zero
    ZeroPollInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::RangeReversed => "logical range starts after it ends",
            Self::RangeOutOfBuffer => "logical range exceeds the pixel buffer",
            Self::LevelsReversed => "minimum level is above maximum level",
            Self::PivotOutOfLevels => "pivot level is outside of the level range",
            Self::InitialLevelOutOfRange => "initial level is outside of the level range",
            Self::LevelsExceedRange => "maximum level exceeds the playable LED count",
            Self::SpeedCurveNotDecreasing => "speed delays must decrease from slow to fast",
            Self::SpeedCurveTooFlat => "speed delays must drop at least 1us per level",
            Self::ZeroPollInterval => "poll intervals must be non-zero",
        };
        f.write_str(message)
    }
}

impl core::error::Error for ConfigError {}

/// Colors used by the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Level bar in the speed selection
    pub progress: Rgbw,
    /// Moving chaser pixel
    pub chaser: Rgbw,
    pub win: Rgbw,
    pub lose: Rgbw,
}

impl Palette {
    pub const fn new() -> Self {
        Self {
            progress: BLUE,
            chaser: WHITE,
            win: GREEN,
            lose: RED,
        }
    }
}

/// Track numbers on the playback module's storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioTracks {
    pub round_start: u16,
    pub win: u16,
    pub lose: u16,
}

impl AudioTracks {
    pub const fn new() -> Self {
        Self {
            round_start: 1,
            win: 2,
            lose: 3,
        }
    }
}

/// Fixed pacing of the polling loops and animations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Cadence of the speed selection loop
    pub select_poll: Duration,
    /// Cadence of the wait-for-release loop
    pub release_poll: Duration,
    /// Cadence of button sampling while an animation frame is held
    pub blink_poll: Duration,
    /// How long each blink frame of the wipe is held
    pub blink: Duration,
}

impl Timings {
    pub const fn new() -> Self {
        Self {
            select_poll: Duration::from_millis(10),
            release_poll: RELEASE_POLL_INTERVAL,
            blink_poll: Duration::from_millis(10),
            blink: Duration::from_millis(400),
        }
    }
}

/// Configuration for the whole game
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub range: LogicalRange,
    pub speed: SpeedCurve,
    /// Level shown when the game boots
    pub initial_level: u8,
    pub palette: Palette,
    pub tracks: AudioTracks,
    pub timings: Timings,
    pub priming: Priming,
    /// Global output brightness, 255 is full
    pub brightness: u8,
}

impl GameConfig {
    /// Settings of the 17-LED RGBW strip with the first cell hidden
    pub const fn new() -> Self {
        let speed = SpeedCurve::new();
        Self {
            range: LogicalRange::new(1, 16),
            initial_level: speed.levels.min,
            speed,
            palette: Palette::new(),
            tracks: AudioTracks::new(),
            timings: Timings::new(),
            priming: Priming::new(),
            brightness: 77,
        }
    }

    /// Check the configuration against a strip of `len` cells
    pub fn validate(&self, len: usize) -> Result<(), ConfigError> {
        self.range.validate(len)?;
        self.speed.validate()?;
        if !self.speed.levels.contains(self.initial_level) {
            return Err(ConfigError::InitialLevelOutOfRange);
        }
        if u16::from(self.speed.levels.max) > self.range.count() {
            return Err(ConfigError::LevelsExceedRange);
        }
        let Timings {
            select_poll,
            release_poll,
            blink_poll,
            blink: _,
        } = self.timings;
        let zero = Duration::from_ticks(0);
        if select_poll == zero || release_poll == zero || blink_poll == zero {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

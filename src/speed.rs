//! Difficulty levels and their chaser step delays.
//!
//! The delay curve is made of two linear segments joined at a pivot level:
//! `min..=pivot` goes from `slow` to `medium`, `pivot..=max` goes from
//! `medium` to `fast`. The finer mid segment gives more control around the
//! playable speeds.

use embassy_time::Duration;

use crate::config::ConfigError;
use crate::math8::lerp_micros;

pub const MIN_LEVEL: u8 = 1;
pub const PIVOT_LEVEL: u8 = 10;
pub const MAX_LEVEL: u8 = 16;

pub const SLOW_DELAY: Duration = Duration::from_millis(120);
pub const MEDIUM_DELAY: Duration = Duration::from_millis(50);
pub const FAST_DELAY: Duration = Duration::from_millis(20);

/// Selectable difficulty levels, `min..=max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRange {
    pub min: u8,
    pub max: u8,
}

impl LevelRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Level after one speed button press, wrapping from max back to min
    pub const fn next(self, level: u8) -> u8 {
        if level >= self.max || level < self.min {
            self.min
        } else {
            level + 1
        }
    }

    /// Clamp a level into the range
    pub const fn clamp(self, level: u8) -> u8 {
        if level < self.min {
            self.min
        } else if level > self.max {
            self.max
        } else {
            level
        }
    }

    pub const fn contains(self, level: u8) -> bool {
        level >= self.min && level <= self.max
    }
}

impl Default for LevelRange {
    fn default() -> Self {
        Self::new(MIN_LEVEL, MAX_LEVEL)
    }
}

/// Two-segment level to delay mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedCurve {
    pub levels: LevelRange,
    /// Level where the slow and fast segments meet
    pub pivot: u8,
    /// Delay at `levels.min`
    pub slow: Duration,
    /// Delay at `pivot`
    pub medium: Duration,
    /// Delay at `levels.max`
    pub fast: Duration,
}

impl SpeedCurve {
    pub const fn new() -> Self {
        Self {
            levels: LevelRange::new(MIN_LEVEL, MAX_LEVEL),
            pivot: PIVOT_LEVEL,
            slow: SLOW_DELAY,
            medium: MEDIUM_DELAY,
            fast: FAST_DELAY,
        }
    }

    /// Step delay of the chaser at the given level
    ///
    /// Levels outside of the range are clamped to it.
    #[allow(clippy::cast_lossless)]
    pub const fn level_to_delay(&self, level: u8) -> Duration {
        let level = self.levels.clamp(level);
        let micros = if level <= self.pivot {
            lerp_micros(
                self.slow.as_micros(),
                self.medium.as_micros(),
                (level - self.levels.min) as u64,
                (self.pivot - self.levels.min) as u64,
            )
        } else {
            lerp_micros(
                self.medium.as_micros(),
                self.fast.as_micros(),
                (level - self.pivot) as u64,
                (self.levels.max - self.pivot) as u64,
            )
        };
        Duration::from_micros(micros)
    }

    /// Ensure the curve is strictly decreasing over all levels
    pub fn validate(&self) -> Result<(), ConfigError> {
        let LevelRange { min, max } = self.levels;
        if min > max {
            return Err(ConfigError::LevelsReversed);
        }
        if self.pivot < min || self.pivot > max {
            return Err(ConfigError::PivotOutOfLevels);
        }
        if self.slow < self.medium || self.medium < self.fast {
            return Err(ConfigError::SpeedCurveNotDecreasing);
        }
        // Integer interpolation stays strictly monotonic as long as every
        // segment loses at least one microsecond per level.
        let slow_drop = self.slow.as_micros() - self.medium.as_micros();
        let fast_drop = self.medium.as_micros() - self.fast.as_micros();
        if slow_drop < u64::from(self.pivot - min) || fast_drop < u64::from(max - self.pivot) {
            return Err(ConfigError::SpeedCurveTooFlat);
        }
        Ok(())
    }
}

impl Default for SpeedCurve {
    fn default() -> Self {
        Self::new()
    }
}

use core::ops::RangeInclusive;

use crate::config::ConfigError;

/// Playable part of the strip, `first..=last`
///
/// Cells outside of it are never lit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalRange {
    pub first: u16,
    pub last: u16,
}

impl LogicalRange {
    pub const fn new(first: u16, last: u16) -> Self {
        Self { first, last }
    }

    /// Get the number of playable LEDs
    pub const fn count(self) -> u16 {
        self.last - self.first + 1
    }

    /// Check if the physical index belongs to the range
    pub const fn contains(self, index: u16) -> bool {
        index >= self.first && index <= self.last
    }

    /// Physical index of the `offset`-th playable cell
    pub const fn nth(self, offset: u16) -> u16 {
        self.first + offset
    }

    /// Physical indices of the range as buffer indices
    pub fn indices(self) -> RangeInclusive<usize> {
        usize::from(self.first)..=usize::from(self.last)
    }

    /// Ensure the range is ordered and fits a buffer of `len` cells
    pub fn validate(self, len: usize) -> Result<(), ConfigError> {
        if self.first > self.last {
            return Err(ConfigError::RangeReversed);
        }
        if usize::from(self.last) >= len {
            return Err(ConfigError::RangeOutOfBuffer);
        }
        Ok(())
    }
}

/// Get a slice of the LEDs within the range
pub(crate) fn bounded<T>(leds: &mut [T], range: LogicalRange) -> &mut [T] {
    &mut leds[range.indices()]
}

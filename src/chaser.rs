use crate::bounds::LogicalRange;

/// Direction of chaser motion along the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// The single moving pixel of a round
///
/// Position and direction only change together in [`Chaser::step`], so a
/// reader never sees a position that already touched a bound with the old
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chaser {
    range: LogicalRange,
    position: u16,
    direction: Direction,
}

impl Chaser {
    /// Chaser at the start of the range, moving forward
    pub const fn new(range: LogicalRange) -> Self {
        Self {
            range,
            position: range.first,
            direction: Direction::Forward,
        }
    }

    /// Chaser at an arbitrary position, clamped into the range
    ///
    /// On a bound the direction always points back into the range, so the
    /// next step moves instead of only turning around.
    pub const fn at(range: LogicalRange, position: u16, direction: Direction) -> Self {
        let position = if position < range.first {
            range.first
        } else if position > range.last {
            range.last
        } else {
            position
        };
        let direction = if range.first == range.last {
            direction
        } else if position == range.last {
            Direction::Backward
        } else if position == range.first {
            Direction::Forward
        } else {
            direction
        };
        Self {
            range,
            position,
            direction,
        }
    }

    pub const fn position(&self) -> u16 {
        self.position
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns true if the chaser rests on the last cell of the range
    pub const fn at_target(&self) -> bool {
        self.position == self.range.last
    }

    /// Advance by one cell, bouncing at both ends
    ///
    /// The direction flips on the step that lands on a bound. A single-cell
    /// range keeps the chaser in place.
    pub fn step(&mut self) {
        let LogicalRange { first, last } = self.range;
        if first == last {
            return;
        }
        self.position = match self.direction {
            Direction::Forward => self.position.saturating_add(1).min(last),
            Direction::Backward => self.position.saturating_sub(1).max(first),
        };
        if self.position == last || self.position == first {
            self.direction = self.direction.reversed();
        }
    }
}

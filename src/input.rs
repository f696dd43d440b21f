//! Active-low push buttons with edge-triggered press events.
//!
//! A press event fires once per physical press-release cycle: after a low
//! level is seen, the debouncer blocks until the line goes high again. This
//! both swallows contact bounce and makes a long hold count as one press.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::timing::sleep;

/// Default poll interval while waiting for a release
pub const RELEASE_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Debounced button wired to ground with a pull-up
pub struct Debouncer<P: InputPin> {
    pin: P,
    release_poll: Duration,
}

impl<P: InputPin> Debouncer<P> {
    pub const fn new(pin: P) -> Self {
        Self::with_release_poll(pin, RELEASE_POLL_INTERVAL)
    }

    pub const fn with_release_poll(pin: P, release_poll: Duration) -> Self {
        Self { pin, release_poll }
    }

    /// Raw level check: true while the line is held low
    ///
    /// A failed read counts as released.
    pub fn is_pressed(&mut self) -> bool {
        matches!(self.pin.is_low(), Ok(true))
    }

    /// Block until the button is no longer held
    pub fn wait_for_release(&mut self, delay: &mut impl DelayNs) {
        while self.is_pressed() {
            sleep(delay, self.release_poll);
        }
    }

    /// Sample the button once
    ///
    /// Returns true for a complete press event. When the button is down
    /// this blocks until it is released.
    pub fn poll_press(&mut self, delay: &mut impl DelayNs) -> bool {
        if !self.is_pressed() {
            return false;
        }
        self.wait_for_release(delay);
        true
    }

    /// Poll for a press event for at most `window`, sampling every `poll`
    ///
    /// Returns true as soon as a press event completes, false once the
    /// window has passed without one.
    pub fn wait_for_press(
        &mut self,
        delay: &mut impl DelayNs,
        window: Duration,
        poll: Duration,
    ) -> bool {
        let mut waited = Duration::from_ticks(0);
        loop {
            if self.poll_press(delay) {
                return true;
            }
            if waited >= window {
                return false;
            }
            let remaining = window - waited;
            let step = if poll.as_ticks() == 0 || remaining < poll {
                remaining
            } else {
                poll
            };
            sleep(delay, step);
            waited += step;
        }
    }

    /// Give back the wrapped pin
    pub fn into_pin(self) -> P {
        self.pin
    }
}

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::OutputDriver;
use crate::bounds::{LogicalRange, bounded};
use crate::color::{OFF, Rgbw, scale_rgbw};
use crate::config::{ConfigError, Timings};
use crate::input::Debouncer;
use crate::timing::sleep;

/// LED Renderer - owns the pixel buffer and draws the game screens
///
/// Drawing happens in a working buffer that is invisible until [`show`]
/// copies it, brightness-scaled, into the output buffer and pushes it to the
/// driver. Only cells of the logical range are ever lit.
///
/// [`show`]: LedRenderer::show
pub struct LedRenderer<O: OutputDriver, const N: usize> {
    driver: O,
    range: LogicalRange,
    brightness: u8,

    frame: [Rgbw; N],
    output: [Rgbw; N],
    /// Cell lit by the last chaser step
    chaser: Option<u16>,
}

impl<O: OutputDriver, const N: usize> LedRenderer<O, N> {
    /// Create a renderer for a strip of `N` cells
    ///
    /// Fails if the range does not fit the strip.
    pub fn new(driver: O, range: LogicalRange, brightness: u8) -> Result<Self, ConfigError> {
        range.validate(N)?;
        Ok(Self {
            driver,
            range,
            brightness,
            frame: [OFF; N],
            output: [OFF; N],
            chaser: None,
        })
    }

    /// Working buffer, including edits that are not shown yet
    pub const fn frame(&self) -> &[Rgbw; N] {
        &self.frame
    }

    pub fn driver(&self) -> &O {
        &self.driver
    }

    /// Turn every cell off, without flushing
    pub fn clear(&mut self) {
        self.frame.fill(OFF);
        self.chaser = None;
    }

    /// Set a single cell, without flushing
    ///
    /// Indices outside of the logical range are ignored.
    pub fn set(&mut self, index: u16, color: Rgbw) {
        if self.range.contains(index) {
            self.frame[usize::from(index)] = color;
        }
    }

    /// Light every cell from the start of the range up to `boundary`
    pub fn fill_to(&mut self, boundary: u16, color: Rgbw) {
        let boundary = self.clamp(boundary);
        let count = usize::from(boundary - self.range.first) + 1;
        bounded(&mut self.frame, self.range)[..count].fill(color);
    }

    /// Push the working buffer to the strip
    pub fn show(&mut self) {
        for (out, cell) in self.output.iter_mut().zip(self.frame.iter()) {
            *out = scale_rgbw(*cell, self.brightness);
        }
        self.driver.write(&self.output);
    }

    /// Draw the speed selection bar: the first `level` playable cells
    pub fn show_level(&mut self, level: u8, color: Rgbw) {
        self.clear();
        let count = u16::from(level).min(self.range.count());
        if count > 0 {
            self.fill_to(self.range.nth(count - 1), color);
        }
        self.show();
    }

    /// Move the chaser pixel to `position`
    ///
    /// Clears the previously drawn chaser cell, so exactly one playable
    /// cell is lit afterwards.
    pub fn step_chaser(&mut self, position: u16, color: Rgbw) {
        if let Some(previous) = self.chaser.take() {
            self.set(previous, OFF);
        }
        let position = self.clamp(position);
        self.set(position, color);
        self.chaser = Some(position);
        self.show();
    }

    /// Play the win/lose animation and hold it until the start button is pressed
    ///
    /// Reveals the cells up to `boundary` one per `step`, then alternates
    /// between the lone `boundary` cell and the full bar, each frame held
    /// for `timings.blink`. A press event during the blink loop clears the
    /// strip and returns.
    pub fn wipe<P: InputPin>(
        &mut self,
        boundary: u16,
        color: Rgbw,
        step: Duration,
        timings: &Timings,
        button: &mut Debouncer<P>,
        timer: &mut impl DelayNs,
    ) {
        let boundary = self.clamp(boundary);

        self.clear();
        for index in self.range.first..=boundary {
            self.set(index, color);
            self.show();
            sleep(timer, step);
        }

        loop {
            self.clear();
            self.set(boundary, color);
            self.show();
            if button.wait_for_press(timer, timings.blink, timings.blink_poll) {
                break;
            }

            self.fill_to(boundary, color);
            self.show();
            if button.wait_for_press(timer, timings.blink, timings.blink_poll) {
                break;
            }
        }

        self.clear();
        self.show();
    }

    fn clamp(&self, index: u16) -> u16 {
        index.clamp(self.range.first, self.range.last)
    }
}

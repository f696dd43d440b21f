#![allow(dead_code)]

use std::collections::VecDeque;
use std::convert::Infallible;
use std::vec::Vec;

use reaction_chaser::color::is_lit;
use reaction_chaser::{GameConfig, OutputDriver, Rgbw};

/// Delay that only counts how long it was asked to wait
#[derive(Debug, Default)]
pub struct FakeDelay {
    pub elapsed_ns: u64,
    pub calls: usize,
}

impl FakeDelay {
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }
}

impl embedded_hal::delay::DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
        self.calls += 1;
    }

    fn delay_us(&mut self, us: u32) {
        self.delay_ns(0);
        self.elapsed_ns += u64::from(us) * 1_000;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay_ns(0);
        self.elapsed_ns += u64::from(ms) * 1_000_000;
    }
}

/// Button that replays a scripted sequence of reads
///
/// Each read consumes one entry, `true` meaning held down. Once the script
/// runs out the button stays released.
#[derive(Debug, Default)]
pub struct ScriptedPin {
    script: VecDeque<bool>,
    pub reads: usize,
}

impl ScriptedPin {
    pub fn new(script: &[bool]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            reads: 0,
        }
    }

    /// Released for `idle` reads, then one press held for a single read
    pub fn press_after(idle: usize) -> Self {
        let mut script = vec![false; idle];
        script.push(true);
        Self::new(&script)
    }

    /// Append more reads to the script
    pub fn then(mut self, script: &[bool]) -> Self {
        self.script.extend(script.iter().copied());
        self
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl embedded_hal::digital::ErrorType for ScriptedPin {
    type Error = Infallible;
}

impl embedded_hal::digital::InputPin for ScriptedPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.reads += 1;
        Ok(self.script.pop_front().unwrap_or(false))
    }
}

/// Strip driver that keeps every frame it was given
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub frames: Vec<Vec<Rgbw>>,
}

impl RecordingDriver {
    pub fn last(&self) -> &[Rgbw] {
        self.frames.last().expect("no frame was shown")
    }
}

impl OutputDriver for RecordingDriver {
    fn write(&mut self, colors: &[Rgbw]) {
        self.frames.push(colors.to_vec());
    }
}

/// Serial port that records written bytes
#[derive(Debug, Default)]
pub struct SerialLog {
    pub bytes: Vec<u8>,
    pub flushes: usize,
}

impl SerialLog {
    /// Written bytes split into 10-byte frames
    pub fn frames(&self) -> Vec<[u8; 10]> {
        self.bytes
            .chunks(10)
            .map(|chunk| chunk.try_into().expect("partial frame"))
            .collect()
    }
}

impl embedded_io::ErrorType for SerialLog {
    type Error = Infallible;
}

impl embedded_io::Write for SerialLog {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

/// Serial port of a module that is not there: every write fails
#[derive(Debug, Default)]
pub struct FailingSerial {
    pub attempts: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDown;

impl embedded_io::Error for LineDown {
    fn kind(&self) -> embedded_io::ErrorKind {
        embedded_io::ErrorKind::NotConnected
    }
}

impl embedded_io::ErrorType for FailingSerial {
    type Error = LineDown;
}

impl embedded_io::Write for FailingSerial {
    fn write(&mut self, _buf: &[u8]) -> Result<usize, Self::Error> {
        self.attempts += 1;
        Err(LineDown)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Err(LineDown)
    }
}

/// Indices of lit cells in a frame
pub fn lit(frame: &[Rgbw]) -> Vec<usize> {
    frame
        .iter()
        .enumerate()
        .filter(|(_, cell)| is_lit(**cell))
        .map(|(index, _)| index)
        .collect()
}

/// Default settings at full brightness, so shown frames equal the buffer
pub fn test_config() -> GameConfig {
    GameConfig {
        brightness: 255,
        ..GameConfig::new()
    }
}

//! Serial command protocol of the MP3 playback module.
//!
//! Every command is a fixed 10-byte frame:
//!
//! ```text
//! 0x7E 0xFF 0x06 CMD 0x00 HI LO CHK_HI CHK_LO 0xEF
//! ```
//!
//! The checksum is the 16-bit two's complement of the sum of bytes 1..=6.
//! The module is driven fire-and-forget: no acknowledgement is requested or
//! read back, so a missing module only means silence.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_io::Write;

use crate::log::trace;
use crate::timing::sleep;

pub const FRAME_LEN: usize = 10;

const START_BYTE: u8 = 0x7E;
const VERSION_BYTE: u8 = 0xFF;
const LENGTH_BYTE: u8 = 0x06;
const NO_FEEDBACK: u8 = 0x00;
const END_BYTE: u8 = 0xEF;

const COMMAND_ID_PLAY_TRACK: u8 = 0x03;
const COMMAND_ID_SET_VOLUME: u8 = 0x06;

/// Loudest volume the module accepts
pub const MAX_VOLUME: u8 = 30;

/// Commands issued to the module
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    /// Play the track with the given number from the root folder
    PlayTrack = COMMAND_ID_PLAY_TRACK,
    /// Set output volume, `0..=30`
    SetVolume = COMMAND_ID_SET_VOLUME,
}

impl Command {
    pub const fn id(self) -> u8 {
        self as u8
    }
}

/// Module start-up sequencing
///
/// The module ignores commands for a while after power-on and often drops
/// the first play request, so the boot sequence sets the volume, waits
/// `settle`, then requests the first track twice `gap` apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Priming {
    pub volume: u8,
    pub settle: Duration,
    pub gap: Duration,
    pub track: u16,
}

impl Priming {
    pub const fn new() -> Self {
        Self {
            volume: MAX_VOLUME,
            settle: Duration::from_millis(1000),
            gap: Duration::from_millis(100),
            track: 1,
        }
    }
}

impl Default for Priming {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the frame checksum over the bytes after the start byte
pub fn checksum(payload: &[u8]) -> u16 {
    let sum = payload
        .iter()
        .fold(0u16, |acc, byte| acc.wrapping_add(u16::from(*byte)));
    0u16.wrapping_sub(sum)
}

/// Build a complete command frame
pub fn encode_frame(command: u8, high: u8, low: u8) -> [u8; FRAME_LEN] {
    let mut frame = [
        START_BYTE,
        VERSION_BYTE,
        LENGTH_BYTE,
        command,
        NO_FEEDBACK,
        high,
        low,
        0,
        0,
        END_BYTE,
    ];
    let [check_high, check_low] = checksum(&frame[1..7]).to_be_bytes();
    frame[7] = check_high;
    frame[8] = check_low;
    frame
}

/// Playback module on a write-only serial line
pub struct AudioModule<W: Write> {
    serial: W,
}

impl<W: Write> AudioModule<W> {
    pub const fn new(serial: W) -> Self {
        Self { serial }
    }

    /// Encode and transmit one command
    ///
    /// Transport errors are dropped, the game never waits on the module.
    pub fn send(&mut self, command: Command, high: u8, low: u8) {
        let frame = encode_frame(command.id(), high, low);
        if let Err(_err) = self.serial.write_all(&frame) {
            trace!("audio: failed to send {:?}: {:?}", command, _err);
            return;
        }
        if let Err(_err) = self.serial.flush() {
            trace!("audio: failed to flush {:?}: {:?}", command, _err);
        }
    }

    /// Set the output volume, clamped to `0..=30`
    pub fn set_volume(&mut self, level: u8) {
        let level = level.min(MAX_VOLUME);
        self.send(Command::SetVolume, 0, level);
    }

    /// Start playing a track by number
    pub fn play_track(&mut self, track: u16) {
        let [high, low] = track.to_be_bytes();
        self.send(Command::PlayTrack, high, low);
    }

    /// Wake the module up after power-on
    pub fn prime(&mut self, delay: &mut impl DelayNs, priming: &Priming) {
        trace!("audio: priming, settle={}ms", priming.settle.as_millis());
        self.set_volume(priming.volume);
        sleep(delay, priming.settle);
        self.play_track(priming.track);
        sleep(delay, priming.gap);
        self.play_track(priming.track);
    }

    pub const fn serial(&self) -> &W {
        &self.serial
    }

    /// Give back the serial transport
    pub fn into_serial(self) -> W {
        self.serial
    }
}

#![no_std]

//! Reaction game for an addressable RGBW strip.
//!
//! A single pixel bounces along the strip and the player has to stop it on
//! the last cell. The crate is generic over the hardware: the strip is an
//! [`OutputDriver`], buttons are `embedded-hal` input pins, the audio module
//! sits behind an `embedded-io` writer and every wait goes through a
//! `DelayNs` (`embassy_time::Delay` on target).

pub mod audio;
pub mod bounds;
pub mod chaser;
pub mod color;
pub mod config;
pub mod game;
pub mod input;
mod log;
pub mod math8;
pub mod renderer;
pub mod speed;
pub mod timing;

pub use audio::{AudioModule, Command, Priming, encode_frame};
pub use bounds::LogicalRange;
pub use chaser::{Chaser, Direction};
pub use config::{AudioTracks, ConfigError, GameConfig, Palette, Timings};
pub use game::{Game, Outcome, Peripherals, RoundState};
pub use input::Debouncer;
pub use renderer::LedRenderer;
pub use speed::{LevelRange, SpeedCurve};

pub use color::Rgbw;
pub use embassy_time::Duration;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The renderer is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgbw]);
}

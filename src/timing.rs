use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

/// Block for `duration` on the given delay provider
///
/// Durations above `u32::MAX` microseconds are split into several waits.
pub fn sleep(delay: &mut impl DelayNs, duration: Duration) {
    let mut micros = duration.as_micros();
    while micros > 0 {
        let chunk = u32::try_from(micros).unwrap_or(u32::MAX);
        delay.delay_us(chunk);
        micros -= u64::from(chunk);
    }
}

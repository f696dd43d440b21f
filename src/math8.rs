/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
/// A scale of 255 returns the value unchanged.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Linear interpolation between two microsecond values
///
/// Returns `from` at `step == 0` and `to` at `step == steps`.
/// Works in both directions and never overshoots either end.
#[inline]
pub const fn lerp_micros(from: u64, to: u64, step: u64, steps: u64) -> u64 {
    if steps == 0 || step >= steps {
        return to;
    }
    if from >= to {
        from - (from - to) * step / steps
    } else {
        from + (to - from) * step / steps
    }
}

use smart_leds::White;

use crate::math8::scale8;

/// Single strip cell: red, green, blue and a dedicated white channel
pub type Rgbw = smart_leds::RGBW<u8>;

/// Builds a cell from its four channels
pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Rgbw {
    Rgbw {
        r,
        g,
        b,
        a: White(w),
    }
}

pub const OFF: Rgbw = rgbw(0, 0, 0, 0);
pub const RED: Rgbw = rgbw(255, 0, 0, 0);
pub const GREEN: Rgbw = rgbw(0, 255, 0, 0);
pub const BLUE: Rgbw = rgbw(0, 0, 255, 0);
pub const WHITE: Rgbw = rgbw(0, 0, 0, 255);

/// Returns true if any channel of the cell is non-zero
pub const fn is_lit(color: Rgbw) -> bool {
    color.r != 0 || color.g != 0 || color.b != 0 || color.a.0 != 0
}

/// Scale every channel of a cell by `scale` (0-255 = 0.0-1.0)
pub const fn scale_rgbw(color: Rgbw, scale: u8) -> Rgbw {
    rgbw(
        scale8(color.r, scale),
        scale8(color.g, scale),
        scale8(color.b, scale),
        scale8(color.a.0, scale),
    )
}

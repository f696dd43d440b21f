//! Diagnostic output.
//!
//! Messages go to the ESP console when the `esp32-log` feature is enabled
//! and compile to nothing otherwise.

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "esp32-log")]
        esp_println::println!($($arg)*);
        #[cfg(not(feature = "esp32-log"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

pub(crate) use trace;

//! # hexhsl
//!
//! Color conversions between hexadecimal strings, RGB and HSL.
//!
//! This library provides four pure conversions:
//! - [`hex_to_rgb`]: `#rrggbb` (or `rrggbb`, any case) to [`Rgb`]
//! - [`rgb_to_hex`]: [`Rgb`] to a lowercase `#rrggbb` string
//! - [`rgb_to_hsl`]: [`Rgb`] to [`Hsl`] with whole-degree hue
//! - [`hsl_to_rgb`]: [`Hsl`] back to [`Rgb`]
//!
//! The free functions use the default [`ColorConverter`]. Build a converter
//! from a [`ConverterConfig`] to change hue wrapping or hex letter case.
//!
//! ## Example
//!
//! ```rust
//! use hexhsl::{hex_to_rgb, rgb_to_hsl, Hsl, Rgb};
//!
//! let rgb = hex_to_rgb("#ff0000")?;
//! assert_eq!(rgb, Rgb::new(255, 0, 0));
//! assert_eq!(rgb_to_hsl(rgb), Hsl::new(0.0, 100.0, 50.0));
//! # Ok::<(), hexhsl::ColorError>(())
//! ```

pub mod color;
pub mod config;
pub mod constants;
pub mod error;

pub use color::{Channel, ColorConverter, Hsl, Rgb};
pub use config::{ConverterConfig, HexCase, HuePolicy};
pub use error::{ColorError, Result};

const DEFAULT_CONVERTER: ColorConverter = ColorConverter::new();

/// Convert a hex color string to RGB
///
/// Accepts six hex digits in either case, with or without a leading `#`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] for any other input.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    DEFAULT_CONVERTER.hex_to_rgb(hex)
}

/// Convert RGB to a lowercase `#rrggbb` string
///
/// # Errors
///
/// Returns [`ColorError::OutOfRange`] if a channel is outside `0..=255`.
pub fn rgb_to_hex(rgb: Rgb) -> Result<String> {
    DEFAULT_CONVERTER.rgb_to_hex(rgb)
}

/// Convert RGB to HSL
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    DEFAULT_CONVERTER.rgb_to_hsl(rgb)
}

/// Convert HSL to RGB, wrapping the hue into `[0, 360)`
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    DEFAULT_CONVERTER.hsl_to_rgb(hsl)
}

/// Convert a hex color string straight to HSL
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] as [`hex_to_rgb`] does.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    DEFAULT_CONVERTER.hex_to_hsl(hex)
}

/// Convert HSL to a lowercase `#rrggbb` string
///
/// # Errors
///
/// Returns [`ColorError::OutOfRange`] if the HSL input was outside its
/// expected ranges and produced an invalid channel.
pub fn hsl_to_hex(hsl: Hsl) -> Result<String> {
    DEFAULT_CONVERTER.hsl_to_hex(hsl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_functions_use_defaults() {
        assert_eq!(rgb_to_hex(Rgb::new(51, 102, 204)).unwrap(), "#3366cc");
        assert_eq!(hsl_to_rgb(Hsl::new(360.0, 100.0, 50.0)), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_result_serialization() {
        let hsl = hex_to_hsl("#40e0d0").unwrap();

        let json = serde_json::to_string(&hsl).unwrap();
        let deserialized: Hsl = serde_json::from_str(&json).unwrap();

        assert_eq!(hsl, deserialized);
        assert_eq!(hsl_to_hex(deserialized).unwrap(), "#40e0d0");
    }
}

//! Plain color value types
//!
//! [`Rgb`] keeps its channels as `i32` so callers can hand over values that
//! came from arithmetic or user input; validity is checked at the point of
//! conversion, not at construction.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::{constants::rgb, ColorError, Result};

/// One of the three RGB channels, used to report which value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Lowercase channel name for messages
    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self {
            Channel::Red => "r",
            Channel::Green => "g",
            Channel::Blue => "b",
        };
        f.write_str(field)
    }
}

/// Red, green and blue channels, each valid in `0..=255`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    #[inline]
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Whether every channel lies in `0..=255`
    pub fn is_valid(self) -> bool {
        self.check().is_ok()
    }

    /// Validate the channels, reporting the first one out of range
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::OutOfRange`] naming the channel and its value.
    pub fn check(self) -> Result<Self> {
        let channels = [
            (Channel::Red, self.r),
            (Channel::Green, self.g),
            (Channel::Blue, self.b),
        ];
        for (channel, value) in channels {
            if !(rgb::CHANNEL_MIN..=rgb::CHANNEL_MAX).contains(&value) {
                tracing::debug!(%channel, value, "rgb channel out of range");
                return Err(ColorError::OutOfRange { channel, value });
            }
        }
        Ok(self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Parses a hex color such as `#3366cc` or `3366CC`
impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        crate::hex_to_rgb(s)
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(color: Srgb<u8>) -> Self {
        Self::new(
            i32::from(color.red),
            i32::from(color.green),
            i32::from(color.blue),
        )
    }
}

impl TryFrom<Rgb> for Srgb<u8> {
    type Error = ColorError;

    fn try_from(color: Rgb) -> Result<Self> {
        let color = color.check()?;
        // check() guarantees each channel fits in a byte
        Ok(Srgb::new(color.r as u8, color.g as u8, color.b as u8))
    }
}

/// Hue in degrees, saturation and lightness in percent
///
/// Values produced by [`rgb_to_hsl`](crate::rgb_to_hsl) have a whole-degree
/// hue in `[0, 360)` and percentages rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_reports_first_bad_channel() {
        let err = Rgb::new(0, 300, -4).check().unwrap_err();
        match err {
            ColorError::OutOfRange { channel, value } => {
                assert_eq!(channel, Channel::Green);
                assert_eq!(value, 300);
            }
            other => panic!("Expected OutOfRange, got: {:?}", other),
        }
    }

    #[test]
    fn test_is_valid_bounds() {
        assert!(Rgb::new(0, 0, 0).is_valid());
        assert!(Rgb::new(255, 255, 255).is_valid());
        assert!(!Rgb::new(-1, 0, 0).is_valid());
        assert!(!Rgb::new(0, 0, 256).is_valid());
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb::new(51, 102, 204).to_string(), "rgb(51, 102, 204)");
        assert_eq!(Hsl::new(220.0, 60.0, 50.0).to_string(), "hsl(220, 60%, 50%)");
        assert_eq!(Hsl::new(217.0, 32.58, 17.45).to_string(), "hsl(217, 32.58%, 17.45%)");
    }

    #[test]
    fn test_from_str_parses_hex() {
        let rgb: Rgb = "#1e293b".parse().unwrap();
        assert_eq!(rgb, Rgb::new(30, 41, 59));
        assert!("#12345".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_palette_interop() {
        let srgb = Srgb::new(10u8, 20, 30);
        let rgb = Rgb::from(srgb);
        assert_eq!(rgb, Rgb::new(10, 20, 30));

        let back = Srgb::<u8>::try_from(rgb).unwrap();
        assert_eq!((back.red, back.green, back.blue), (10, 20, 30));

        assert!(Srgb::<u8>::try_from(Rgb::new(10, 20, 256)).is_err());
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&Rgb::new(1, 2, 3)).unwrap();
        assert_eq!(json, r#"{"r":1,"g":2,"b":3}"#);

        let hsl: Hsl = serde_json::from_str(r#"{"h":240,"s":100,"l":50}"#).unwrap();
        assert_eq!(hsl, Hsl::new(240.0, 100.0, 50.0));
    }
}

//! Conversions between hex strings, RGB and HSL
//!
//! - Hex to RGB and back, with validation on both sides
//! - RGB to HSL with whole-degree hue and two-decimal percentages
//! - HSL to RGB through chroma and hue sectors
//!
//! Rounding follows "round half up" (toward positive infinity) everywhere,
//! so `-0.5` rounds to `0` rather than `-1`. This keeps hues just below red
//! from flipping to 359.

use crate::{
    config::{ConverterConfig, HexCase, HuePolicy},
    constants::{hex, hue, rgb, PERCENT, PERCENT_DECIMALS},
    ColorError, Hsl, Result, Rgb,
};

/// Stateless converter between color representations
///
/// The converter only carries its [`ConverterConfig`]; it is `Copy` and can
/// be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConverter {
    config: ConverterConfig,
}

impl Default for ColorConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorConverter {
    /// Create a converter with the default configuration
    pub const fn new() -> Self {
        Self::with_config(ConverterConfig::new())
    }

    /// Create a converter with a custom configuration
    pub const fn with_config(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Parse a hexadecimal color string to RGB
    ///
    /// # Arguments
    ///
    /// * `input` - Hex color string (e.g., "#3366cc" or "3366CC")
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] unless the string is exactly six
    /// hex digits after removing one optional leading `#`.
    pub fn hex_to_rgb(&self, input: &str) -> Result<Rgb> {
        let digits = input.strip_prefix(hex::PREFIX).unwrap_or(input);

        let count = digits.chars().count();
        if count != hex::DIGITS {
            tracing::debug!(input, count, "rejecting hex color with wrong length");
            return Err(ColorError::invalid_format(
                input,
                format!("expected {} hex digits, got {}", hex::DIGITS, count),
            ));
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            tracing::debug!(input, %bad, "rejecting hex color with non-hex digit");
            return Err(ColorError::invalid_format(
                input,
                format!("{:?} is not a hex digit", bad),
            ));
        }

        let value = u32::from_str_radix(digits, 16)
            .map_err(|e| ColorError::invalid_format(input, e.to_string()))?;
        let color = Rgb::new(
            channel_byte(value >> rgb::RED_SHIFT),
            channel_byte(value >> rgb::GREEN_SHIFT),
            channel_byte(value),
        );
        tracing::trace!(input, %color, "hex to rgb");
        Ok(color)
    }

    /// Render RGB as a `#rrggbb` string
    ///
    /// Digits are lowercase unless the config asks for [`HexCase::Upper`].
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::OutOfRange`] if any channel is outside `0..=255`.
    pub fn rgb_to_hex(&self, color: Rgb) -> Result<String> {
        let color = color.check()?;
        let packed = (color.r << rgb::RED_SHIFT) | (color.g << rgb::GREEN_SHIFT) | color.b;

        let out = match self.config.hex_case {
            HexCase::Lower => format!("{}{:06x}", hex::PREFIX, packed),
            HexCase::Upper => format!("{}{:06X}", hex::PREFIX, packed),
        };
        tracing::trace!(%color, hex = %out, "rgb to hex");
        Ok(out)
    }

    /// Convert RGB to HSL
    ///
    /// Channels are expected in `0..=255` but are not validated; values
    /// outside that range give meaningless output rather than an error.
    pub fn rgb_to_hsl(&self, color: Rgb) -> Hsl {
        let max_channel = f64::from(rgb::CHANNEL_MAX);
        let r = f64::from(color.r) / max_channel;
        let g = f64::from(color.g) / max_channel;
        let b = f64::from(color.b) / max_channel;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let sector = if delta == 0.0 {
            0.0
        } else if max == r {
            // may be negative; fixed up after scaling to degrees
            ((g - b) / delta) % hue::SECTORS
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        let mut h = round_half_up(sector * hue::SECTOR_DEGREES);
        if h < 0.0 {
            h += hue::FULL_TURN;
        }

        let l = (max + min) / 2.0;
        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };

        let out = Hsl::new(h, round_percent(s), round_percent(l));
        tracing::trace!(%color, hsl = %out, "rgb to hsl");
        out
    }

    /// Convert HSL to RGB
    ///
    /// Saturation and lightness are percentages. With [`HuePolicy::Wrap`] the
    /// hue is first brought into `[0, 360)`; with [`HuePolicy::Strict`] a hue
    /// outside that range contributes no chroma and the result is a gray.
    pub fn hsl_to_rgb(&self, color: Hsl) -> Rgb {
        let h = match self.config.hue_policy {
            HuePolicy::Wrap => wrap_hue(color.h),
            HuePolicy::Strict => color.h,
        };
        let s = color.s / PERCENT;
        let l = color.l / PERCENT;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / hue::SECTOR_DEGREES) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h {
            h if (0.0..60.0).contains(&h) => (c, x, 0.0),
            h if (60.0..120.0).contains(&h) => (x, c, 0.0),
            h if (120.0..180.0).contains(&h) => (0.0, c, x),
            h if (180.0..240.0).contains(&h) => (0.0, x, c),
            h if (240.0..300.0).contains(&h) => (x, 0.0, c),
            h if (300.0..360.0).contains(&h) => (c, 0.0, x),
            _ => (0.0, 0.0, 0.0),
        };

        let max_channel = f64::from(rgb::CHANNEL_MAX);
        let to_channel = |v: f64| round_half_up((v + m) * max_channel) as i32;
        let out = Rgb::new(to_channel(r), to_channel(g), to_channel(b));
        tracing::trace!(hsl = %color, rgb = %out, "hsl to rgb");
        out
    }

    /// Parse a hex color straight to HSL
    ///
    /// # Errors
    ///
    /// Same as [`hex_to_rgb`](Self::hex_to_rgb).
    pub fn hex_to_hsl(&self, input: &str) -> Result<Hsl> {
        self.hex_to_rgb(input).map(|color| self.rgb_to_hsl(color))
    }

    /// Render an HSL color as a hex string
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::OutOfRange`] when saturation or lightness lie
    /// outside `0..=100` far enough to push a channel past `0..=255`.
    pub fn hsl_to_hex(&self, color: Hsl) -> Result<String> {
        self.rgb_to_hex(self.hsl_to_rgb(color))
    }
}

fn channel_byte(value: u32) -> i32 {
    // masked to one byte, always fits
    (value & rgb::BYTE_MASK) as i32
}

#[inline]
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn round_percent(fraction: f64) -> f64 {
    let scale = 10f64.powi(PERCENT_DECIMALS);
    round_half_up(fraction * PERCENT * scale) / scale
}

fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(hue::FULL_TURN);
    // rem_euclid rounds tiny negative hues up to a full turn
    if wrapped >= hue::FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

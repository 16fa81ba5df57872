//! Numeric constants shared by the conversion routines
//!
//! Values here describe the fixed geometry of the hex, RGB and HSL
//! representations rather than tunable behavior (see [`crate::config`]).

/// RGB channel limits
pub mod rgb {
    /// Smallest valid channel value
    pub const CHANNEL_MIN: i32 = 0;

    /// Largest valid channel value, also the normalization divisor
    pub const CHANNEL_MAX: i32 = 255;

    /// Bit offset of the red byte in a packed 24-bit color
    pub const RED_SHIFT: u32 = 16;

    /// Bit offset of the green byte in a packed 24-bit color
    pub const GREEN_SHIFT: u32 = 8;

    /// Mask selecting one channel byte
    pub const BYTE_MASK: u32 = 0xFF;
}

/// Hex string layout
pub mod hex {
    /// Optional prefix accepted on input and always written on output
    pub const PREFIX: char = '#';

    /// Number of hex digits in an `rrggbb` color
    pub const DIGITS: usize = 6;
}

/// Hue circle geometry
pub mod hue {
    /// Degrees in a full turn; hue is kept in `[0, FULL_TURN)`
    pub const FULL_TURN: f64 = 360.0;

    /// Width of one hue sector in degrees
    pub const SECTOR_DEGREES: f64 = 60.0;

    /// Number of hue sectors on the circle
    pub const SECTORS: f64 = 6.0;
}

/// Saturation and lightness are reported in percent
pub const PERCENT: f64 = 100.0;

/// Decimal places kept for saturation and lightness
pub const PERCENT_DECIMALS: i32 = 2;

//! Color value types and conversion module
//!
//! This module holds the plain RGB and HSL value types and the
//! converter that moves colors between hex, RGB and HSL.

pub mod conversion;
pub mod model;

pub use conversion::ColorConverter;
pub use model::{Channel, Hsl, Rgb};

//! Color handling for Chameleon.
//!
//! Split into a codec (textual literal parsing to canonical hex) and the
//! math helpers built on top of it. Public re-exports keep the
//! `crate::color::*` API stable.

/// Parsing and canonical hex encoding of color literals.
mod codec;
/// Luminance, lightening, distance, and related helpers.
mod math;

pub use codec::{channels, normalize_hex, parse_rgb, rgb_to_hex};
pub use math::{color_distance, hex_to_rgba, is_light, lighten, luminance, saturation};

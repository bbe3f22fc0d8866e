//! Design-token synthesis for Chameleon.
//!
//! Expands a single brand primary into the full named token set the
//! preview renderer consumes. Public re-exports keep the
//! `crate::theme::*` API stable.

/// Token synthesis from a primary color.
mod synth;
/// Token set and theme type definitions.
mod types;

pub use synth::build_theme_from_colors;
pub use types::{ChameleonTheme, ThemeColors};

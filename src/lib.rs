//! Library entry for Chameleon exposing the extraction and synthesis core
//! for integration tests and embedding.

pub mod color;
pub mod config;
pub mod extract;
pub mod net;
pub mod theme;
pub mod util;

pub use crate::extract::extract_brand_colors;
pub use crate::theme::build_theme_from_colors;

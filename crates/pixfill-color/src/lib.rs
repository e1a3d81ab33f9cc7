//! pixfill Color - Color comparison for region filling
//!
//! This crate decides whether two RGBA colors count as the same
//! "material" for a fill:
//!
//! - **Color distance** ([`colordist`]): alpha-aware squared distance,
//!   tolerance normalization, and the [`ColorMatcher`] used per pixel
//!   by the fill engine

pub mod colordist;
pub mod error;

// Re-export core types
pub use pixfill_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export color distance types and functions
pub use colordist::{
    ColorMatcher, MAX_TOLERANCE, clamp_tolerance, color_distance_squared, colors_match,
    select_matching_pixels, tolerance_squared,
};

//! pixfill-region - Seed fill of color regions
//!
//! This crate provides the region fill engine:
//!
//! - **Seed fill** ([`seedfill`]) - Repaint the 4-connected region of
//!   colors similar to a seed pixel, within a tolerance
//!
//! Color similarity is decided by [`pixfill_color::ColorMatcher`].
//!
//! # Examples
//!
//! ## Bucket fill
//!
//! ```
//! use pixfill_core::{Pix, PixelDepth};
//! use pixfill_region::{FloodFillOptions, flood_fill_detailed};
//!
//! // Left half white, right half transparent
//! let pix = Pix::new(10, 10, PixelDepth::Bit32).unwrap();
//! let mut pm = pix.try_into_mut().unwrap();
//! for y in 0..10 {
//!     for x in 0..5 {
//!         pm.set_pixel_unchecked(x, y, 0xffffffff);
//!     }
//! }
//! let pix: Pix = pm.into();
//!
//! let options = FloodFillOptions::new(0xff0000ff).with_tolerance(10.0);
//! let result = flood_fill_detailed(&pix, 2, 2, &options).unwrap();
//! let region = result.region.unwrap();
//! assert_eq!(region.pixel_count, 50);
//! assert_eq!(region.bounds.w, 5);
//! assert_eq!(result.pix.get_pixel(7, 7), Some(0));
//! ```

pub mod error;
pub mod seedfill;

// Re-export core types
pub use pixfill_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export seed fill types and functions
pub use seedfill::{
    FillRegion, FloodFillOptions, FloodFillResult, flood_fill, flood_fill_detailed,
    flood_fill_mut,
};

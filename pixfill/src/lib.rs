//! pixfill - Tolerance-based region fill for RGBA images
//!
//! # Overview
//!
//! pixfill repaints the 4-connected region of similar colors around a seed
//! pixel, the way a paint program's bucket tool does:
//!
//! - Image containers with padded rows and RGBA byte import/export
//! - Alpha-aware color distance with a 0..=255 tolerance ([`color`])
//! - Stack-based scanline seed fill ([`region`])
//!
//! # Example
//!
//! ```
//! use pixfill::{Pix, region::{FloodFillOptions, flood_fill}};
//!
//! // 2x2 RGBA8 buffer with one padding word per row
//! let bytes = [
//!     0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0, 0, 0, 0,
//!     0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0, 0, 0, 0,
//! ];
//! let pix = Pix::from_rgba_bytes(2, 2, 12, &bytes).unwrap();
//!
//! let options = FloodFillOptions::new(0x0000ffff).with_tolerance(1.0);
//! let filled = flood_fill(&pix, 0, 0, &options).unwrap();
//! assert_eq!(filled.get_pixel(1, 0), Some(0x0000ffff));
//! assert_eq!(filled.get_pixel(1, 1), Some(0x00000000));
//! assert_eq!(filled.to_rgba_bytes().unwrap().len(), bytes.len());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixfill_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixfill_color as color;
pub use pixfill_region as region;

//! pixfill-test - Regression test framework for pixfill
//!
//! Tests in every crate of the workspace record their checks through
//! [`RegParams`], which numbers each comparison, collects failures and
//! reports them together at the end. Two modes are supported:
//!
//! - **Compare**: Run the checks (default)
//! - **Display**: Run the checks and also write text dumps of the images
//!   under test to `tests/regout/` for inspection
//!
//! # Usage
//!
//! ```ignore
//! use pixfill_test::RegParams;
//!
//! let mut rp = RegParams::new("seedfill");
//! rp.compare_values(9.0, region.pixel_count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode, format_pix};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixfill-test is at crates/pixfill-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

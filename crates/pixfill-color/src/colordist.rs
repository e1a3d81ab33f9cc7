//! Color distance for tolerance-based matching
//!
//! A candidate color matches a reference (seed) color when the
//! alpha-aware squared distance between them is at most the squared
//! tolerance. For each of R, G and B with channel delta `d` and alpha
//! delta `da` (both taken as `reference - candidate`), the channel
//! contributes `max(d², (d - da)²)`; the second term accounts for the
//! apparent shift a change of opacity causes, so two colors with equal
//! RGB but different alpha do not match at tolerance 0.
//!
//! Tolerances are given on the 0..=255 channel scale and squared once,
//! so no square root is taken per comparison.

use crate::error::{ColorError, ColorResult};
use pixfill_core::{Pix, PixelDepth, color};

/// Largest meaningful tolerance (one full channel step).
pub const MAX_TOLERANCE: f32 = 255.0;

/// Clamp a tolerance to `[0, MAX_TOLERANCE]`.
///
/// NaN is treated as 0.
pub fn clamp_tolerance(tolerance: f32) -> f32 {
    if tolerance.is_nan() {
        log::debug!("clamp_tolerance: NaN tolerance treated as 0");
        return 0.0;
    }
    let clamped = tolerance.clamp(0.0, MAX_TOLERANCE);
    if clamped != tolerance {
        log::debug!("clamp_tolerance: tolerance {tolerance} clamped to {clamped}");
    }
    clamped
}

/// Normalize a tolerance to the squared threshold used by [`colors_match`].
///
/// The tolerance is clamped (see [`clamp_tolerance`]) and squared on the
/// raw 0..=255 scale; the result is `floor(t²)`, at most `65025`.
pub fn tolerance_squared(tolerance: f32) -> u32 {
    let t = f64::from(clamp_tolerance(tolerance));
    (t * t).floor() as u32
}

#[inline]
fn channel_distance(delta: i32, alpha_delta: i32) -> u32 {
    let plain = delta * delta;
    let shifted = (delta - alpha_delta) * (delta - alpha_delta);
    plain.max(shifted) as u32
}

/// Alpha-aware squared distance between two `0xRRGGBBAA` colors.
///
/// # Examples
///
/// ```
/// use pixfill_color::color_distance_squared;
///
/// assert_eq!(color_distance_squared(0x102030ff, 0x102030ff), 0);
/// assert_eq!(color_distance_squared(0x102030ff, 0x112030ff), 1);
/// // Same RGB, different opacity
/// assert_eq!(color_distance_squared(0xffffffff, 0xffffff00), 3 * 255 * 255);
/// ```
pub fn color_distance_squared(reference: u32, candidate: u32) -> u32 {
    let (rr, rg, rb, ra) = color::extract_rgba(reference);
    let (cr, cg, cb, ca) = color::extract_rgba(candidate);
    let da = i32::from(ra) - i32::from(ca);
    channel_distance(i32::from(rr) - i32::from(cr), da)
        + channel_distance(i32::from(rg) - i32::from(cg), da)
        + channel_distance(i32::from(rb) - i32::from(cb), da)
}

/// Check whether `candidate` is within `tolerance_sq` of `reference`.
///
/// `tolerance_sq` comes from [`tolerance_squared`]; with a threshold of 0
/// only a byte-identical RGBA color matches.
#[inline]
pub fn colors_match(reference: u32, candidate: u32, tolerance_sq: u32) -> bool {
    color_distance_squared(reference, candidate) <= tolerance_sq
}

/// Per-pixel matcher against a fixed reference color.
///
/// The reference is captured once and never changes, so every candidate
/// is judged against the same color regardless of the order in which
/// candidates are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorMatcher {
    reference: u32,
    tolerance_sq: u32,
}

impl ColorMatcher {
    /// Create a matcher from a reference color and a 0..=255 tolerance.
    pub fn new(reference: u32, tolerance: f32) -> Self {
        Self::with_tolerance_squared(reference, tolerance_squared(tolerance))
    }

    /// Create a matcher from an already squared threshold.
    pub fn with_tolerance_squared(reference: u32, tolerance_sq: u32) -> Self {
        Self {
            reference,
            tolerance_sq,
        }
    }

    /// Create a matcher whose reference is the pixel at (x, y) of `pix`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnsupportedDepth`] if `pix` is not 32 bpp, or
    /// [`ColorError::Core`] if (x, y) is outside the image.
    pub fn from_pix(pix: &Pix, x: u32, y: u32, tolerance: f32) -> ColorResult<Self> {
        if pix.depth() != PixelDepth::Bit32 {
            return Err(ColorError::UnsupportedDepth {
                expected: "32-bit",
                actual: pix.depth().bits(),
            });
        }
        let reference = pix
            .get_pixel(x, y)
            .ok_or_else(|| pixfill_core::Error::IndexOutOfBounds {
                index: (y as usize) * (pix.width() as usize) + x as usize,
                len: (pix.width() as usize) * (pix.height() as usize),
            })?;
        Ok(Self::new(reference, tolerance))
    }

    /// The reference color.
    #[inline]
    pub fn reference(&self) -> u32 {
        self.reference
    }

    /// The squared threshold.
    #[inline]
    pub fn tolerance_squared(&self) -> u32 {
        self.tolerance_sq
    }

    /// Check whether `candidate` matches the reference color.
    #[inline]
    pub fn matches(&self, candidate: u32) -> bool {
        colors_match(self.reference, candidate, self.tolerance_sq)
    }
}

/// Select every pixel of `pix` that matches `reference`, connected or not.
///
/// Returns a 1 bpp mask of the same size where ON pixels match.
///
/// # Errors
///
/// Returns [`ColorError::UnsupportedDepth`] if `pix` is not 32 bpp.
pub fn select_matching_pixels(pix: &Pix, reference: u32, tolerance: f32) -> ColorResult<Pix> {
    if pix.depth() != PixelDepth::Bit32 {
        return Err(ColorError::UnsupportedDepth {
            expected: "32-bit",
            actual: pix.depth().bits(),
        });
    }
    let matcher = ColorMatcher::new(reference, tolerance);
    let mut mask = Pix::new(pix.width(), pix.height(), PixelDepth::Bit1)?
        .try_into_mut()
        .unwrap_or_else(|p| p.to_mut());
    for y in 0..pix.height() {
        for x in 0..pix.width() {
            if matcher.matches(pix.get_pixel_unchecked(x, y)) {
                mask.set_pixel_unchecked(x, y, 1);
            }
        }
    }
    Ok(mask.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_squared() {
        assert_eq!(tolerance_squared(0.0), 0);
        assert_eq!(tolerance_squared(0.5), 0);
        assert_eq!(tolerance_squared(1.0), 1);
        assert_eq!(tolerance_squared(10.5), 110);
        assert_eq!(tolerance_squared(255.0), 65025);
    }

    #[test]
    fn test_tolerance_clamped() {
        assert_eq!(tolerance_squared(-3.0), 0);
        assert_eq!(tolerance_squared(300.0), 65025);
        assert_eq!(tolerance_squared(f32::NAN), 0);
        assert_eq!(tolerance_squared(f32::INFINITY), 65025);
        assert_eq!(clamp_tolerance(42.0), 42.0);
    }

    #[test]
    fn test_distance_rgb_only() {
        // Channels and alpha move together: alpha term vanishes
        assert_eq!(color_distance_squared(0xffffffff, 0x88888888), 3 * 119 * 119);
        assert_eq!(color_distance_squared(0x000000ff, 0x030405ff), 9 + 16 + 25);
    }

    #[test]
    fn test_distance_alpha_term() {
        // Opaque white vs transparent black: alpha delta cancels
        assert_eq!(color_distance_squared(0xffffffff, 0x00000000), 3 * 255 * 255);
        // Opaque black vs transparent white: deltas add up
        assert_eq!(color_distance_squared(0x000000ff, 0xffffff00), 3 * 510 * 510);
        // Alpha only
        assert_eq!(color_distance_squared(0x80808080, 0x80808070), 3 * 16 * 16);
    }

    #[test]
    fn test_zero_tolerance_is_exact() {
        let m = ColorMatcher::new(0x11223344, 0.0);
        assert!(m.matches(0x11223344));
        assert!(!m.matches(0x11223345));
        assert!(!m.matches(0x12223344));
    }

    #[test]
    fn test_matcher_threshold_inclusive() {
        let m = ColorMatcher::with_tolerance_squared(0x000000ff, 50);
        assert!(m.matches(0x030405ff));
        assert!(!ColorMatcher::with_tolerance_squared(0x000000ff, 49).matches(0x030405ff));
        assert_eq!(m.reference(), 0x000000ff);
        assert_eq!(m.tolerance_squared(), 50);
    }

    #[test]
    fn test_full_tolerance_single_channel() {
        let m = ColorMatcher::new(0xffffffff, 255.0);
        // One channel across the full range is admitted
        assert!(m.matches(0x00ffffff));
        // All channels across the full range is not
        assert!(!m.matches(0x00000000));
    }

    #[test]
    fn test_from_pix() {
        let pix = Pix::new(2, 2, PixelDepth::Bit32).unwrap();
        let mut pm = pix.to_mut();
        pm.set_pixel(1, 1, 0xabcdefff).unwrap();
        let pix: Pix = pm.into();

        let m = ColorMatcher::from_pix(&pix, 1, 1, 0.0).unwrap();
        assert_eq!(m.reference(), 0xabcdefff);
        assert!(matches!(
            ColorMatcher::from_pix(&pix, 2, 0, 0.0),
            Err(ColorError::Core(_))
        ));

        let mask = Pix::new(2, 2, PixelDepth::Bit1).unwrap();
        assert!(matches!(
            ColorMatcher::from_pix(&mask, 0, 0, 0.0),
            Err(ColorError::UnsupportedDepth { .. })
        ));
    }
}

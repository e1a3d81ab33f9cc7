//! Seed fill of color regions
//!
//! Repaints the 4-connected region around a seed pixel whose colors lie
//! within a tolerance of the seed's original color.
//!
//! # Algorithm
//!
//! The fill is a scanline fill driven by an explicit stack of spans, so
//! no call-stack depth grows with the size of the region:
//!
//! 1. Pop a span; skip it if its entry pixel is already filled.
//! 2. Paint the entry pixel, then extend left and right over unfilled
//!    matching pixels, painting as it goes.
//! 3. Probe the rows above and below the painted segment. The first
//!    pixel of every run of unfilled matching pixels pushes one new span;
//!    the rest of the run is covered when that span extends sideways.
//! 4. Columns inside the interior of the parent span's segment are not
//!    probed on the parent's row: those pixels were painted by the parent.
//!
//! Matching is always against the seed color captured before any pixel is
//! painted, and a pixel is painted at most once, so the filled set does
//! not depend on the order in which spans are processed.

use crate::error::RegionResult;
use pixfill_color::ColorMatcher;
use pixfill_core::{Box, Pix, PixMut, PixelDepth};

/// Options for seed fill operations
#[derive(Debug, Clone, PartialEq)]
pub struct FloodFillOptions {
    /// Replacement color (`0xRRGGBBAA`)
    pub fill_color: u32,
    /// Maximum color distance from the seed color, 0..=255.
    /// Values outside the range are clamped.
    pub tolerance: f32,
}

impl Default for FloodFillOptions {
    fn default() -> Self {
        Self {
            fill_color: 0x0000_00ff,
            tolerance: 0.0,
        }
    }
}

impl FloodFillOptions {
    /// Create options that fill with `fill_color` at exact-match tolerance
    pub fn new(fill_color: u32) -> Self {
        Self {
            fill_color,
            ..Self::default()
        }
    }

    /// Set the tolerance
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the fill color
    pub fn with_fill_color(mut self, fill_color: u32) -> Self {
        self.fill_color = fill_color;
        self
    }
}

/// The pixels changed by one fill
#[derive(Debug, Clone)]
pub struct FillRegion {
    /// 1-bit mask of the filled region (ON pixels were repainted)
    pub mask: Pix,
    /// Number of pixels in the region
    pub pixel_count: u32,
    /// Bounding box of the region
    pub bounds: Box,
}

/// Result of [`flood_fill_detailed`]
#[derive(Debug, Clone)]
pub struct FloodFillResult {
    /// The filled image
    pub pix: Pix,
    /// The filled region, or `None` when the fill was a no-op
    pub region: Option<FillRegion>,
}

/// Flood fill a 32-bit image from a seed point
///
/// Returns a copy of `pix` in which the 4-connected region of pixels
/// matching the seed's color within `options.tolerance` is painted with
/// `options.fill_color`. The input is never modified.
///
/// A seed outside the image, or an image that is not 32 bpp, is not an
/// error: the result is an unmodified copy.
///
/// # Examples
///
/// ```
/// use pixfill_core::{Pix, PixelDepth};
/// use pixfill_region::{FloodFillOptions, flood_fill};
///
/// let pix = Pix::new(4, 4, PixelDepth::Bit32).unwrap();
/// let filled = flood_fill(&pix, 1, 1, &FloodFillOptions::new(0xff0000ff)).unwrap();
/// assert_eq!(filled.get_pixel(3, 3), Some(0xff0000ff));
/// assert_eq!(pix.get_pixel(3, 3), Some(0));
/// ```
pub fn flood_fill(
    pix: &Pix,
    seed_x: i32,
    seed_y: i32,
    options: &FloodFillOptions,
) -> RegionResult<Pix> {
    Ok(flood_fill_detailed(pix, seed_x, seed_y, options)?.pix)
}

/// Flood fill a copy of `pix` and report the filled region
///
/// Same as [`flood_fill`], additionally returning the mask, size and
/// bounding box of the repainted region.
pub fn flood_fill_detailed(
    pix: &Pix,
    seed_x: i32,
    seed_y: i32,
    options: &FloodFillOptions,
) -> RegionResult<FloodFillResult> {
    let mut output = pix.to_mut();
    let region = flood_fill_mut(&mut output, seed_x, seed_y, options)?;
    Ok(FloodFillResult {
        pix: output.into(),
        region,
    })
}

/// Flood fill in place
///
/// Paints the region directly into `pix`, which the caller owns
/// exclusively for the duration of the call.
///
/// # Returns
///
/// The filled region, or `None` when the seed is outside the image or the
/// image is not 32 bpp (nothing is modified in that case).
pub fn flood_fill_mut(
    pix: &mut PixMut,
    seed_x: i32,
    seed_y: i32,
    options: &FloodFillOptions,
) -> RegionResult<Option<FillRegion>> {
    if pix.depth() != PixelDepth::Bit32 {
        log::debug!(
            "flood_fill: {} bpp image is not RGBA; nothing to fill",
            pix.depth().bits()
        );
        return Ok(None);
    }

    let (width, height) = (pix.width(), pix.height());
    let seed = u32::try_from(seed_x)
        .ok()
        .zip(u32::try_from(seed_y).ok())
        .filter(|&(x, y)| x < width && y < height);
    let Some((x, y)) = seed else {
        log::debug!(
            "flood_fill: seed ({seed_x}, {seed_y}) outside {width}x{height}; nothing to fill"
        );
        return Ok(None);
    };

    let matcher = ColorMatcher::new(pix.get_pixel_unchecked(x, y), options.tolerance);
    let visited = Pix::new(width, height, PixelDepth::Bit1)?
        .try_into_mut()
        .unwrap_or_else(|p| p.to_mut());

    let filler = SpanFiller {
        pix,
        visited,
        matcher,
        fill_color: options.fill_color,
        width,
        height,
        stack: Vec::new(),
        pixel_count: 0,
        min: (x, y),
        max: (x, y),
        peak_pending: 0,
    };
    Ok(Some(filler.run(FillSpan::seed(x, y))))
}

/// Row adjacent to a span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Above,
    Below,
}

/// A pending unit of work: one entry point on a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FillSpan {
    x: u32,
    y: u32,
    /// Probe every column of the row above, not only those outside the
    /// interior of `prev_left..=prev_right`
    scan_above: bool,
    /// Same for the row below
    scan_below: bool,
    /// Segment painted by the span that pushed this one, on its own row
    prev_left: u32,
    prev_right: u32,
}

impl FillSpan {
    fn seed(x: u32, y: u32) -> Self {
        Self {
            x,
            y,
            scan_above: true,
            scan_below: true,
            prev_left: x,
            prev_right: x,
        }
    }

    /// Span entering `row` from a parent that painted `left..=right` on
    /// the adjacent row in the opposite direction.
    fn spawned(x: u32, row: u32, direction: Direction, left: u32, right: u32) -> Self {
        Self {
            x,
            y: row,
            scan_above: direction == Direction::Above,
            scan_below: direction == Direction::Below,
            prev_left: left,
            prev_right: right,
        }
    }

    fn scans_all(&self, direction: Direction) -> bool {
        match direction {
            Direction::Above => self.scan_above,
            Direction::Below => self.scan_below,
        }
    }

    /// Whether column `cx` of the parent's row may hold unpainted pixels.
    #[inline]
    fn outside_parent(&self, cx: u32) -> bool {
        cx >= self.prev_right || cx <= self.prev_left
    }
}

struct SpanFiller<'a> {
    pix: &'a mut PixMut,
    /// 1 bpp; ON once a pixel has been painted
    visited: PixMut,
    matcher: ColorMatcher,
    fill_color: u32,
    width: u32,
    height: u32,
    stack: Vec<FillSpan>,
    pixel_count: u32,
    min: (u32, u32),
    max: (u32, u32),
    peak_pending: usize,
}

impl SpanFiller<'_> {
    fn run(mut self, seed: FillSpan) -> FillRegion {
        self.stack.push(seed);
        while let Some(span) = self.stack.pop() {
            self.fill_span(span);
        }

        log::debug!(
            "flood_fill: painted {} pixels from seed ({}, {}), peak {} pending spans",
            self.pixel_count,
            seed.x,
            seed.y,
            self.peak_pending
        );

        FillRegion {
            mask: self.visited.into(),
            pixel_count: self.pixel_count,
            bounds: Box::from_corners(
                self.min.0 as i32,
                self.min.1 as i32,
                self.max.0 as i32,
                self.max.1 as i32,
            ),
        }
    }

    #[inline]
    fn is_visited(&self, x: u32, y: u32) -> bool {
        self.visited.get_pixel_unchecked(x, y) == 1
    }

    /// Unpainted and within tolerance of the seed color.
    #[inline]
    fn is_open(&self, x: u32, y: u32) -> bool {
        !self.is_visited(x, y) && self.matcher.matches(self.pix.get_pixel_unchecked(x, y))
    }

    fn claim(&mut self, x: u32, y: u32) {
        self.pix.set_pixel_unchecked(x, y, self.fill_color);
        self.visited.set_pixel_unchecked(x, y, 1);
        self.pixel_count += 1;
        self.min = (self.min.0.min(x), self.min.1.min(y));
        self.max = (self.max.0.max(x), self.max.1.max(y));
    }

    fn fill_span(&mut self, span: FillSpan) {
        let (x, y) = (span.x, span.y);
        if self.is_visited(x, y) {
            return;
        }
        self.claim(x, y);

        let mut left = x;
        while left > 0 && self.is_open(left - 1, y) {
            left -= 1;
            self.claim(left, y);
        }
        let mut right = x;
        while right + 1 < self.width && self.is_open(right + 1, y) {
            right += 1;
            self.claim(right, y);
        }

        if y > 0 {
            self.probe_row(&span, y - 1, left, right, Direction::Above);
        }
        if y + 1 < self.height {
            self.probe_row(&span, y + 1, left, right, Direction::Below);
        }
    }

    /// Push one span per run of open pixels on `row` over `left..=right`.
    fn probe_row(
        &mut self,
        span: &FillSpan,
        row: u32,
        left: u32,
        right: u32,
        direction: Direction,
    ) {
        let scan_all = span.scans_all(direction);
        let mut in_run = false;
        for cx in left..=right {
            if !(scan_all || span.outside_parent(cx)) || !self.is_open(cx, row) {
                in_run = false;
                continue;
            }
            if !in_run {
                self.stack.push(FillSpan::spawned(cx, row, direction, left, right));
                in_run = true;
            }
        }
        self.peak_pending = self.peak_pending.max(self.stack.len());
    }
}

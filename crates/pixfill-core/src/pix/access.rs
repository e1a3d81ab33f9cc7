//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels.
//!
//! # Pixel packing
//!
//! 1 bpp pixels are packed MSB-to-LSB within each 32-bit word: pixel 0
//! of a row occupies bit 31 of the row's first word. 32 bpp pixels
//! occupy one word each.

use super::{Pix, PixData, PixMut, PixelDepth};
use crate::color;
use crate::error::{Error, Result};

impl PixData {
    #[inline]
    fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn get_unchecked(&self, x: u32, y: u32) -> u32 {
        let line = &self.data[(y as usize) * (self.wpl as usize)..];
        match self.depth {
            PixelDepth::Bit1 => get_data_bit(line, x),
            PixelDepth::Bit32 => line[x as usize],
        }
    }

    #[inline]
    fn set_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let start = (y as usize) * (self.wpl as usize);
        let line = &mut self.data[start..start + self.wpl as usize];
        match self.depth {
            PixelDepth::Bit1 => set_data_bit(line, x, val),
            PixelDepth::Bit32 => line[x as usize] = val,
        }
    }

    fn out_of_bounds(&self, x: u32, y: u32) -> Error {
        let index = (y as usize) * (self.width as usize) + x as usize;
        Error::IndexOutOfBounds {
            index,
            len: (self.width as usize) * (self.height as usize),
        }
    }
}

impl Pix {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        self.inner
            .in_bounds(x, y)
            .then(|| self.inner.get_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the word holding (x, y) lies outside the image data.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.get_unchecked(x, y)
    }

    /// Get RGBA values at (x, y).
    ///
    /// Returns `None` if out of bounds or the image is not 32 bpp.
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        if self.inner.depth != PixelDepth::Bit32 {
            return None;
        }
        self.get_pixel(x, y).map(color::extract_rgba)
    }

    /// Count the ON pixels of a 1 bpp image.
    ///
    /// Padding bits are not counted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] for images that are not 1 bpp.
    pub fn count_pixels(&self) -> Result<u64> {
        if self.inner.depth != PixelDepth::Bit1 {
            return Err(Error::UnsupportedDepth(self.inner.depth.bits()));
        }
        let width = self.inner.width;
        let full_words = (width / 32) as usize;
        let tail_bits = width % 32;
        let tail_mask = if tail_bits == 0 {
            0
        } else {
            !0u32 << (32 - tail_bits)
        };

        let mut count = 0u64;
        for y in 0..self.inner.height {
            let line = self.row_data(y);
            count += line[..full_words]
                .iter()
                .map(|w| u64::from(w.count_ones()))
                .sum::<u64>();
            if tail_bits != 0 {
                count += u64::from((line[full_words] & tail_mask).count_ones());
            }
        }
        Ok(count)
    }
}

impl PixMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        self.inner
            .in_bounds(x, y)
            .then(|| self.inner.get_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.get_unchecked(x, y)
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if !self.inner.in_bounds(x, y) {
            return Err(self.inner.out_of_bounds(x, y));
        }
        self.inner.set_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the word holding (x, y) lies outside the image data.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        self.inner.set_unchecked(x, y, val);
    }

    /// Set an RGBA pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] if the image is not 32 bpp, or
    /// [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        if self.inner.depth != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(self.inner.depth.bits()));
        }
        self.set_pixel(x, y, color::compose_rgba(r, g, b, a))
    }
}

/// Get a 1-bit pixel value.
///
/// Pixels are packed MSB to LSB within each 32-bit word.
#[inline]
pub fn get_data_bit(line: &[u32], x: u32) -> u32 {
    (line[(x >> 5) as usize] >> (31 - (x & 31))) & 1
}

/// Set a 1-bit pixel value (only the low bit of `val` is used).
#[inline]
pub fn set_data_bit(line: &mut [u32], x: u32, val: u32) {
    if val & 1 == 1 {
        set_data_bit_val(line, x);
    } else {
        clear_data_bit(line, x);
    }
}

/// Set a 1-bit pixel to 1.
#[inline]
pub fn set_data_bit_val(line: &mut [u32], x: u32) {
    line[(x >> 5) as usize] |= 0x8000_0000 >> (x & 31);
}

/// Clear a 1-bit pixel to 0.
#[inline]
pub fn clear_data_bit(line: &mut [u32], x: u32) {
    line[(x >> 5) as usize] &= !(0x8000_0000 >> (x & 31));
}

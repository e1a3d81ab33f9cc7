//! Raw RGBA8 byte buffers
//!
//! Decoders and encoders hand pixels over as row-major RGBA8 bytes with a
//! row stride. These conversions keep the stride: a buffer imported with
//! `stride` bytes per row is exported with the same stride, and the bytes
//! past `width * 4` in each row travel with the image as padding words.

use super::{Pix, PixData, PixelDepth};
use crate::error::{Error, Result};
use std::sync::Arc;

impl Pix {
    /// Build a 32 bpp image from row-major RGBA8 bytes.
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels
    /// * `height` - Height in pixels
    /// * `stride` - Bytes per row; a multiple of 4, at least `width * 4`
    /// * `bytes` - Pixel bytes, at least `stride * (height - 1) + width * 4` long
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero width or height,
    /// [`Error::InvalidStride`] for a stride that is too short or not word
    /// aligned, and [`Error::BufferTooSmall`] when `bytes` cannot hold the
    /// image.
    pub fn from_rgba_bytes(width: u32, height: u32, stride: usize, bytes: &[u8]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let row_bytes = width as usize * 4;
        if stride < row_bytes || stride % 4 != 0 {
            return Err(Error::InvalidStride { stride, width });
        }
        let needed = stride * (height as usize - 1) + row_bytes;
        if bytes.len() < needed {
            return Err(Error::BufferTooSmall {
                needed,
                actual: bytes.len(),
            });
        }

        let wpl = u32::try_from(stride / 4).map_err(|_| Error::InvalidStride { stride, width })?;
        let mut data = vec![0u32; wpl as usize * height as usize];
        for (y, row) in data.chunks_exact_mut(wpl as usize).enumerate() {
            // The last row may be short: it only needs its pixels.
            let src = &bytes[y * stride..];
            for (word, px) in row.iter_mut().zip(src.chunks_exact(4)) {
                *word = u32::from_be_bytes([px[0], px[1], px[2], px[3]]);
            }
        }

        Ok(Pix {
            inner: Arc::new(PixData {
                width,
                height,
                depth: PixelDepth::Bit32,
                wpl,
                data,
            }),
        })
    }

    /// Stride in bytes of the RGBA8 form of this image (`wpl * 4`).
    #[inline]
    pub fn stride(&self) -> usize {
        self.inner.wpl as usize * 4
    }

    /// Export a 32 bpp image as row-major RGBA8 bytes.
    ///
    /// The result has [`Pix::stride`] bytes per row, padding included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] if the image is not 32 bpp.
    pub fn to_rgba_bytes(&self) -> Result<Vec<u8>> {
        if self.inner.depth != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(self.inner.depth.bits()));
        }
        Ok(self
            .inner
            .data
            .iter()
            .flat_map(|word| word.to_be_bytes())
            .collect())
    }
}

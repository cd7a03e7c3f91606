//! RGBA image buffers and borrowed views.
//!
//! `ImageView` is a borrowed 2D view into a 1D pixel slice with an explicit
//! stride (pixels between the starts of consecutive rows). Windows are
//! zero-copy views into the same backing slice and keep the original stride.
//! Coordinates are `(row, col)` with the origin at the top-left corner.

use crate::util::{MaskMatchError, MaskMatchResult};

mod buffer;
#[cfg(feature = "image-io")]
pub mod io;
mod pixel;

pub use buffer::RgbaImage;
pub use pixel::{Channel, Pixel};

/// Borrowed 2D pixel view with an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct ImageView<'a> {
    data: &'a [Pixel],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> ImageView<'a> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [Pixel], width: usize, height: usize) -> MaskMatchResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a view with an explicit stride.
    pub fn new(
        data: &'a [Pixel],
        width: usize,
        height: usize,
        stride: usize,
    ) -> MaskMatchResult<Self> {
        let needed = required_len(width, height, stride)?;
        if data.len() < needed {
            return Err(MaskMatchError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the stride in pixels between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the number of pixels covered by the view.
    pub fn buffer_size(&self) -> usize {
        self.width * self.height
    }

    /// Returns the pixel at `(row, col)` if it is within bounds.
    pub fn pixel(&self, row: usize, col: usize) -> Option<Pixel> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let idx = row.checked_mul(self.stride)?.checked_add(col)?;
        self.data.get(idx).copied()
    }

    /// Returns row `row` as a slice of length `width`.
    pub fn row(&self, row: usize) -> Option<&'a [Pixel]> {
        if row >= self.height {
            return None;
        }
        let start = row.checked_mul(self.stride)?;
        let end = start.checked_add(self.width)?;
        self.data.get(start..end)
    }

    /// Iterates over the rows of the view, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &'a [Pixel]> + 'a {
        let width = self.width;
        self.data
            .chunks(self.stride)
            .take(self.height)
            .map(move |row| &row[..width])
    }

    /// Returns a zero-copy view of the `width x height` window anchored at `(row, col)`.
    ///
    /// The window must lie fully inside this view.
    pub fn window(
        &self,
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    ) -> MaskMatchResult<ImageView<'a>> {
        if width == 0 || height == 0 {
            return Err(MaskMatchError::InvalidDimensions { width, height });
        }
        let fits_cols = col
            .checked_add(width)
            .is_some_and(|end| end <= self.width);
        let fits_rows = row
            .checked_add(height)
            .is_some_and(|end| end <= self.height);
        if !fits_cols || !fits_rows {
            return Err(MaskMatchError::InvalidInput("window exceeds image bounds"));
        }

        let start = row * self.stride + col;
        let data = self
            .data
            .get(start..)
            .ok_or(MaskMatchError::BufferTooSmall {
                needed: start.saturating_add(1),
                got: self.data.len(),
            })?;
        ImageView::new(data, width, height, self.stride)
    }
}

fn required_len(width: usize, height: usize, stride: usize) -> MaskMatchResult<usize> {
    if width == 0 || height == 0 {
        return Err(MaskMatchError::InvalidDimensions { width, height });
    }
    if stride < width {
        return Err(MaskMatchError::InvalidInput("stride is smaller than width"));
    }
    (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(width))
        .ok_or(MaskMatchError::InvalidDimensions { width, height })
}

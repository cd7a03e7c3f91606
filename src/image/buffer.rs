//! Owned contiguous RGBA image buffer.

use crate::image::{Channel, ImageView, Pixel};
use crate::util::{MaskMatchError, MaskMatchResult};

/// Owned row-major RGBA image with `stride == width`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaImage {
    data: Vec<Pixel>,
    width: usize,
    height: usize,
}

impl RgbaImage {
    /// Wraps a row-major pixel buffer of exactly `width * height` pixels.
    pub fn new(data: Vec<Pixel>, width: usize, height: usize) -> MaskMatchResult<Self> {
        if width == 0 || height == 0 {
            return Err(MaskMatchError::InvalidDimensions { width, height });
        }
        let needed = width
            .checked_mul(height)
            .ok_or(MaskMatchError::InvalidDimensions { width, height })?;
        if data.len() != needed {
            return Err(MaskMatchError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates an image with every pixel set to `fill`.
    pub fn filled(width: usize, height: usize, fill: Pixel) -> MaskMatchResult<Self> {
        let len = width
            .checked_mul(height)
            .ok_or(MaskMatchError::InvalidDimensions { width, height })?;
        Self::new(vec![fill; len], width, height)
    }

    /// Copies a view into a new contiguous buffer.
    pub fn from_view(view: ImageView<'_>) -> MaskMatchResult<Self> {
        let mut data = Vec::with_capacity(view.buffer_size());
        for row in view.rows() {
            data.extend_from_slice(row);
        }
        Self::new(data, view.width(), view.height())
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the total pixel count.
    pub fn buffer_size(&self) -> usize {
        self.data.len()
    }

    /// Returns the row-major pixel buffer.
    pub fn pixels(&self) -> &[Pixel] {
        &self.data
    }

    /// Returns a borrowed view of the whole image.
    pub fn view(&self) -> ImageView<'_> {
        ImageView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }

    /// Returns the pixel at `(row, col)` if it is within bounds.
    pub fn pixel(&self, row: usize, col: usize) -> Option<Pixel> {
        self.index(row, col).map(|idx| self.data[idx])
    }

    /// Overwrites the pixel at `(row, col)`. Returns false when out of bounds.
    pub fn set_pixel(&mut self, row: usize, col: usize, pixel: Pixel) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.data[idx] = pixel;
                true
            }
            None => false,
        }
    }

    /// Overwrites one channel of the pixel at `(row, col)`. Returns false when out of bounds.
    pub fn set_channel(&mut self, row: usize, col: usize, channel: Channel, value: u8) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.data[idx].set_channel(channel, value);
                true
            }
            None => false,
        }
    }

    /// Copies the `width x height` region anchored at `(row, col)`.
    pub fn crop(
        &self,
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    ) -> MaskMatchResult<Self> {
        Self::from_view(self.view().window(row, col, width, height)?)
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }
}

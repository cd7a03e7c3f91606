//! Mask storage and compiled scan plans.

use crate::image::{ImageView, Pixel, RgbaImage};
use crate::util::MaskMatchResult;

mod plan;

pub use plan::{AcceptThreshold, MaskPlan};

/// Reference pattern searched for in the main image.
///
/// In mask mode, pixels equal to [`Pixel::MARKER`] mark background positions
/// and every other pixel marks a pattern position. In sub-image mode the
/// pixels are compared directly against the main image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    img: RgbaImage,
}

impl Mask {
    /// Creates a mask from a row-major pixel buffer.
    pub fn new(data: Vec<Pixel>, width: usize, height: usize) -> MaskMatchResult<Self> {
        Ok(Self {
            img: RgbaImage::new(data, width, height)?,
        })
    }

    /// Wraps an already decoded image.
    pub fn from_image(img: RgbaImage) -> Self {
        Self { img }
    }

    /// Returns the window width in pixels.
    pub fn width(&self) -> usize {
        self.img.width()
    }

    /// Returns the window height in pixels.
    pub fn height(&self) -> usize {
        self.img.height()
    }

    /// Returns the number of positions in a window.
    pub fn area(&self) -> usize {
        self.img.buffer_size()
    }

    /// Returns the number of marker (background) positions.
    pub fn marker_count(&self) -> usize {
        self.img.pixels().iter().filter(|px| px.is_marker()).count()
    }

    /// Returns a borrowed view of the mask pixels.
    pub fn view(&self) -> ImageView<'_> {
        self.img.view()
    }

    /// Returns the underlying image.
    pub fn image(&self) -> &RgbaImage {
        &self.img
    }
}

//! Precomputed per-scan mask data.

use crate::image::Pixel;
use crate::mask::Mask;
use crate::util::{MaskMatchError, MaskMatchResult};

/// Acceptance rule shared by every window of a scan.
///
/// A window is accepted when `correct * 100 > total * percent`, i.e. strictly
/// more than `percent` percent of its positions classify correctly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AcceptThreshold {
    total: u64,
    percent: u32,
}

impl AcceptThreshold {
    /// Builds the threshold for windows of `total` positions.
    pub fn new(total: usize, percent: u32) -> MaskMatchResult<Self> {
        if percent > 100 {
            return Err(MaskMatchError::InvalidPercent(percent));
        }
        Ok(Self {
            total: total as u64,
            percent,
        })
    }

    /// Returns the number of positions per window.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the configured percentage.
    pub fn percent(&self) -> u32 {
        self.percent
    }

    /// Returns true when `correct` strictly exceeds the threshold.
    #[inline]
    pub fn accepts(&self, correct: u64) -> bool {
        correct * 100 > self.total * u64::from(self.percent)
    }
}

/// Mask compiled for one scan: pattern pixels, marker flags and threshold.
#[derive(Clone, Debug)]
pub struct MaskPlan {
    pixels: Vec<Pixel>,
    marker: Vec<bool>,
    marker_count: usize,
    width: usize,
    height: usize,
    threshold: AcceptThreshold,
}

impl MaskPlan {
    /// Compiles `mask` for a scan requiring `match_percent` correct positions.
    pub fn compile(mask: &Mask, match_percent: u32) -> MaskMatchResult<Self> {
        let pixels = mask.image().pixels().to_vec();
        let marker: Vec<bool> = pixels.iter().map(Pixel::is_marker).collect();
        let marker_count = marker.iter().filter(|&&m| m).count();
        let threshold = AcceptThreshold::new(pixels.len(), match_percent)?;
        Ok(Self {
            pixels,
            marker,
            marker_count,
            width: mask.width(),
            height: mask.height(),
            threshold,
        })
    }

    /// Returns the window width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the window height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the mask pixels in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Returns the marker flag per position in row-major order.
    pub fn marker(&self) -> &[bool] {
        &self.marker
    }

    /// Returns the number of marker positions.
    pub fn marker_count(&self) -> usize {
        self.marker_count
    }

    /// Returns the acceptance threshold.
    pub fn threshold(&self) -> AcceptThreshold {
        self.threshold
    }
}

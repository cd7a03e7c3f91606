//! Matcher configuration, entry points and reports.
//!
//! The scan module enumerates windows, scores them with a kernel and
//! deduplicates accepted windows through the registry.

use crate::candidate::rect::MatchRect;
use crate::image::{ImageView, RgbaImage};
use crate::mask::{Mask, MaskPlan};
use crate::render::draw_outlines;
use crate::trace::trace_span;
use crate::util::MaskMatchResult;
use std::fmt;

pub(crate) mod scan;

/// How the search image is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Marker pixels are background, all other pixels are pattern.
    #[default]
    Mask,
    /// The search image is a literal sub-image compared pixel by pixel.
    SubImage,
}

/// Background used when a mask has no marker pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackgroundFallback {
    /// Use the mean color of the whole main image.
    #[default]
    ImageMean,
    /// Reject every window.
    Reject,
}

/// Scan configuration.
#[derive(Clone, Debug)]
pub struct MatchConfig {
    pub mode: MatchMode,
    /// Minimum percentage (0..=100) of correctly classified positions; the
    /// count must strictly exceed it.
    pub match_percent: u32,
    /// Exclusive per-channel bound for two pixels to share a shade.
    pub tolerance: u32,
    /// Score window rows on the rayon pool (ignored without the `rayon` feature).
    pub parallel: bool,
    pub background_fallback: BackgroundFallback,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            mode: MatchMode::Mask,
            match_percent: 75,
            tolerance: 32,
            parallel: true,
            background_fallback: BackgroundFallback::ImageMean,
        }
    }
}

/// Accepted matches of one scan, sorted top-to-bottom then left-to-right.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchReport {
    pub matches: Vec<MatchRect>,
    pub window_width: usize,
    pub window_height: usize,
    pub windows_scanned: u64,
    /// Windows that passed the threshold before deduplication.
    pub candidates: usize,
}

impl MatchReport {
    /// Returns the number of accepted matches.
    pub fn count(&self) -> usize {
        self.matches.len()
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rect in &self.matches {
            writeln!(f, "{rect}")?;
        }
        write!(f, "Number of matches: {}", self.count())
    }
}

/// Finds every occurrence of a mask in an image.
pub struct Matcher {
    mask: Mask,
    cfg: MatchConfig,
}

impl Matcher {
    /// Creates a matcher with the default configuration.
    pub fn new(mask: Mask) -> Self {
        Self {
            mask,
            cfg: MatchConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, cfg: MatchConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Scans `image` and returns the deduplicated matches.
    pub fn match_image(&self, image: ImageView<'_>) -> MaskMatchResult<MatchReport> {
        let plan = MaskPlan::compile(&self.mask, self.cfg.match_percent)?;
        let outcome = scan::scan_image(image, &plan, &self.cfg)?;
        Ok(MatchReport {
            matches: outcome.matches,
            window_width: plan.width(),
            window_height: plan.height(),
            windows_scanned: outcome.windows_scanned,
            candidates: outcome.candidates,
        })
    }

    /// Scans `image` and returns the report plus a copy of `image` with a red
    /// frame around every match.
    pub fn match_and_mark(&self, image: &RgbaImage) -> MaskMatchResult<(MatchReport, RgbaImage)> {
        let report = self.match_image(image.view())?;
        let _span = trace_span!("render", matches = report.count()).entered();
        let mut marked = image.clone();
        draw_outlines(&mut marked, &report.matches);
        Ok((report, marked))
    }
}

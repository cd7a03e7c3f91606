//! Window scoring kernels.

use crate::candidate::rect::MatchRect;
use crate::image::{ImageView, Pixel};
use crate::mask::MaskPlan;
use crate::util::{MaskMatchError, MaskMatchResult};

/// Scan-wide scoring parameters.
#[derive(Clone, Copy, Debug)]
pub struct ScoreParams {
    /// Exclusive bound on the per-channel difference of two pixels of the same shade.
    pub tolerance: u32,
    /// Background used when the mask has no marker positions.
    pub fallback_background: Option<Pixel>,
}

/// Classification counts for one window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowScore {
    /// Positions classified consistently with the mask.
    pub correct: u64,
    /// Positions in the window.
    pub total: u64,
}

impl WindowScore {
    /// Returns `correct - incorrect`, i.e. `2 * correct - total`.
    pub fn net(&self) -> i64 {
        2 * self.correct as i64 - self.total as i64
    }
}

/// Fails unless `window` has exactly the plan's dimensions.
pub(crate) fn check_window(window: ImageView<'_>, plan: &MaskPlan) -> MaskMatchResult<()> {
    if window.width() != plan.width() || window.height() != plan.height() {
        return Err(MaskMatchError::WindowSizeMismatch {
            width: window.width(),
            height: window.height(),
            mask_width: plan.width(),
            mask_height: plan.height(),
        });
    }
    Ok(())
}

/// Kernel trait for window scoring.
pub trait Kernel {
    /// Scores a window that must have the plan's size.
    ///
    /// Returns `Ok(None)` when the window has no valid estimate and must be rejected.
    fn score_window(
        window: ImageView<'_>,
        plan: &MaskPlan,
        params: &ScoreParams,
    ) -> MaskMatchResult<Option<WindowScore>>;

    /// Scores the window anchored at `(row, col)` of `image`.
    fn score_at(
        image: ImageView<'_>,
        plan: &MaskPlan,
        params: &ScoreParams,
        row: usize,
        col: usize,
    ) -> MaskMatchResult<Option<WindowScore>> {
        let window = image.window(row, col, plan.width(), plan.height())?;
        Self::score_window(window, plan, params)
    }

    /// Returns the accepted windows whose origin lies on `row`, left to right.
    ///
    /// `max_col` is the last valid origin column. Accepted windows that overlap
    /// an earlier accepted window of the same row are still returned; the
    /// registry settles overlaps.
    fn scan_row(
        image: ImageView<'_>,
        plan: &MaskPlan,
        params: &ScoreParams,
        row: usize,
        max_col: usize,
    ) -> MaskMatchResult<Vec<MatchRect>> {
        let threshold = plan.threshold();
        let mut accepted = Vec::new();
        for col in 0..=max_col {
            let score = Self::score_at(image, plan, params, row, col)?;
            if score.is_some_and(|s| threshold.accepts(s.correct)) {
                accepted.push(MatchRect::new(row, col, plan.width(), plan.height()));
            }
        }
        Ok(accepted)
    }
}

pub mod scalar;

#[cfg(feature = "rayon")]
pub mod rayon;

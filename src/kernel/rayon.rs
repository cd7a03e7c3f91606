//! Rayon-parallel window scan (feature-gated).
//!
//! Rows of window origins are scored in parallel. Each row yields its accepted
//! windows left to right, and rows are concatenated top to bottom, so the
//! output is in raster order regardless of scheduling.

use crate::candidate::rect::MatchRect;
use crate::image::ImageView;
use crate::kernel::{Kernel, ScoreParams};
use crate::mask::MaskPlan;
use crate::util::MaskMatchResult;
use rayon::prelude::*;
use std::ops::RangeInclusive;

/// Row-parallel scan over origin rows `rows` x columns `0..=max_col`.
pub fn scan_candidates_par<K: Kernel>(
    image: ImageView<'_>,
    plan: &MaskPlan,
    params: &ScoreParams,
    rows: RangeInclusive<usize>,
    max_col: usize,
) -> MaskMatchResult<Vec<MatchRect>> {
    let per_row: Vec<Vec<MatchRect>> = rows
        .into_par_iter()
        .map(|row| K::scan_row(image, plan, params, row, max_col))
        .collect::<MaskMatchResult<_>>()?;
    Ok(per_row.into_iter().flatten().collect())
}

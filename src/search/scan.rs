//! Exhaustive sliding-window scan with overlap deduplication.

use crate::candidate::rect::MatchRect;
use crate::candidate::registry::MatchRegistry;
use crate::image::ImageView;
#[cfg(feature = "rayon")]
use crate::kernel::rayon::scan_candidates_par;
use crate::kernel::scalar::{mean_color, BackgroundKernel, SubImageKernel};
use crate::kernel::{Kernel, ScoreParams};
use crate::mask::MaskPlan;
use crate::search::{BackgroundFallback, MatchConfig, MatchMode};
use crate::trace::{trace_debug, trace_event, trace_span};
use crate::util::MaskMatchResult;
use std::ops::RangeInclusive;

/// Window rows scored before their candidates are handed to the registry.
const SCAN_BAND_ROWS: usize = 64;

/// Result of one scan before it is wrapped into a report.
pub(crate) struct ScanOutcome {
    pub(crate) matches: Vec<MatchRect>,
    pub(crate) windows_scanned: u64,
    pub(crate) candidates: usize,
}

/// Returns the last valid window origin `(max_row, max_col)`, or `None` when
/// the mask does not fit inside the image.
pub fn origin_range(image: ImageView<'_>, plan: &MaskPlan) -> Option<(usize, usize)> {
    let max_row = image.height().checked_sub(plan.height())?;
    let max_col = image.width().checked_sub(plan.width())?;
    Some((max_row, max_col))
}

/// Builds the scoring parameters shared by every window of a scan.
pub(crate) fn score_params(
    image: ImageView<'_>,
    plan: &MaskPlan,
    cfg: &MatchConfig,
) -> ScoreParams {
    let needs_fallback = cfg.mode == MatchMode::Mask && plan.marker_count() == 0;
    let fallback_background = match cfg.background_fallback {
        BackgroundFallback::ImageMean if needs_fallback => Some(mean_color(image)),
        _ => None,
    };
    if needs_fallback {
        trace_event!(
            "mask_without_markers",
            fallback = fallback_background.is_some()
        );
    }
    ScoreParams {
        tolerance: cfg.tolerance,
        fallback_background,
    }
}

/// Scans every window origin of `image` and returns the deduplicated matches
/// in natural order.
pub(crate) fn scan_image(
    image: ImageView<'_>,
    plan: &MaskPlan,
    cfg: &MatchConfig,
) -> MaskMatchResult<ScanOutcome> {
    let _span = trace_span!(
        "scan",
        width = image.width(),
        height = image.height(),
        mask_width = plan.width(),
        mask_height = plan.height()
    )
    .entered();

    let Some((max_row, max_col)) = origin_range(image, plan) else {
        trace_event!("scan_degenerate", windows = 0usize);
        return Ok(ScanOutcome {
            matches: Vec::new(),
            windows_scanned: 0,
            candidates: 0,
        });
    };

    let params = score_params(image, plan, cfg);
    let registry = MatchRegistry::new();
    let candidates = match cfg.mode {
        MatchMode::Mask => scan_bands::<BackgroundKernel>(
            image, plan, &params, max_row, max_col, cfg.parallel, &registry,
        )?,
        MatchMode::SubImage => scan_bands::<SubImageKernel>(
            image, plan, &params, max_row, max_col, cfg.parallel, &registry,
        )?,
    };

    let windows_scanned = (max_row as u64 + 1) * (max_col as u64 + 1);
    trace_event!(
        "scan_done",
        windows = windows_scanned,
        candidates = candidates,
        matches = registry.len()
    );

    Ok(ScanOutcome {
        matches: registry.into_sorted(),
        windows_scanned,
        candidates,
    })
}

/// Scans the origin rows band by band, registering each band's candidates
/// before the next band is scored. Returns the number of candidates seen.
fn scan_bands<K: Kernel>(
    image: ImageView<'_>,
    plan: &MaskPlan,
    params: &ScoreParams,
    max_row: usize,
    max_col: usize,
    parallel: bool,
    registry: &MatchRegistry,
) -> MaskMatchResult<usize> {
    let mut candidates = 0usize;
    for first in (0..=max_row).step_by(SCAN_BAND_ROWS) {
        let last = (first + SCAN_BAND_ROWS - 1).min(max_row);
        let band = scan_candidates::<K>(image, plan, params, first..=last, max_col, parallel)?;
        candidates += band.len();
        register_candidates(registry, &band);
    }
    Ok(candidates)
}

/// Offers candidates to the registry in the given order.
///
/// Fed in raster order, the first window that reaches an unclaimed region
/// becomes the match for that region.
pub(crate) fn register_candidates(registry: &MatchRegistry, candidates: &[MatchRect]) {
    for rect in candidates {
        if registry.try_accept(*rect) {
            trace_debug!("match_accepted", row = rect.row1, col = rect.col1);
        }
    }
}

/// Sequential scan over origin rows `rows` x columns `0..=max_col`, raster order.
pub fn scan_candidates_seq<K: Kernel>(
    image: ImageView<'_>,
    plan: &MaskPlan,
    params: &ScoreParams,
    rows: RangeInclusive<usize>,
    max_col: usize,
) -> MaskMatchResult<Vec<MatchRect>> {
    let mut out = Vec::new();
    for row in rows {
        out.extend(K::scan_row(image, plan, params, row, max_col)?);
    }
    Ok(out)
}

#[cfg(feature = "rayon")]
fn scan_candidates<K: Kernel>(
    image: ImageView<'_>,
    plan: &MaskPlan,
    params: &ScoreParams,
    rows: RangeInclusive<usize>,
    max_col: usize,
    parallel: bool,
) -> MaskMatchResult<Vec<MatchRect>> {
    if parallel {
        return scan_candidates_par::<K>(image, plan, params, rows, max_col);
    }
    scan_candidates_seq::<K>(image, plan, params, rows, max_col)
}

#[cfg(not(feature = "rayon"))]
fn scan_candidates<K: Kernel>(
    image: ImageView<'_>,
    plan: &MaskPlan,
    params: &ScoreParams,
    rows: RangeInclusive<usize>,
    max_col: usize,
    _parallel: bool,
) -> MaskMatchResult<Vec<MatchRect>> {
    scan_candidates_seq::<K>(image, plan, params, rows, max_col)
}

//! Scalar kernels: background estimation and per-position classification.

use crate::image::{ImageView, Pixel};
use crate::kernel::{check_window, Kernel, ScoreParams, WindowScore};
use crate::mask::MaskPlan;
use crate::util::math::truncated_mean;
use crate::util::MaskMatchResult;

/// Background-subtraction kernel for marker masks.
pub struct BackgroundKernel;

/// Direct per-pixel comparison against a literal sub-image.
pub struct SubImageKernel;

#[derive(Default)]
struct ColorSum {
    red: u64,
    green: u64,
    blue: u64,
    count: u64,
}

impl ColorSum {
    fn add(&mut self, px: Pixel) {
        self.red += u64::from(px.red);
        self.green += u64::from(px.green);
        self.blue += u64::from(px.blue);
        self.count += 1;
    }

    fn mean(&self) -> Option<Pixel> {
        if self.count == 0 {
            return None;
        }
        Some(Pixel::rgb(
            truncated_mean(self.red, self.count),
            truncated_mean(self.green, self.count),
            truncated_mean(self.blue, self.count),
        ))
    }
}

/// Estimates the background color of a window.
///
/// Averages (integer-truncated, per channel) the window pixels under marker
/// positions of the mask. Alpha is fixed to opaque. Returns `Ok(None)` when the
/// mask has no marker position, and an error when `window` is not the mask's size.
pub fn estimate_background(
    window: ImageView<'_>,
    plan: &MaskPlan,
) -> MaskMatchResult<Option<Pixel>> {
    check_window(window, plan)?;
    let marker = plan.marker();
    let width = plan.width();
    let mut sum = ColorSum::default();
    for (ty, row) in window.rows().enumerate() {
        let flags = &marker[ty * width..(ty + 1) * width];
        for (px, &is_marker) in row.iter().zip(flags) {
            if is_marker {
                sum.add(*px);
            }
        }
    }
    Ok(sum.mean())
}

/// Integer-truncated mean color of every pixel in `view`, alpha opaque.
pub fn mean_color(view: ImageView<'_>) -> Pixel {
    let mut sum = ColorSum::default();
    for row in view.rows() {
        for px in row {
            sum.add(*px);
        }
    }
    // Views are never empty.
    sum.mean().unwrap_or(Pixel::MARKER)
}

/// Counts positions that classify consistently with the mask.
///
/// A marker position is correct when the image pixel has the background's
/// shade; a pattern position is correct when it does not. Fails when `window`
/// is not the mask's size.
pub fn classify_against_background(
    window: ImageView<'_>,
    plan: &MaskPlan,
    background: Pixel,
    tolerance: u32,
) -> MaskMatchResult<WindowScore> {
    check_window(window, plan)?;
    let marker = plan.marker();
    let width = plan.width();
    let mut correct = 0u64;
    for (ty, row) in window.rows().enumerate() {
        let flags = &marker[ty * width..(ty + 1) * width];
        for (px, &is_marker) in row.iter().zip(flags) {
            if px.same_shade(&background, tolerance) == is_marker {
                correct += 1;
            }
        }
    }
    Ok(WindowScore {
        correct,
        total: plan.threshold().total(),
    })
}

impl Kernel for BackgroundKernel {
    fn score_window(
        window: ImageView<'_>,
        plan: &MaskPlan,
        params: &ScoreParams,
    ) -> MaskMatchResult<Option<WindowScore>> {
        let Some(background) = estimate_background(window, plan)?.or(params.fallback_background)
        else {
            return Ok(None);
        };
        classify_against_background(window, plan, background, params.tolerance).map(Some)
    }
}

impl Kernel for SubImageKernel {
    fn score_window(
        window: ImageView<'_>,
        plan: &MaskPlan,
        params: &ScoreParams,
    ) -> MaskMatchResult<Option<WindowScore>> {
        check_window(window, plan)?;
        let pattern = plan.pixels();
        let width = plan.width();
        let mut correct = 0u64;
        for (ty, row) in window.rows().enumerate() {
            let expected = &pattern[ty * width..(ty + 1) * width];
            for (px, want) in row.iter().zip(expected) {
                if px.same_shade(want, params.tolerance) {
                    correct += 1;
                }
            }
        }
        Ok(Some(WindowScore {
            correct,
            total: plan.threshold().total(),
        }))
    }
}

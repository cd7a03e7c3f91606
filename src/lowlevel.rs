//! Low-level building blocks for custom scan pipelines.
//!
//! These expose the compiled mask plan, the scoring kernels and the scan
//! helpers behind [`Matcher`](crate::Matcher). Most users should prefer the
//! `Matcher` API.

pub use crate::candidate::rect::MatchRect;
pub use crate::candidate::registry::MatchRegistry;
#[cfg(feature = "rayon")]
pub use crate::kernel::rayon::scan_candidates_par;
pub use crate::kernel::scalar::{
    classify_against_background, estimate_background, mean_color, BackgroundKernel,
    SubImageKernel,
};
pub use crate::kernel::{Kernel, ScoreParams, WindowScore};
pub use crate::mask::{AcceptThreshold, MaskPlan};
pub use crate::search::scan::{origin_range, scan_candidates_seq};

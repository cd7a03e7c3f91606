//! MaskMatch finds every occurrence of a mask pattern in an RGBA image.
//!
//! Each window of the image is scored by background subtraction: the mask's
//! marker pixels estimate the window's background color, and the window is
//! accepted when enough positions agree with the mask's background/pattern
//! partition. Overlapping detections are collapsed by a registry, and the
//! scan runs in parallel with the `rayon` feature.

mod candidate;
pub mod image;
pub mod kernel;
pub mod lowlevel;
pub mod mask;
pub mod render;
pub mod search;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use crate::image::io;
pub use crate::image::{Channel, ImageView, Pixel, RgbaImage};
pub use mask::Mask;
pub use util::{MaskMatchError, MaskMatchResult};

pub use candidate::rect::MatchRect;
pub use candidate::registry::MatchRegistry;
pub use render::{draw_outline, draw_outlines};
pub use search::{BackgroundFallback, MatchConfig, MatchMode, MatchReport, Matcher};

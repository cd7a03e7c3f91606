//! Loading and writing images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::image::{Pixel, RgbaImage};
use crate::mask::Mask;
use crate::search::{MatchConfig, MatchReport, Matcher};
use crate::trace::trace_span;
use crate::util::{MaskMatchError, MaskMatchResult};
use std::path::Path;

/// Converts an `image` RGBA buffer into an owned [`RgbaImage`].
pub fn from_rgba8(img: &image::RgbaImage) -> MaskMatchResult<RgbaImage> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.pixels().map(|px| Pixel::from_bytes(px.0)).collect();
    RgbaImage::new(data, width, height)
}

/// Converts an [`RgbaImage`] into an `image` RGBA buffer.
pub fn to_rgba8(img: &RgbaImage) -> MaskMatchResult<image::RgbaImage> {
    let width = u32::try_from(img.width()).map_err(|_| MaskMatchError::InvalidDimensions {
        width: img.width(),
        height: img.height(),
    })?;
    let height = u32::try_from(img.height()).map_err(|_| MaskMatchError::InvalidDimensions {
        width: img.width(),
        height: img.height(),
    })?;
    let bytes = img.pixels().iter().flat_map(|px| px.to_bytes()).collect();
    image::RgbaImage::from_raw(width, height, bytes).ok_or(MaskMatchError::BufferTooSmall {
        needed: img.buffer_size(),
        got: img.pixels().len(),
    })
}

/// Loads an image from disk and converts it to RGBA.
pub fn load_rgba_image<P: AsRef<Path>>(path: P) -> MaskMatchResult<RgbaImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|err| MaskMatchError::ImageIo {
        reason: format!("{}: {err}", path.display()),
    })?;
    from_rgba8(&img.to_rgba8())
}

/// Writes an image to disk; the format follows the file extension.
pub fn save_rgba_image<P: AsRef<Path>>(img: &RgbaImage, path: P) -> MaskMatchResult<()> {
    let path = path.as_ref();
    to_rgba8(img)?
        .save(path)
        .map_err(|err| MaskMatchError::ImageIo {
            reason: format!("{}: {err}", path.display()),
        })
}

/// Searches `main_path` for the pattern in `mask_path` and writes the marked
/// image to `out_path`.
pub fn image_search<P, Q, R>(
    main_path: P,
    mask_path: Q,
    out_path: R,
    cfg: &MatchConfig,
) -> MaskMatchResult<MatchReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    let _span = trace_span!("image_search").entered();
    let image = load_rgba_image(main_path)?;
    let mask = Mask::from_image(load_rgba_image(mask_path)?);
    let matcher = Matcher::new(mask).with_config(cfg.clone());
    let (report, marked) = matcher.match_and_mark(&image)?;
    save_rgba_image(&marked, out_path)?;
    Ok(report)
}

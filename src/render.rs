//! Outline drawing for accepted matches.

use crate::candidate::rect::MatchRect;
use crate::image::{Channel, RgbaImage};

/// Sets the red channel of every pixel on the one-pixel frame of `rect`.
///
/// The frame covers rows `row1` and `row2 - 1` and columns `col1` and
/// `col2 - 1`. Other channels are left as found; pixels outside the image are
/// skipped. Empty rectangles draw nothing.
pub fn draw_outline(img: &mut RgbaImage, rect: &MatchRect) {
    if rect.width() == 0 || rect.height() == 0 {
        return;
    }
    let bottom = rect.row2 - 1;
    let right = rect.col2 - 1;
    for col in rect.col1..rect.col2 {
        img.set_channel(rect.row1, col, Channel::Red, u8::MAX);
        img.set_channel(bottom, col, Channel::Red, u8::MAX);
    }
    for row in rect.row1..rect.row2 {
        img.set_channel(row, rect.col1, Channel::Red, u8::MAX);
        img.set_channel(row, right, Channel::Red, u8::MAX);
    }
}

/// Draws the outline of each rectangle in turn.
pub fn draw_outlines<'a, I>(img: &mut RgbaImage, rects: I)
where
    I: IntoIterator<Item = &'a MatchRect>,
{
    for rect in rects {
        draw_outline(img, rect);
    }
}

//! RGBA pixel value and channel selector.

use crate::util::math::channel_diff;

/// One of the four 8-bit channels of a [`Pixel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

/// 8-bit RGBA pixel compared by exact channel equality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Pixel {
    /// Opaque black. Mask pixels of exactly this color mark background positions.
    pub const MARKER: Pixel = Pixel::rgb(0, 0, 0);

    /// Creates a pixel from all four channels.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque pixel.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, u8::MAX)
    }

    /// Returns true when this pixel is the mask marker color.
    #[inline]
    pub fn is_marker(&self) -> bool {
        *self == Self::MARKER
    }

    /// Returns true when red, green and blue each differ by strictly less than `tolerance`.
    ///
    /// Alpha does not take part in the comparison.
    #[inline]
    pub fn same_shade(&self, other: &Pixel, tolerance: u32) -> bool {
        channel_diff(self.red, other.red) < tolerance
            && channel_diff(self.green, other.green) < tolerance
            && channel_diff(self.blue, other.blue) < tolerance
    }

    /// Returns the value of one channel.
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
            Channel::Alpha => self.alpha,
        }
    }

    /// Overwrites one channel.
    pub fn set_channel(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
            Channel::Alpha => self.alpha = value,
        }
    }

    /// Returns the channels in RGBA byte order.
    pub fn to_bytes(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Builds a pixel from RGBA bytes.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

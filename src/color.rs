//! Packed colour words
//!
//! The framebuffer stores one `u32` per pixel with three 8-bit channels:
//!
//! | Bits  | Channel | Upper half line | Lower half line |
//! |-------|---------|-----------------|-----------------|
//! | 0-7   | red     | R1              | R2              |
//! | 8-15  | green   | G1              | G2              |
//! | 16-23 | blue    | B1              | B2              |
//! | 24-31 | unused  | -               | -               |
//!
//! Bitplane `n` of a word is bit `n` of each channel.
//!
//! ## Example
//!
//! ```
//! use hub75_bitbang::color::{pack, plane_bits, unpack};
//!
//! let word = pack(0x50, 0x00, 0xFF);
//! assert_eq!(word, 0x00FF_0050);
//! assert_eq!(unpack(word), [0x50, 0x00, 0xFF]);
//!
//! // 0x50 = 0b0101_0000: red is lit in planes 4 and 6 only
//! assert_eq!(plane_bits(word, 4), Some([true, false, true]));
//! assert_eq!(plane_bits(word, 5), Some([false, false, true]));
//! assert_eq!(plane_bits(word, 8), None);
//! ```

use crate::error::BITPLANES;

/// Bit offset of each channel within a packed colour word
pub const CHANNEL_OFFSETS: [u32; 3] = [0, 8, 16];

/// Pack three channel values into a colour word
pub const fn pack(red: u8, green: u8, blue: u8) -> u32 {
    (red as u32) | ((green as u32) << 8) | ((blue as u32) << 16)
}

/// Split a colour word into its three channel values, ignoring bits 24-31
pub const fn unpack(word: u32) -> [u8; 3] {
    [
        (word & 0xFF) as u8,
        ((word >> 8) & 0xFF) as u8,
        ((word >> 16) & 0xFF) as u8,
    ]
}

/// Channel bits of `word` for one bitplane, in red/green/blue order
///
/// Returns `None` when `plane >= 8`, since such a bit would read into the
/// neighbouring channel.
pub const fn plane_bits(word: u32, plane: u8) -> Option<[bool; 3]> {
    if plane >= BITPLANES {
        return None;
    }
    let plane = plane as u32;
    Some([
        word & (1 << (CHANNEL_OFFSETS[0] + plane)) != 0,
        word & (1 << (CHANNEL_OFFSETS[1] + plane)) != 0,
        word & (1 << (CHANNEL_OFFSETS[2] + plane)) != 0,
    ])
}

/// Convert an embedded-graphics colour into a packed word
#[cfg(feature = "graphics")]
pub fn from_rgb888(color: embedded_graphics_core::pixelcolor::Rgb888) -> u32 {
    use embedded_graphics_core::pixelcolor::RgbColor;
    pack(color.r(), color.g(), color.b())
}

/// Convert a packed word into an embedded-graphics colour
#[cfg(feature = "graphics")]
pub fn to_rgb888(word: u32) -> embedded_graphics_core::pixelcolor::Rgb888 {
    let [r, g, b] = unpack(word);
    embedded_graphics_core::pixelcolor::Rgb888::new(r, g, b)
}

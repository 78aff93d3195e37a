//! Perceptual brightness correction
//!
//! LED output is linear in on-time, but perceived brightness is not. Content
//! producers run 8-bit channel values through a [`GammaTable`] before writing
//! them into the framebuffer. The refresh engine itself never consults it.
//!
//! ```
//! use hub75_bitbang::gamma::{GammaTable, DEFAULT_GAMMA};
//!
//! assert_eq!(DEFAULT_GAMMA.apply(0), 0);
//! assert_eq!(DEFAULT_GAMMA.apply(128), 84);
//! assert_eq!(DEFAULT_GAMMA.apply(255), 253);
//!
//! let linear = GammaTable::new(1.0);
//! assert_eq!(linear.apply(128), 127);
//! ```

use crate::color::{pack, unpack};

/// Exponent used by [`DEFAULT_GAMMA`]
pub const DEFAULT_EXPONENT: f64 = 1.6;

/// 256-entry brightness lookup table
///
/// Entry `i` is `trunc(255 * (i / 256) ^ exponent)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GammaTable([u8; 256]);

/// Precomputed table for [`DEFAULT_EXPONENT`]
#[rustfmt::skip]
pub const DEFAULT_GAMMA: GammaTable = GammaTable([
      0,   0,   0,   0,   0,   0,   0,   0,   0,   1,   1,   1,   1,   2,   2,   2,
      3,   3,   3,   3,   4,   4,   5,   5,   5,   6,   6,   6,   7,   7,   8,   8,
      9,   9,  10,  10,  11,  11,  12,  12,  13,  13,  14,  14,  15,  15,  16,  16,
     17,  18,  18,  19,  19,  20,  21,  21,  22,  23,  23,  24,  25,  25,  26,  27,
     27,  28,  29,  29,  30,  31,  32,  32,  33,  34,  35,  35,  36,  37,  38,  38,
     39,  40,  41,  42,  42,  43,  44,  45,  46,  47,  47,  48,  49,  50,  51,  52,
     53,  53,  54,  55,  56,  57,  58,  59,  60,  61,  62,  63,  64,  65,  66,  66,
     67,  68,  69,  70,  71,  72,  73,  74,  75,  76,  77,  78,  79,  80,  82,  83,
     84,  85,  86,  87,  88,  89,  90,  91,  92,  93,  94,  95,  97,  98,  99, 100,
    101, 102, 103, 104, 106, 107, 108, 109, 110, 111, 113, 114, 115, 116, 117, 119,
    120, 121, 122, 123, 125, 126, 127, 128, 129, 131, 132, 133, 134, 136, 137, 138,
    140, 141, 142, 143, 145, 146, 147, 149, 150, 151, 152, 154, 155, 156, 158, 159,
    160, 162, 163, 164, 166, 167, 169, 170, 171, 173, 174, 175, 177, 178, 180, 181,
    182, 184, 185, 187, 188, 190, 191, 192, 194, 195, 197, 198, 200, 201, 203, 204,
    205, 207, 208, 210, 211, 213, 214, 216, 217, 219, 220, 222, 223, 225, 226, 228,
    229, 231, 233, 234, 236, 237, 239, 240, 242, 243, 245, 247, 248, 250, 251, 253,
]);

impl GammaTable {
    /// Compute a table for an arbitrary exponent
    ///
    /// Entries are clamped into `0..=255`; a NaN result maps to 0.
    pub fn new(exponent: f64) -> Self {
        let mut table = [0u8; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            let value = 255.0 * libm::pow(i as f64 / 256.0, exponent);
            *entry = if value.is_nan() || value <= 0.0 {
                0
            } else if value >= 255.0 {
                255
            } else {
                value as u8
            };
        }
        Self(table)
    }

    /// Corrected intensity for a raw channel value
    pub fn apply(&self, value: u8) -> u8 {
        self.0[value as usize]
    }

    /// Correct all three channels of a packed colour word
    ///
    /// Bits 24-31 are dropped.
    pub fn correct(&self, word: u32) -> u32 {
        let [c0, c1, c2] = unpack(word);
        pack(self.apply(c0), self.apply(c1), self.apply(c2))
    }

    /// The raw lookup table
    pub fn as_array(&self) -> &[u8; 256] {
        &self.0
    }
}

impl Default for GammaTable {
    fn default() -> Self {
        DEFAULT_GAMMA
    }
}

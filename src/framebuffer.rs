//! Packed-colour framebuffer
//!
//! [`Display::render_frame`](crate::display::Display::render_frame) takes a
//! plain `&[u32]`, so any storage works. [`FrameBuffer`] wraps such storage
//! with panel-aware pixel access; the caller decides whether it lives in a
//! `static`, on the stack or (with the `alloc` feature) on the heap.
//!
//! ## Example
//!
//! ```
//! use hub75_bitbang::{Dimensions, FrameBuffer, DEFAULT_GAMMA};
//! use hub75_bitbang::color::pack;
//!
//! let mut storage = [0u32; 32 * 16];
//! let mut fb = match FrameBuffer::try_new(Dimensions::PANEL_32X16, &mut storage[..]) {
//!     Ok(fb) => fb,
//!     Err(_) => return,
//! };
//! fb.set_pixel(3, 2, pack(255, 0, 0));
//! fb.set_pixel_gamma(4, 2, pack(128, 128, 128), &DEFAULT_GAMMA);
//! assert_eq!(fb.pixel(3, 2), Some(0x0000_00FF));
//! assert_eq!(fb.pixel(40, 2), None);
//! ```

use crate::config::Dimensions;
use crate::error::BuilderError;
use crate::gamma::GammaTable;

/// Row-major framebuffer of packed colour words
///
/// ## Type Parameters
///
/// * `B` - Storage implementing `AsRef<[u32]>` and `AsMut<[u32]>`, at least
///   `dimensions.buffer_len()` words long
#[derive(Debug)]
pub struct FrameBuffer<B> {
    dimensions: Dimensions,
    buffer: B,
}

impl<B> FrameBuffer<B>
where
    B: AsRef<[u32]> + AsMut<[u32]>,
{
    /// Wrap `buffer` as the framebuffer of a panel of `dimensions`
    ///
    /// # Panics
    ///
    /// Panics if the buffer is shorter than `dimensions.buffer_len()`.
    /// Use [`try_new`](Self::try_new) for the fallible version.
    pub fn new(dimensions: Dimensions, buffer: B) -> Self {
        let required = dimensions.buffer_len();
        assert!(
            buffer.as_ref().len() >= required,
            "framebuffer too small: required {} words, got {}",
            required,
            buffer.as_ref().len()
        );
        Self { dimensions, buffer }
    }

    /// Wrap `buffer`, returning an error if it is too short
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::BufferTooSmall` if the buffer holds fewer than
    /// `dimensions.buffer_len()` words.
    pub fn try_new(dimensions: Dimensions, buffer: B) -> Result<Self, BuilderError> {
        let required = dimensions.buffer_len();
        let provided = buffer.as_ref().len();
        if provided < required {
            return Err(BuilderError::BufferTooSmall { required, provided });
        }
        Ok(Self { dimensions, buffer })
    }

    /// Panel dimensions this framebuffer was created for
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Set pixel `(x, y)` to a packed colour word
    ///
    /// Pixels outside the panel are ignored.
    pub fn set_pixel(&mut self, x: u16, y: u16, word: u32) {
        let Some(index) = self.dimensions.index(x, y) else {
            return;
        };
        if let Some(slot) = self.buffer.as_mut().get_mut(index) {
            *slot = word;
        }
    }

    /// Set pixel `(x, y)` after passing each channel through `gamma`
    pub fn set_pixel_gamma(&mut self, x: u16, y: u16, word: u32, gamma: &GammaTable) {
        self.set_pixel(x, y, gamma.correct(word));
    }

    /// Packed colour of pixel `(x, y)`, or `None` outside the panel
    pub fn pixel(&self, x: u16, y: u16) -> Option<u32> {
        let index = self.dimensions.index(x, y)?;
        self.buffer.as_ref().get(index).copied()
    }

    /// Fill every pixel with `word`
    pub fn fill(&mut self, word: u32) {
        self.as_words_mut().fill(word);
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.fill(0);
    }

    /// The panel's words, ready for `render_frame`
    pub fn as_words(&self) -> &[u32] {
        let words = self.buffer.as_ref();
        let len = self.dimensions.buffer_len().min(words.len());
        &words[..len]
    }

    /// The panel's words, mutably
    pub fn as_words_mut(&mut self) -> &mut [u32] {
        let words = self.buffer.as_mut();
        let len = self.dimensions.buffer_len().min(words.len());
        &mut words[..len]
    }

    /// Give the storage back
    pub fn release(self) -> B {
        self.buffer
    }
}

#[cfg(feature = "alloc")]
impl FrameBuffer<alloc::vec::Vec<u32>> {
    /// Allocate a dark framebuffer on the heap
    pub fn new_boxed(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            buffer: alloc::vec![0; dimensions.buffer_len()],
        }
    }
}

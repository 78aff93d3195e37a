//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and refresh operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors while refreshing the panel
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level signal line errors
//!
//! ## Example
//!
//! ```
//! use hub75_bitbang::{Builder, BuilderError, Dimensions, DwellTable};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Odd row count cannot be split into two halves
//! assert!(Dimensions::new(31, 32).is_err());
//!
//! // Dwell times must grow with bit significance
//! assert!(DwellTable::new([10, 20, 40, 40, 160, 320, 640, 1280]).is_err());
//! ```

use crate::interface::PanelInterface;

/// Maximum number of scan lines addressable by the four row-address lines (A-D)
pub const MAX_SCAN_LINES: u16 = 16;

/// Maximum panel height in pixel rows
///
/// Every scan line drives two rows, one in each half of the panel.
pub const MAX_ROWS: u16 = MAX_SCAN_LINES * 2;

/// Number of bitplanes rendered per scan line (8 bits per colour channel)
pub const BITPLANES: u8 = 8;

/// Errors that can occur while refreshing the panel
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: PanelInterface> {
    /// Interface error (GPIO line or out-of-range address)
    ///
    /// Wraps the underlying error from the [`PanelInterface`] implementation.
    Interface(I::Error),
    /// Framebuffer is too small for the panel
    ///
    /// The provided framebuffer must hold at least `dimensions.buffer_len()` words.
    BufferTooSmall {
        /// Required framebuffer length in words
        required: usize,
        /// Provided framebuffer length in words
        provided: usize,
    },
}

impl<I: PanelInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Framebuffer too small: required {required} words, provided {provided}"
                )
            }
        }
    }
}

impl<I: PanelInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Number of rows (height) requested
        rows: u16,
        /// Number of columns (width) requested
        cols: u16,
    },
    /// Invalid dwell table entry
    ///
    /// Every entry must be non-zero and strictly greater than the previous one.
    InvalidDwellTable {
        /// First bitplane whose entry breaks the rule
        plane: u8,
    },
    /// Framebuffer storage is shorter than the panel
    ///
    /// See [`FrameBuffer::try_new()`](crate::framebuffer::FrameBuffer::try_new).
    BufferTooSmall {
        /// Required length in words
        required: usize,
        /// Provided length in words
        provided: usize,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { rows, cols } => write!(
                f,
                "Invalid dimensions {rows}x{cols} (rows must be even and at most {MAX_ROWS}, cols must be non-zero)"
            ),
            Self::InvalidDwellTable { plane } => write!(
                f,
                "Invalid dwell table at plane {plane} (entries must be non-zero and strictly increasing)"
            ),
            Self::BufferTooSmall { required, provided } => write!(
                f,
                "Framebuffer too small: required {required} words, provided {provided}"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_max_rows_is_twice_scan_lines() {
        assert_eq!(MAX_ROWS, 32);
        assert_eq!(MAX_SCAN_LINES, 16);
    }

    #[test]
    fn test_builder_error_messages() {
        assert_eq!(
            BuilderError::MissingDimensions.to_string(),
            "Dimensions must be specified"
        );
        assert!(
            BuilderError::InvalidDimensions { rows: 31, cols: 32 }
                .to_string()
                .starts_with("Invalid dimensions 31x32")
        );
        assert!(
            BuilderError::InvalidDwellTable { plane: 3 }
                .to_string()
                .contains("plane 3")
        );
        assert_eq!(
            BuilderError::BufferTooSmall {
                required: 1024,
                provided: 512
            }
            .to_string(),
            "Framebuffer too small: required 1024 words, provided 512"
        );
    }
}

//! HUB75 LED Matrix Bit-Bang Driver
//!
//! A refresh engine for HUB75 RGB LED panels without an onboard controller,
//! driven entirely by toggling GPIO lines. Brightness comes from binary code
//! modulation: each of the eight bitplanes of every scan line is lit for a
//! time proportional to its bit weight.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Panels up to 32 rows (1/16 scan), any width
//! - Configurable dwell table, tick length, OE and clock polarity
//! - Gamma correction tables
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use hub75_bitbang::{
//!     Builder, ColorPins, Dimensions, Display, FrameBuffer, Interface, LineStrobe, PixelDriver,
//!     RowSelector,
//! };
//!
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! let rows = RowSelector::new(MockPin, MockPin, MockPin, MockPin);
//! let colors = ColorPins {
//!     r1: MockPin, g1: MockPin, b1: MockPin,
//!     r2: MockPin, g2: MockPin, b2: MockPin,
//! };
//! let interface = Interface::new(
//!     rows,
//!     PixelDriver::new(colors, MockPin),
//!     LineStrobe::new(MockPin, MockPin),
//! );
//! let config = match Builder::new().dimensions(Dimensions::PANEL_32X32).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let mut fb = FrameBuffer::new(Dimensions::PANEL_32X32, [0u32; 32 * 32]);
//! fb.set_pixel(0, 0, 0x00_00_FF);
//!
//! let _ = display.init();
//! loop {
//!     if display.render_frame(fb.as_words(), &mut delay).is_err() {
//!         break;
//!     }
//! }
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Packed colour word helpers
pub mod color;
/// Panel configuration types and builder
pub mod config;
/// Core refresh operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Packed-colour framebuffer
pub mod framebuffer;
/// Perceptual brightness correction
pub mod gamma;
/// Hardware interface abstraction
pub mod interface;
/// Bitplane pixel output
pub mod pixel;
/// Row-address selection
pub mod row;
/// Latch and output-enable timing
pub mod strobe;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

#[cfg(test)]
mod mock;

pub use config::{BITPLANES, Builder, Config, Dimensions, DwellTable, MAX_ROWS, MAX_SCAN_LINES};
pub use display::Display;
pub use error::{BuilderError, Error};
pub use framebuffer::FrameBuffer;
pub use gamma::{DEFAULT_GAMMA, GammaTable};
pub use interface::InterfaceError;
pub use interface::{
    ClockPolarity, ColorPins, DEFAULT_TICK_NS, Interface, LineStrobe, PanelInterface, PixelDriver,
    RowSelector,
};

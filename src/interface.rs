//! Hardware interface abstraction
//!
//! This module provides the [`PanelInterface`] trait and the [`Interface`] struct
//! that drives a HUB75 panel by toggling GPIO lines directly.
//!
//! ## Hardware Requirements
//!
//! A HUB75 panel without an onboard controller needs 13 outputs:
//! - **A B C D**: row-address select, owned by [`RowSelector`]
//! - **R1 G1 B1 / R2 G2 B2**: colour data for the upper and lower half, plus
//!   **CLK**, the shift clock, owned by [`PixelDriver`]
//! - **LAT/STB**: latch, and **OE**: output enable (active low), owned by [`LineStrobe`]
//!
//! Every line belongs to exactly one of the three components, so no two parts of
//! the driver ever write the same pin.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use hub75_bitbang::{ColorPins, Interface, LineStrobe, PanelInterface, PixelDriver, RowSelector};
//! # use core::convert::Infallible;
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
//! let pixels = PixelDriver::new(colors, MockPin);
//! let strobe = LineStrobe::new(MockPin, MockPin);
//! let mut interface = Interface::new(rows, pixels, strobe);
//!
//! // Address row pair 3, shift one column of bitplane 0, show it for 10 ticks
//! let _ = interface.select_row(3);
//! let _ = interface.drive_column(0x0000_00FF, 0x0000_0000, 0);
//! let _ = interface.clock_pixel();
//! let _ = interface.show_line(10, &mut delay);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

pub use crate::pixel::{ClockPolarity, ColorPins, PixelDriver};
pub use crate::row::RowSelector;
pub use crate::strobe::{DEFAULT_TICK_NS, LineStrobe};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the signal-level operations of a HUB75 panel
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) refresh engine to work
/// with any implementation, and lets tests substitute a recording fake.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., writing a whole GPIO port at once), implement this
/// trait on your own type.
pub trait PanelInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Drive the row-address lines to select scan line `row`
    ///
    /// Must only be called while output is disabled, otherwise the previous
    /// row's data ghosts onto the new one.
    ///
    /// # Errors
    ///
    /// Returns an error if `row` does not fit the address lines or a line fails.
    fn select_row(&mut self, row: u8) -> InterfaceResult<(), Self::Error>;

    /// Put one column's colour bits for `plane` on the six data lines
    ///
    /// # Arguments
    ///
    /// * `upper` - Packed colour of the pixel in the upper half
    /// * `lower` - Packed colour of the pixel in the lower half
    /// * `plane` - Bitplane, 0 (least significant) to 7
    ///
    /// # Errors
    ///
    /// Returns an error if `plane` is out of range or a line fails.
    fn drive_column(&mut self, upper: u32, lower: u32, plane: u8)
    -> InterfaceResult<(), Self::Error>;

    /// Pulse the shift clock once, moving the data lines into the column register
    ///
    /// # Errors
    ///
    /// Returns an error if the clock line fails.
    fn clock_pixel(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Latch the shifted row and light it for `dwell_ticks`
    ///
    /// The implementation must:
    /// 1. Pulse the latch
    /// 2. Enable output
    /// 3. Block for `dwell_ticks` ticks
    /// 4. Disable output
    ///
    /// # Errors
    ///
    /// Returns an error if the latch or output-enable line fails.
    fn show_line<D: DelayNs>(
        &mut self,
        dwell_ticks: u32,
        delay: &mut D,
    ) -> InterfaceResult<(), Self::Error>;

    /// Disable output and park the clock and latch at their idle levels
    ///
    /// # Errors
    ///
    /// Returns an error if a line fails.
    fn blank(&mut self) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over the GPIO error type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterfaceError<PinErr> {
    /// GPIO pin error
    Pin(PinErr),
    /// Row address does not fit the four address lines
    RowOutOfRange {
        /// Requested row
        row: u8,
    },
    /// Bitplane index is 8 or more
    PlaneOutOfRange {
        /// Requested plane
        plane: u8,
    },
}

impl<PinErr: Debug> core::fmt::Display for InterfaceError<PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
            Self::RowOutOfRange { row } => write!(f, "Row {row} out of range (max 15)"),
            Self::PlaneOutOfRange { plane } => write!(f, "Plane {plane} out of range (max 7)"),
        }
    }
}

impl<PinErr: Debug> core::error::Error for InterfaceError<PinErr> {}

/// Drive `pin` to `high`, tagging failures as [`InterfaceError::Pin`]
pub(crate) fn set_level<P: OutputPin>(
    pin: &mut P,
    high: bool,
) -> InterfaceResult<(), InterfaceError<P::Error>> {
    pin.set_state(PinState::from(high))
        .map_err(InterfaceError::Pin)
}

/// GPIO implementation of [`PanelInterface`]
///
/// Composes the three line-owning components.
///
/// ## Type Parameters
///
/// * `ADDR` - Row-address pins implementing [`OutputPin`]
/// * `RGB` - Colour data pins implementing [`OutputPin`]
/// * `CLK` - Shift clock pin implementing [`OutputPin`]
/// * `LAT` - Latch pin implementing [`OutputPin`]
/// * `OE` - Output-enable pin implementing [`OutputPin`]
#[derive(Debug)]
pub struct Interface<ADDR, RGB, CLK, LAT, OE> {
    /// Row-address lines A-D
    rows: RowSelector<ADDR>,
    /// Colour lines and shift clock
    pixels: PixelDriver<RGB, CLK>,
    /// Latch and output enable
    strobe: LineStrobe<LAT, OE>,
}

impl<ADDR, RGB, CLK, LAT, OE> Interface<ADDR, RGB, CLK, LAT, OE>
where
    ADDR: OutputPin,
    RGB: OutputPin,
    CLK: OutputPin,
    LAT: OutputPin,
    OE: OutputPin,
{
    /// Create a new Interface from its three components
    pub fn new(
        rows: RowSelector<ADDR>,
        pixels: PixelDriver<RGB, CLK>,
        strobe: LineStrobe<LAT, OE>,
    ) -> Self {
        Self {
            rows,
            pixels,
            strobe,
        }
    }

    /// Set the length of one dwell tick in nanoseconds
    ///
    /// Default is [`DEFAULT_TICK_NS`].
    pub fn set_tick_ns(&mut self, tick_ns: u32) -> &mut Self {
        self.strobe.set_tick_ns(tick_ns);
        self
    }

    /// Get the length of one dwell tick in nanoseconds
    pub fn tick_ns(&self) -> u32 {
        self.strobe.tick_ns()
    }

    /// Set output-enable polarity
    ///
    /// Default is active-low. Set to false for panels that light on a high level.
    pub fn set_oe_active_low(&mut self, active_low: bool) -> &mut Self {
        self.strobe.set_oe_active_low(active_low);
        self
    }

    /// Set the shift clock edge the panel samples on
    pub fn set_clock_polarity(&mut self, polarity: ClockPolarity) -> &mut Self {
        self.pixels.set_polarity(polarity);
        self
    }

    /// Give the three components (and their pins) back
    pub fn release(self) -> (RowSelector<ADDR>, PixelDriver<RGB, CLK>, LineStrobe<LAT, OE>) {
        (self.rows, self.pixels, self.strobe)
    }
}

impl<ADDR, RGB, CLK, LAT, OE, PinErr> PanelInterface for Interface<ADDR, RGB, CLK, LAT, OE>
where
    ADDR: OutputPin<Error = PinErr>,
    RGB: OutputPin<Error = PinErr>,
    CLK: OutputPin<Error = PinErr>,
    LAT: OutputPin<Error = PinErr>,
    OE: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<PinErr>;

    fn select_row(&mut self, row: u8) -> InterfaceResult<(), Self::Error> {
        self.rows.select_row(row)
    }

    fn drive_column(
        &mut self,
        upper: u32,
        lower: u32,
        plane: u8,
    ) -> InterfaceResult<(), Self::Error> {
        self.pixels.drive_column(upper, lower, plane)
    }

    fn clock_pixel(&mut self) -> InterfaceResult<(), Self::Error> {
        self.pixels.clock_pixel()
    }

    fn show_line<D: DelayNs>(
        &mut self,
        dwell_ticks: u32,
        delay: &mut D,
    ) -> InterfaceResult<(), Self::Error> {
        self.strobe.show_line(dwell_ticks, delay)
    }

    fn blank(&mut self) -> InterfaceResult<(), Self::Error> {
        self.strobe.blank()?;
        self.pixels.park_clock()
    }
}

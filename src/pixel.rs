//! Bitplane pixel output
//!
//! One call to [`PixelDriver::drive_column`] puts a single bitplane of two
//! pixels (one per panel half) on the six colour lines; [`PixelDriver::clock_pixel`]
//! then shifts them into the panel. The first column clocked in ends up at the
//! far end of the chain.

use embedded_hal::digital::OutputPin;

use crate::color::plane_bits;
use crate::interface::{InterfaceError, set_level};

/// The six colour data pins
///
/// `r1`/`g1`/`b1` feed the upper half of the panel, `r2`/`g2`/`b2` the lower half.
#[allow(missing_docs)]
#[derive(Debug)]
pub struct ColorPins<P> {
    pub r1: P,
    pub g1: P,
    pub b1: P,
    pub r2: P,
    pub g2: P,
    pub b2: P,
}

/// Shift clock edge on which the panel samples the data lines
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockPolarity {
    /// Clock idles low and data is sampled on the rising edge
    #[default]
    RisingEdge,
    /// Clock idles high and data is sampled on the falling edge
    FallingEdge,
}

impl ClockPolarity {
    /// Level of the clock line between pulses
    pub fn idle_high(self) -> bool {
        matches!(self, Self::FallingEdge)
    }
}

/// Owner of the colour data lines and the shift clock
#[derive(Debug)]
pub struct PixelDriver<P, CLK> {
    color: ColorPins<P>,
    clk: CLK,
    polarity: ClockPolarity,
}

impl<P, CLK> PixelDriver<P, CLK> {
    /// Create a pixel driver; the clock samples on rising edges by default
    pub fn new(color: ColorPins<P>, clk: CLK) -> Self {
        Self {
            color,
            clk,
            polarity: ClockPolarity::default(),
        }
    }

    /// Set the shift clock edge the panel samples on
    pub fn set_polarity(&mut self, polarity: ClockPolarity) -> &mut Self {
        self.polarity = polarity;
        self
    }

    /// Current shift clock polarity
    pub fn polarity(&self) -> ClockPolarity {
        self.polarity
    }

    /// Give the colour pins and clock pin back
    pub fn release(self) -> (ColorPins<P>, CLK) {
        (self.color, self.clk)
    }
}

impl<P, CLK, PinErr> PixelDriver<P, CLK>
where
    P: OutputPin<Error = PinErr>,
    CLK: OutputPin<Error = PinErr>,
{
    /// Drive the colour lines with bit `plane` of each channel of both pixels
    ///
    /// Lines are written R1, G1, B1, R2, G2, B2.
    ///
    /// # Errors
    ///
    /// Returns `InterfaceError::PlaneOutOfRange` for planes above 7 (no line
    /// is touched), or `InterfaceError::Pin` if a line fails.
    pub fn drive_column(
        &mut self,
        upper: u32,
        lower: u32,
        plane: u8,
    ) -> Result<(), InterfaceError<PinErr>> {
        let (Some([r1, g1, b1]), Some([r2, g2, b2])) =
            (plane_bits(upper, plane), plane_bits(lower, plane))
        else {
            return Err(InterfaceError::PlaneOutOfRange { plane });
        };
        set_level(&mut self.color.r1, r1)?;
        set_level(&mut self.color.g1, g1)?;
        set_level(&mut self.color.b1, b1)?;
        set_level(&mut self.color.r2, r2)?;
        set_level(&mut self.color.g2, g2)?;
        set_level(&mut self.color.b2, b2)?;
        Ok(())
    }

    /// Issue one full clock pulse, returning the line to its idle level
    pub fn clock_pixel(&mut self) -> Result<(), InterfaceError<PinErr>> {
        let idle = self.polarity.idle_high();
        set_level(&mut self.clk, !idle)?;
        set_level(&mut self.clk, idle)
    }

    /// Drive the clock line to its idle level
    pub fn park_clock(&mut self) -> Result<(), InterfaceError<PinErr>> {
        set_level(&mut self.clk, self.polarity.idle_high())
    }
}

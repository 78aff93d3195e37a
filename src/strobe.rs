//! Latch and output-enable timing
//!
//! [`LineStrobe::show_line`] is where binary code modulation happens: each
//! latched bitplane is lit for a time proportional to its bit weight, so the
//! sum of the lit times of a channel's set bits is its perceived brightness.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::interface::{InterfaceError, set_level};

/// Default length of one dwell tick in nanoseconds
pub const DEFAULT_TICK_NS: u32 = 100;

/// Owner of the latch (LAT/STB) and output-enable (OE) lines
#[derive(Debug)]
pub struct LineStrobe<LAT, OE> {
    lat: LAT,
    oe: OE,
    /// Nanoseconds per dwell tick
    tick_ns: u32,
    /// Output-enable polarity (true = lit while the line is low)
    oe_active_low: bool,
}

impl<LAT, OE> LineStrobe<LAT, OE> {
    /// Create a line strobe with an active-low OE and [`DEFAULT_TICK_NS`] ticks
    pub fn new(lat: LAT, oe: OE) -> Self {
        Self {
            lat,
            oe,
            tick_ns: DEFAULT_TICK_NS,
            oe_active_low: true,
        }
    }

    /// Set the length of one dwell tick in nanoseconds
    pub fn set_tick_ns(&mut self, tick_ns: u32) -> &mut Self {
        self.tick_ns = tick_ns;
        self
    }

    /// Get the length of one dwell tick in nanoseconds
    pub fn tick_ns(&self) -> u32 {
        self.tick_ns
    }

    /// Set output-enable polarity
    pub fn set_oe_active_low(&mut self, active_low: bool) -> &mut Self {
        self.oe_active_low = active_low;
        self
    }

    /// Get output-enable polarity (true = active low)
    pub fn oe_active_low(&self) -> bool {
        self.oe_active_low
    }

    /// Give the latch and output-enable pins back
    pub fn release(self) -> (LAT, OE) {
        (self.lat, self.oe)
    }
}

impl<LAT, OE, PinErr> LineStrobe<LAT, OE>
where
    LAT: OutputPin<Error = PinErr>,
    OE: OutputPin<Error = PinErr>,
{
    /// Latch the shifted row, light it for `dwell_ticks`, then blank it
    ///
    /// The wait is a blocking `delay_ns` of `dwell_ticks * tick_ns`
    /// (saturating). Nothing else may run on the signal lines meanwhile.
    pub fn show_line<D: DelayNs>(
        &mut self,
        dwell_ticks: u32,
        delay: &mut D,
    ) -> Result<(), InterfaceError<PinErr>> {
        set_level(&mut self.lat, true)?;
        set_level(&mut self.lat, false)?;
        self.set_output(true)?;
        delay.delay_ns(dwell_ticks.saturating_mul(self.tick_ns));
        self.set_output(false)
    }

    /// Disable output and return the latch to low
    pub fn blank(&mut self) -> Result<(), InterfaceError<PinErr>> {
        self.set_output(false)?;
        set_level(&mut self.lat, false)
    }

    fn set_output(&mut self, enabled: bool) -> Result<(), InterfaceError<PinErr>> {
        set_level(&mut self.oe, enabled != self.oe_active_low)
    }
}

//! Row-address selection
//!
//! The four address lines carry the scan line index in binary: bit 0 on A,
//! bit 1 on B, bit 2 on C, bit 3 on D. All four lines are written on every
//! call, so the line levels depend only on the requested row.

use embedded_hal::digital::OutputPin;

use crate::error::MAX_SCAN_LINES;
use crate::interface::{InterfaceError, set_level};

/// Owner of the A, B, C and D address lines
#[derive(Debug)]
pub struct RowSelector<P> {
    a: P,
    b: P,
    c: P,
    d: P,
}

impl<P: OutputPin> RowSelector<P> {
    /// Create a row selector from the four address pins
    pub fn new(a: P, b: P, c: P, d: P) -> Self {
        Self { a, b, c, d }
    }

    /// Drive the address lines for `row`
    ///
    /// # Errors
    ///
    /// Returns `InterfaceError::RowOutOfRange` for rows above 15 (no line is
    /// touched), or `InterfaceError::Pin` if a line fails.
    pub fn select_row(&mut self, row: u8) -> Result<(), InterfaceError<P::Error>> {
        if u16::from(row) >= MAX_SCAN_LINES {
            return Err(InterfaceError::RowOutOfRange { row });
        }
        set_level(&mut self.a, row & 0b0001 != 0)?;
        set_level(&mut self.b, row & 0b0010 != 0)?;
        set_level(&mut self.c, row & 0b0100 != 0)?;
        set_level(&mut self.d, row & 0b1000 != 0)?;
        Ok(())
    }

    /// Give the address pins back, in A, B, C, D order
    pub fn release(self) -> (P, P, P, P) {
        (self.a, self.b, self.c, self.d)
    }
}

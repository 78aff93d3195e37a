//! Recording fakes shared by the unit tests
//!
//! [`RecordingPin`] and [`RecordingDelay`] append every level change and delay
//! to a shared [`Trace`]; [`PanelModel`] replays such a trace the way a HUB75
//! panel would see it. [`MockInterface`] records calls one level up, at the
//! [`PanelInterface`] seam.

use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use crate::interface::{Interface, PanelInterface};
use crate::pixel::{ColorPins, PixelDriver};
use crate::row::RowSelector;
use crate::strobe::LineStrobe;

/// Physical panel signal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    A,
    B,
    C,
    D,
    R1,
    G1,
    B1,
    R2,
    G2,
    B2,
    Clk,
    Lat,
    Oe,
}

/// One observable hardware action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Set(Line, bool),
    Delay(u32),
}

pub type Trace = Rc<RefCell<Vec<Event>>>;

pub fn new_trace() -> Trace {
    Rc::new(RefCell::new(Vec::new()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

impl embedded_hal::digital::Error for MockError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

/// Output pin that logs every write
#[derive(Debug)]
pub struct RecordingPin {
    line: Line,
    trace: Trace,
    fail: bool,
}

impl RecordingPin {
    pub fn new(line: Line, trace: &Trace) -> Self {
        Self {
            line,
            trace: Rc::clone(trace),
            fail: false,
        }
    }

    /// A pin whose every write fails without being logged
    pub fn failing(line: Line, trace: &Trace) -> Self {
        Self {
            fail: true,
            ..Self::new(line, trace)
        }
    }

    fn record(&mut self, high: bool) -> Result<(), MockError> {
        if self.fail {
            return Err(MockError);
        }
        self.trace.borrow_mut().push(Event::Set(self.line, high));
        Ok(())
    }
}

impl ErrorType for RecordingPin {
    type Error = MockError;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.record(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.record(true)
    }
}

/// Delay that logs the requested duration instead of waiting
pub struct RecordingDelay {
    trace: Trace,
}

impl RecordingDelay {
    pub fn new(trace: &Trace) -> Self {
        Self {
            trace: Rc::clone(trace),
        }
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.trace.borrow_mut().push(Event::Delay(ns));
    }
}

pub struct MockDelay;

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

pub type RecordingInterface =
    Interface<RecordingPin, RecordingPin, RecordingPin, RecordingPin, RecordingPin>;

pub fn row_selector(trace: &Trace) -> RowSelector<RecordingPin> {
    RowSelector::new(
        RecordingPin::new(Line::A, trace),
        RecordingPin::new(Line::B, trace),
        RecordingPin::new(Line::C, trace),
        RecordingPin::new(Line::D, trace),
    )
}

pub fn pixel_driver(trace: &Trace) -> PixelDriver<RecordingPin, RecordingPin> {
    PixelDriver::new(
        ColorPins {
            r1: RecordingPin::new(Line::R1, trace),
            g1: RecordingPin::new(Line::G1, trace),
            b1: RecordingPin::new(Line::B1, trace),
            r2: RecordingPin::new(Line::R2, trace),
            g2: RecordingPin::new(Line::G2, trace),
            b2: RecordingPin::new(Line::B2, trace),
        },
        RecordingPin::new(Line::Clk, trace),
    )
}

pub fn line_strobe(trace: &Trace) -> LineStrobe<RecordingPin, RecordingPin> {
    LineStrobe::new(
        RecordingPin::new(Line::Lat, trace),
        RecordingPin::new(Line::Oe, trace),
    )
}

pub fn recording_interface(trace: &Trace) -> RecordingInterface {
    Interface::new(row_selector(trace), pixel_driver(trace), line_strobe(trace))
}

/// Replays a trace through a simulated panel
///
/// Colour bits are sampled on each rising clock edge, copied to the output
/// register on each rising latch edge, and every delay spent with output
/// enabled (OE low) is credited to the lit channels of the addressed row pair.
pub struct PanelModel {
    rows: usize,
    cols: usize,
    levels: [bool; 13],
    shift: Vec<[bool; 6]>,
    latched: Vec<[bool; 6]>,
    /// Lit nanoseconds per pixel (row-major) and channel
    pub lit: Vec<[u64; 3]>,
    /// Rising clock edges observed
    pub clocks: usize,
    /// Rising latch edges observed
    pub latches: usize,
    /// Output-enable pulses observed
    pub oe_pulses: usize,
}

impl PanelModel {
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut levels = [false; 13];
        // OE idles high (output disabled).
        levels[Line::Oe as usize] = true;
        Self {
            rows,
            cols,
            levels,
            shift: Vec::new(),
            latched: vec![[false; 6]; cols],
            lit: vec![[0; 3]; rows * cols],
            clocks: 0,
            latches: 0,
            oe_pulses: 0,
        }
    }

    fn address(&self) -> usize {
        [Line::A, Line::B, Line::C, Line::D]
            .iter()
            .enumerate()
            .filter(|(_, line)| self.levels[**line as usize])
            .map(|(bit, _)| 1usize << bit)
            .sum()
    }

    pub fn replay(&mut self, events: &[Event]) {
        for event in events {
            match *event {
                Event::Set(line, high) => {
                    let was = self.levels[line as usize];
                    self.levels[line as usize] = high;
                    match line {
                        Line::Clk if !was && high => {
                            self.clocks += 1;
                            let l = &self.levels;
                            self.shift.push([
                                l[Line::R1 as usize],
                                l[Line::G1 as usize],
                                l[Line::B1 as usize],
                                l[Line::R2 as usize],
                                l[Line::G2 as usize],
                                l[Line::B2 as usize],
                            ]);
                            if self.shift.len() > self.cols {
                                self.shift.remove(0);
                            }
                        }
                        Line::Lat if !was && high => {
                            self.latches += 1;
                            let start = self.cols - self.shift.len().min(self.cols);
                            self.latched = vec![[false; 6]; self.cols];
                            self.latched[start..].copy_from_slice(&self.shift);
                        }
                        Line::Oe if was && !high => self.oe_pulses += 1,
                        _ => {}
                    }
                }
                Event::Delay(ns) => {
                    if self.levels[Line::Oe as usize] {
                        continue;
                    }
                    let upper = self.address();
                    let lower = upper + self.rows / 2;
                    for (col, bits) in self.latched.iter().enumerate() {
                        for channel in 0..3 {
                            if bits[channel] {
                                self.lit[upper * self.cols + col][channel] += u64::from(ns);
                            }
                            if bits[channel + 3] {
                                self.lit[lower * self.cols + col][channel] += u64::from(ns);
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Call-level record of a [`PanelInterface`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Call {
    SelectRow(u8),
    DriveColumn { upper: u32, lower: u32, plane: u8 },
    ClockPixel,
    ShowLine(u32),
    Blank,
}

#[derive(Debug, Default)]
pub struct MockInterface {
    pub calls: Vec<Call>,
}

impl PanelInterface for MockInterface {
    type Error = core::convert::Infallible;

    fn select_row(&mut self, row: u8) -> Result<(), Self::Error> {
        self.calls.push(Call::SelectRow(row));
        Ok(())
    }

    fn drive_column(&mut self, upper: u32, lower: u32, plane: u8) -> Result<(), Self::Error> {
        self.calls.push(Call::DriveColumn {
            upper,
            lower,
            plane,
        });
        Ok(())
    }

    fn clock_pixel(&mut self) -> Result<(), Self::Error> {
        self.calls.push(Call::ClockPixel);
        Ok(())
    }

    fn show_line<D: DelayNs>(&mut self, dwell_ticks: u32, _delay: &mut D) -> Result<(), Self::Error> {
        self.calls.push(Call::ShowLine(dwell_ticks));
        Ok(())
    }

    fn blank(&mut self) -> Result<(), Self::Error> {
        self.calls.push(Call::Blank);
        Ok(())
    }
}

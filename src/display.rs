//! Core refresh operations

use embedded_hal::delay::DelayNs;

use crate::config::{BITPLANES, Config, Dimensions};
use crate::error::Error;
use crate::interface::PanelInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Refresh engine for a HUB75 panel
///
/// Owns the [`PanelInterface`] and scans a caller-owned framebuffer out to
/// the panel with binary code modulation, one frame per
/// [`render_frame`](Self::render_frame) call. The panel keeps nothing
/// between frames, so the caller must keep calling it.
pub struct Display<I>
where
    I: PanelInterface,
{
    /// Hardware interface
    interface: I,
    /// Panel configuration
    config: Config,
    /// Completed frames, wrapping
    frames: u32,
}

impl<I> Display<I>
where
    I: PanelInterface,
{
    /// Create a new Display instance
    pub fn new(interface: I, config: Config) -> Self {
        log::debug!(
            "hub75: {}x{} panel, {} scan lines, {} ticks per frame",
            config.dimensions.cols,
            config.dimensions.rows,
            config.dimensions.scan_lines(),
            u64::from(config.dwell.total()) * u64::from(config.dimensions.scan_lines()),
        );
        Self {
            interface,
            config,
            frames: 0,
        }
    }

    /// Put the panel in a known dark state before the first frame
    ///
    /// Disables output and selects scan line 0.
    pub fn init(&mut self) -> DisplayResult<I> {
        log::debug!("hub75: init");
        self.blank()?;
        self.interface.select_row(0).map_err(Error::Interface)
    }

    /// Disable output until the next frame
    pub fn blank(&mut self) -> DisplayResult<I> {
        self.interface.blank().map_err(Error::Interface)
    }

    /// Scan one full frame out to the panel
    ///
    /// `framebuffer` holds one packed colour word per pixel, row-major
    /// (`y * cols + x`). Each scan line `s` drives pixel row `s` on the upper
    /// half and row `s + rows / 2` on the lower half. For every bitplane,
    /// from least to most significant, all columns are shifted in and the
    /// line is then lit for that plane's dwell time.
    ///
    /// Blocks for the whole frame. Words beyond `dimensions.buffer_len()` are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` before touching any line if the
    /// framebuffer is shorter than the panel, or `Error::Interface` if a
    /// line fails part way through.
    pub fn render_frame<D: DelayNs>(
        &mut self,
        framebuffer: &[u32],
        delay: &mut D,
    ) -> DisplayResult<I> {
        let required = self.config.dimensions.buffer_len();
        let Some(frame) = framebuffer.get(..required) else {
            return Err(Error::BufferTooSmall {
                required,
                provided: framebuffer.len(),
            });
        };

        let cols = usize::from(self.config.dimensions.cols).max(1);
        let (upper_half, lower_half) = frame.split_at(required / 2);
        let lines = upper_half.chunks(cols).zip(lower_half.chunks(cols));

        for (line, (upper, lower)) in lines.enumerate() {
            // Out-of-range lines are rejected by the interface.
            let row = u8::try_from(line).unwrap_or(u8::MAX);
            self.interface.select_row(row).map_err(Error::Interface)?;

            for (plane, &ticks) in (0..BITPLANES).zip(self.config.dwell.as_array()) {
                for (&upper_word, &lower_word) in upper.iter().zip(lower) {
                    self.interface
                        .drive_column(upper_word, lower_word, plane)
                        .map_err(Error::Interface)?;
                    self.interface.clock_pixel().map_err(Error::Interface)?;
                }
                self.interface
                    .show_line(ticks, delay)
                    .map_err(Error::Interface)?;
            }
        }

        self.frames = self.frames.wrapping_add(1);
        Ok(())
    }

    /// Number of frames completed so far (wraps at `u32::MAX`)
    pub fn frames_rendered(&self) -> u32 {
        self.frames
    }

    /// Total lit time of one frame in ticks, summed over all scan lines
    pub fn scan_time_ticks(&self) -> u64 {
        u64::from(self.config.dwell.total()) * u64::from(self.config.dimensions.scan_lines())
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Get display configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get a reference to the interface
    pub fn interface(&self) -> &I {
        &self.interface
    }

    /// Get a mutable reference to the interface
    pub fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }

    /// Give the interface back
    pub fn release(self) -> I {
        self.interface
    }
}

//! Panel configuration types and builder

pub use crate::error::{BITPLANES, BuilderError, MAX_ROWS, MAX_SCAN_LINES};

/// Panel dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dimensions {
    /// Number of rows (height in pixels, both panel halves)
    pub rows: u16,
    /// Number of columns (width in pixels, length of the shift register chain)
    pub cols: u16,
}

impl Dimensions {
    /// Common 32x32 panel with 1/16 scan
    pub const PANEL_32X32: Self = Self { rows: 32, cols: 32 };

    /// Common 32x16 panel with 1/8 scan
    pub const PANEL_32X16: Self = Self { rows: 16, cols: 32 };

    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - rows == 0 or rows is odd (each scan line drives one row per half)
    /// - rows > MAX_ROWS (four address lines select at most 16 scan lines)
    /// - cols == 0
    pub fn new(rows: u16, cols: u16) -> Result<Self, BuilderError> {
        if rows == 0 || rows > MAX_ROWS || !rows.is_multiple_of(2) {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        if cols == 0 {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of scan lines (row pairs) per frame
    pub fn scan_lines(&self) -> u16 {
        self.rows / 2
    }

    /// Required framebuffer length in 32-bit colour words
    pub fn buffer_len(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Framebuffer index of pixel `(x, y)`, or `None` when outside the panel
    pub fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        Some(y as usize * self.cols as usize + x as usize)
    }
}

/// Per-bitplane output-enable durations, in ticks
///
/// Entry `n` is how long the panel stays lit after latching bitplane `n`.
/// The weights are what turn eight on/off passes into 256 brightness levels,
/// so the table must grow with bit significance.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DwellTable([u32; BITPLANES as usize]);

impl DwellTable {
    /// Default table: 10 ticks for the least significant plane, doubling per plane
    pub const DEFAULT: Self = Self::binary(10);

    /// Create a dwell table with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDwellTable` naming the first plane whose
    /// entry is zero or not strictly greater than its predecessor.
    pub fn new(ticks: [u32; BITPLANES as usize]) -> Result<Self, BuilderError> {
        let mut previous = 0;
        for (plane, &entry) in ticks.iter().enumerate() {
            if entry <= previous {
                return Err(BuilderError::InvalidDwellTable {
                    plane: plane as u8,
                });
            }
            previous = entry;
        }
        Ok(Self(ticks))
    }

    /// Binary-weighted table: plane `n` lasts `base << n` ticks
    ///
    /// `base` is clamped to `1..=u32::MAX >> 7` so every entry fits and the
    /// table is always valid.
    pub const fn binary(base: u32) -> Self {
        let base = if base == 0 {
            1
        } else if base > (u32::MAX >> 7) {
            u32::MAX >> 7
        } else {
            base
        };
        let mut ticks = [0u32; BITPLANES as usize];
        let mut plane = 0;
        while plane < BITPLANES as usize {
            ticks[plane] = base << plane;
            plane += 1;
        }
        Self(ticks)
    }

    /// Dwell for `plane`, or `None` when `plane >= 8`
    pub fn ticks(&self, plane: u8) -> Option<u32> {
        self.0.get(plane as usize).copied()
    }

    /// All entries, least significant plane first
    pub fn as_array(&self) -> &[u32; BITPLANES as usize] {
        &self.0
    }

    /// Sum of all entries (lit time per scan line visit)
    pub fn total(&self) -> u32 {
        self.0.iter().fold(0u32, |acc, t| acc.saturating_add(*t))
    }
}

impl Default for DwellTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Panel configuration
///
/// Use `Builder` to create a Config.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Panel dimensions
    pub dimensions: Dimensions,
    /// Output-enable duration per bitplane
    pub dwell: DwellTable,
}

/// Builder for constructing panel configuration
///
/// # Example
///
/// ```
/// use hub75_bitbang::{Builder, Dimensions, DwellTable};
///
/// let config = match Builder::new()
///     .dimensions(Dimensions::PANEL_32X32)
///     .dwell_table(DwellTable::binary(16))
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.dwell.ticks(7), Some(16 << 7));
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    /// Panel dimensions (required)
    dimensions: Option<Dimensions>,
    /// Output-enable duration per bitplane
    dwell: DwellTable,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set panel dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set the per-bitplane dwell table
    pub fn dwell_table(mut self, dwell: DwellTable) -> Self {
        self.dwell = dwell;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            dwell: self.dwell,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_valid() {
        let dims = Dimensions::new(32, 32).unwrap();
        assert_eq!(dims, Dimensions::PANEL_32X32);
        assert_eq!(dims.scan_lines(), 16);
        assert_eq!(dims.buffer_len(), 1024);
    }

    #[test]
    fn test_dimensions_odd_rows_rejected() {
        assert_eq!(
            Dimensions::new(31, 32),
            Err(BuilderError::InvalidDimensions { rows: 31, cols: 32 })
        );
    }

    #[test]
    fn test_dimensions_too_many_rows_rejected() {
        assert!(Dimensions::new(34, 32).is_err());
        assert!(Dimensions::new(MAX_ROWS, 32).is_ok());
    }

    #[test]
    fn test_dimensions_zero_rejected() {
        assert!(Dimensions::new(0, 32).is_err());
        assert!(Dimensions::new(32, 0).is_err());
    }

    #[test]
    fn test_dimensions_index() {
        let dims = Dimensions::PANEL_32X32;
        assert_eq!(dims.index(0, 0), Some(0));
        assert_eq!(dims.index(31, 0), Some(31));
        assert_eq!(dims.index(0, 31), Some(992));
        assert_eq!(dims.index(31, 31), Some(1023));
        assert_eq!(dims.index(32, 0), None);
        assert_eq!(dims.index(0, 32), None);
    }

    #[test]
    fn test_default_dwell_table_doubles() {
        assert_eq!(
            DwellTable::DEFAULT.as_array(),
            &[10, 20, 40, 80, 160, 320, 640, 1280]
        );
        assert_eq!(DwellTable::DEFAULT.total(), 2550);
    }

    #[test]
    fn test_dwell_table_strictly_increasing() {
        let table = DwellTable::default();
        for plane in 0..BITPLANES - 1 {
            assert!(table.ticks(plane).unwrap() < table.ticks(plane + 1).unwrap());
        }
        assert_eq!(table.ticks(BITPLANES), None);
    }

    #[test]
    fn test_dwell_table_rejects_zero_entry() {
        assert_eq!(
            DwellTable::new([0, 1, 2, 3, 4, 5, 6, 7]),
            Err(BuilderError::InvalidDwellTable { plane: 0 })
        );
    }

    #[test]
    fn test_dwell_table_rejects_non_increasing_entry() {
        assert_eq!(
            DwellTable::new([1, 2, 3, 4, 4, 5, 6, 7]),
            Err(BuilderError::InvalidDwellTable { plane: 4 })
        );
    }

    #[test]
    fn test_dwell_table_accepts_non_binary_weights() {
        let table = DwellTable::new([1, 3, 5, 9, 17, 33, 65, 129]).unwrap();
        assert_eq!(table.ticks(1), Some(3));
    }

    #[test]
    fn test_binary_dwell_zero_base_clamped() {
        assert_eq!(DwellTable::binary(0).as_array()[0], 1);
        assert!(DwellTable::new(*DwellTable::binary(u32::MAX).as_array()).is_ok());
    }

    #[test]
    fn test_builder_requires_dimensions() {
        assert!(matches!(
            Builder::new().build(),
            Err(BuilderError::MissingDimensions)
        ));
    }

    #[test]
    fn test_builder_defaults_dwell() {
        let config = Builder::new()
            .dimensions(Dimensions::PANEL_32X16)
            .build()
            .unwrap();
        assert_eq!(config.dwell, DwellTable::DEFAULT);
        assert_eq!(config.dimensions.scan_lines(), 8);
    }
}

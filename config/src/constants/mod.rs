//! Centralized configuration values shared across the drawer grid pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons of millimetre quantities.
///
/// Used by the partition invariants (row sums, uniformity checks) and by the
/// layout generator when deciding whether a computed box dimension is
/// degenerate.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1.0e-9;

/// Smallest size a partition cell may be resized to, in millimetres.
///
/// The partition editor never lets a resize push either the edited cell or
/// its neighbour below this value.
///
/// # Examples
/// ```
/// use config::constants::MIN_CELL_SIZE;
/// assert_eq!(MIN_CELL_SIZE, 1.0);
/// ```
pub const MIN_CELL_SIZE: f64 = 1.0;

// =============================================================================
// PARAMETER RANGES
// =============================================================================

/// Closed or half-open numeric interval used to validate user parameters.
///
/// # Examples
/// ```
/// use config::constants::ParamRange;
/// let range = ParamRange::half_open(0.0, 500.0);
/// assert!(!range.contains(0.0));
/// assert!(range.contains(500.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    /// Lower bound of the interval.
    pub min: f64,
    /// Upper bound of the interval (always inclusive).
    pub max: f64,
    /// Whether `min` itself is an accepted value.
    pub min_inclusive: bool,
}

impl ParamRange {
    /// Creates the closed interval `[min, max]`.
    pub const fn closed(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_inclusive: true,
        }
    }

    /// Creates the half-open interval `(min, max]`.
    pub const fn half_open(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_inclusive: false,
        }
    }

    /// Returns true if `value` lies inside the interval.
    ///
    /// Non-finite values are never contained.
    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() || value > self.max {
            return false;
        }
        if self.min_inclusive {
            value >= self.min
        } else {
            value > self.min
        }
    }

    /// Checks `value` against the interval, naming the parameter on failure.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, WALL_THICKNESS_RANGE};
    /// assert!(WALL_THICKNESS_RANGE.check("wallThickness", 1.0).is_ok());
    /// assert!(matches!(
    ///     WALL_THICKNESS_RANGE.check("wallThickness", 9.0),
    ///     Err(ConfigError::OutOfRange { .. })
    /// ));
    /// ```
    pub fn check(&self, name: &'static str, value: f64) -> Result<f64, ConfigError> {
        if !value.is_finite() {
            return Err(ConfigError::NonFinite(name));
        }
        if self.contains(value) {
            Ok(value)
        } else {
            Err(ConfigError::OutOfRange {
                name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Accepted range for width, depth and height in millimetres.
///
/// # Examples
/// ```
/// use config::constants::DIMENSION_RANGE;
/// assert!(DIMENSION_RANGE.contains(100.0));
/// assert!(!DIMENSION_RANGE.contains(501.0));
/// ```
pub const DIMENSION_RANGE: ParamRange = ParamRange::half_open(0.0, 500.0);

/// Accepted range for the number of rows and columns.
///
/// # Examples
/// ```
/// use config::constants::SECTION_RANGE;
/// assert!(SECTION_RANGE.contains(2.0));
/// assert!(!SECTION_RANGE.contains(11.0));
/// ```
pub const SECTION_RANGE: ParamRange = ParamRange::closed(2.0, 10.0);

/// Accepted range for the partition wall thickness in millimetres.
pub const WALL_THICKNESS_RANGE: ParamRange = ParamRange::closed(0.4, 5.0);

// =============================================================================
// DEFAULT PARAMETERS
// =============================================================================

/// Default footprint width in millimetres.
pub const DEFAULT_WIDTH: f64 = 100.0;

/// Default footprint depth in millimetres.
pub const DEFAULT_DEPTH: f64 = 100.0;

/// Default wall height in millimetres.
pub const DEFAULT_HEIGHT: f64 = 10.0;

/// Default number of rows (bands along the width axis).
pub const DEFAULT_ROWS: usize = 2;

/// Default number of cells per row (along the depth axis).
pub const DEFAULT_COLS: usize = 2;

/// Default partition wall thickness in millimetres.
pub const DEFAULT_WALL_THICKNESS: f64 = 1.0;

/// Default grid colour as a CSS hex string.
///
/// # Examples
/// ```
/// use config::constants::{parse_hex_color, DEFAULT_GRID_COLOR};
/// assert_eq!(parse_hex_color(DEFAULT_GRID_COLOR).unwrap(), [0.0, 0.0, 0.0, 1.0]);
/// ```
pub const DEFAULT_GRID_COLOR: &str = "#000000";

// =============================================================================
// HOUSING CONSTANTS
// =============================================================================

/// Wall thickness of the enclosing drawer housing in millimetres.
pub const HOUSING_THICKNESS: f64 = 5.0;

/// Handle bar radius as a fraction of the housing thickness.
pub const HANDLE_RADIUS_RATIO: f64 = 1.0 / 3.0;

/// Handle crossbar length as a fraction of the footprint width.
///
/// # Examples
/// ```
/// use config::constants::HANDLE_LENGTH_RATIO;
/// let handle_length = 100.0 * HANDLE_LENGTH_RATIO;
/// assert!((handle_length - 40.0).abs() < 1e-9);
/// ```
pub const HANDLE_LENGTH_RATIO: f64 = 0.4;

/// Distance the handle stands off the front wall, as a multiple of the
/// housing thickness.
pub const HANDLE_STANDOFF_RATIO: f64 = 2.0;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Fallback colour when none is specified (light gray).
///
/// RGBA values in range [0.0, 1.0].
pub const DEFAULT_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];

/// Colour of the housing shell (`#d3d3d3`).
pub const HOUSING_COLOR: [f32; 4] = [211.0 / 255.0, 211.0 / 255.0, 211.0 / 255.0, 1.0];

/// Colour of the handle assembly (`#333333`).
pub const HANDLE_COLOR: [f32; 4] = [51.0 / 255.0, 51.0 / 255.0, 51.0 / 255.0, 1.0];

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of triangles accepted by the STL writer.
///
/// A 10×10 grid with outer walls and housing is a few thousand triangles;
/// this bound only guards against corrupted input.
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within [`EPSILON`].
///
/// # Examples
/// ```
/// use config::constants::approx_equal;
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Parses a `#rrggbb` (or `#rgb`) CSS colour into linear RGBA in [0, 1].
///
/// # Examples
/// ```
/// use config::constants::parse_hex_color;
/// let rgba = parse_hex_color("#ff8000").unwrap();
/// assert_eq!(rgba[0], 1.0);
/// assert!(parse_hex_color("orange").is_err());
/// ```
pub fn parse_hex_color(value: &str) -> Result<[f32; 4], ConfigError> {
    let invalid = || ConfigError::InvalidColor(value.to_string());
    let digits = value.strip_prefix('#').ok_or_else(invalid)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(invalid()),
    };

    let mut rgba = [0.0, 0.0, 0.0, 1.0];
    for (channel, slot) in rgba.iter_mut().take(3).enumerate() {
        let byte = u8::from_str_radix(&expanded[channel * 2..channel * 2 + 2], 16)
            .map_err(|_| invalid())?;
        *slot = f32::from(byte) / 255.0;
    }
    Ok(rgba)
}

// =============================================================================
// ERRORS
// =============================================================================

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when a numeric parameter falls outside its accepted range.
    OutOfRange {
        /// Parameter name as exposed to the UI.
        name: &'static str,
        /// Rejected value.
        value: f64,
        /// Lower bound of the accepted range.
        min: f64,
        /// Upper bound of the accepted range.
        max: f64,
    },
    /// Raised when a numeric parameter is NaN or infinite.
    NonFinite(&'static str),
    /// Raised when a colour string is not a `#rgb` / `#rrggbb` hex value.
    InvalidColor(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::OutOfRange {
                name,
                value,
                min,
                max,
            } => write!(f, "{name} must be within [{min}, {max}]: {value}"),
            ConfigError::NonFinite(name) => write!(f, "{name} must be a finite number"),
            ConfigError::InvalidColor(value) => {
                write!(f, "colour must be a #rrggbb hex string: {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;

//! # Design Parameters
//!
//! The explicit configuration value: footprint, resolution, wall settings,
//! colour and display toggles. [`ParamsUpdate`] is its partial form, applied
//! field by field on top of the current value.

use config::constants::{
    parse_hex_color, ConfigError, DEFAULT_COLS, DEFAULT_DEPTH, DEFAULT_GRID_COLOR, DEFAULT_HEIGHT,
    DEFAULT_ROWS, DEFAULT_WALL_THICKNESS, DEFAULT_WIDTH, DIMENSION_RANGE, SECTION_RANGE,
    WALL_THICKNESS_RANGE,
};
use grid_layout::WallOptions;
use grid_mesh::Palette;
use grid_partition::{Footprint, PartitionError, Resolution};
use serde::{Deserialize, Serialize};

use crate::error::DesignResult;

/// Full set of design parameters.
///
/// Serialized in camelCase. `rows`/`cols` also accept the `xSections` /
/// `ySections` names used by saved browser state.
///
/// # Example
///
/// ```rust
/// use drawer_design::DesignParams;
///
/// let params = DesignParams::from_json(r#"{ "width": 120, "xSections": 3 }"#).unwrap();
/// assert_eq!(params.rows, 3);
/// assert_eq!(params.depth, 100.0);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignParams {
    /// Footprint extent along X in millimetres.
    pub width: f64,
    /// Footprint extent along Z in millimetres.
    pub depth: f64,
    /// Wall height in millimetres.
    pub height: f64,
    /// Bands along the width axis.
    #[serde(alias = "xSections")]
    pub rows: usize,
    /// Cells per band along the depth axis.
    #[serde(alias = "ySections")]
    pub cols: usize,
    pub wall_thickness: f64,
    /// CSS hex colour of the grid walls. Not used by layout.
    pub color: String,
    pub generate_outer_walls: bool,
    pub show_housing: bool,
}

impl Default for DesignParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            depth: DEFAULT_DEPTH,
            height: DEFAULT_HEIGHT,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            wall_thickness: DEFAULT_WALL_THICKNESS,
            color: DEFAULT_GRID_COLOR.to_string(),
            generate_outer_walls: false,
            show_housing: true,
        }
    }
}

impl DesignParams {
    /// Checks every field against its UI range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        DIMENSION_RANGE.check("width", self.width)?;
        DIMENSION_RANGE.check("depth", self.depth)?;
        DIMENSION_RANGE.check("height", self.height)?;
        SECTION_RANGE.check("rows", self.rows as f64)?;
        SECTION_RANGE.check("cols", self.cols as f64)?;
        WALL_THICKNESS_RANGE.check("wallThickness", self.wall_thickness)?;
        parse_hex_color(&self.color)?;
        Ok(())
    }

    pub fn footprint(&self) -> Result<Footprint, PartitionError> {
        Footprint::new(self.width, self.depth)
    }

    pub fn resolution(&self) -> Result<Resolution, PartitionError> {
        Resolution::new(self.rows, self.cols)
    }

    /// True if `other` needs a new partition (footprint or resolution
    /// differs). Such a change discards cell edits.
    pub fn needs_rebuild(&self, other: &DesignParams) -> bool {
        self.width != other.width
            || self.depth != other.depth
            || self.rows != other.rows
            || self.cols != other.cols
    }

    pub fn wall_options(&self) -> WallOptions {
        WallOptions {
            wall_thickness: self.wall_thickness,
            height: self.height,
            generate_outer_walls: self.generate_outer_walls,
        }
    }

    /// Material palette with the grid colour taken from [`Self::color`].
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        parse_hex_color(&self.color).map(Palette::with_grid)
    }

    /// Returns a copy with every field set in `update` replaced.
    pub fn merged(&self, update: &ParamsUpdate) -> DesignParams {
        DesignParams {
            width: update.width.unwrap_or(self.width),
            depth: update.depth.unwrap_or(self.depth),
            height: update.height.unwrap_or(self.height),
            rows: update.rows.unwrap_or(self.rows),
            cols: update.cols.unwrap_or(self.cols),
            wall_thickness: update.wall_thickness.unwrap_or(self.wall_thickness),
            color: update.color.clone().unwrap_or_else(|| self.color.clone()),
            generate_outer_walls: update
                .generate_outer_walls
                .unwrap_or(self.generate_outer_walls),
            show_housing: update.show_housing.unwrap_or(self.show_housing),
        }
    }

    /// Parses parameters from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> DesignResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> DesignResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A partial parameter change: `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParamsUpdate {
    pub width: Option<f64>,
    pub depth: Option<f64>,
    pub height: Option<f64>,
    #[serde(alias = "xSections")]
    pub rows: Option<usize>,
    #[serde(alias = "ySections")]
    pub cols: Option<usize>,
    pub wall_thickness: Option<f64>,
    pub color: Option<String>,
    pub generate_outer_walls: Option<bool>,
    pub show_housing: Option<bool>,
}

impl ParamsUpdate {
    pub fn from_json(json: &str) -> DesignResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// True if the update sets nothing.
    pub fn is_empty(&self) -> bool {
        self == &ParamsUpdate::default()
    }
}

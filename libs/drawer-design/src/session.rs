//! # Design Session
//!
//! Owns the current parameters, partition and placement list.
//!
//! Every mutation bumps a configuration version. Layout passes are tagged
//! with the version they were started from; [`DesignSession::accept`] only
//! installs a result whose version is still current, so a slow pass can never
//! overwrite a newer configuration.
//!
//! ```text
//! update / resize_cell / reset ─→ version += 1
//!                                   │
//! begin_layout ─→ LayoutRequest ─→ run (any thread) ─→ LayoutResult ─→ accept
//! ```

use config::constants::MIN_CELL_SIZE;
use grid_layout::{housing, layout, WallOptions, WallPlacement};
use grid_mesh::{assemble, to_stl_bytes, Scene};
use grid_partition::{Footprint, Partition, ResizeOutcome, Resolution};

use crate::error::DesignResult;
use crate::params::{DesignParams, ParamsUpdate};

/// What an [`DesignSession::update`] changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The merged parameters equal the current ones.
    Unchanged,
    /// Parameters changed; the partition (and its edits) was kept.
    Changed,
    /// Footprint or resolution changed; the partition was rebuilt uniform.
    Rebuilt,
}

/// An owned snapshot of everything one layout pass needs.
#[derive(Debug, Clone)]
pub struct LayoutRequest {
    version: u64,
    partition: Partition,
    options: WallOptions,
    show_housing: bool,
}

impl LayoutRequest {
    /// Configuration version this pass was started from.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Runs the layout. Pure; safe to call on any thread.
    pub fn run(self) -> LayoutResult {
        let mut placements = layout(&self.partition, &self.options);
        if self.show_housing {
            placements.extend(housing(self.partition.footprint(), self.options.height));
        }
        LayoutResult {
            version: self.version,
            placements,
        }
    }
}

/// Output of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub version: u64,
    pub placements: Vec<WallPlacement>,
}

/// The configuration context: sole writer of parameters and partition.
#[derive(Debug, Clone)]
pub struct DesignSession {
    params: DesignParams,
    partition: Partition,
    version: u64,
    placements: Vec<WallPlacement>,
    placements_version: u64,
    in_flight: Option<u64>,
}

impl DesignSession {
    /// Creates a session with a uniform partition and its initial layout.
    pub fn new(params: DesignParams) -> DesignResult<Self> {
        params.validate()?;
        let partition = Partition::build(params.resolution()?, params.footprint()?);
        Ok(Self::with_partition(params, partition))
    }

    fn with_partition(params: DesignParams, partition: Partition) -> Self {
        let mut session = Self {
            params,
            partition,
            version: 0,
            placements: Vec::new(),
            placements_version: 0,
            in_flight: None,
        };
        session.regenerate();
        session
    }

    #[inline]
    pub fn params(&self) -> &DesignParams {
        &self.params
    }

    #[inline]
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    #[inline]
    pub fn footprint(&self) -> Footprint {
        self.partition.footprint()
    }

    /// Current configuration version.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The installed placement list: grid walls first, then housing parts.
    #[inline]
    pub fn placements(&self) -> &[WallPlacement] {
        &self.placements
    }

    /// True if the installed placements predate the current configuration.
    #[inline]
    pub fn is_stale(&self) -> bool {
        self.placements_version != self.version
    }

    /// True once the partition differs from the uniform layout.
    pub fn is_customized(&self) -> bool {
        !self.partition.is_uniform()
    }

    /// Applies a partial parameter change.
    ///
    /// The merged parameters are validated first; on error nothing changes.
    pub fn update(&mut self, update: &ParamsUpdate) -> DesignResult<UpdateOutcome> {
        let merged = self.params.merged(update);
        merged.validate()?;
        if merged == self.params {
            return Ok(UpdateOutcome::Unchanged);
        }

        let too_thin =
            self.is_customized() && merged.wall_thickness > self.partition.min_cell_depth();
        let outcome = if self.params.needs_rebuild(&merged) || too_thin {
            if too_thin {
                tracing::info!(
                    wall_thickness = merged.wall_thickness,
                    "edited cells are thinner than the new walls, rebuilding partition"
                );
            }
            self.partition = Partition::build(merged.resolution()?, merged.footprint()?);
            UpdateOutcome::Rebuilt
        } else {
            UpdateOutcome::Changed
        };
        self.params = merged;
        self.bump();

        tracing::debug!(version = self.version, ?outcome, "updated parameters");
        Ok(outcome)
    }

    /// Resizes one cell along the depth axis.
    ///
    /// `size` is first clamped to `[1, depth]`, the range a resize gesture
    /// can produce. Neither the cell nor its neighbour may end up thinner
    /// than one wall, or the dividers on either side would collide.
    pub fn resize_cell(&mut self, row: usize, col: usize, size: f64) -> DesignResult<ResizeOutcome> {
        let size = if size.is_finite() {
            size.clamp(MIN_CELL_SIZE, self.params.depth.max(MIN_CELL_SIZE))
        } else {
            size
        };
        let min_size = self.params.wall_thickness.max(MIN_CELL_SIZE);
        let outcome = self
            .partition
            .resize_cell_with_min(row, col, size, min_size)?;
        if outcome.is_applied() {
            self.bump();
        }
        Ok(outcome)
    }

    /// Discards every cell edit by rebuilding the uniform partition.
    pub fn reset(&mut self) -> DesignResult<()> {
        self.partition = Partition::build(self.params.resolution()?, self.params.footprint()?);
        self.bump();
        tracing::debug!(version = self.version, "reset partition");
        Ok(())
    }

    fn bump(&mut self) {
        self.version += 1;
    }

    fn request(&self) -> LayoutRequest {
        LayoutRequest {
            version: self.version,
            partition: self.partition.clone(),
            options: self.params.wall_options(),
            show_housing: self.params.show_housing,
        }
    }

    /// Starts a background layout pass for the current version.
    ///
    /// Returns `None` if the placements are already current or a pass for
    /// this version is in flight.
    pub fn begin_layout(&mut self) -> Option<LayoutRequest> {
        if !self.is_stale() || self.in_flight == Some(self.version) {
            return None;
        }
        self.in_flight = Some(self.version);
        Some(self.request())
    }

    /// Installs `result` if it was computed for the current version.
    ///
    /// Returns false (and drops the result) if the configuration changed
    /// since the pass started.
    pub fn accept(&mut self, result: LayoutResult) -> bool {
        if self.in_flight == Some(result.version) {
            self.in_flight = None;
        }
        if result.version != self.version {
            tracing::debug!(
                stale = result.version,
                current = self.version,
                "discarding stale layout"
            );
            return false;
        }

        self.placements = result.placements;
        self.placements_version = result.version;
        true
    }

    /// Runs a layout pass synchronously for the current version.
    pub fn regenerate(&mut self) {
        let result = self.request().run();
        self.accept(result);
    }

    /// Runs a synchronous pass only if the placements are stale.
    pub fn refresh(&mut self) {
        if self.is_stale() {
            self.regenerate();
        }
    }

    /// Assembles the placements for the current configuration into
    /// coloured meshes, running a synchronous pass first if they are stale.
    pub fn scene(&mut self) -> DesignResult<Scene> {
        self.refresh();
        let palette = self.params.palette()?;
        Ok(assemble(&self.placements, &palette)?)
    }

    /// Serializes the grid (without housing) of the current configuration
    /// as STL.
    pub fn export_stl(&mut self, binary: bool) -> DesignResult<Vec<u8>> {
        let mesh = self.scene()?.export_mesh();
        Ok(to_stl_bytes(&mesh, binary)?)
    }
}

impl Default for DesignSession {
    fn default() -> Self {
        let params = DesignParams::default();
        let partition = Partition::build(
            Resolution {
                rows: params.rows,
                cols: params.cols,
            },
            Footprint {
                width: params.width,
                depth: params.depth,
            },
        );
        Self::with_partition(params, partition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_layout::PlacementKind;

    #[test]
    fn test_default_session_layout() {
        let session = DesignSession::default();
        assert!(!session.is_stale());
        // 2×2 dividers plus 8 housing parts
        assert_eq!(session.placements().len(), 4 + 8);
        assert!(!session.is_customized());
    }

    #[test]
    fn test_mutation_marks_stale_until_refresh() {
        let mut session = DesignSession::default();
        let before = session.version();
        session.resize_cell(0, 0, 70.0).unwrap();
        assert_eq!(session.version(), before + 1);
        assert!(session.is_stale());

        session.refresh();
        assert!(!session.is_stale());
        let depth_lengths: Vec<f64> = session
            .placements()
            .iter()
            .filter(|p| p.kind == PlacementKind::Divider(grid_layout::DividerAxis::Depth))
            .map(|p| p.length)
            .collect();
        assert_eq!(depth_lengths, vec![70.0, 30.0]);
    }

    #[test]
    fn test_noop_resize_keeps_version() {
        let mut session = DesignSession::default();
        let outcome = session.resize_cell(0, 0, 50.0).unwrap();
        assert_eq!(outcome, ResizeOutcome::Unchanged);
        assert_eq!(session.version(), 0);
    }

    #[test]
    fn test_gesture_clamped_to_depth() {
        let mut session = DesignSession::default();
        session.resize_cell(1, 1, 1000.0).unwrap();
        // Clamped to depth first, then to leave the neighbour 1 mm
        assert_eq!(session.partition().cell(1, 1).unwrap().depth, 99.0);
        assert_eq!(session.partition().cell(1, 0).unwrap().depth, 1.0);
    }

    #[test]
    fn test_resize_keeps_cells_as_thick_as_walls() {
        let mut session = DesignSession::new(DesignParams {
            wall_thickness: 3.0,
            ..DesignParams::default()
        })
        .unwrap();
        session.resize_cell(0, 0, 99.0).unwrap();
        assert_eq!(session.partition().cell(0, 1).unwrap().depth, 3.0);
        assert_eq!(session.partition().cell(0, 0).unwrap().depth, 97.0);
    }

    #[test]
    fn test_thicker_walls_rebuild_thin_edits() {
        let mut session = DesignSession::default();
        session.resize_cell(0, 0, 98.0).unwrap();
        assert_eq!(session.partition().cell(0, 1).unwrap().depth, 2.0);

        let outcome = session
            .update(&ParamsUpdate {
                wall_thickness: Some(3.0),
                ..ParamsUpdate::default()
            })
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Rebuilt);
        assert!(!session.is_customized());
    }

    #[test]
    fn test_scene_refreshes_stale_placements() {
        let mut session = DesignSession::default();
        session.resize_cell(0, 0, 70.0).unwrap();
        assert!(session.is_stale());

        let scene = session.scene().unwrap();
        assert!(!session.is_stale());
        assert_eq!(scene.len(), session.placements().len());
    }

    #[test]
    fn test_default_matches_new() {
        let built = DesignSession::new(DesignParams::default()).unwrap();
        let default = DesignSession::default();
        assert_eq!(built.partition(), default.partition());
        assert_eq!(built.placements(), default.placements());
    }
}

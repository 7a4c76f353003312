//! # Wall Layout Generator
//!
//! Emits the outer frame (optional) and one divider per internal cell
//! boundary of a [`Partition`], centered on the footprint origin.
//!
//! Rows are walked along the width axis starting at `+W/2`; cells of a row are
//! walked along the depth axis starting at `+D/2`. Two running totals locate
//! every boundary: the width consumed by finished rows and, inside a row, the
//! depth consumed by finished cells.

use glam::DVec3;
use grid_partition::{Footprint, Partition};

use crate::placement::{DividerAxis, PlacementKind, WallPlacement};

/// Wall parameters for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallOptions {
    /// Thickness of dividers and outer walls in millimetres.
    pub wall_thickness: f64,
    /// Height of every wall in millimetres.
    pub height: f64,
    /// Emit the four walls on the footprint boundary.
    pub generate_outer_walls: bool,
}

/// Generates every wall placement for `partition`.
///
/// Outer walls come first (left, right, back, front), followed by the
/// dividers in row-major cell order. Placements with a non-positive
/// dimension are skipped.
///
/// # Example
///
/// ```rust
/// use grid_layout::{layout, WallOptions};
/// use grid_partition::Partition;
///
/// let partition = Partition::uniform(3, 3, 90.0, 90.0).unwrap();
/// let options = WallOptions { wall_thickness: 1.0, height: 10.0, generate_outer_walls: true };
/// assert_eq!(layout(&partition, &options).len(), 16);
/// ```
pub fn layout(partition: &Partition, options: &WallOptions) -> Vec<WallPlacement> {
    let resolution = partition.resolution();
    let mut placements = Vec::with_capacity(4 + resolution.internal_divider_count());

    if options.generate_outer_walls {
        outer_walls(partition.footprint(), options, &mut placements);
    }
    dividers(partition, options, &mut placements);

    placements
}

/// Frame walls sitting just outside the footprint, inner faces flush with its
/// boundary. The depth-running pair spans the corners.
fn outer_walls(footprint: Footprint, options: &WallOptions, out: &mut Vec<WallPlacement>) {
    let (half_w, half_d) = footprint.half_extents();
    let t = options.wall_thickness;
    let h = options.height;
    let side_x = half_w + t / 2.0;
    let end_z = half_d + t / 2.0;

    for x in [-side_x, side_x] {
        push_checked(
            out,
            WallPlacement::along_depth(
                PlacementKind::OuterWall,
                t,
                h,
                footprint.depth + 2.0 * t,
                DVec3::new(x, 0.0, 0.0),
            ),
        );
    }
    for z in [-end_z, end_z] {
        push_checked(
            out,
            WallPlacement::along_width(
                PlacementKind::OuterWall,
                t,
                h,
                footprint.width,
                DVec3::new(0.0, 0.0, z),
            ),
        );
    }
}

fn dividers(partition: &Partition, options: &WallOptions, out: &mut Vec<WallPlacement>) {
    let (half_w, half_d) = partition.footprint().half_extents();
    let t = options.wall_thickness;
    let h = options.height;
    let half_t = t / 2.0;
    let rows = partition.rows();
    let last_row = rows.len().saturating_sub(1);

    let mut cumulative_width = 0.0;
    for (i, row) in rows.iter().enumerate() {
        let row_width = row.width();
        let row_start = half_w - cumulative_width;
        let row_end = row_start - row_width;

        // Junctions with row-boundary dividers belong to those dividers
        let bar_start = if i > 0 { row_start - half_t } else { row_start };
        let bar_end = if i < last_row { row_end + half_t } else { row_end };

        let last_col = row.len().saturating_sub(1);
        let mut cumulative_depth = 0.0;
        for (j, &size) in row.cells().iter().enumerate() {
            let cell_start = half_d - cumulative_depth;

            if i < last_row {
                push_checked(
                    out,
                    WallPlacement::along_depth(
                        PlacementKind::Divider(DividerAxis::Depth),
                        t,
                        h,
                        size,
                        DVec3::new(row_end, 0.0, cell_start - size / 2.0),
                    ),
                );
            }

            if j < last_col {
                push_checked(
                    out,
                    WallPlacement::along_width(
                        PlacementKind::Divider(DividerAxis::Width),
                        t,
                        h,
                        bar_start - bar_end,
                        DVec3::new((bar_start + bar_end) / 2.0, 0.0, cell_start - size),
                    ),
                );
            }

            cumulative_depth += size;
        }
        cumulative_width += row_width;
    }
}

/// Appends `placement` unless it would be an invalid box.
pub(crate) fn push_checked(out: &mut Vec<WallPlacement>, placement: WallPlacement) {
    if placement.is_degenerate() {
        tracing::debug!(
            kind = ?placement.kind,
            thickness = placement.thickness,
            height = placement.height,
            length = placement.length,
            "skipping degenerate placement"
        );
        return;
    }
    out.push(placement);
}

/// Counts the placements [`layout`] would emit before degenerate skipping.
pub fn expected_count(partition: &Partition, generate_outer_walls: bool) -> usize {
    let outer = if generate_outer_walls { 4 } else { 0 };
    outer + partition.resolution().internal_divider_count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn options(t: f64, outer: bool) -> WallOptions {
        WallOptions {
            wall_thickness: t,
            height: 10.0,
            generate_outer_walls: outer,
        }
    }

    #[test]
    fn test_three_by_three_counts() {
        let partition = Partition::uniform(3, 3, 100.0, 100.0).unwrap();
        assert_eq!(layout(&partition, &options(1.0, true)).len(), 16);
        assert_eq!(layout(&partition, &options(1.0, false)).len(), 12);
        assert_eq!(expected_count(&partition, true), 16);
    }

    #[test]
    fn test_two_by_two_divider_positions() {
        let partition = Partition::uniform(2, 2, 100.0, 100.0).unwrap();
        let placements = layout(&partition, &options(1.0, false));
        assert_eq!(placements.len(), 4);

        let depth_dividers: Vec<_> = placements
            .iter()
            .filter(|p| p.kind == PlacementKind::Divider(DividerAxis::Depth))
            .collect();
        let width_dividers: Vec<_> = placements
            .iter()
            .filter(|p| p.kind == PlacementKind::Divider(DividerAxis::Width))
            .collect();
        assert_eq!(depth_dividers.len(), 2);
        assert_eq!(width_dividers.len(), 2);

        for wall in &depth_dividers {
            assert_eq!(wall.center.x, 0.0);
            assert_eq!(wall.length, 50.0);
            assert_eq!(wall.rotation_y, 0.0);
        }
        for wall in &width_dividers {
            assert_eq!(wall.center.z, 0.0);
            assert_relative_eq!(wall.length, 49.5);
        }
        assert_eq!(depth_dividers[0].center.z, 25.0);
        assert_eq!(depth_dividers[1].center.z, -25.0);
        assert_relative_eq!(width_dividers[0].center.x, 25.25);
        assert_relative_eq!(width_dividers[1].center.x, -25.25);
    }

    #[test]
    fn test_outer_walls_flush_with_footprint() {
        let partition = Partition::uniform(2, 2, 120.0, 80.0).unwrap();
        let placements = layout(&partition, &options(2.0, true));
        let outer: Vec<_> = placements
            .iter()
            .filter(|p| p.kind == PlacementKind::OuterWall)
            .collect();
        assert_eq!(outer.len(), 4);

        let left = outer[0].bounds();
        assert_eq!(left.max.x, -60.0);
        assert_eq!(left.min.z, -42.0);
        let front = outer[3].bounds();
        assert_eq!(front.min.z, 40.0);
        assert_eq!(front.min.x, -60.0);
        assert_eq!(front.max.x, 60.0);
    }

    #[test]
    fn test_resized_cell_moves_boundary() {
        let mut partition = Partition::uniform(2, 2, 100.0, 100.0).unwrap();
        partition.resize_cell(0, 0, 70.0).unwrap();
        let placements = layout(&partition, &options(1.0, false));

        // Row 0 boundary moved to z = 50 - 70 = -20; row 1 still at 0
        let width_z: Vec<f64> = placements
            .iter()
            .filter(|p| p.kind == PlacementKind::Divider(DividerAxis::Width))
            .map(|p| p.center.z)
            .collect();
        assert_eq!(width_z, vec![-20.0, 0.0]);

        // Depth dividers follow row 0's cells: 70 then 30
        let depth_lengths: Vec<f64> = placements
            .iter()
            .filter(|p| p.kind == PlacementKind::Divider(DividerAxis::Depth))
            .map(|p| p.length)
            .collect();
        assert_eq!(depth_lengths, vec![70.0, 30.0]);
    }

    #[test]
    fn test_single_strip_has_no_dividers() {
        let partition = Partition::uniform(1, 1, 50.0, 50.0).unwrap();
        assert!(layout(&partition, &options(1.0, false)).is_empty());
        assert_eq!(layout(&partition, &options(1.0, true)).len(), 4);

        let row_strip = Partition::uniform(1, 3, 50.0, 60.0).unwrap();
        let placements = layout(&row_strip, &options(1.0, false));
        assert_eq!(placements.len(), 2);
        // Single row: width dividers span the whole footprint width
        assert!(placements.iter().all(|p| p.length == 50.0));
    }

    #[test]
    fn test_thick_walls_skip_degenerate_bars() {
        // Rows 2 mm wide, walls 5 mm thick: width dividers would be -0.5 long
        let partition = Partition::uniform(2, 2, 4.0, 100.0).unwrap();
        let placements = layout(&partition, &options(5.0, false));
        assert!(placements.iter().all(|p| !p.is_degenerate()));
        assert_eq!(placements.len(), 2);
        assert!(placements
            .iter()
            .all(|p| p.kind == PlacementKind::Divider(DividerAxis::Depth)));
    }

    #[test]
    fn test_zero_height_skips_everything() {
        let partition = Partition::uniform(2, 2, 10.0, 10.0).unwrap();
        let flat = WallOptions {
            wall_thickness: 1.0,
            height: 0.0,
            generate_outer_walls: true,
        };
        assert!(layout(&partition, &flat).is_empty());
    }
}

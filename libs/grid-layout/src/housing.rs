//! # Housing Generator
//!
//! Fixed-topology drawer shell around the footprint: a floor under the grid,
//! four side walls and a front pull handle. Depends only on the footprint and
//! the wall height, never on the partition.

use config::constants::{
    HANDLE_LENGTH_RATIO, HANDLE_RADIUS_RATIO, HANDLE_STANDOFF_RATIO, HOUSING_THICKNESS,
};
use glam::DVec3;
use grid_partition::Footprint;

use crate::placement::{HousingPart, PlacementKind, WallPlacement};
use crate::walls::push_checked;

/// Derived handle dimensions for a footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleGeometry {
    /// Half the side of the square handle section.
    pub radius: f64,
    /// Distance between the two post centers.
    pub length: f64,
    /// How far the handle stands off the front wall.
    pub standoff: f64,
}

impl HandleGeometry {
    pub fn for_width(width: f64) -> Self {
        Self {
            radius: HOUSING_THICKNESS * HANDLE_RADIUS_RATIO,
            length: width * HANDLE_LENGTH_RATIO,
            standoff: HOUSING_THICKNESS * HANDLE_STANDOFF_RATIO,
        }
    }
}

/// Generates the housing placements for a footprint and wall height.
///
/// Order: floor, left, right, back, front, the two handle posts, the handle
/// bar. The floor sits below the grid (`y < -height/2`); the side walls
/// enclose the footprint with their inner faces on its boundary.
///
/// # Example
///
/// ```rust
/// use grid_layout::housing;
/// use grid_partition::Footprint;
///
/// let parts = housing(Footprint::new(100.0, 100.0).unwrap(), 10.0);
/// assert_eq!(parts.len(), 8);
/// ```
pub fn housing(footprint: Footprint, height: f64) -> Vec<WallPlacement> {
    let (half_w, half_d) = footprint.half_extents();
    let h = HOUSING_THICKNESS;
    let mut parts = Vec::with_capacity(8);

    let floor = WallPlacement::along_depth(
        PlacementKind::Housing(HousingPart::Floor),
        footprint.width + 2.0 * h,
        h,
        footprint.depth + 2.0 * h,
        DVec3::new(0.0, -height / 2.0 - h / 2.0, 0.0),
    );
    push_checked(&mut parts, floor);

    let side_x = half_w + h / 2.0;
    for (part, x) in [(HousingPart::LeftWall, -side_x), (HousingPart::RightWall, side_x)] {
        push_checked(
            &mut parts,
            WallPlacement::along_depth(
                PlacementKind::Housing(part),
                h,
                height,
                footprint.depth + 2.0 * h,
                DVec3::new(x, 0.0, 0.0),
            ),
        );
    }

    let end_z = half_d + h / 2.0;
    for (part, z) in [(HousingPart::BackWall, -end_z), (HousingPart::FrontWall, end_z)] {
        push_checked(
            &mut parts,
            WallPlacement::along_width(
                PlacementKind::Housing(part),
                h,
                height,
                footprint.width,
                DVec3::new(0.0, 0.0, z),
            ),
        );
    }

    handle(footprint, &mut parts);

    tracing::debug!(
        width = footprint.width,
        depth = footprint.depth,
        height,
        parts = parts.len(),
        "generated housing"
    );

    parts
}

fn handle(footprint: Footprint, parts: &mut Vec<WallPlacement>) {
    let HandleGeometry {
        radius,
        length,
        standoff,
    } = HandleGeometry::for_width(footprint.width);
    let side = 2.0 * radius;
    let front_face = footprint.depth / 2.0 + HOUSING_THICKNESS;

    for x in [-length / 2.0, length / 2.0] {
        push_checked(
            parts,
            WallPlacement::along_depth(
                PlacementKind::Housing(HousingPart::HandlePost),
                side,
                side,
                standoff,
                DVec3::new(x, 0.0, front_face + standoff / 2.0),
            ),
        );
    }

    push_checked(
        parts,
        WallPlacement::along_width(
            PlacementKind::Housing(HousingPart::HandleBar),
            side,
            side,
            length + side,
            DVec3::new(0.0, 0.0, front_face + standoff + radius),
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn parts_for(width: f64, depth: f64, height: f64) -> Vec<WallPlacement> {
        housing(Footprint::new(width, depth).unwrap(), height)
    }

    #[test]
    fn test_part_order_and_kinds() {
        let kinds: Vec<_> = parts_for(100.0, 80.0, 10.0)
            .iter()
            .map(|p| p.kind)
            .collect();
        let expected: Vec<_> = [
            HousingPart::Floor,
            HousingPart::LeftWall,
            HousingPart::RightWall,
            HousingPart::BackWall,
            HousingPart::FrontWall,
            HousingPart::HandlePost,
            HousingPart::HandlePost,
            HousingPart::HandleBar,
        ]
        .into_iter()
        .map(PlacementKind::Housing)
        .collect();
        assert_eq!(kinds, expected);
    }

    #[test]
    fn test_floor_below_grid() {
        let parts = parts_for(100.0, 80.0, 10.0);
        let floor = parts[0].bounds();
        assert_eq!(floor.max.y, -5.0);
        assert_eq!(floor.min.y, -10.0);
        assert_eq!(floor.min.x, -55.0);
        assert_eq!(floor.max.z, 45.0);
    }

    #[test]
    fn test_walls_enclose_footprint() {
        let parts = parts_for(100.0, 80.0, 10.0);
        assert_eq!(parts[1].bounds().max.x, -50.0);
        assert_eq!(parts[2].bounds().min.x, 50.0);
        assert_eq!(parts[3].bounds().max.z, -40.0);
        assert_eq!(parts[4].bounds().min.z, 40.0);
        assert_eq!(parts[4].bounds().min.x, -50.0);
    }

    #[test]
    fn test_handle_geometry() {
        let parts = parts_for(100.0, 80.0, 10.0);
        let geometry = HandleGeometry::for_width(100.0);
        assert_relative_eq!(geometry.radius, 5.0 / 3.0);
        assert_relative_eq!(geometry.length, 40.0);
        assert_eq!(geometry.standoff, 10.0);

        assert_eq!(parts[5].kind, PlacementKind::Housing(HousingPart::HandlePost));
        assert_eq!(parts[6].kind, PlacementKind::Housing(HousingPart::HandlePost));
        assert_relative_eq!(parts[5].center.x, -20.0);
        assert_relative_eq!(parts[6].center.x, 20.0);
        for post in [parts[5].bounds(), parts[6].bounds()] {
            assert_relative_eq!(post.min.z, 45.0);
            assert_relative_eq!(post.max.z, 55.0);
        }

        let bar = parts[7].bounds();
        assert_relative_eq!(bar.min.z, 55.0, epsilon = 1e-12);
        assert_relative_eq!(bar.max.x, 20.0 + 5.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parts_do_not_overlap() {
        let parts = parts_for(120.0, 60.0, 25.0);
        for (a, first) in parts.iter().enumerate() {
            for second in &parts[a + 1..] {
                assert!(
                    !first.bounds().overlaps(&second.bounds(), 1e-9),
                    "{:?} overlaps {:?}",
                    first.kind,
                    second.kind
                );
            }
        }
    }

    #[test]
    fn test_zero_height_keeps_floor_and_handle() {
        let parts = parts_for(100.0, 100.0, 0.0);
        // Walls vanish; floor and handle do not depend on height
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0].kind, PlacementKind::Housing(HousingPart::Floor));
    }
}

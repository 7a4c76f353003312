//! # Wall Placement
//!
//! A fully resolved box descriptor: dimensions, center and rotation about the
//! vertical axis. Placements are plain values; the scene assembler turns them
//! into meshes.
//!
//! ## Frame
//!
//! X runs along the footprint width, Z along its depth, Y is up. A box is
//! `thickness` along its local X, `height` along Y and `length` along its
//! local Z. With `rotation_y = 0` the wall runs along depth; with
//! `rotation_y = π/2` it runs along width.

use std::f64::consts::FRAC_PI_2;

use config::constants::EPSILON;
use glam::{DMat4, DVec3};
use serde::Serialize;

/// Direction an internal divider runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DividerAxis {
    /// Runs along the depth axis, separating two rows.
    Depth,
    /// Runs along the width axis, separating two cells of one row.
    Width,
}

/// Named pieces of the drawer housing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HousingPart {
    Floor,
    LeftWall,
    RightWall,
    BackWall,
    FrontWall,
    HandlePost,
    HandleBar,
}

/// What a placement is, so the assembler can pick a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "part", rename_all = "camelCase")]
pub enum PlacementKind {
    /// Frame wall on the footprint boundary.
    OuterWall,
    /// Internal wall at a cell boundary.
    Divider(DividerAxis),
    /// Part of the enclosing housing.
    Housing(HousingPart),
}

impl PlacementKind {
    /// Returns true for housing parts.
    #[inline]
    pub fn is_housing(&self) -> bool {
        matches!(self, PlacementKind::Housing(_))
    }
}

/// A positioned box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WallPlacement {
    pub kind: PlacementKind,
    /// Extent along the local X axis.
    pub thickness: f64,
    /// Extent along Y.
    pub height: f64,
    /// Extent along the local Z axis.
    pub length: f64,
    /// World-space center of the box.
    pub center: DVec3,
    /// Rotation about +Y in radians.
    pub rotation_y: f64,
}

impl WallPlacement {
    /// A wall whose length runs along the depth (Z) axis.
    pub fn along_depth(
        kind: PlacementKind,
        thickness: f64,
        height: f64,
        length: f64,
        center: DVec3,
    ) -> Self {
        Self {
            kind,
            thickness,
            height,
            length,
            center,
            rotation_y: 0.0,
        }
    }

    /// A wall whose length runs along the width (X) axis.
    pub fn along_width(
        kind: PlacementKind,
        thickness: f64,
        height: f64,
        length: f64,
        center: DVec3,
    ) -> Self {
        Self {
            rotation_y: FRAC_PI_2,
            ..Self::along_depth(kind, thickness, height, length, center)
        }
    }

    /// Box dimensions in the placement's local frame.
    #[inline]
    pub fn local_size(&self) -> DVec3 {
        DVec3::new(self.thickness, self.height, self.length)
    }

    /// Returns true if any dimension is non-positive or not finite.
    pub fn is_degenerate(&self) -> bool {
        [self.thickness, self.height, self.length]
            .iter()
            .any(|d| !d.is_finite() || *d <= EPSILON)
    }

    /// Local-to-world transform: rotate about Y, then translate to `center`.
    pub fn transform(&self) -> DMat4 {
        DMat4::from_translation(self.center) * DMat4::from_rotation_y(self.rotation_y)
    }

    /// World-space size of the axis-aligned box enclosing the placement.
    pub fn world_size(&self) -> DVec3 {
        let (sin, cos) = snap_quarter_turn(self.rotation_y);
        DVec3::new(
            cos.abs() * self.thickness + sin.abs() * self.length,
            self.height,
            sin.abs() * self.thickness + cos.abs() * self.length,
        )
    }

    /// World-space axis-aligned bounds.
    pub fn bounds(&self) -> Bounds {
        let half = self.world_size() / 2.0;
        Bounds {
            min: self.center - half,
            max: self.center + half,
        }
    }
}

/// Sine and cosine with quarter turns resolved exactly, so axis-aligned
/// walls get exact bounds.
fn snap_quarter_turn(angle: f64) -> (f64, f64) {
    let (sin, cos) = angle.sin_cos();
    let snap = |v: f64| {
        if v.abs() < EPSILON {
            0.0
        } else if (v.abs() - 1.0).abs() < EPSILON {
            v.signum()
        } else {
            v
        }
    };
    (snap(sin), snap(cos))
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: DVec3,
    pub max: DVec3,
}

impl Bounds {
    /// Returns true if the interiors of the two boxes overlap by more than
    /// `tolerance` on every axis. Boxes that only share a face do not.
    pub fn overlaps(&self, other: &Bounds, tolerance: f64) -> bool {
        let lo = self.min.max(other.min);
        let hi = self.max.min(other.max);
        let overlap = hi - lo;
        overlap.x > tolerance && overlap.y > tolerance && overlap.z > tolerance
    }

    /// Returns true if `other` lies inside this box (within `tolerance`).
    pub fn contains(&self, other: &Bounds, tolerance: f64) -> bool {
        other.min.cmpge(self.min - DVec3::splat(tolerance)).all()
            && other.max.cmple(self.max + DVec3::splat(tolerance)).all()
    }
}

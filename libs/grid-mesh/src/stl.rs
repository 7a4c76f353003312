//! # STL Export
//!
//! Binary and ASCII STL writers.
//!
//! ## Binary Format
//!
//! ```text
//! UINT8[80]    – Header
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (0)
//! end
//! ```
//!
//! Facet normals come from the triangle winding.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use config::constants::MAX_TRIANGLES;

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;

/// Binary STL header size in bytes.
pub const HEADER_SIZE: usize = 80;

/// Size of one triangle record in binary STL.
pub const TRIANGLE_SIZE: usize = 50;

const HEADER_TEXT: &[u8] = b"Binary STL generated by drawer-grid";

fn check_size(mesh: &Mesh) -> MeshResult<u32> {
    let count = mesh.triangle_count();
    if count > MAX_TRIANGLES {
        return Err(MeshError::TooManyTriangles {
            count,
            max: MAX_TRIANGLES,
        });
    }
    Ok(count as u32)
}

/// Writes `mesh` as binary STL.
pub fn write_stl_binary<W: Write>(mesh: &Mesh, mut writer: W) -> MeshResult<()> {
    let count = check_size(mesh)?;

    let mut header = [b' '; HEADER_SIZE];
    header[..HEADER_TEXT.len()].copy_from_slice(HEADER_TEXT);
    writer.write_all(&header)?;
    writer.write_all(&count.to_le_bytes())?;

    for index in 0..mesh.triangle_count() {
        let Some(corners) = mesh.triangle_positions(index) else {
            return Err(MeshError::validation(format!(
                "triangle {index} references a missing vertex"
            )));
        };
        let normal = mesh.face_normal(index);

        for v in std::iter::once(normal).chain(corners) {
            writer.write_all(&(v.x as f32).to_le_bytes())?;
            writer.write_all(&(v.y as f32).to_le_bytes())?;
            writer.write_all(&(v.z as f32).to_le_bytes())?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes `mesh` as ASCII STL.
pub fn write_stl_ascii<W: Write>(mesh: &Mesh, mut writer: W) -> MeshResult<()> {
    check_size(mesh)?;

    writeln!(writer, "solid mesh")?;
    for index in 0..mesh.triangle_count() {
        let Some(corners) = mesh.triangle_positions(index) else {
            return Err(MeshError::validation(format!(
                "triangle {index} references a missing vertex"
            )));
        };
        let n = mesh.face_normal(index);

        writeln!(writer, "  facet normal {:.6e} {:.6e} {:.6e}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in corners {
            writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }
    writeln!(writer, "endsolid mesh")?;

    writer.flush()?;
    Ok(())
}

/// Serializes `mesh` into an in-memory STL file.
pub fn to_stl_bytes(mesh: &Mesh, binary: bool) -> MeshResult<Vec<u8>> {
    let mut bytes = if binary {
        Vec::with_capacity(HEADER_SIZE + 4 + mesh.triangle_count() * TRIANGLE_SIZE)
    } else {
        Vec::new()
    };

    if binary {
        write_stl_binary(mesh, &mut bytes)?;
    } else {
        write_stl_ascii(mesh, &mut bytes)?;
    }
    Ok(bytes)
}

/// Saves `mesh` to `path`.
pub fn save_stl<P: AsRef<Path>>(mesh: &Mesh, path: P, binary: bool) -> MeshResult<()> {
    let path = path.as_ref();
    let writer = BufWriter::new(File::create(path)?);

    if binary {
        write_stl_binary(mesh, writer)?;
    } else {
        write_stl_ascii(mesh, writer)?;
    }

    tracing::debug!(
        path = %path.display(),
        triangles = mesh.triangle_count(),
        binary,
        "saved STL"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::create_box;
    use glam::DVec3;

    fn read_f32(bytes: &[u8], offset: usize) -> f32 {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&bytes[offset..offset + 4]);
        f32::from_le_bytes(raw)
    }

    #[test]
    fn test_binary_layout() {
        let mesh = create_box(DVec3::splat(2.0)).unwrap();
        let bytes = to_stl_bytes(&mesh, true).unwrap();

        assert_eq!(bytes.len(), HEADER_SIZE + 4 + 12 * TRIANGLE_SIZE);
        assert!(bytes.starts_with(HEADER_TEXT));
        assert_eq!(&bytes[HEADER_SIZE..HEADER_SIZE + 4], &12u32.to_le_bytes());

        // First facet is the -Z face
        let first = HEADER_SIZE + 4;
        assert_eq!(read_f32(&bytes, first), 0.0);
        assert_eq!(read_f32(&bytes, first + 8), -1.0);
        assert_eq!(read_f32(&bytes, first + 12), -1.0);
        assert_eq!(&bytes[first + 48..first + 50], &[0, 0]);
    }

    #[test]
    fn test_ascii_layout() {
        let mesh = create_box(DVec3::splat(2.0)).unwrap();
        let text = String::from_utf8(to_stl_bytes(&mesh, false).unwrap()).unwrap();

        assert!(text.starts_with("solid mesh\n"));
        assert!(text.trim_end().ends_with("endsolid mesh"));
        assert_eq!(text.matches("facet normal").count(), 12);
        assert_eq!(text.matches("vertex ").count(), 36);
        assert!(text.contains("  facet normal 0.000000e0 0.000000e0 -1.000000e0\n"));
    }

    #[test]
    fn test_empty_mesh() {
        let bytes = to_stl_bytes(&Mesh::new(), true).unwrap();
        assert_eq!(bytes.len(), HEADER_SIZE + 4);
        assert_eq!(
            to_stl_bytes(&Mesh::new(), false).unwrap(),
            b"solid mesh\nendsolid mesh\n"
        );
    }
}

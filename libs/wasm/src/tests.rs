//! Tests for the WASM-facing designer helpers.

use super::*;

/// Confirms the default designer lays out a 2×2 grid with housing.
#[test]
fn default_designer_layout() {
    let designer = DrawerDesigner::new();
    assert_eq!(designer.grid_placement_count(), 4);
    assert_eq!(designer.placement_count(), 12);
    assert!(!designer.is_customized());
}

/// Partial updates accept the browser store's field names.
#[test]
fn set_params_accepts_section_aliases() {
    let mut designer = DrawerDesigner::new();
    let changed = designer
        .set_params_internal(r#"{ "xSections": 3, "ySections": 3, "generateOuterWalls": true }"#)
        .expect("valid update");
    assert!(changed);
    assert_eq!(designer.grid_placement_count(), 16);

    let unchanged = designer.set_params_internal("{}").expect("empty update");
    assert!(!unchanged);
}

/// Out-of-range values surface explicit errors and leave state untouched.
#[test]
fn set_params_rejects_invalid_values() {
    let mut designer = DrawerDesigner::new();
    let err = designer
        .set_params_internal(r#"{ "wallThickness": 12 }"#)
        .unwrap_err();
    assert!(err.to_string().contains("wallThickness"));
    assert!(designer.set_params_internal("not json").is_err());
    assert_eq!(designer.session().params(), &DesignParams::default());
}

#[test]
fn resize_then_reset() {
    let mut designer = DrawerDesigner::new();
    assert!(designer.resize_cell_internal(0, 0, 70.0).unwrap());
    assert!(designer.is_customized());
    assert!(!designer.session().is_stale());

    designer.reset_internal().unwrap();
    assert!(!designer.is_customized());
}

/// Tests that render produces consistent GPU buffers.
#[test]
fn render_buffers_valid() {
    let mut designer = DrawerDesigner::from_json_internal(r#"{ "showHousing": false }"#).unwrap();
    let mesh = designer.render_internal().unwrap();

    assert_eq!(mesh.vertex_count(), 4 * 8);
    assert_eq!(mesh.triangle_count(), 4 * 12);
    assert_eq!(mesh.vertex_buffer().len(), 4 * 8 * 3);
    assert!(mesh.has_normals());
    assert_eq!(mesh.color_buffer().map(<[f32]>::len), Some(4 * 8 * 4));

    let vertex_count = mesh.vertex_count();
    for &v in mesh.vertex_buffer() {
        assert!(v.is_finite());
    }
    for &idx in mesh.index_buffer() {
        assert!(idx < vertex_count, "Index {} out of range", idx);
    }
}

#[test]
fn export_is_ascii_or_binary() {
    let mut designer = DrawerDesigner::new();
    let ascii = designer.export_stl(false).unwrap();
    assert!(ascii.starts_with(b"solid mesh"));
    let binary = designer.export_stl(true).unwrap();
    assert_eq!(binary.len(), 84 + 4 * 12 * 50);
}

#[test]
fn params_round_trip_through_json() {
    let designer = DrawerDesigner::from_json_internal(r##"{ "width": 150, "color": "#336699" }"##).unwrap();
    let json = designer.params_json().unwrap();
    let again = DrawerDesigner::from_json_internal(&json).unwrap();
    assert_eq!(again.session().params(), designer.session().params());
}

#[test]
fn render_carries_normals_and_colors() {
    let mut designer = DrawerDesigner::new();
    let mesh = designer.render_internal().unwrap();
    assert!(mesh.has_normals());
    assert!(mesh.has_colors());
    assert_eq!(designer.placement_count() * 12, mesh.triangle_count() as usize);
}

#[test]
fn colored_params_survive_json() {
    let designer =
        DrawerDesigner::from_json_internal(r##"{ "color": "#ff8000", "wallThickness": 2 }"##)
            .unwrap();
    assert_eq!(designer.session().params().color, "#ff8000");
    assert!(designer.params_json().unwrap().contains("#ff8000"));
}

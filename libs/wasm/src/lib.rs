//! WASM-facing entry points for the drawer grid designer.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. The UI owns the controls and the render loop; it pushes
//! parameter changes and resize gestures into a [`DrawerDesigner`] and pulls
//! back mesh buffers or STL bytes.
//!
//! Native tests use the `*_internal` helpers, which return Rust errors and
//! do not need a JS host.
//!
//! ```
//! let mut designer = drawer_wasm::DrawerDesigner::new();
//! designer.set_params_internal(r#"{ "xSections": 3, "ySections": 3 }"#).unwrap();
//! assert_eq!(designer.grid_placement_count(), 12);
//! ```

use drawer_design::{DesignParams, DesignResult, DesignSession, ParamsUpdate};
use wasm_bindgen::prelude::*;

mod mesh_handle;

pub use mesh_handle::MeshHandle;

/// Installs the panic hook and the console tracing subscriber once the
/// module is instantiated.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("drawer designer initialized");
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// The designer state held by the page.
///
/// Every mutating call leaves the placement list current, so `render()` and
/// `exportStl()` always reflect the last accepted change.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const designer = new DrawerDesigner();
/// // designer.setParams('{"width": 150, "wallThickness": 2}');
/// // designer.resizeCell(0, 0, 70);
/// // const mesh = designer.render();
/// // const stl = designer.exportStl(false);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct DrawerDesigner {
    session: DesignSession,
}

#[wasm_bindgen]
impl DrawerDesigner {
    /// Creates a designer with the default parameters.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a designer from a full or partial parameter JSON object.
    ///
    /// # Errors
    /// Returns a JavaScript error with a readable message if the JSON is
    /// malformed or a value is out of range.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(params: &str) -> Result<DrawerDesigner, JsValue> {
        Self::from_json_internal(params).map_err(to_js)
    }

    /// Applies a partial parameter update. Returns true if anything changed.
    #[wasm_bindgen(js_name = setParams)]
    pub fn set_params(&mut self, update: &str) -> Result<bool, JsValue> {
        self.set_params_internal(update).map_err(to_js)
    }

    /// Resizes one cell along the depth axis. Returns true if the partition
    /// changed.
    #[wasm_bindgen(js_name = resizeCell)]
    pub fn resize_cell(&mut self, row: usize, col: usize, size: f64) -> Result<bool, JsValue> {
        self.resize_cell_internal(row, col, size).map_err(to_js)
    }

    /// Discards every cell edit.
    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.reset_internal().map_err(to_js)
    }

    /// True once a cell has been resized away from the uniform layout.
    #[wasm_bindgen(js_name = isCustomized)]
    pub fn is_customized(&self) -> bool {
        self.session.is_customized()
    }

    /// Current parameters as JSON.
    #[wasm_bindgen(js_name = paramsJson)]
    pub fn params_json(&self) -> Result<String, JsValue> {
        self.session.params().to_json().map_err(to_js)
    }

    /// Current placement list as JSON, for hosts that build their own boxes.
    #[wasm_bindgen(js_name = placementsJson)]
    pub fn placements_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.placements()).map_err(to_js)
    }

    /// Number of placements in the current layout, housing included.
    #[wasm_bindgen(js_name = placementCount)]
    pub fn placement_count(&self) -> usize {
        self.session.placements().len()
    }

    /// Builds the display mesh for every placement.
    pub fn render(&mut self) -> Result<MeshHandle, JsValue> {
        self.render_internal().map_err(to_js)
    }

    /// Serializes the grid as STL (binary or ASCII) for download.
    #[wasm_bindgen(js_name = exportStl)]
    pub fn export_stl(&mut self, binary: bool) -> Result<Vec<u8>, JsValue> {
        self.session.export_stl(binary).map_err(to_js)
    }
}

impl DrawerDesigner {
    /// Host-only constructor returning Rust errors.
    pub fn from_json_internal(params: &str) -> DesignResult<Self> {
        let params = DesignParams::from_json(params)?;
        Ok(Self {
            session: DesignSession::new(params)?,
        })
    }

    pub fn set_params_internal(&mut self, update: &str) -> DesignResult<bool> {
        let update = ParamsUpdate::from_json(update)?;
        let outcome = self.session.update(&update)?;
        self.session.refresh();
        Ok(outcome != drawer_design::UpdateOutcome::Unchanged)
    }

    pub fn resize_cell_internal(&mut self, row: usize, col: usize, size: f64) -> DesignResult<bool> {
        let outcome = self.session.resize_cell(row, col, size)?;
        self.session.refresh();
        Ok(outcome.is_applied())
    }

    pub fn reset_internal(&mut self) -> DesignResult<()> {
        self.session.reset()?;
        self.session.refresh();
        Ok(())
    }

    pub fn render_internal(&mut self) -> DesignResult<MeshHandle> {
        let scene = self.session.scene()?;
        Ok(MeshHandle::from_mesh(&scene.render_mesh()))
    }

    /// Number of outer walls and dividers, housing excluded.
    pub fn grid_placement_count(&self) -> usize {
        self.session
            .placements()
            .iter()
            .filter(|p| !p.kind.is_housing())
            .count()
    }

    pub fn session(&self) -> &DesignSession {
        &self.session
    }
}

#[cfg(test)]
mod tests;

//! The owned editor session.
//!
//! A [`TileEditor`] bundles the document, its history, the active brush and
//! the pencil tool behind the surface a UI shell drives: brush selection,
//! pointer events, undo/redo, and export. Everything runs synchronously on
//! the caller's thread; events are expected in delivery order.

use tile_engine::{EngineResult, Position, TileId, formats};

use crate::editor::{CellDiff, EditState, UndoState};
use crate::options::TileEditorOptions;
use crate::tools::PencilTool;

pub struct TileEditor {
    options: TileEditorOptions,
    state: EditState,
    pencil: PencilTool,
    brush: TileId,
}

impl Default for TileEditor {
    fn default() -> Self {
        Self::new(TileEditorOptions::default())
    }
}

impl TileEditor {
    pub fn new(options: TileEditorOptions) -> Self {
        Self {
            options,
            state: EditState::new(options.width, options.height),
            pencil: PencilTool::new(options.tile_size_px),
            brush: TileId(0x01),
        }
    }

    pub fn options(&self) -> &TileEditorOptions {
        &self.options
    }

    // === Brush selection ===

    /// Select the active paint tool. Any 8-bit value is accepted; `0x00` is
    /// the eraser.
    pub fn set_brush(&mut self, brush: TileId) {
        self.brush = brush;
    }

    pub fn brush(&self) -> TileId {
        self.brush
    }

    // === Pointer events ===

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.pencil.begin(&mut self.state, self.brush, (x, y));
    }

    /// Pointer movement; `dx`/`dy` is the movement since the previous event.
    pub fn pointer_moved(&mut self, x: f32, y: f32, dx: f32, dy: f32) {
        self.pencil.drag(&mut self.state, self.brush, (x, y), (dx, dy));
    }

    pub fn pointer_up(&mut self) {
        self.pencil.end(&mut self.state);
    }

    /// A cancelled gesture commits its partial edits like a normal release.
    pub fn pointer_cancelled(&mut self) {
        self.pencil.end(&mut self.state);
    }

    pub fn is_dragging(&self) -> bool {
        self.pencil.is_dragging()
    }

    /// Cells changed by the in-progress stroke, for highlight rendering.
    pub fn in_progress_cells(&self) -> &[CellDiff] {
        self.pencil.in_progress_cells()
    }

    // === History ===

    pub fn undo(&mut self) -> EngineResult<()> {
        self.state.undo()
    }

    pub fn redo(&mut self) -> EngineResult<()> {
        self.state.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state.can_redo()
    }

    /// Erase the whole document as one undoable operation.
    pub fn clear(&mut self) -> EngineResult<()> {
        self.state.clear()
    }

    // === Document access ===

    pub fn get_tile(&self, x: i32, y: i32) -> TileId {
        self.state.get_tilemap().get_tile(Position::new(x, y))
    }

    pub fn width(&self) -> i32 {
        self.state.get_tilemap().width()
    }

    pub fn height(&self) -> i32 {
        self.state.get_tilemap().height()
    }

    pub fn get_edit_state(&self) -> &EditState {
        &self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    pub fn mark_saved(&mut self) {
        self.state.mark_saved()
    }

    // === Export / import ===

    /// The document in export text form (two lowercase hex digits per cell,
    /// one line per row). Clipboard I/O is the caller's concern.
    pub fn serialize(&self) -> String {
        formats::to_export_string(self.state.get_tilemap())
    }

    /// Replace the document from export text. Drops all history; the loaded
    /// document starts clean.
    pub fn deserialize(&mut self, text: &str) -> EngineResult<()> {
        let map = formats::from_export_string(text)?;
        self.state.load_tilemap(map);
        Ok(())
    }
}

//! Pencil (freehand painting) tool.
//!
//! Captures one continuous pointer gesture as a stroke: pointer-down fixes
//! the stroke's edit mode from the tile under the pointer, every sampled
//! position resolves one cell edit, and pointer-up (or cancel) commits the
//! recorded diffs to the edit state as a single undoable unit.

use tile_engine::{Position, TileId, TileMap};

use crate::brushes::{EditMode, apply_edit_mode, decide_edit_mode};
use crate::{CellDiff, EditState};

/// State for freehand pencil strokes.
pub struct PencilTool {
    /// Whether a stroke is in progress
    is_drawing: bool,
    /// Mode fixed at pointer-down for the whole stroke
    edit_mode: Option<EditMode>,
    /// Diffs recorded so far in the current stroke
    in_progress: Vec<CellDiff>,

    tile_size_px: f32,
}

impl PencilTool {
    pub fn new(tile_size_px: u32) -> Self {
        Self {
            is_drawing: false,
            edit_mode: None,
            in_progress: Vec::new(),
            tile_size_px: tile_size_px.max(1) as f32,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.is_drawing
    }

    /// The cells changed so far by the in-progress stroke, for highlight
    /// rendering.
    pub fn in_progress_cells(&self) -> &[CellDiff] {
        &self.in_progress
    }

    /// Start a stroke at a pixel position. Ignored while a stroke is
    /// already in progress, so overlapping pointers cannot interleave.
    pub fn begin(&mut self, state: &mut EditState, brush: TileId, pos: (f32, f32)) {
        if self.is_drawing {
            return;
        }
        self.is_drawing = true;

        let cell = self.cell_at(state.get_tilemap(), pos);
        let initial_tile = state.get_tilemap().get_tile(cell);
        self.edit_mode = Some(decide_edit_mode(brush, initial_tile));
        self.apply_cell_edit(state, brush, cell);
    }

    /// Continue a stroke. `delta` is the pointer movement since the last
    /// event.
    ///
    /// The segment from the previous position to the current one is
    /// subdivided into half-tile steps so that a pointer moving faster than
    /// the event rate still touches every cell its path crosses. Cells the
    /// stroke already matches resolve to no-ops, so revisits cost nothing.
    pub fn drag(&mut self, state: &mut EditState, brush: TileId, pos: (f32, f32), delta: (f32, f32)) {
        if !self.is_drawing {
            return;
        }

        let half_tile = (self.tile_size_px / 2.0).max(1.0);
        let max_axial_movement = delta.0.abs().max(delta.1.abs());
        let steps = ((max_axial_movement / half_tile).ceil() as i32).max(1);
        for step in 0..steps {
            let t = step as f32 / steps as f32;
            let sample = (pos.0 - delta.0 * t, pos.1 - delta.1 * t);
            let cell = self.cell_at(state.get_tilemap(), sample);
            self.apply_cell_edit(state, brush, cell);
        }
    }

    /// Finish the stroke and commit whatever it changed. Cancellation ends
    /// up here too: an interrupted stroke keeps its partial edits.
    pub fn end(&mut self, state: &mut EditState) {
        if !self.is_drawing {
            return;
        }
        self.is_drawing = false;
        self.edit_mode = None;

        let diffs = std::mem::take(&mut self.in_progress);
        state.commit_stroke(diffs);
    }

    /// Resolve one cell. Only a real change is written and recorded; no-op
    /// edits must not appear in the undo record.
    fn apply_cell_edit(&mut self, state: &mut EditState, brush: TileId, cell: Position) -> bool {
        let Some(mode) = self.edit_mode else {
            return false;
        };
        let tile = state.get_tilemap().get_tile(cell);
        let result = apply_edit_mode(brush, tile, mode);
        if result == tile {
            return false;
        }
        state.get_tilemap_mut().set_tile(cell, result);
        self.in_progress.push(CellDiff {
            pos: cell,
            from: tile,
            to: result,
        });
        true
    }

    fn cell_at(&self, map: &TileMap, pos: (f32, f32)) -> Position {
        let cell = Position::new((pos.0 / self.tile_size_px).floor() as i32, (pos.1 / self.tile_size_px).floor() as i32);
        map.clamp(cell)
    }
}

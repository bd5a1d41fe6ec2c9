use tile_engine::EngineResult;

use super::{CellDiff, ClearTileMap, EditState, PaintStroke, UndoOperation};

impl EditState {
    /// Commit a completed stroke as one undoable unit.
    ///
    /// The cells were already written during the live pass, so the
    /// operation is pushed without re-executing it. Empty strokes never
    /// reach the history.
    pub fn commit_stroke(&mut self, diffs: Vec<CellDiff>) {
        if diffs.is_empty() {
            return;
        }
        self.push_plain_undo(Box::new(PaintStroke::new(diffs)));
    }

    /// Erase the whole document as one undoable operation. Does nothing on
    /// an already-empty document.
    pub fn clear(&mut self) -> EngineResult<()> {
        if self.get_tilemap().is_empty() {
            return Ok(());
        }
        let old_cells = self.get_tilemap().cells().to_vec();
        let mut op = ClearTileMap::new(old_cells);
        op.redo(self)?;
        self.push_plain_undo(Box::new(op));
        Ok(())
    }
}

use tile_engine::EngineResult;

use super::EditState;

/// Undo/redo surface exposed to the UI layer. The queries drive button
/// affordances; calling `undo`/`redo` past the boundary is a defined no-op.
pub trait UndoState {
    /// Get description of the next undo operation
    fn undo_description(&self) -> Option<String>;

    /// Check if undo is available
    fn can_undo(&self) -> bool;

    /// Perform undo operation
    fn undo(&mut self) -> EngineResult<()>;

    /// Get description of the next redo operation
    fn redo_description(&self) -> Option<String>;

    /// Check if redo is available
    fn can_redo(&self) -> bool;

    /// Perform redo operation
    fn redo(&mut self) -> EngineResult<()>;
}

/// One committed, replayable unit of editing.
pub trait UndoOperation: Send + Sync {
    /// Get a description of this operation for display
    fn get_description(&self) -> String;

    /// Undo this operation
    fn undo(&mut self, state: &mut EditState) -> EngineResult<()>;

    /// Redo this operation
    fn redo(&mut self, state: &mut EditState) -> EngineResult<()>;

    /// Whether this operation changes data (affects the dirty flag)
    fn changes_data(&self) -> bool {
        true
    }
}

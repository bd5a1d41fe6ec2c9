pub mod undo_stack;
pub use undo_stack::*;

mod undo_operations;
pub use undo_operations::*;

mod edit_operations;

use tile_engine::{EngineResult, TileMap};

/// The editing model: the document plus its history.
///
/// History is two stacks of boxed operations. Committing pushes onto the
/// undo stack and clears the redo stack, which is the linear-undo rule:
/// anything that was available to redo is discarded by a new edit. Both
/// stacks grow without bound for the session.
pub struct EditState {
    tilemap: TileMap,

    undo_stack: Vec<Box<dyn UndoOperation>>,
    redo_stack: Vec<Box<dyn UndoOperation>>,

    is_dirty: bool,
}

impl EditState {
    pub fn new(width: i32, height: i32) -> Self {
        Self::from_tilemap(TileMap::new(width, height))
    }

    pub fn from_tilemap(tilemap: TileMap) -> Self {
        Self {
            tilemap,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            is_dirty: false,
        }
    }

    pub fn get_tilemap(&self) -> &TileMap {
        &self.tilemap
    }

    pub(crate) fn get_tilemap_mut(&mut self) -> &mut TileMap {
        &mut self.tilemap
    }

    /// Replace the document, dropping all history. Used by import.
    pub fn load_tilemap(&mut self, tilemap: TileMap) {
        self.tilemap = tilemap;
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.is_dirty = false;
    }

    /// Whether the document has changes since the last `mark_saved`.
    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn mark_saved(&mut self) {
        self.is_dirty = false;
    }

    pub fn undo_stack_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_stack_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub(crate) fn push_plain_undo(&mut self, op: Box<dyn UndoOperation>) {
        if op.changes_data() {
            self.is_dirty = true;
        }
        self.undo_stack.push(op);
        self.redo_stack.clear();
    }
}

impl UndoState for EditState {
    fn undo_description(&self) -> Option<String> {
        self.undo_stack.last().map(|op| op.get_description())
    }

    fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    fn undo(&mut self) -> EngineResult<()> {
        let Some(mut op) = self.undo_stack.pop() else {
            return Ok(());
        };
        op.undo(self)?;
        self.redo_stack.push(op);
        Ok(())
    }

    fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(|op| op.get_description())
    }

    fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    fn redo(&mut self) -> EngineResult<()> {
        let Some(mut op) = self.redo_stack.pop() else {
            return Ok(());
        };
        op.redo(self)?;
        self.undo_stack.push(op);
        Ok(())
    }
}

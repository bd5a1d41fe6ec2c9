use serde::{Deserialize, Serialize};
use tile_engine::{EngineResult, Position, TileId};

use super::{EditState, UndoOperation};

/// One cell's recorded change inside a stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellDiff {
    pub pos: Position,
    pub from: TileId,
    pub to: TileId,
}

/// A completed pencil stroke: the ordered cell diffs produced between one
/// pointer-down and the matching pointer-up.
///
/// Undo writes every `from` back, redo every `to`, both in stored order.
/// Diffs in one stroke only touch cells written by the stroke's own forward
/// pass, so the order is not load-bearing, but stored order is the contract.
pub struct PaintStroke {
    diffs: Vec<CellDiff>,
}

impl PaintStroke {
    pub fn new(diffs: Vec<CellDiff>) -> Self {
        Self { diffs }
    }
}

impl UndoOperation for PaintStroke {
    fn get_description(&self) -> String {
        "Paint stroke".to_string()
    }

    fn undo(&mut self, state: &mut EditState) -> EngineResult<()> {
        for diff in &self.diffs {
            state.get_tilemap_mut().set_tile(diff.pos, diff.from);
        }
        Ok(())
    }

    fn redo(&mut self, state: &mut EditState) -> EngineResult<()> {
        for diff in &self.diffs {
            state.get_tilemap_mut().set_tile(diff.pos, diff.to);
        }
        Ok(())
    }
}

/// Whole-document erase.
pub struct ClearTileMap {
    old_cells: Vec<TileId>,
}

impl ClearTileMap {
    pub fn new(old_cells: Vec<TileId>) -> Self {
        Self { old_cells }
    }
}

impl UndoOperation for ClearTileMap {
    fn get_description(&self) -> String {
        "Clear".to_string()
    }

    fn undo(&mut self, state: &mut EditState) -> EngineResult<()> {
        let width = state.get_tilemap().width();
        for (i, &tile) in self.old_cells.iter().enumerate() {
            let pos = Position::new(i as i32 % width, i as i32 / width);
            state.get_tilemap_mut().set_tile(pos, tile);
        }
        Ok(())
    }

    fn redo(&mut self, state: &mut EditState) -> EngineResult<()> {
        state.get_tilemap_mut().clear();
        Ok(())
    }
}

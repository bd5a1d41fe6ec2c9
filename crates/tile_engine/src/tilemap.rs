use crate::{Position, TileId};

/// The document: a fixed-size grid of tile values, row-major, default empty.
///
/// The map is the sole owner of the visible document state. It is mutated
/// only through coordinate-indexed writes from the pencil tool (live
/// editing) or from undo/redo replay.
#[derive(Clone, Debug, PartialEq)]
pub struct TileMap {
    width: i32,
    height: i32,
    tiles: Vec<TileId>,
}

impl TileMap {
    /// Create an empty map. Dimensions are fixed for the map's lifetime.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            tiles: vec![TileId::EMPTY; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    /// Clamp a coordinate into the grid.
    pub fn clamp(&self, pos: Position) -> Position {
        Position::new(pos.x.clamp(0, self.width - 1), pos.y.clamp(0, self.height - 1))
    }

    /// Tile at `pos`; empty for out-of-range coordinates.
    pub fn get_tile(&self, pos: impl Into<Position>) -> TileId {
        let pos = pos.into();
        if !self.contains(pos) {
            return TileId::EMPTY;
        }
        self.tiles[(pos.y * self.width + pos.x) as usize]
    }

    /// Write a tile. Out-of-range writes are dropped; callers clamp first.
    pub fn set_tile(&mut self, pos: impl Into<Position>, tile: TileId) {
        let pos = pos.into();
        if !self.contains(pos) {
            log::warn!("set_tile out of range: {pos}");
            return;
        }
        self.tiles[(pos.y * self.width + pos.x) as usize] = tile;
    }

    /// Row-major cell storage, for rendering and snapshots.
    pub fn cells(&self) -> &[TileId] {
        &self.tiles
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.iter().all(|t| t.is_empty())
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.tiles.fill(TileId::EMPTY);
    }
}

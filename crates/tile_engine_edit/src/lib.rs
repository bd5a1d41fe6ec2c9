#![warn(clippy::all)]
#![allow(clippy::cast_sign_loss, clippy::cast_possible_truncation, clippy::must_use_candidate)]

mod editor;
pub use editor::*;

pub mod brushes;

pub mod tools;

mod options;
pub use options::*;

mod session;
pub use session::*;

// Re-export all necessary types from tile_engine
pub use tile_engine::{
    BASIC_BRUSHES, COMPLEX_BRUSHES, CURVE_BRUSHES, CurveShape, EngineError, EngineResult, Position, Result, SegmentMask, TileCategory, TileId, TileMap,
    TileShape, formats, tile_shapes,
};

//! Brush classification and edit resolution.
//!
//! A brush id lives in the same value space as a tile id. At the start of a
//! stroke the brush and the tile under the pointer decide the stroke's
//! [`EditMode`]; the mode then stays fixed until the pointer is released, so
//! dragging never flips between adding and removing mid-stroke. Each cell
//! the stroke touches is resolved with [`apply_edit_mode`], which is
//! idempotent under a fixed mode and brush.

use serde::{Deserialize, Serialize};
use tile_engine::{TileCategory, TileId};

/// Classification of the active brush. The eraser (`0x00`) sits outside the
/// three structural tile categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrushKind {
    Eraser,
    Basic,
    Curve,
    Complex,
}

/// What a stroke does to the cells it touches. Decided once per stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditMode {
    Add,
    Remove,
    Erase,
}

pub fn classify_brush(brush: TileId) -> BrushKind {
    if brush.is_empty() {
        return BrushKind::Eraser;
    }
    match brush.category() {
        TileCategory::Basic => BrushKind::Basic,
        TileCategory::Curve => BrushKind::Curve,
        TileCategory::Complex => BrushKind::Complex,
    }
}

/// Decide a stroke's mode from the brush and the tile under the initial
/// pointer position.
///
/// A brush flips to `Remove` when the initial tile already carries what the
/// brush would paint: every bit of a basic brush's mask, the exact curve
/// value, or a complex brush's diagonal code. Curve tiles never match a line
/// brush.
pub fn decide_edit_mode(brush: TileId, initial_tile: TileId) -> EditMode {
    match classify_brush(brush) {
        BrushKind::Eraser => EditMode::Erase,
        BrushKind::Basic => {
            if !initial_tile.is_curve() && initial_tile.segment_mask().contains(brush.segment_mask()) {
                EditMode::Remove
            } else {
                EditMode::Add
            }
        }
        BrushKind::Curve => {
            if initial_tile == brush {
                EditMode::Remove
            } else {
                EditMode::Add
            }
        }
        BrushKind::Complex => {
            if !initial_tile.is_curve() && initial_tile.diagonal_code() == brush.diagonal_code() {
                EditMode::Remove
            } else {
                EditMode::Add
            }
        }
    }
}

/// Resolve one cell edit. Pure and total; repeated application with the same
/// brush and mode is a no-op after the first.
///
/// `Add`/`Remove` with the eraser brush cannot come out of
/// [`decide_edit_mode`]; that combination is reported loudly and leaves the
/// tile untouched so the undo record never sees a fabricated change.
pub fn apply_edit_mode(brush: TileId, tile: TileId, mode: EditMode) -> TileId {
    match mode {
        EditMode::Erase => TileId::EMPTY,

        EditMode::Add => match classify_brush(brush) {
            // A curve occupies the whole cell; painting any brush over a
            // curve replaces the curve.
            BrushKind::Curve => brush,
            BrushKind::Basic | BrushKind::Complex if tile.is_curve() => brush,
            BrushKind::Basic => tile.with_segment_mask(tile.segment_mask() | brush.segment_mask()),
            BrushKind::Complex => TileId(brush.diagonal_code() | tile.segment_mask().bits()),
            BrushKind::Eraser => invalid_mode(brush, tile, mode),
        },

        EditMode::Remove => match classify_brush(brush) {
            // Removal never crosses categories: a curve brush leaves line
            // tiles alone and line brushes leave curve tiles alone.
            BrushKind::Curve => {
                if tile == brush {
                    TileId::EMPTY
                } else {
                    tile
                }
            }
            BrushKind::Basic | BrushKind::Complex if tile.is_curve() => tile,
            BrushKind::Basic => tile.with_segment_mask(tile.segment_mask() - brush.segment_mask()),
            BrushKind::Complex => {
                if tile.diagonal_code() == brush.diagonal_code() {
                    TileId(tile.segment_mask().bits())
                } else {
                    tile
                }
            }
            BrushKind::Eraser => invalid_mode(brush, tile, mode),
        },
    }
}

fn invalid_mode(brush: TileId, tile: TileId, mode: EditMode) -> TileId {
    log::error!("edit mode {mode:?} is unreachable for brush {brush} on tile {tile}");
    debug_assert!(false, "edit mode {mode:?} is unreachable for the eraser brush");
    tile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify_brush(TileId(0x00)), BrushKind::Eraser);
        assert_eq!(classify_brush(TileId(0x01)), BrushKind::Basic);
        assert_eq!(classify_brush(TileId(0x13)), BrushKind::Curve);
        assert_eq!(classify_brush(TileId(0xA0)), BrushKind::Complex);
    }

    #[test]
    fn test_eraser_always_erases() {
        assert_eq!(decide_edit_mode(TileId(0x00), TileId(0x00)), EditMode::Erase);
        assert_eq!(decide_edit_mode(TileId(0x00), TileId(0x95)), EditMode::Erase);
        assert_eq!(apply_edit_mode(TileId(0x00), TileId(0x95), EditMode::Erase), TileId::EMPTY);
    }
}

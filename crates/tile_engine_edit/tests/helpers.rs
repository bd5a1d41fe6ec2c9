//! Shared test helpers

#![allow(dead_code)]

use tile_engine_edit::{TileEditor, TileEditorOptions, TileId};

pub const TILE: f32 = 32.0;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Create an editor over a small grid with the default 32 px tiles
pub fn create_test_editor(width: i32, height: i32) -> TileEditor {
    init_logging();
    TileEditor::new(TileEditorOptions {
        width,
        height,
        tile_size_px: TILE as u32,
    })
}

/// Pixel center of a cell
pub fn center(x: i32, y: i32) -> (f32, f32) {
    (x as f32 * TILE + TILE / 2.0, y as f32 * TILE + TILE / 2.0)
}

/// One click (press and release) on a cell with the active brush
pub fn click(editor: &mut TileEditor, x: i32, y: i32) {
    let (px, py) = center(x, y);
    editor.pointer_down(px, py);
    editor.pointer_up();
}

/// Tiles of every category, for exhaustive-ish property sweeps
pub fn sample_tiles() -> Vec<TileId> {
    let mut tiles: Vec<TileId> = (0x00..=0x0F).map(TileId).collect();
    tiles.extend((0x11..=0x15).map(TileId));
    tiles.extend([0x80, 0x81, 0x95, 0xA3, 0xF0, 0xFF].map(TileId));
    tiles
}

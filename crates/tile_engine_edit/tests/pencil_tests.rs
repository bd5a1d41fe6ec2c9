//! Stroke capture tests
//!
//! Pointer gestures drive the pencil tool through the session surface:
//! press fixes the mode, movement is oversampled so fast drags cannot skip
//! cells, release commits exactly the cells that changed.

mod helpers;

use helpers::{center, click, create_test_editor};
use pretty_assertions::assert_eq;
use tile_engine_edit::TileId;

#[test]
fn test_click_paints_single_cell() {
    let mut editor = create_test_editor(12, 16);
    click(&mut editor, 2, 3);

    assert_eq!(editor.get_tile(2, 3), TileId(0x01));
    assert_eq!(editor.get_tile(3, 2), TileId::EMPTY);
    assert!(editor.can_undo());
    assert_eq!(editor.get_edit_state().undo_stack_len(), 1);
}

#[test]
fn test_second_click_toggles_cell_off() {
    let mut editor = create_test_editor(12, 16);
    click(&mut editor, 2, 3);
    click(&mut editor, 2, 3);

    // The second stroke re-decides its mode against the now-set tile.
    assert_eq!(editor.get_tile(2, 3), TileId::EMPTY);
    assert_eq!(editor.get_edit_state().undo_stack_len(), 2);
}

#[test]
fn test_fast_drag_touches_every_crossed_cell() {
    let mut editor = create_test_editor(12, 16);
    editor.set_brush(TileId(0x02));

    let (x0, y0) = center(0, 0);
    editor.pointer_down(x0, y0);
    // One event jumping 200 px to the right, far more than a cell per event.
    editor.pointer_moved(x0 + 200.0, y0, 200.0, 0.0);
    editor.pointer_up();

    for x in 0..=6 {
        assert_eq!(editor.get_tile(x, 0), TileId(0x02), "cell {x} skipped");
    }
    assert_eq!(editor.get_tile(7, 0), TileId::EMPTY);

    // The whole drag is one stroke.
    assert_eq!(editor.get_edit_state().undo_stack_len(), 1);
    editor.undo().unwrap();
    for x in 0..=6 {
        assert_eq!(editor.get_tile(x, 0), TileId::EMPTY);
    }
}

#[test]
fn test_reentrant_pointer_down_is_ignored() {
    let mut editor = create_test_editor(12, 16);
    let (x0, y0) = center(0, 0);
    editor.pointer_down(x0, y0);

    let (x1, y1) = center(5, 5);
    editor.pointer_down(x1, y1);

    assert_eq!(editor.get_tile(5, 5), TileId::EMPTY);
    editor.pointer_up();
    assert_eq!(editor.get_tile(0, 0), TileId(0x01));
    assert_eq!(editor.get_edit_state().undo_stack_len(), 1);
}

#[test]
fn test_move_while_idle_is_noop() {
    let mut editor = create_test_editor(12, 16);
    let (x, y) = center(3, 3);
    editor.pointer_moved(x, y, 10.0, 10.0);
    editor.pointer_up();

    assert_eq!(editor.get_tile(3, 3), TileId::EMPTY);
    assert!(!editor.can_undo());
}

#[test]
fn test_cancel_commits_partial_stroke() {
    let mut editor = create_test_editor(12, 16);
    let (x0, y0) = center(0, 0);
    editor.pointer_down(x0, y0);
    let (x1, y1) = center(1, 0);
    editor.pointer_moved(x1, y1, x1 - x0, 0.0);
    editor.pointer_cancelled();

    assert_eq!(editor.get_tile(0, 0), TileId(0x01));
    assert_eq!(editor.get_tile(1, 0), TileId(0x01));
    assert!(editor.can_undo());

    editor.undo().unwrap();
    assert_eq!(editor.get_tile(0, 0), TileId::EMPTY);
    assert_eq!(editor.get_tile(1, 0), TileId::EMPTY);
}

#[test]
fn test_mode_is_fixed_for_the_whole_stroke() {
    let mut editor = create_test_editor(12, 16);
    click(&mut editor, 2, 0);

    // Add-mode stroke over an already-set cell leaves it alone instead of
    // flipping to removal mid-drag.
    let (x0, y0) = center(0, 0);
    editor.pointer_down(x0, y0);
    for x in 1..=3 {
        let (px, py) = center(x, 0);
        editor.pointer_moved(px, py, helpers::TILE, 0.0);
    }
    editor.pointer_up();

    for x in 0..=3 {
        assert_eq!(editor.get_tile(x, 0), TileId(0x01));
    }

    // Undoing the drag restores the pre-stroke state: the click survives.
    editor.undo().unwrap();
    assert_eq!(editor.get_tile(0, 0), TileId::EMPTY);
    assert_eq!(editor.get_tile(1, 0), TileId::EMPTY);
    assert_eq!(editor.get_tile(2, 0), TileId(0x01));
    assert_eq!(editor.get_tile(3, 0), TileId::EMPTY);
}

#[test]
fn test_noop_stroke_is_not_committed() {
    let mut editor = create_test_editor(12, 16);
    editor.set_brush(TileId::EMPTY);
    click(&mut editor, 4, 4);

    // Erasing an empty cell changes nothing, so no stroke reaches history.
    assert!(!editor.can_undo());
    assert_eq!(editor.get_edit_state().undo_stack_len(), 0);
}

#[test]
fn test_pointer_coordinates_are_clamped() {
    let mut editor = create_test_editor(12, 16);
    editor.pointer_down(-100.0, -250.0);
    editor.pointer_up();
    assert_eq!(editor.get_tile(0, 0), TileId(0x01));

    editor.pointer_down(10_000.0, 10_000.0);
    editor.pointer_up();
    assert_eq!(editor.get_tile(11, 15), TileId(0x01));
}

#[test]
fn test_in_progress_cells_reported_during_stroke() {
    let mut editor = create_test_editor(12, 16);
    let (x0, y0) = center(0, 0);
    editor.pointer_down(x0, y0);

    assert!(editor.is_dragging());
    assert_eq!(editor.in_progress_cells().len(), 1);
    assert_eq!(editor.in_progress_cells()[0].to, TileId(0x01));

    editor.pointer_up();
    assert!(!editor.is_dragging());
    assert!(editor.in_progress_cells().is_empty());
}

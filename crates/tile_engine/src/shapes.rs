//! Per-tile draw geometry.
//!
//! Renderers consume this instead of decoding tile bytes themselves: a tile
//! value maps to a list of primitives in unit-cell coordinates, `(0, 0)` at
//! the cell's top-left corner and `(1, 1)` at its bottom-right. A backend
//! scales by its tile pixel size and strokes the result.

use std::f32::consts::PI;

use crate::{CurveShape, SegmentMask, TileCategory, TileId};

/// One stroke primitive of a tile, in unit-cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TileShape {
    Line { from: (f32, f32), to: (f32, f32) },
    Circle { center: (f32, f32), radius: f32 },
    /// A quarter arc spanning `start_angle..start_angle + PI/2`,
    /// counter-clockwise with the y axis pointing down.
    QuarterArc {
        center: (f32, f32),
        radius: f32,
        start_angle: f32,
    },
}

/// The primitives a tile draws. Empty for `TileId::EMPTY`.
pub fn tile_shapes(tile: TileId) -> Vec<TileShape> {
    let mut shapes = Vec::new();

    if let Some(curve) = tile.curve_shape() {
        shapes.push(curve_shape_geometry(curve));
        return shapes;
    }

    let mask = tile.segment_mask();
    if mask.contains(SegmentMask::LEFT_EDGE) {
        shapes.push(TileShape::Line {
            from: (0.0, 0.0),
            to: (0.0, 1.0),
        });
    }
    if mask.contains(SegmentMask::TOP_EDGE) {
        shapes.push(TileShape::Line {
            from: (0.0, 0.0),
            to: (1.0, 0.0),
        });
    }
    if mask.contains(SegmentMask::DOWN_DIAGONAL) {
        shapes.push(TileShape::Line {
            from: (0.0, 0.0),
            to: (1.0, 1.0),
        });
    }
    if mask.contains(SegmentMask::UP_DIAGONAL) {
        shapes.push(TileShape::Line {
            from: (0.0, 1.0),
            to: (1.0, 0.0),
        });
    }

    if tile.category() == TileCategory::Complex {
        if let Some(line) = diagonal_geometry(tile.diagonal_code()) {
            shapes.push(line);
        }
    }

    shapes
}

fn curve_shape_geometry(curve: CurveShape) -> TileShape {
    match curve {
        CurveShape::FullCircle => TileShape::Circle {
            center: (0.5, 0.5),
            radius: 0.5,
        },
        CurveShape::QuarterSe => TileShape::QuarterArc {
            center: (1.0, 1.0),
            radius: 1.0,
            start_angle: PI,
        },
        CurveShape::QuarterSw => TileShape::QuarterArc {
            center: (0.0, 1.0),
            radius: 1.0,
            start_angle: PI * 1.5,
        },
        CurveShape::QuarterNe => TileShape::QuarterArc {
            center: (1.0, 0.0),
            radius: 1.0,
            start_angle: PI * 0.5,
        },
        CurveShape::QuarterNw => TileShape::QuarterArc {
            center: (0.0, 0.0),
            radius: 1.0,
            start_angle: 0.0,
        },
    }
}

/// The eight half-cell diagonals keyed by high-nibble code.
fn diagonal_geometry(code: u8) -> Option<TileShape> {
    let (from, to) = match code {
        0x80 => ((0.0, 0.0), (0.5, 1.0)),
        0x90 => ((0.0, 0.0), (1.0, 0.5)),
        0xA0 => ((0.0, 0.5), (1.0, 0.0)),
        0xB0 => ((0.5, 1.0), (1.0, 0.0)),
        0xC0 => ((0.5, 0.0), (1.0, 1.0)),
        0xD0 => ((0.0, 0.5), (1.0, 1.0)),
        0xE0 => ((0.0, 1.0), (1.0, 0.5)),
        0xF0 => ((0.0, 1.0), (0.5, 0.0)),
        _ => return None,
    };
    Some(TileShape::Line { from, to })
}

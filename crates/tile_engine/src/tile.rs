//! The tile codec.
//!
//! A tile is a single byte. The high and low nibbles carry independent
//! information depending on the tile's category:
//!
//! - *Basic* tiles (`0x00..=0x0F`) are a free combination of the four
//!   straight segments in [`SegmentMask`]; `0x00` is the empty cell.
//! - *Curve* tiles (`0x11..=0x15`) are one of five fixed arc shapes that
//!   occupy the whole cell and never combine with anything else.
//! - *Complex* tiles (high bit set) pack one of eight half-cell diagonal
//!   codes in the high nibble and a [`SegmentMask`] in the low nibble,
//!   mutated independently.
//!
//! All classification lives here so that brush and edit logic never repeats
//! the nibble tests.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// The four straight line segments of a cell's low nibble.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SegmentMask: u8 {
        /// Left edge, top to bottom.
        const LEFT_EDGE = 0x01;
        /// Top edge, left to right.
        const TOP_EDGE = 0x02;
        /// Full-cell diagonal, top-left to bottom-right.
        const DOWN_DIAGONAL = 0x04;
        /// Full-cell diagonal, bottom-left to top-right.
        const UP_DIAGONAL = 0x08;
    }
}

/// Structural category of a tile value. Total over all 256 byte values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileCategory {
    /// Straight segments only, high nibble clear.
    Basic,
    /// One of the five whole-cell arc shapes.
    Curve,
    /// A diagonal code plus independent segment bits.
    Complex,
}

/// The five whole-cell curve shapes, named for the cell corner the arc is
/// centered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveShape {
    FullCircle,
    QuarterSe,
    QuarterSw,
    QuarterNe,
    QuarterNw,
}

/// One grid cell's stored shape-encoding value.
///
/// Brushes share this value space; `0x00` doubles as the empty cell and the
/// eraser tool.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u8);

/// The single-segment brushes offered by the tool palette.
pub const BASIC_BRUSHES: [TileId; 4] = [TileId(0x01), TileId(0x02), TileId(0x04), TileId(0x08)];

/// The five curve brushes offered by the tool palette.
pub const CURVE_BRUSHES: [TileId; 5] = [TileId(0x11), TileId(0x12), TileId(0x13), TileId(0x14), TileId(0x15)];

/// The eight diagonal brushes offered by the tool palette.
pub const COMPLEX_BRUSHES: [TileId; 8] = [
    TileId(0x80),
    TileId(0x90),
    TileId(0xA0),
    TileId(0xB0),
    TileId(0xC0),
    TileId(0xD0),
    TileId(0xE0),
    TileId(0xF0),
];

impl TileId {
    /// The universal empty value.
    pub const EMPTY: TileId = TileId(0x00);

    /// Structural category by nibble pattern.
    ///
    /// Values outside the enumerated ranges (`0x10`, `0x16..=0x7F`) classify
    /// as `Basic`: they act as line tiles carrying their low-nibble segment
    /// bits. Editing never produces them; only document import can.
    pub fn category(self) -> TileCategory {
        if self.is_curve() {
            TileCategory::Curve
        } else if self.0 & 0x80 != 0 {
            TileCategory::Complex
        } else {
            TileCategory::Basic
        }
    }

    pub fn is_curve(self) -> bool {
        (0x11..=0x15).contains(&self.0)
    }

    pub fn is_empty(self) -> bool {
        self == TileId::EMPTY
    }

    /// The low-nibble segment bits. Meaningful for basic and complex tiles.
    pub fn segment_mask(self) -> SegmentMask {
        SegmentMask::from_bits_truncate(self.0 & 0x0F)
    }

    /// The high-nibble diagonal code. Non-zero only for complex tiles (and
    /// the curve range, where it carries no diagonal meaning).
    pub fn diagonal_code(self) -> u8 {
        self.0 & 0xF0
    }

    /// The curve shape this value encodes, if any.
    pub fn curve_shape(self) -> Option<CurveShape> {
        match self.0 {
            0x11 => Some(CurveShape::FullCircle),
            0x12 => Some(CurveShape::QuarterSe),
            0x13 => Some(CurveShape::QuarterSw),
            0x14 => Some(CurveShape::QuarterNe),
            0x15 => Some(CurveShape::QuarterNw),
            _ => None,
        }
    }

    /// Replace the segment bits, keeping the high nibble.
    pub fn with_segment_mask(self, mask: SegmentMask) -> TileId {
        TileId(self.0 & 0xF0 | mask.bits())
    }
}

impl From<u8> for TileId {
    fn from(value: u8) -> Self {
        TileId(value)
    }
}

impl std::fmt::Debug for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TileId(0x{:02x})", self.0)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:02x}", self.0)
    }
}

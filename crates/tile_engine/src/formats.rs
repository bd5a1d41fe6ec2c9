//! The text export format.
//!
//! One line per grid row, top to bottom; each cell is two lowercase hex
//! digits, left to right, with no separator inside a row. The format is the
//! editor's clipboard/export representation and round-trips the document
//! exactly.

use crate::{EngineError, Result, TileId, TileMap};

/// Serialize a map to the export text form.
pub fn to_export_string(map: &TileMap) -> String {
    let mut result = String::with_capacity((map.width() as usize * 2 + 1) * map.height() as usize);
    for y in 0..map.height() {
        for x in 0..map.width() {
            let tile = map.get_tile((x, y));
            result.push_str(&format!("{:02x}", tile.0));
        }
        result.push('\n');
    }
    result
}

/// Parse the export text form back into a map.
///
/// Hex digits are accepted in either case. Every row must decode to the same
/// width.
pub fn from_export_string(text: &str) -> Result<TileMap> {
    let rows: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    if rows.is_empty() {
        return Err(EngineError::EmptyDocument);
    }

    let mut cells: Vec<Vec<TileId>> = Vec::with_capacity(rows.len());
    let mut expected = None;
    for (row, line) in rows.iter().enumerate() {
        let line = line.trim();
        if line.len() % 2 != 0 {
            return Err(EngineError::OddRowLength { row, len: line.len() });
        }
        let width = line.len() / 2;
        match expected {
            None => expected = Some(width),
            Some(expected) if expected != width => {
                return Err(EngineError::RowWidthMismatch { row, expected, found: width });
            }
            _ => {}
        }

        let mut tiles = Vec::with_capacity(width);
        for i in 0..width {
            let digits = &line[i * 2..i * 2 + 2];
            let value = u8::from_str_radix(digits, 16).map_err(|_| EngineError::InvalidHexDigit {
                row,
                text: digits.to_string(),
            })?;
            tiles.push(TileId(value));
        }
        cells.push(tiles);
    }

    let width = expected.unwrap_or(0);
    let mut map = TileMap::new(width as i32, cells.len() as i32);
    for (y, row) in cells.iter().enumerate() {
        for (x, &tile) in row.iter().enumerate() {
            map.set_tile((x, y), tile);
        }
    }
    Ok(map)
}

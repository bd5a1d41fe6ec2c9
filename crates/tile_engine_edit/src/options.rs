use serde::{Deserialize, Serialize};
use tile_engine::EngineResult;

/// Editor construction options: grid dimensions in cells and the on-screen
/// tile size used to map pointer pixels to cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileEditorOptions {
    pub width: i32,
    pub height: i32,
    pub tile_size_px: u32,
}

impl Default for TileEditorOptions {
    fn default() -> Self {
        Self {
            width: 12,
            height: 16,
            tile_size_px: 32,
        }
    }
}

impl TileEditorOptions {
    pub fn load_from_str(text: &str) -> EngineResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml_string(&self) -> EngineResult<String> {
        Ok(toml::to_string(self)?)
    }
}

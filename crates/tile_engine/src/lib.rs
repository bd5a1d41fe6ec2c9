#![warn(clippy::all)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::must_use_candidate
)]

mod error;
pub use error::*;

mod position;
pub use position::*;

mod tile;
pub use tile::*;

mod tilemap;
pub use tilemap::*;

pub mod formats;
pub use formats::*;

mod shapes;
pub use shapes::*;

pub type EngineResult<T> = anyhow::Result<T>;

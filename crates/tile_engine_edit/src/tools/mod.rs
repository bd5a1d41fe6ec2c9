mod pencil;
pub use pencil::*;

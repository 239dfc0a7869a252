//! Core series modules.

pub mod lttb;
pub mod point;
pub mod scale;
pub mod window;

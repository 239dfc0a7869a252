//! Series math utilities for time-series label preparation.

pub mod series;

pub use series::lttb::*;
pub use series::point::Point;
pub use series::scale::*;
pub use series::window::*;

//! Synthetic source images for warp experiments.
//!
//! Binary patterns are `u8` masks holding `0` or `1`; run them through
//! [`vw_core::normalize`] before export to get `0`/`255`.

mod checker;
mod rings;
mod tile;

pub use checker::checkerboard;
pub use rings::{Margin, nested_rings, ring};
pub use tile::{repeat_factors, tile};

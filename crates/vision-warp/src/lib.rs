//! Umbrella crate for the `vision-warp` workspace.
//!
//! Re-exports the image primitives, coordinate grids, pattern generators and
//! the backward-mapping resampler, so a full generate -> warp -> normalize
//! pipeline needs a single dependency.

pub use vw_core::*;
pub use vw_grid::*;
pub use vw_pattern::*;
pub use vw_warp::*;

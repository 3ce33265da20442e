//! Backward-mapping resampler and the warp families it drives.
//!
//! A warp maps a destination pixel to the source coordinate that supplies it.
//! [`imwarp`] evaluates the warp once per destination pixel, brings the
//! result into range with a [`BoundaryPolicy`](vw_core::BoundaryPolicy) per
//! axis and copies the nearest source pixel. Destination rows are independent
//! and are spread over the rayon pool.
//!
//! Angle conventions differ between families and are kept as-is:
//! - [`LogSpiral`] measures `atan2(dcol, drow)`;
//! - [`RadialFold`] and [`RippleFold`] measure `atan2(drow, dcol)`.
//!
//! All three rebuild the point as `center + r * (cos a, sin a)` in
//! `(row, col)` order, so the fold families also reflect across the
//! diagonal through `center`.

mod fold;
mod resample;
mod spiral;
mod warp;

pub use fold::{RadialFold, RippleFold};
pub use resample::{imwarp, imwarp_into};
pub use spiral::LogSpiral;
pub use warp::{Identity, WarpFn};

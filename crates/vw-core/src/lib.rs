//! Foundational primitives for synthetic-image warping.
//!
//! ## Image Views and Stride
//! Images use element stride (not byte stride). `stride` is the distance, in
//! elements, between adjacent row starts and may be greater than `width`.
//! Accessors take `(x, y)` = `(col, row)`; [`Coordinate`] and [`Shape`] are
//! written `(row, col)` / `(height, width)`.
//!
//! ## Boundary Policies
//! A real coordinate is floored to a pixel index and then brought into range
//! per axis: `Clip` clamps to the edge pixel, `Cycle` wraps with a Euclidean
//! modulo so negative coordinates continue the period instead of mirroring.
//!
//! ## Sampling
//! Sampling is nearest-neighbor only. There is no interpolation.

mod border;
mod error;
mod geom;
mod image;
mod normalize;
mod sample;
mod shape;

pub use border::{BoundaryPolicy, map_index};
pub use error::Error;
pub use geom::Coordinate;
pub use image::{Image, ImageView, ImageViewMut};
pub use normalize::{normalize, normalize_field};
pub use sample::sample_nearest;
pub use shape::{Shape, ShapeSpec};

//! Full-image coordinate meshes.
//!
//! Every grid has one entry per pixel of the requested shape and stores each
//! component as its own [`Image`](vw_core::Image), so a component can be
//! normalized and exported like any other image.
//!
//! Angle convention for [`polar_grid`]: `atan2(row - center.row,
//! col - center.col)`, i.e. the row offset is the "y" argument. Angles lie in
//! `(-pi, pi]`, zero along increasing columns.

mod hyperbolic;
mod mesh;
mod polar;

pub use hyperbolic::{HyperbolicGrid, hyperbolic, hyperbolic_grid};
pub use mesh::{MeshGrid, euclidean_grid};
pub use polar::{DistanceMetric, PolarGrid, polar_grid};

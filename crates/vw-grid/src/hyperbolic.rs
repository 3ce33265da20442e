use vw_core::{Error, Image, ShapeSpec};

/// Hyperbolic coordinates `(u, v)` of every pixel, `x = row`, `y = col`.
#[derive(Debug, Clone, PartialEq)]
pub struct HyperbolicGrid {
    pub u: Image<f64>,
    pub v: Image<f64>,
}

/// `u = (ln(x + 1) - ln(y + 1)) / 2`, `v = sqrt(x * y)`.
///
/// Real only for `x, y > -1` and `x * y >= 0`. Outside that domain the
/// result is NaN or infinite and is returned as-is so callers can detect it.
pub fn hyperbolic(y: f64, x: f64) -> (f64, f64) {
    let u = 0.5 * ((x + 1.0).ln() - (y + 1.0).ln());
    let v = (x * y).sqrt();
    (u, v)
}

pub fn hyperbolic_grid(shape: impl Into<ShapeSpec>) -> Result<HyperbolicGrid, Error> {
    let shape = shape.into().resolve()?;
    log::trace!("hyperbolic grid {}x{}", shape.height(), shape.width());

    let uv = |row: usize, col: usize| hyperbolic(col as f64, row as f64);
    Ok(HyperbolicGrid {
        u: Image::from_shape_fn(shape, |row, col| uv(row, col).0),
        v: Image::from_shape_fn(shape, |row, col| uv(row, col).1),
    })
}

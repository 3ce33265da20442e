use vw_core::{Coordinate, Error, Image, ShapeSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    /// `|dr| + |dc|`, diamond-shaped level sets.
    L1,
    /// Euclidean distance.
    #[default]
    L2,
    /// `max(|dr|, |dc|)`, square level sets.
    LInf,
}

impl DistanceMetric {
    pub fn radius(self, d: Coordinate) -> f64 {
        match self {
            Self::L1 => d.row.abs() + d.col.abs(),
            Self::L2 => d.norm(),
            Self::LInf => d.row.abs().max(d.col.abs()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::L1 => "L1",
            Self::L2 => "L2",
            Self::LInf => "Linf",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolarGrid {
    pub radius: Image<f64>,
    pub angle: Image<f64>,
}

/// Radius and angle of every pixel relative to `center`.
///
/// `center` defaults to `(H/2, W/2)`. The angle is `atan2(dr, dc)` with
/// `dr = row - center.row` and `dc = col - center.col`, independent of
/// `metric`.
pub fn polar_grid(
    shape: impl Into<ShapeSpec>,
    center: Option<Coordinate>,
    metric: DistanceMetric,
) -> Result<PolarGrid, Error> {
    let shape = shape.into().resolve()?;
    let center = center.unwrap_or_else(|| shape.center());
    log::trace!(
        "polar grid {}x{} center=({}, {}) metric={}",
        shape.height(),
        shape.width(),
        center.row,
        center.col,
        metric.name()
    );

    let offset = |row, col| Coordinate::from_index(row, col) - center;
    Ok(PolarGrid {
        radius: Image::from_shape_fn(shape, |row, col| metric.radius(offset(row, col))),
        angle: Image::from_shape_fn(shape, |row, col| {
            let d = offset(row, col);
            d.row.atan2(d.col)
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::{DistanceMetric, polar_grid};
    use core::f64::consts::{FRAC_PI_2, PI};
    use vw_core::Coordinate;

    fn at(img: &vw_core::Image<f64>, row: usize, col: usize) -> f64 {
        *img.get(col, row).expect("in bounds")
    }

    #[test]
    fn metrics_at_known_offsets() {
        // default center of 4x4 is (2, 2); pixel (0, 3) sits at offset (-2, 1)
        let l1 = polar_grid(4, None, DistanceMetric::L1).expect("valid shape");
        let l2 = polar_grid(4, None, DistanceMetric::L2).expect("valid shape");
        let linf = polar_grid(4, None, DistanceMetric::LInf).expect("valid shape");

        assert!((at(&l1.radius, 0, 3) - 3.0).abs() < 1e-12);
        assert!((at(&l2.radius, 0, 3) - 5.0f64.sqrt()).abs() < 1e-12);
        assert!((at(&linf.radius, 0, 3) - 2.0).abs() < 1e-12);
        assert!(at(&l2.radius, 2, 2).abs() < 1e-12);
    }

    #[test]
    fn angle_uses_row_offset_as_y() {
        let grid = polar_grid((5, 5), Some(Coordinate::new(2.0, 2.0)), DistanceMetric::L2)
            .expect("valid shape");

        // straight along increasing columns
        assert!(at(&grid.angle, 2, 4).abs() < 1e-12);
        // straight along increasing rows
        assert!((at(&grid.angle, 4, 2) - FRAC_PI_2).abs() < 1e-12);
        // straight along decreasing columns
        assert!((at(&grid.angle, 2, 0) - PI).abs() < 1e-12);
        // straight along decreasing rows
        assert!((at(&grid.angle, 0, 2) + FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn angle_is_metric_independent() {
        let a = polar_grid((3, 6), None, DistanceMetric::L1).expect("valid shape");
        let b = polar_grid((3, 6), None, DistanceMetric::LInf).expect("valid shape");
        assert_eq!(a.angle, b.angle);
        assert_ne!(a.radius, b.radius);
    }
}

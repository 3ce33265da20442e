use vw_core::{Coordinate, Shape};

use crate::warp::WarpFn;

/// Logarithmic spiral twist around `center`.
///
/// With `d = p - center`, `a = atan2(d.col, d.row)` and `r = |d|`, the source
/// is `center + r * (cos a', sin a')` where
/// `a' = a + twist_offset + twist_rate * ln(1 + r)`. Zero twist is the
/// identity up to rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogSpiral {
    pub center: Coordinate,
    pub twist_rate: f64,
    pub twist_offset: f64,
}

impl LogSpiral {
    pub fn new(center: Coordinate, twist_rate: f64, twist_offset: f64) -> Self {
        Self {
            center,
            twist_rate,
            twist_offset,
        }
    }

    /// Spiral pivoting on the middle of `shape`.
    pub fn centered(shape: Shape, twist_rate: f64, twist_offset: f64) -> Self {
        Self::new(shape.center(), twist_rate, twist_offset)
    }
}

impl WarpFn for LogSpiral {
    fn warp(&self, dst: Coordinate) -> Coordinate {
        let d = dst - self.center;
        let r = d.row.hypot(d.col);
        let a = d.col.atan2(d.row) + (self.twist_offset + self.twist_rate * (1.0 + r).ln());
        Coordinate::new(self.center.row + r * a.cos(), self.center.col + r * a.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::LogSpiral;
    use crate::warp::WarpFn;
    use core::f64::consts::FRAC_PI_2;
    use vw_core::{Coordinate, Shape};

    fn close(a: Coordinate, b: Coordinate) -> bool {
        (a.row - b.row).abs() < 1e-9 && (a.col - b.col).abs() < 1e-9
    }

    #[test]
    fn zero_twist_is_identity() {
        let shape = Shape::new(6, 10).expect("valid shape");
        let w = LogSpiral::centered(shape, 0.0, 0.0);
        for row in 0..6 {
            for col in 0..10 {
                let p = Coordinate::from_index(row, col);
                assert!(close(w.warp(p), p), "{p:?} -> {:?}", w.warp(p));
            }
        }
    }

    #[test]
    fn center_is_fixed_point() {
        let c = Coordinate::new(4.0, 4.0);
        let w = LogSpiral::new(c, 3.0, 1.0);
        assert!(close(w.warp(c), c));
    }

    #[test]
    fn offset_rotates_towards_increasing_columns() {
        let c = Coordinate::new(0.0, 0.0);
        let w = LogSpiral::new(c, 0.0, FRAC_PI_2);
        // a = atan2(0, 2) = 0 -> a' = pi/2 -> (0, 2)
        assert!(close(w.warp(Coordinate::new(2.0, 0.0)), Coordinate::new(0.0, 2.0)));
    }

    #[test]
    fn twist_grows_with_log_radius() {
        let c = Coordinate::new(0.0, 0.0);
        let w = LogSpiral::new(c, 0.5, 0.0);
        let p = Coordinate::new(3.0, 0.0);
        let a = 0.5 * 4.0f64.ln();
        let expected = Coordinate::new(3.0 * a.cos(), 3.0 * a.sin());
        let got = w.warp(p);

        assert!(close(got, expected));
        assert!((got.norm() - 3.0).abs() < 1e-9);
    }
}

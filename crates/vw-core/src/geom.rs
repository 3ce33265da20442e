use core::ops::{Add, Mul, Sub};

/// Real-valued `(row, col)` position. Offsets between positions use the same
/// type.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub row: f64,
    pub col: f64,
}

impl Coordinate {
    pub const fn new(row: f64, col: f64) -> Self {
        Self { row, col }
    }

    /// Integer pixel index lifted to a coordinate.
    pub fn from_index(row: usize, col: usize) -> Self {
        Self {
            row: row as f64,
            col: col as f64,
        }
    }

    pub fn norm(self) -> f64 {
        self.row.hypot(self.col)
    }

    pub fn is_finite(self) -> bool {
        self.row.is_finite() && self.col.is_finite()
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Self::Output {
        Coordinate {
            row: self.row + rhs.row,
            col: self.col + rhs.col,
        }
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Self::Output {
        Coordinate {
            row: self.row - rhs.row,
            col: self.col - rhs.col,
        }
    }
}

impl Mul<f64> for Coordinate {
    type Output = Coordinate;

    fn mul(self, rhs: f64) -> Self::Output {
        Coordinate {
            row: self.row * rhs,
            col: self.col * rhs,
        }
    }
}

impl Mul<Coordinate> for f64 {
    type Output = Coordinate;

    fn mul(self, rhs: Coordinate) -> Self::Output {
        rhs * self
    }
}

#[cfg(test)]
mod tests {
    use super::Coordinate;

    #[test]
    fn arithmetic_and_norm() {
        let a = Coordinate::new(3.0, 4.0);
        let b = Coordinate::new(1.0, -2.0);

        assert_eq!(a + b, Coordinate::new(4.0, 2.0));
        assert_eq!(a - b, Coordinate::new(2.0, 6.0));
        assert_eq!(2.0 * b, Coordinate::new(2.0, -4.0));
        assert!((a.norm() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn finiteness_checks_both_axes() {
        assert!(Coordinate::from_index(2, 9).is_finite());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_finite());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_finite());
    }
}

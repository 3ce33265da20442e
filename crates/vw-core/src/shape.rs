use crate::Error;
use crate::geom::Coordinate;

/// Resolved image shape. Both dimensions are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    height: usize,
    width: usize,
}

impl Shape {
    pub fn new(height: usize, width: usize) -> Result<Self, Error> {
        if height == 0 || width == 0 {
            return Err(Error::InvalidShape { height, width });
        }
        Ok(Self { height, width })
    }

    pub fn square(side: usize) -> Result<Self, Error> {
        Self::new(side, side)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.height * self.width
    }

    /// `(H/2, W/2)` as reals, the default pivot for radial grids and warps.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.height as f64 * 0.5, self.width as f64 * 0.5)
    }
}

/// Shape argument as callers write it: a single side for square images or an
/// explicit `(height, width)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeSpec {
    Square(usize),
    Rect { height: usize, width: usize },
}

impl ShapeSpec {
    pub fn resolve(self) -> Result<Shape, Error> {
        match self {
            Self::Square(side) => Shape::square(side),
            Self::Rect { height, width } => Shape::new(height, width),
        }
    }
}

impl From<usize> for ShapeSpec {
    fn from(side: usize) -> Self {
        Self::Square(side)
    }
}

impl From<(usize, usize)> for ShapeSpec {
    fn from((height, width): (usize, usize)) -> Self {
        Self::Rect { height, width }
    }
}

impl From<Shape> for ShapeSpec {
    fn from(shape: Shape) -> Self {
        Self::Rect {
            height: shape.height,
            width: shape.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Shape, ShapeSpec};
    use crate::Error;

    #[test]
    fn scalar_spec_normalizes_to_square() {
        let shape = ShapeSpec::from(6).resolve().expect("valid shape");
        assert_eq!(shape.height(), 6);
        assert_eq!(shape.width(), 6);

        let rect = ShapeSpec::from((3, 5)).resolve().expect("valid shape");
        assert_eq!((rect.height(), rect.width()), (3, 5));
        assert_eq!(rect.len(), 15);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(
            ShapeSpec::from(0).resolve(),
            Err(Error::InvalidShape {
                height: 0,
                width: 0
            })
        );
        assert_eq!(
            Shape::new(4, 0),
            Err(Error::InvalidShape {
                height: 4,
                width: 0
            })
        );
    }

    #[test]
    fn center_is_half_extent() {
        let c = Shape::new(5, 8).expect("valid shape").center();
        assert!((c.row - 2.5).abs() < 1e-12);
        assert!((c.col - 4.0).abs() < 1e-12);
    }
}

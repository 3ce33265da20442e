use vw_core::{Error, Image, Shape, ShapeSpec};

/// Row and column index of every pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshGrid {
    pub rows: Image<usize>,
    pub cols: Image<usize>,
}

impl MeshGrid {
    pub fn shape(&self) -> Result<Shape, Error> {
        Shape::new(self.rows.height(), self.rows.width())
    }
}

pub fn euclidean_grid(shape: impl Into<ShapeSpec>) -> Result<MeshGrid, Error> {
    let shape = shape.into().resolve()?;
    log::trace!("euclidean grid {}x{}", shape.height(), shape.width());

    Ok(MeshGrid {
        rows: Image::from_shape_fn(shape, |row, _| row),
        cols: Image::from_shape_fn(shape, |_, col| col),
    })
}

use vw_core::{Error, Image, ShapeSpec};

/// Binary checkerboard of `square`-sized cells.
///
/// `pixel(row, col) = (col / square_w) % 2 ^ (row / square_h) % 2`, so the
/// top-left cell is 0 unless `invert` is set.
pub fn checkerboard(
    shape: impl Into<ShapeSpec>,
    square: impl Into<ShapeSpec>,
    invert: bool,
) -> Result<Image<u8>, Error> {
    let shape = shape.into().resolve()?;
    let square = square
        .into()
        .resolve()
        .map_err(|_| Error::InvalidParameter("checkerboard square size must be positive"))?;
    log::trace!(
        "checkerboard {}x{} cells {}x{} invert={invert}",
        shape.height(),
        shape.width(),
        square.height(),
        square.width()
    );

    let flip = u8::from(invert);
    Ok(Image::from_shape_fn(shape, |row, col| {
        let parity = ((col / square.width()) % 2) ^ ((row / square.height()) % 2);
        parity as u8 ^ flip
    }))
}

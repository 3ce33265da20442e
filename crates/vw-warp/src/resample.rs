use rayon::prelude::*;
use vw_core::{
    BoundaryPolicy, Coordinate, Error, Image, ImageView, ImageViewMut, Shape, sample_nearest,
};

use crate::warp::WarpFn;

/// Backward-warps `src` into a new image of the same shape.
///
/// For every destination pixel `(row, col)` the warp yields a real source
/// coordinate; `policy` maps each axis to an index and the nearest source
/// pixel is copied. No destination pixel is left unassigned.
///
/// Fails with [`Error::InvalidShape`] for an empty source and with
/// [`Error::NonFiniteCoordinate`] if the warp returns NaN or infinity for some
/// pixel. When several pixels are non-finite, which one is reported depends
/// on scheduling.
pub fn imwarp<T, W>(
    src: &ImageView<'_, T>,
    warp: &W,
    policy: BoundaryPolicy,
) -> Result<Image<T>, Error>
where
    T: Copy + Send + Sync,
    W: WarpFn + ?Sized,
{
    Shape::new(src.height(), src.width())?;
    let mut dst = src.to_image();
    imwarp_into(src, warp, policy, &mut dst.as_view_mut())?;
    Ok(dst)
}

/// Same as [`imwarp`], writing into a caller-provided view of equal size.
pub fn imwarp_into<T, W>(
    src: &ImageView<'_, T>,
    warp: &W,
    policy: BoundaryPolicy,
    dst: &mut ImageViewMut<'_, T>,
) -> Result<(), Error>
where
    T: Copy + Send + Sync,
    W: WarpFn + ?Sized,
{
    let shape = Shape::new(src.height(), src.width())?;
    if dst.width() != shape.width() || dst.height() != shape.height() {
        return Err(Error::SizeMismatch {
            expected: shape.len(),
            actual: dst.width() * dst.height(),
        });
    }

    log::debug!(
        "imwarp {}x{} policy={}",
        shape.height(),
        shape.width(),
        policy.name()
    );

    let width = shape.width();
    let stride = dst.stride();
    dst.strided_data_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .try_for_each(|(row, line)| {
            for (col, px) in line[..width].iter_mut().enumerate() {
                let from = warp.warp(Coordinate::from_index(row, col));
                *px = sample_nearest(src, from, policy)
                    .ok_or(Error::NonFiniteCoordinate { row, col })?;
            }
            Ok(())
        })
}

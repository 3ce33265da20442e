use crate::border::{BoundaryPolicy, map_index};
use crate::geom::Coordinate;
use crate::image::ImageView;

/// Nearest-neighbor lookup of a real `(row, col)` coordinate.
///
/// Each axis is floored and mapped independently through `policy`. Returns
/// `None` for an empty image or a non-finite coordinate.
pub fn sample_nearest<T: Copy>(
    img: &ImageView<'_, T>,
    at: Coordinate,
    policy: BoundaryPolicy,
) -> Option<T> {
    let y = map_index(at.row, img.height(), policy)?;
    let x = map_index(at.col, img.width(), policy)?;
    // SAFETY: `map_index` returns indices in `[0, len)` for non-empty axes.
    Some(unsafe { *img.get_unchecked(x, y) })
}

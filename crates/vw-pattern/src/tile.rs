use vw_core::{Error, Image, ImageView, Shape, ShapeSpec};

/// Rounded repeat count per axis, `(rows, cols)`.
pub fn repeat_factors(src: Shape, target: Shape) -> (usize, usize) {
    let round = |t: usize, s: usize| (t as f64 / s as f64 + 0.5) as usize;
    (
        round(target.height(), src.height()),
        round(target.width(), src.width()),
    )
}

/// Replicates `src` by [`repeat_factors`] and crops to exactly `target`.
///
/// If a rounded factor falls short of the target extent the replication keeps
/// going periodically, so the result is always `target`-shaped.
pub fn tile<T: Clone>(
    src: &ImageView<'_, T>,
    target: impl Into<ShapeSpec>,
) -> Result<Image<T>, Error> {
    let src_shape = Shape::new(src.height(), src.width())?;
    let target = target.into().resolve()?;

    let (fy, fx) = repeat_factors(src_shape, target);
    if fy * src.height() < target.height() || fx * src.width() < target.width() {
        log::debug!(
            "tile factors {fy}x{fx} undershoot target {}x{}; extending periodically",
            target.height(),
            target.width()
        );
    }

    // Every copy is a whole period, so the crop of the replicated image
    // reads source pixel (row % h, col % w).
    Ok(Image::from_shape_fn(target, |row, col| {
        src.row(row % src.height())[col % src.width()].clone()
    }))
}

#[cfg(test)]
mod tests {
    use super::{repeat_factors, tile};
    use vw_core::{Error, Image, Shape};

    #[test]
    fn constant_block_fills_target() {
        let block = Image::new_fill(2, 2, 7u8);
        let out = tile(&block.as_view(), (5, 5)).expect("valid tile");

        assert_eq!(out.width(), 5);
        assert_eq!(out.height(), 5);
        assert!(out.data().iter().all(|&v| v == 7));
    }

    #[test]
    fn pattern_repeats_and_crops() {
        let src = Image::from_vec(2, 2, vec![1u8, 2, 3, 4]).expect("valid image");
        let out = tile(&src.as_view(), (3, 5)).expect("valid tile");

        assert_eq!(
            out.data(),
            &[
                1, 2, 1, 2, 1, //
                3, 4, 3, 4, 3, //
                1, 2, 1, 2, 1, //
            ]
        );
    }

    #[test]
    fn undershooting_factor_still_reaches_target() {
        let src = Image::from_vec(4, 1, vec![1u8, 2, 3, 4]).expect("valid image");
        let shape = |h, w| Shape::new(h, w).expect("valid shape");

        // round(5 / 4) = 1 copy would only give 4 columns
        assert_eq!(repeat_factors(shape(1, 4), shape(1, 5)), (1, 1));
        let out = tile(&src.as_view(), (1, 5)).expect("valid tile");
        assert_eq!(out.data(), &[1, 2, 3, 4, 1]);
    }

    #[test]
    fn shrinking_target_crops_top_left() {
        let src = Image::from_vec(3, 3, (0u8..9).collect()).expect("valid image");
        let out = tile(&src.as_view(), (2, 2)).expect("valid tile");
        assert_eq!(out.data(), &[0, 1, 3, 4]);
    }

    #[test]
    fn empty_source_or_target_is_rejected() {
        let empty = Image::<u8>::from_vec(0, 3, Vec::new()).expect("valid empty image");
        assert!(matches!(
            tile(&empty.as_view(), 4),
            Err(Error::InvalidShape { .. })
        ));

        let src = Image::new_fill(2, 2, 0u8);
        assert!(matches!(
            tile(&src.as_view(), (0, 2)),
            Err(Error::InvalidShape { .. })
        ));
    }
}

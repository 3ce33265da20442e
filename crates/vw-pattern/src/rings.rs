use vw_core::{Error, Image, Shape, ShapeSpec};

/// Per-axis inset of a [`ring`] rectangle. Zero is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Margin {
    pub rows: usize,
    pub cols: usize,
}

impl From<usize> for Margin {
    fn from(m: usize) -> Self {
        Self { rows: m, cols: m }
    }
}

impl From<(usize, usize)> for Margin {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self { rows, cols }
    }
}

/// 1 inside `[delta.rows, H - delta.rows) x [delta.cols, W - delta.cols)`,
/// 0 elsewhere. Margins reaching the middle give an empty mask.
pub fn ring(shape: impl Into<ShapeSpec>, delta: impl Into<Margin>) -> Result<Image<u8>, Error> {
    let shape = shape.into().resolve()?;
    let delta = delta.into();
    Ok(Image::from_shape_fn(shape, |row, col| {
        u8::from(inside(shape, delta, row, col))
    }))
}

/// XOR of rings whose margins grow by `(extent / 2) / n` per layer.
///
/// Layers continue while the margin is below half the extent on both axes,
/// so rounding in the step can add layers beyond `n`. An axis whose step
/// rounds to 0 keeps margin 0 for `n` layers; when both do, all `n` layers
/// are the full frame and cancel pairwise under XOR. The mask is then all
/// ones for odd `n` and all zeros for even `n`, so `n > extent / 2` with
/// even `n` yields an empty pattern.
pub fn nested_rings(shape: impl Into<ShapeSpec>, n: usize) -> Result<Image<u8>, Error> {
    let shape = shape.into().resolve()?;
    if n == 0 {
        return Err(Error::InvalidParameter("ring count must be positive"));
    }

    let (rows_step, rows_layers) = layer_steps(shape.height() / 2, n);
    let (cols_step, cols_layers) = layer_steps(shape.width() / 2, n);
    let layers = rows_layers.min(cols_layers);
    log::trace!(
        "nested rings {}x{} n={n} step=({rows_step}, {cols_step}) layers={layers}",
        shape.height(),
        shape.width()
    );

    let mut mask = Image::new_fill(shape.width(), shape.height(), 0u8);
    for k in 0..layers {
        let delta = Margin {
            rows: k * rows_step,
            cols: k * cols_step,
        };
        let mut view = mask.as_view_mut();
        for row in 0..shape.height() {
            for (col, px) in view.row_mut(row).iter_mut().enumerate() {
                *px ^= u8::from(inside(shape, delta, row, col));
            }
        }
    }

    Ok(mask)
}

fn inside(shape: Shape, delta: Margin, row: usize, col: usize) -> bool {
    row >= delta.rows
        && row + delta.rows < shape.height()
        && col >= delta.cols
        && col + delta.cols < shape.width()
}

/// Step and number of margins `0, step, 2*step, ...` below `half`.
fn layer_steps(half: usize, n: usize) -> (usize, usize) {
    let step = half / n;
    if step == 0 {
        (0, n)
    } else {
        (step, half.div_ceil(step))
    }
}

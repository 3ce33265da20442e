//! Range stretching before export.
//!
//! Values are shifted so the minimum becomes 0, then scaled so the shifted
//! maximum becomes 255. Scaled values are truncated, not rounded. A constant
//! input has no range to stretch and comes back all zeros.

use crate::image::{Image, ImageView};

pub fn normalize(img: &ImageView<'_, u8>) -> Image<u8> {
    let mut lo = u8::MAX;
    let mut hi = u8::MIN;
    for y in 0..img.height() {
        for &v in img.row(y) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }

    let range = hi.saturating_sub(lo);
    let mut out = Vec::with_capacity(img.width() * img.height());
    for y in 0..img.height() {
        for &v in img.row(y) {
            let shifted = v - lo;
            out.push(if range > 0 {
                (f64::from(shifted) * 255.0 / f64::from(range)) as u8
            } else {
                shifted
            });
        }
    }

    Image::from_vec(img.width(), img.height(), out).expect("output length matches view")
}

/// Same stretch for real-valued fields such as coordinate grids.
///
/// Non-finite samples do not take part in the range and are written as 0.
pub fn normalize_field(img: &ImageView<'_, f64>) -> Image<u8> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for y in 0..img.height() {
        for &v in img.row(y).iter().filter(|v| v.is_finite()) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }

    let range = hi - lo;
    let scale = if range.is_finite() && range > 0.0 {
        255.0 / range
    } else {
        0.0
    };

    let mut out = Vec::with_capacity(img.width() * img.height());
    for y in 0..img.height() {
        for &v in img.row(y) {
            out.push(if v.is_finite() {
                ((v - lo) * scale).clamp(0.0, 255.0) as u8
            } else {
                0
            });
        }
    }

    Image::from_vec(img.width(), img.height(), out).expect("output length matches view")
}

#[cfg(test)]
mod tests {
    use super::{normalize, normalize_field};
    use crate::image::{Image, ImageView};

    #[test]
    fn binary_mask_stretches_to_full_range() {
        let img = Image::from_vec(2, 2, vec![0u8, 1, 1, 0]).expect("valid image");
        let out = normalize(&img.as_view());
        assert_eq!(out.data(), &[0, 255, 255, 0]);
    }

    #[test]
    fn shift_then_scale_truncates() {
        let img = Image::from_vec(3, 1, vec![10u8, 11, 13]).expect("valid image");
        let out = normalize(&img.as_view());
        // (1 * 255 / 3) = 85, (3 * 255 / 3) = 255
        assert_eq!(out.data(), &[0, 85, 255]);
    }

    #[test]
    fn constant_image_becomes_zero() {
        let img = Image::new_fill(4, 3, 7u8);
        let out = normalize(&img.as_view());
        assert_eq!(out.width(), 4);
        assert_eq!(out.height(), 3);
        assert!(out.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn strided_view_is_normalized_row_by_row() {
        let data = [2u8, 4, 99, 6, 8];
        let view = ImageView::from_slice(2, 2, 3, &data).expect("valid view");
        let out = normalize(&view);
        // shifted: 0, 2, 4, 6 -> * 255 / 6
        assert_eq!(out.data(), &[0, 85, 170, 255]);
    }

    #[test]
    fn field_ignores_non_finite_samples() {
        let img = Image::from_vec(2, 2, vec![-1.0, 1.0, f64::NAN, 0.0]).expect("valid image");
        let out = normalize_field(&img.as_view());
        assert_eq!(out.data(), &[0, 255, 0, 127]);

        let flat = Image::new_fill(2, 1, 3.5f64);
        assert_eq!(normalize_field(&flat.as_view()).data(), &[0, 0]);

        let all_nan = Image::new_fill(1, 1, f64::NAN);
        assert_eq!(normalize_field(&all_nan.as_view()).data(), &[0]);
    }
}

use lastrim_core::CropRect;

/// Per-point membership of `(x[i], y[i])` in `rect`.
///
/// # Panics
///
/// Panics if `x` and `y` differ in length.
pub fn crop_mask(x: &[f64], y: &[f64], rect: &CropRect) -> Vec<bool> {
    assert_eq!(x.len(), y.len(), "x and y must have same length");

    x.iter()
        .zip(y)
        .map(|(&px, &py)| rect.contains(px, py))
        .collect()
}

pub fn count_mask(mask: &[bool]) -> usize {
    mask.iter().filter(|&&keep| keep).count()
}

/// Clones the items whose mask entry is set, keeping their relative order.
///
/// # Panics
///
/// Panics if `items` and `mask` differ in length.
pub fn select_by_mask<T: Clone>(items: &[T], mask: &[bool]) -> Vec<T> {
    assert_eq!(items.len(), mask.len(), "mask length must match item count");

    let mut out = Vec::with_capacity(count_mask(mask));
    for (item, &keep) in items.iter().zip(mask) {
        if keep {
            out.push(item.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{count_mask, crop_mask, select_by_mask};
    use lastrim_core::CropRect;
    use proptest::prelude::*;

    fn sample_xy() -> (Vec<f64>, Vec<f64>) {
        // 5 points on a diagonal for easy reasoning
        (
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
            vec![10.0, 20.0, 30.0, 40.0, 50.0],
        )
    }

    fn rect(x0: f64, x1: f64, y0: f64, y1: f64) -> CropRect {
        CropRect { x0, x1, y0, y1 }
    }

    #[test]
    fn mask_is_inclusive_on_edges() {
        let (x, y) = sample_xy();
        let mask = crop_mask(&x, &y, &rect(2.0, 4.0, 20.0, 40.0));
        assert_eq!(mask, vec![false, true, true, true, false]);
        assert_eq!(count_mask(&mask), 3);
    }

    #[test]
    fn mask_requires_both_axes() {
        let (x, y) = sample_xy();
        // x admits everything, y only the last two
        let mask = crop_mask(&x, &y, &rect(0.0, 10.0, 35.0, 60.0));
        assert_eq!(mask, vec![false, false, false, true, true]);
    }

    #[test]
    fn mask_empty_input() {
        let mask = crop_mask(&[], &[], &rect(0.0, 1.0, 0.0, 1.0));
        assert!(mask.is_empty());
        assert_eq!(count_mask(&mask), 0);
    }

    #[test]
    fn mask_no_points_in_range() {
        let (x, y) = sample_xy();
        let mask = crop_mask(&x, &y, &rect(10.0, 20.0, 0.0, 100.0));
        assert_eq!(count_mask(&mask), 0);
    }

    #[test]
    fn mask_skips_nan_coordinates() {
        let x = vec![0.5, f64::NAN];
        let y = vec![0.5, 0.5];
        let mask = crop_mask(&x, &y, &rect(0.0, 1.0, 0.0, 1.0));
        assert_eq!(mask, vec![true, false]);
    }

    #[test]
    #[should_panic]
    fn mask_panics_on_length_mismatch() {
        let _ = crop_mask(&[1.0], &[1.0, 2.0], &rect(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn select_keeps_order() {
        let items = vec!["a", "b", "c", "d"];
        let out = select_by_mask(&items, &[true, false, false, true]);
        assert_eq!(out, vec!["a", "d"]);
    }

    #[test]
    fn select_none() {
        let items = vec![1, 2, 3];
        assert!(select_by_mask(&items, &[false; 3]).is_empty());
    }

    proptest! {
        #[test]
        fn selected_points_satisfy_predicate(
            pts in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 1..500),
            x0 in -50.0f64..0.0,
            x1 in 0.0f64..50.0,
            y0 in -50.0f64..0.0,
            y1 in 0.0f64..50.0,
        ) {
            let r = rect(x0, x1, y0, y1);
            let x: Vec<f64> = pts.iter().map(|p| p.0).collect();
            let y: Vec<f64> = pts.iter().map(|p| p.1).collect();
            let mask = crop_mask(&x, &y, &r);

            let kept = select_by_mask(&pts, &mask);
            prop_assert_eq!(kept.len(), count_mask(&mask));
            for (px, py) in &kept {
                prop_assert!(*px >= x0 && *px <= x1, "x={} outside [{}, {}]", px, x0, x1);
                prop_assert!(*py >= y0 && *py <= y1, "y={} outside [{}, {}]", py, y0, y1);
            }

            let dropped = select_by_mask(&pts, &mask.iter().map(|m| !m).collect::<Vec<_>>());
            for (px, py) in &dropped {
                prop_assert!(!r.contains(*px, *py));
            }
        }
    }
}

/// Out-of-range handling for one axis of a real source coordinate.
///
/// Both policies first floor the coordinate to a pixel index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundaryPolicy {
    /// Clamp into `[0, len - 1]`.
    #[default]
    Clip,
    /// Wrap with a true (Euclidean) modulo, so `-1` maps to `len - 1`.
    Cycle,
}

/// Maps a real coordinate onto an index in `[0, len)`.
///
/// Returns `None` only for `len == 0` or a non-finite `coord`; every finite
/// input yields a valid index.
pub fn map_index(coord: f64, len: usize, policy: BoundaryPolicy) -> Option<usize> {
    if len == 0 || !coord.is_finite() {
        return None;
    }

    let floored = coord.floor();
    match policy {
        BoundaryPolicy::Clip => {
            if floored <= 0.0 {
                Some(0)
            } else {
                // `as` saturates for values beyond usize::MAX.
                Some((floored as usize).min(len - 1))
            }
        }
        BoundaryPolicy::Cycle => {
            let len_i = len as i128;
            // Integral f64 converts exactly; magnitudes past i128 saturate.
            let r = (floored as i128).rem_euclid(len_i);
            Some(r as usize)
        }
    }
}

impl BoundaryPolicy {
    pub fn map(self, coord: f64, len: usize) -> Option<usize> {
        map_index(coord, len, self)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Clip => "clip",
            Self::Cycle => "cycle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoundaryPolicy, map_index};

    const PROBES: [f64; 14] = [
        -1.0e12, -17.5, -5.0, -4.0, -0.75, -0.0, 0.0, 0.4, 3.999, 4.0, 4.5, 9.0, 123.25, 1.0e15,
    ];

    #[test]
    fn clip_handles_negative_and_overflow() {
        let mode = BoundaryPolicy::Clip;

        assert_eq!(map_index(-3.0, 5, mode), Some(0));
        assert_eq!(map_index(-0.5, 5, mode), Some(0));
        assert_eq!(map_index(0.0, 5, mode), Some(0));
        assert_eq!(map_index(2.9, 5, mode), Some(2));
        assert_eq!(map_index(4.0, 5, mode), Some(4));
        assert_eq!(map_index(5.0, 5, mode), Some(4));
        assert_eq!(map_index(1.0e300, 5, mode), Some(4));
    }

    #[test]
    fn cycle_wraps_negative_with_true_modulo() {
        let mode = BoundaryPolicy::Cycle;

        assert_eq!(map_index(-1.0, 4, mode), Some(3));
        assert_eq!(map_index(-0.25, 4, mode), Some(3));
        assert_eq!(map_index(-4.0, 4, mode), Some(0));
        assert_eq!(map_index(-5.5, 4, mode), Some(2));
        assert_eq!(map_index(5.7, 4, mode), Some(1));
        assert_eq!(map_index(8.0, 4, mode), Some(0));
    }

    #[test]
    fn every_finite_input_lands_in_range() {
        for len in [1usize, 2, 4, 7, 1024] {
            for &x in &PROBES {
                for mode in [BoundaryPolicy::Clip, BoundaryPolicy::Cycle] {
                    let idx = map_index(x, len, mode).expect("finite input maps");
                    assert!(idx < len, "{mode:?} mapped {x} to {idx} for len {len}");
                }
            }
        }
    }

    #[test]
    fn cycle_is_periodic() {
        for len in [1usize, 3, 4, 10] {
            for &x in &PROBES[1..PROBES.len() - 1] {
                let shifted = x + len as f64;
                assert_eq!(
                    map_index(shifted, len, BoundaryPolicy::Cycle),
                    map_index(x, len, BoundaryPolicy::Cycle),
                    "x={x} len={len}"
                );
            }
        }
    }

    #[test]
    fn clip_is_idempotent() {
        for len in [1usize, 3, 8] {
            for &x in &PROBES {
                let once = map_index(x, len, BoundaryPolicy::Clip).expect("finite input maps");
                let twice =
                    map_index(once as f64, len, BoundaryPolicy::Clip).expect("finite input maps");
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn empty_axis_and_non_finite_input_are_rejected() {
        assert_eq!(map_index(1.0, 0, BoundaryPolicy::Clip), None);
        assert_eq!(map_index(1.0, 0, BoundaryPolicy::Cycle), None);
        assert_eq!(map_index(f64::NAN, 4, BoundaryPolicy::Clip), None);
        assert_eq!(map_index(f64::NEG_INFINITY, 4, BoundaryPolicy::Cycle), None);
    }
}

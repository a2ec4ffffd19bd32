/// Value every input maps to when the range is degenerate
pub const DEGENERATE_MIDPOINT: f64 = 0.5;

/// Min-max bounds of a value set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

impl MinMax {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Bounds of `values`, or `None` if there are none
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |bounds, v| {
            Some(match bounds {
                None => Self::new(v, v),
                Some(b) => Self::new(b.min.min(v), b.max.max(v)),
            })
        })
    }

    pub fn is_degenerate(&self) -> bool {
        self.max - self.min <= f64::EPSILON
    }

    /// Rescale `value` into `[0, 1]`
    pub fn scale(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return DEGENERATE_MIDPOINT;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

/// Min-max normalize `values` into `[0, 1]`
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let Some(bounds) = MinMax::from_values(values.iter().copied()) else {
        return Vec::new();
    };
    if bounds.is_degenerate() {
        tracing::debug!(value = bounds.min, count = values.len(), "Degenerate range, using midpoint");
    }
    values.iter().map(|v| bounds.scale(*v)).collect()
}

/// Min-max scale `values` onto `0..=100`; all-equal input maps to 50
pub fn display_scale(values: &[f64]) -> Vec<f64> {
    normalize(values).into_iter().map(|v| v * 100.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_normalize_bounds() {
        let normalized = normalize(&[10.0, 20.0, 15.0, 30.0]);
        assert_eq!(normalized, vec![0.0, 0.5, 0.25, 1.0]);
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(normalize(&[42.0, 42.0, 42.0]), vec![0.5, 0.5, 0.5]);
        assert_eq!(normalize(&[7.0]), vec![0.5]);
        assert_eq!(display_scale(&[3.0, 3.0]), vec![50.0, 50.0]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let len = rng.gen_range(2..20);
            let values: Vec<f64> = (0..len).map(|_| rng.gen_range(0.0..500.0)).collect();
            let once = normalize(&values);
            let bounds = MinMax::new(0.0, 1.0);
            let twice: Vec<f64> = once.iter().map(|v| bounds.scale(*v)).collect();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_scale_clamps_outside_bounds() {
        let bounds = MinMax::new(0.0, 10.0);
        assert_eq!(bounds.scale(-5.0), 0.0);
        assert_eq!(bounds.scale(20.0), 1.0);
        assert_eq!(MinMax::from_values([3.0, -1.0, 8.0]), Some(MinMax::new(-1.0, 8.0)));
    }
}

/// Horizontal extent of a point set, `[min_x, max_x] x [min_y, max_y]`.
///
/// Only built from at least one finite point, so there is no empty state to
/// check for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Aabb2 {
    /// Bounds of the `(x, y)` pairs, skipping any pair with a non-finite
    /// coordinate. `None` when no pair is finite.
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        points
            .into_iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .fold(None, |acc, (x, y)| {
                Some(match acc {
                    None => Self {
                        min_x: x,
                        max_x: x,
                        min_y: y,
                        max_y: y,
                    },
                    Some(b) => Self {
                        min_x: b.min_x.min(x),
                        max_x: b.max_x.max(x),
                        min_y: b.min_y.min(y),
                        max_y: b.max_y.max(y),
                    },
                })
            })
    }

    /// Same as [`Aabb2::from_points`] over parallel slices. Extra entries in
    /// the longer slice are ignored.
    pub fn from_xy(x: &[f64], y: &[f64]) -> Option<Self> {
        Self::from_points(x.iter().copied().zip(y.iter().copied()))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

use std::fmt;

use crate::Aabb2;

/// Corner of the bounding box the crop rectangle grows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Corner {
    LowerLeft,
    /// `(max_x, min_y)`.
    #[default]
    LowerRight,
    UpperLeft,
    UpperRight,
}

impl Corner {
    fn on_right(self) -> bool {
        matches!(self, Corner::LowerRight | Corner::UpperRight)
    }

    fn on_bottom(self) -> bool {
        matches!(self, Corner::LowerLeft | Corner::LowerRight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Name of the length parameter measured along this axis.
    pub fn length_name(self) -> &'static str {
        match self {
            Axis::X => "x_len",
            Axis::Y => "y_len",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("X"),
            Axis::Y => f.write_str("Y"),
        }
    }
}

/// Closed rectangle `[x0, x1] x [y0, y1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRect {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl CropRect {
    /// Inclusive on all four edges. Non-finite coordinates never match.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn is_within(&self, bounds: &Aabb2) -> bool {
        self.x0 >= bounds.min_x
            && self.x1 <= bounds.max_x
            && self.y0 >= bounds.min_y
            && self.y1 <= bounds.max_y
    }
}

/// A requested length that reached past the bounding box and was cut back.
#[derive(Debug, Clone, PartialEq)]
pub struct ClampWarning {
    pub axis: Axis,
    pub requested: f64,
    pub range: f64,
    /// Name of the global bound the moving edge was clamped to.
    pub clamped_to: &'static str,
}

impl fmt::Display for ClampWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "requested {} ({}) exceeds total {} range ({}); cropping at {}",
            self.axis.length_name(),
            self.requested, self.axis, self.range, self.clamped_to
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnchoredRect {
    pub rect: CropRect,
    pub warnings: Vec<ClampWarning>,
}

/// Derives the crop rectangle spanning `x_len` by `y_len` from `corner`
/// toward the opposite corner of `bounds`, clamped to `bounds`.
///
/// Lengths are expected to be finite and non-negative.
pub fn anchored_rect(bounds: &Aabb2, corner: Corner, x_len: f64, y_len: f64) -> AnchoredRect {
    let mut warnings = Vec::new();
    let (x0, x1) = span(
        Axis::X,
        bounds.min_x,
        bounds.max_x,
        x_len,
        corner.on_right(),
        &mut warnings,
    );
    let (y0, y1) = span(
        Axis::Y,
        bounds.min_y,
        bounds.max_y,
        y_len,
        !corner.on_bottom(),
        &mut warnings,
    );

    AnchoredRect {
        rect: CropRect { x0, x1, y0, y1 },
        warnings,
    }
}

/// One axis of the rectangle. `from_max` anchors at the upper bound and
/// grows downward; otherwise it anchors at the lower bound and grows upward.
fn span(
    axis: Axis,
    min: f64,
    max: f64,
    len: f64,
    from_max: bool,
    warnings: &mut Vec<ClampWarning>,
) -> (f64, f64) {
    let mut clamp = |clamped_to: &'static str| {
        warnings.push(ClampWarning {
            axis,
            requested: len,
            range: max - min,
            clamped_to,
        })
    };

    if from_max {
        let lo = max - len;
        if lo < min {
            clamp(if axis == Axis::X { "min_x" } else { "min_y" });
            return (min, max);
        }
        (lo, max)
    } else {
        let hi = min + len;
        if hi > max {
            clamp(if axis == Axis::X { "max_x" } else { "max_y" });
            return (min, max);
        }
        (min, hi)
    }
}

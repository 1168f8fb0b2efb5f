use std::ops::Add;

use crate::foundation::error::{BubbleError, BubbleResult};

pub use kurbo::{Point, Rect, Size};

/// Per-edge insets (margin, padding, shadow) in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Thickness {
    /// Left inset.
    #[serde(default)]
    pub left: f64,
    /// Top inset.
    #[serde(default)]
    pub top: f64,
    /// Right inset.
    #[serde(default)]
    pub right: f64,
    /// Bottom inset.
    #[serde(default)]
    pub bottom: f64,
}

impl Thickness {
    /// All edges zero.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Build insets from the four edges.
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same inset on every edge.
    pub const fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    /// `left + right`.
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    /// `top + bottom`.
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }

    pub(crate) fn validate(self, what: &str) -> BubbleResult<()> {
        for (edge, v) in [
            ("left", self.left),
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(BubbleError::validation(format!(
                    "{what}.{edge} must be finite and >= 0 (got {v})"
                )));
            }
        }
        Ok(())
    }
}

impl Add for Thickness {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.left + rhs.left,
            self.top + rhs.top,
            self.right + rhs.right,
            self.bottom + rhs.bottom,
        )
    }
}

/// Layout axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

impl Axis {
    /// The other axis.
    pub fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Extent of `size` along this axis.
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Projection of `rect` onto this axis.
    pub fn span(self, rect: Rect) -> Span {
        match self {
            Self::Horizontal => Span::new(rect.x0, rect.width()),
            Self::Vertical => Span::new(rect.y0, rect.height()),
        }
    }
}

/// A one-dimensional interval `[start, start + extent]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Span {
    /// Interval start.
    pub start: f64,
    /// Interval length.
    pub extent: f64,
}

impl Span {
    /// Build a span from its start and length.
    pub const fn new(start: f64, extent: f64) -> Self {
        Self { start, extent }
    }

    /// `start + extent`.
    pub fn end(self) -> f64 {
        self.start + self.extent
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

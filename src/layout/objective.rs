//! Penalty functions minimized by the placement solver.
//!
//! Both penalties are sums of piecewise-linear terms (continuous, convex, not smooth),
//! so they are minimized with a derivative-free search.

use crate::foundation::core::Span;

/// Weight applied per pixel of non-overlap between popup (or pointer tip) and anchor.
pub const OVERLAP_WEIGHT: f64 = 100.0;
/// Distance from a container edge inside which the edge penalty applies.
pub const EDGE_MARGIN: f64 = 20.0;
/// Weight applied per pixel of intrusion into the edge margin.
pub const EDGE_WEIGHT: f64 = 20.0;
/// Weight applied per pixel of popup extending beyond the container.
pub const OFF_CONTAINER_WEIGHT: f64 = 1000.0;

/// Point on `target` that `bias` aims at.
///
/// - `0.0 ..= 1.0`: fraction of the span (start to end, both inclusive)
/// - `> 1.0`: pixels from the span start
/// - `< 0.0`: pixels back from the span end
pub fn bias_point(bias: f64, target: Span) -> f64 {
    if bias < 0.0 {
        target.end() + bias
    } else if bias > 1.0 {
        target.start + bias
    } else {
        target.start + target.extent * bias
    }
}

/// Penalty for placing `point` outside of `target`; zero on the span itself.
fn outside_penalty(point: f64, target: Span) -> f64 {
    if point < target.start {
        OVERLAP_WEIGHT * (target.start - point)
    } else if point > target.end() {
        OVERLAP_WEIGHT * (point - target.end())
    } else {
        0.0
    }
}

/// Axial position penalty `P(start)` for a popup of a given extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionPenalty {
    /// Popup extent along the axis.
    pub extent: f64,
    /// Anchor projection onto the axis.
    pub target: Span,
    /// Container extent along the axis.
    pub available: f64,
    /// Target bias.
    pub bias: f64,
}

impl PositionPenalty {
    /// Evaluate the penalty for a popup starting at `start`.
    pub fn eval(&self, start: f64) -> f64 {
        let end = start + self.extent;
        let center = start + self.extent / 2.0;

        let mut err = (center - bias_point(self.bias, self.target)).abs();

        // popup must share some of the anchor's extent
        if end < self.target.start {
            err += OVERLAP_WEIGHT * (self.target.start - end);
        }
        if start > self.target.end() {
            err += OVERLAP_WEIGHT * (start - self.target.end());
        }

        if start < EDGE_MARGIN {
            err += EDGE_WEIGHT * (EDGE_MARGIN - start);
        }
        if end > self.available - EDGE_MARGIN {
            err += EDGE_WEIGHT * (end - self.available + EDGE_MARGIN);
        }

        if start < 0.0 {
            err += OFF_CONTAINER_WEIGHT * -start;
        }
        if end > self.available {
            err += OFF_CONTAINER_WEIGHT * (end - self.available);
        }
        err
    }
}

/// Pointer-tip penalty `Q(offset)` along the facing edge of an already placed popup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPenalty {
    /// Chosen popup start along the axis.
    pub popup_start: f64,
    /// Anchor projection onto the axis.
    pub target: Span,
    /// Target bias.
    pub bias: f64,
}

impl PointerPenalty {
    /// Evaluate the penalty for a tip `offset` pixels from the popup start.
    pub fn eval(&self, offset: f64) -> f64 {
        let tip = self.popup_start + offset;
        (tip - bias_point(self.bias, self.target)).abs() + outside_penalty(tip, self.target)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/objective.rs"]
mod tests;

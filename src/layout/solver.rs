use crate::{
    foundation::core::{Axis, Rect, Size, Span},
    layout::brent::{Bracket, BrentOptions, minimize},
    layout::direction::{DirectionScores, PointerDirection, select_direction},
    layout::objective::{PointerPenalty, PositionPenalty, bias_point},
    popup::config::BubbleConfig,
};

/// Content measurement hook: given the available content box, return the desired
/// content size.
pub trait MeasureContent {
    /// Desired content size within `available`.
    fn measure(&mut self, available: Size) -> Size;
}

impl<F> MeasureContent for F
where
    F: FnMut(Size) -> Size,
{
    fn measure(&mut self, available: Size) -> Size {
        self(available)
    }
}

/// Position of a bubble along its primary axis plus where its pointer tip sits.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AxialPlacement {
    /// Bubble start along the axis, relative to the container.
    pub offset: f64,
    /// Pointer tip position along the bubble edge, in `[0, 1]`.
    pub pointer_fraction: f64,
}

/// Where to put a bubble and how to draw its pointer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlacementResult {
    /// Side of the anchor the bubble opened toward; `None` when centered.
    pub direction: PointerDirection,
    /// Bubble start along the primary axis, relative to the container.
    pub primary_axis_offset: f64,
    /// Pointer tip position along the bubble's anchor-facing edge, in `[0, 1]`.
    pub pointer_axial_fraction: f64,
    /// Bubble bounds including the pointer, in the container's coordinate space.
    pub final_bounds: Rect,
    /// `final_bounds` without the pointer strip; the content is laid out here.
    pub body_bounds: Rect,
}

impl PlacementResult {
    /// Direction the pointer tip points when drawn.
    pub fn pointer_tip_facing(&self) -> PointerDirection {
        self.direction.tip_facing()
    }
}

/// Minimize the position penalty, then the pointer penalty for the chosen position.
pub fn place_along_axis(
    extent: f64,
    target: Span,
    available: f64,
    bias: f64,
    search: BrentOptions,
) -> AxialPlacement {
    let position = PositionPenalty {
        extent,
        target,
        available,
        bias,
    };
    let guess = bias_point(bias, target) - extent / 2.0;
    let start = minimize(
        Bracket::new(0.0, guess, available - extent),
        |s| position.eval(s),
        search,
    )
    .x;

    let pointer = PointerPenalty {
        popup_start: start,
        target,
        bias,
    };
    let tip = minimize(
        Bracket::new(0.0, extent / 2.0, extent),
        |o| pointer.eval(o),
        search,
    )
    .x;

    let pointer_fraction = if extent > 0.0 {
        (tip / extent).clamp(0.0, 1.0)
    } else {
        0.5
    };
    AxialPlacement {
        offset: start,
        pointer_fraction,
    }
}

/// Outer size of the bubble body (content, padding and shadow; no pointer).
///
/// Returns `None` when the container or the measured content has no area, which
/// callers treat as "skip this layout pass".
pub fn measure_bubble<M>(container: Rect, config: &BubbleConfig, measure: &mut M) -> Option<Size>
where
    M: MeasureContent + ?Sized,
{
    if !has_area(container.size()) {
        return None;
    }

    let insets = config.padding + config.shadow_insets();
    let frame = config.margin + insets;
    let available = Size::new(
        config
            .width_request
            .unwrap_or((container.width() - frame.horizontal()).max(0.0)),
        config
            .height_request
            .unwrap_or((container.height() - frame.vertical()).max(0.0)),
    );

    let content = match (config.width_request, config.height_request) {
        (Some(w), Some(h)) => Size::new(w, h),
        _ => measure.measure(available),
    };
    if !has_area(content) {
        tracing::debug!(?content, "content has no area; skipping layout");
        return None;
    }

    let width = if config.fill_width {
        available.width
    } else {
        content.width.min(available.width) + insets.horizontal()
    };
    let height = if config.fill_height {
        available.height
    } else {
        content.height.min(available.height) + insets.vertical()
    };
    Some(Size::new(width, height))
}

/// Compute the placement of a bubble popup inside `container`.
///
/// `anchor` is in container-local coordinates; the returned bounds are translated by
/// the container origin. Without an anchor the bubble is centered and has no pointer.
#[tracing::instrument(skip(config, measure))]
pub fn compute_placement<M>(
    container: Rect,
    anchor: Option<Rect>,
    config: &BubbleConfig,
    measure: &mut M,
) -> Option<PlacementResult>
where
    M: MeasureContent + ?Sized,
{
    let bubble = measure_bubble(container, config, measure)?;
    let size = container.size();

    let Some(anchor) = anchor else {
        return Some(centered(size, bubble, container));
    };
    if !is_finite(anchor) {
        tracing::debug!(?anchor, "anchor is not finite; skipping layout");
        return None;
    }

    let len = config.pointer.length;
    let scores = DirectionScores::measure(size, anchor, bubble, len, config.margin);
    let direction = select_direction(&scores, config.allowed_directions);
    tracing::debug!(?direction, ?scores, "selected pointer direction");

    let Some(axis) = direction.primary_axis() else {
        return Some(centered(size, bubble, container));
    };
    let extent = axis.extent(bubble);
    let axial = place_along_axis(
        extent,
        axis.span(anchor),
        axis.extent(size),
        config.target_bias,
        config.search,
    );

    // the pointer strip sits between the anchor and the body on the cross axis
    let cross = axis.cross();
    let depth = cross.extent(bubble);
    let side = cross.span(anchor);
    let (start, body_start) = if direction.opens_before() {
        let start = side.start - depth - len;
        (start, start)
    } else {
        (side.end(), side.end() + len)
    };

    let along = Span::new(axial.offset, extent);
    let origin = container.origin().to_vec2();
    Some(PlacementResult {
        direction,
        primary_axis_offset: axial.offset,
        pointer_axial_fraction: axial.pointer_fraction,
        final_bounds: oriented(axis, along, Span::new(start, depth + len)) + origin,
        body_bounds: oriented(axis, along, Span::new(body_start, depth)) + origin,
    })
}

fn centered(size: Size, bubble: Size, container: Rect) -> PlacementResult {
    let x = (size.width - bubble.width) / 2.0;
    let y = (size.height - bubble.height) / 2.0;
    let bounds = rect(x, y, bubble.width, bubble.height) + container.origin().to_vec2();
    PlacementResult {
        direction: PointerDirection::None,
        primary_axis_offset: x,
        pointer_axial_fraction: 0.5,
        final_bounds: bounds,
        body_bounds: bounds,
    }
}

fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
    Rect::from_origin_size((x, y), (w, h))
}

/// Rectangle spanning `along` on `axis` and `across` on the other axis.
fn oriented(axis: Axis, along: Span, across: Span) -> Rect {
    match axis {
        Axis::Horizontal => rect(along.start, across.start, along.extent, across.extent),
        Axis::Vertical => rect(across.start, along.start, across.extent, along.extent),
    }
}

fn is_finite(r: Rect) -> bool {
    [r.x0, r.y0, r.x1, r.y1].iter().all(|v| v.is_finite())
}

fn has_area(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;

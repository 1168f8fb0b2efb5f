//! Placement of anchored speech-bubble popups.
//!
//! Given a container, an anchor rectangle inside it and the size the popup content
//! wants, the solver decides which side of the anchor the bubble opens toward, where
//! along that side it sits, and where on its edge the pointer tip goes.
//!
//! # Pipeline overview
//!
//! 1. **Measure**: container minus margin, padding and shadow gives the content box;
//!    the caller's [`MeasureContent`] hook reports the desired content size.
//! 2. **Select**: every allowed direction is scored by the room it leaves
//!    ([`DirectionScores`]); the best fitting one wins, or the least short one when
//!    nothing fits ([`select_direction`]).
//! 3. **Slide**: a bounded Brent search ([`minimize`]) positions the bubble along the
//!    anchor's side against a soft penalty ([`PositionPenalty`]), then positions the
//!    pointer tip along the bubble edge ([`PointerPenalty`]).
//! 4. **Emit**: a [`PlacementResult`] with final bounds, direction and tip fraction.
//!
//! The solver is pure and deterministic: identical inputs give bit-identical output.
//! [`BubblePopup`] wraps it with validated configuration setters and a resize
//! debouncer for callers that drive layout from container resize events.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod layout;
mod popup;
mod scene;

pub use foundation::core::{Axis, Point, Rect, Size, Span, Thickness};
pub use foundation::error::{BubbleError, BubbleResult};
pub use layout::brent::{Bracket, BrentOptions, Minimum, minimize};
pub use layout::direction::{
    AllowedDirections, DirectionScores, PointerDirection, select_direction,
};
pub use layout::objective::{
    EDGE_MARGIN, EDGE_WEIGHT, OFF_CONTAINER_WEIGHT, OVERLAP_WEIGHT, PointerPenalty,
    PositionPenalty, bias_point,
};
pub use layout::solver::{
    AxialPlacement, MeasureContent, PlacementResult, compute_placement, measure_bubble,
    place_along_axis,
};
pub use popup::bubble::BubblePopup;
pub use popup::config::{BubbleConfig, DEFAULT_SHADOW_INSET, PointerStyle};
pub use popup::debounce::{DEFAULT_RESIZE_WINDOW, ResizeDebouncer};
pub use scene::{Scene, ScoreReport};

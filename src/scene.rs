use crate::{
    foundation::core::{Rect, Size},
    foundation::error::{BubbleError, BubbleResult},
    layout::direction::{DirectionScores, PointerDirection, select_direction},
    layout::solver::{PlacementResult, compute_placement, measure_bubble},
    popup::config::BubbleConfig,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One self-contained placement problem.
///
/// Scenes are plain data, used to drive the solver from JSON (see the
/// `bubble-layout` binary) and to pin down regressions. The content is modelled by
/// its intrinsic size; the solver clamps it to the available box as it would any
/// measured content.
pub struct Scene {
    /// Container bounds; output bounds are in this rectangle's coordinate space.
    pub container: Rect,
    /// Anchor bounds relative to the container origin, if any.
    #[serde(default)]
    pub anchor: Option<Rect>,
    /// Intrinsic content size reported by measurement.
    pub content: Size,
    /// Popup configuration.
    #[serde(default)]
    pub config: BubbleConfig,
}

/// Direction scores for a scene together with the selector's choice.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScoreReport {
    /// Bubble body size the scores were computed for.
    pub bubble: Size,
    /// Per-direction scores.
    pub scores: DirectionScores,
    /// Selected direction.
    pub selected: PointerDirection,
}

impl Scene {
    /// Parse and validate a scene from JSON.
    pub fn from_json(s: &str) -> BubbleResult<Self> {
        let scene: Self = serde_json::from_str(s)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> BubbleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration, the rectangles and the intrinsic content size.
    pub fn validate(&self) -> BubbleResult<()> {
        self.config.validate()?;
        validate_rect("container", self.container)?;
        if let Some(anchor) = self.anchor {
            validate_rect("anchor", anchor)?;
        }
        if !(self.content.width.is_finite() && self.content.height.is_finite()) {
            return Err(BubbleError::validation("content size must be finite"));
        }
        if self.content.width < 0.0 || self.content.height < 0.0 {
            return Err(BubbleError::validation("content size must be >= 0"));
        }
        Ok(())
    }

    /// Solve the scene; `None` when layout would be skipped.
    pub fn place(&self) -> Option<PlacementResult> {
        let content = self.content;
        let mut measure = |_: Size| content;
        compute_placement(self.container, self.anchor, &self.config, &mut measure)
    }

    /// Score every direction; `None` without an anchor or when layout would be skipped.
    pub fn scores(&self) -> Option<ScoreReport> {
        let anchor = self.anchor?;
        let content = self.content;
        let mut measure = |_: Size| content;
        let bubble = measure_bubble(self.container, &self.config, &mut measure)?;
        let scores = DirectionScores::measure(
            self.container.size(),
            anchor,
            bubble,
            self.config.pointer.length,
            self.config.margin,
        );
        Some(ScoreReport {
            bubble,
            scores,
            selected: select_direction(&scores, self.config.allowed_directions),
        })
    }
}

/// Rectangles must be finite and not inverted; empty ones are fine.
fn validate_rect(what: &str, r: Rect) -> BubbleResult<()> {
    if ![r.x0, r.y0, r.x1, r.y1].iter().all(|v| v.is_finite()) {
        return Err(BubbleError::validation(format!("{what} must be finite (got {r:?})")));
    }
    if r.x1 < r.x0 || r.y1 < r.y0 {
        return Err(BubbleError::validation(format!(
            "{what} must have x1 >= x0 and y1 >= y0 (got {r:?})"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/scene.rs"]
mod tests;

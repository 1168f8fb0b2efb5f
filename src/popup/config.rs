use crate::{
    foundation::core::Thickness,
    foundation::error::{BubbleError, BubbleResult},
    layout::brent::BrentOptions,
    layout::direction::AllowedDirections,
};

/// Shadow insets used when [`BubbleConfig::has_shadow`] is set and no explicit
/// insets are configured.
pub const DEFAULT_SHADOW_INSET: Thickness = Thickness::new(3.0, 2.0, 3.0, 5.0);

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Pointer ("speech-bubble" tip) geometry.
///
/// Only `length` affects placement; the radii are carried through for the renderer.
pub struct PointerStyle {
    /// Distance from the bubble body to the pointer tip.
    pub length: f64,
    /// Rounding radius at the pointer tip.
    pub tip_radius: f64,
    /// Rounding radius where the pointer meets the body.
    pub corner_radius: f64,
}

impl Default for PointerStyle {
    fn default() -> Self {
        Self {
            length: 8.0,
            tip_radius: 2.0,
            corner_radius: 4.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Everything a bubble popup needs besides the live geometry.
///
/// All fields have defaults, so a scene file only has to name what it changes.
pub struct BubbleConfig {
    /// Where on the anchor edge the bubble and its pointer aim.
    ///
    /// `0.0..=1.0` is a fraction of the anchor edge, `> 1.0` is pixels from the anchor
    /// start and `< 0.0` is pixels back from the anchor end.
    pub target_bias: f64,
    /// Pointer geometry.
    pub pointer: PointerStyle,
    /// Directions the bubble may open toward.
    pub allowed_directions: AllowedDirections,
    /// Space kept between the bubble and the container.
    pub margin: Thickness,
    /// Space between the bubble outline and its content.
    pub padding: Thickness,
    /// Whether the bubble reserves room for a drop shadow.
    pub has_shadow: bool,
    /// Room reserved for the shadow when `has_shadow` is set.
    pub shadow_inset: Thickness,
    /// Stretch the bubble across the available width.
    pub fill_width: bool,
    /// Stretch the bubble across the available height.
    pub fill_height: bool,
    /// Explicit content width, bypassing the available-width constraint.
    pub width_request: Option<f64>,
    /// Explicit content height, bypassing the available-height constraint.
    pub height_request: Option<f64>,
    /// Minimizer controls for the position and pointer searches.
    pub search: BrentOptions,
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self {
            target_bias: 0.5,
            pointer: PointerStyle::default(),
            allowed_directions: AllowedDirections::ALL,
            margin: Thickness::ZERO,
            padding: Thickness::uniform(10.0),
            has_shadow: false,
            shadow_inset: DEFAULT_SHADOW_INSET,
            fill_width: false,
            fill_height: false,
            width_request: None,
            height_request: None,
            search: BrentOptions::default(),
        }
    }
}

impl BubbleConfig {
    /// Insets reserved for the shadow, zero when the shadow is off.
    pub fn shadow_insets(&self) -> Thickness {
        if self.has_shadow {
            self.shadow_inset
        } else {
            Thickness::ZERO
        }
    }

    /// Check every field; placement assumes a validated configuration.
    ///
    /// Any finite bias is accepted, however large.
    pub fn validate(&self) -> BubbleResult<()> {
        if !self.target_bias.is_finite() {
            return Err(BubbleError::validation(format!(
                "target_bias must be finite (got {})",
                self.target_bias
            )));
        }
        for (name, v) in [
            ("pointer.length", self.pointer.length),
            ("pointer.tip_radius", self.pointer.tip_radius),
            ("pointer.corner_radius", self.pointer.corner_radius),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(BubbleError::validation(format!(
                    "{name} must be finite and >= 0 (got {v})"
                )));
            }
        }
        if self.allowed_directions.is_empty() {
            return Err(BubbleError::validation(
                "allowed_directions must contain at least one direction",
            ));
        }
        self.margin.validate("margin")?;
        self.padding.validate("padding")?;
        self.shadow_inset.validate("shadow_inset")?;
        for (name, v) in [
            ("width_request", self.width_request),
            ("height_request", self.height_request),
        ] {
            if let Some(v) = v
                && !(v.is_finite() && v > 0.0)
            {
                return Err(BubbleError::validation(format!(
                    "{name} must be finite and > 0 (got {v})"
                )));
            }
        }
        if !(self.search.tolerance.is_finite() && self.search.tolerance > 0.0) {
            return Err(BubbleError::validation("search.tolerance must be > 0"));
        }
        if self.search.max_iterations == 0 {
            return Err(BubbleError::validation(
                "search.max_iterations must be >= 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/popup/config.rs"]
mod tests;

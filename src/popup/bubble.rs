use std::time::Instant;

use crate::{
    foundation::core::{Rect, Thickness},
    foundation::error::BubbleResult,
    layout::direction::AllowedDirections,
    layout::solver::{MeasureContent, PlacementResult, compute_placement},
    popup::config::BubbleConfig,
    popup::debounce::ResizeDebouncer,
};

/// A bubble popup instance: validated configuration plus the last placement.
///
/// Setters validate and store a value and, when it changed, flag the popup as
/// needing layout. Nothing is recomputed until [`BubblePopup::layout`] is called.
#[derive(Clone, Debug)]
pub struct BubblePopup {
    config: BubbleConfig,
    needs_layout: bool,
    placement: Option<PlacementResult>,
    resize: ResizeDebouncer,
}

impl BubblePopup {
    /// Build a popup from `config`, rejecting invalid values.
    pub fn new(config: BubbleConfig) -> BubbleResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            needs_layout: true,
            placement: None,
            resize: ResizeDebouncer::default(),
        })
    }

    /// Replace the resize debouncer (for a different coalescing window).
    pub fn with_resize_debouncer(mut self, resize: ResizeDebouncer) -> Self {
        self.resize = resize;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &BubbleConfig {
        &self.config
    }

    /// Placement from the last successful layout pass.
    pub fn placement(&self) -> Option<&PlacementResult> {
        self.placement.as_ref()
    }

    /// Whether configuration or container changes are waiting for a layout pass.
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Replace the whole configuration.
    pub fn set_config(&mut self, config: BubbleConfig) -> BubbleResult<()> {
        self.update(|c| *c = config)
    }

    /// Set the target bias.
    pub fn set_target_bias(&mut self, bias: f64) -> BubbleResult<()> {
        self.update(|c| c.target_bias = bias)
    }

    /// Set the pointer length.
    pub fn set_pointer_length(&mut self, length: f64) -> BubbleResult<()> {
        self.update(|c| c.pointer.length = length)
    }

    /// Set the pointer tip radius.
    pub fn set_pointer_tip_radius(&mut self, radius: f64) -> BubbleResult<()> {
        self.update(|c| c.pointer.tip_radius = radius)
    }

    /// Set the pointer corner radius.
    pub fn set_pointer_corner_radius(&mut self, radius: f64) -> BubbleResult<()> {
        self.update(|c| c.pointer.corner_radius = radius)
    }

    /// Restrict the directions the bubble may open toward.
    pub fn set_allowed_directions(&mut self, allowed: AllowedDirections) -> BubbleResult<()> {
        self.update(|c| c.allowed_directions = allowed)
    }

    /// Set the margin kept from the container edges.
    pub fn set_margin(&mut self, margin: Thickness) -> BubbleResult<()> {
        self.update(|c| c.margin = margin)
    }

    /// Set the content padding.
    pub fn set_padding(&mut self, padding: Thickness) -> BubbleResult<()> {
        self.update(|c| c.padding = padding)
    }

    /// Turn the shadow allowance on or off.
    pub fn set_has_shadow(&mut self, has_shadow: bool) -> BubbleResult<()> {
        self.update(|c| c.has_shadow = has_shadow)
    }

    /// Set per-axis fill behaviour.
    pub fn set_fill(&mut self, fill_width: bool, fill_height: bool) -> BubbleResult<()> {
        self.update(|c| {
            c.fill_width = fill_width;
            c.fill_height = fill_height;
        })
    }

    /// Set or clear explicit content size requests.
    pub fn set_size_request(
        &mut self,
        width: Option<f64>,
        height: Option<f64>,
    ) -> BubbleResult<()> {
        self.update(|c| {
            c.width_request = width;
            c.height_request = height;
        })
    }

    fn update(&mut self, apply: impl FnOnce(&mut BubbleConfig)) -> BubbleResult<()> {
        let mut next = self.config.clone();
        apply(&mut next);
        if next == self.config {
            return Ok(());
        }
        next.validate()?;
        self.config = next;
        self.needs_layout = true;
        Ok(())
    }

    /// Record a container resize at `now`; see [`ResizeDebouncer`].
    pub fn notify_resize(&mut self, now: Instant) {
        self.resize.notify(now);
    }

    /// `true` when a debounced resize is due; the popup is then flagged for layout.
    pub fn poll_resize(&mut self, now: Instant) -> bool {
        let due = self.resize.poll(now);
        if due {
            self.needs_layout = true;
        }
        due
    }

    /// Run a layout pass and store the result.
    ///
    /// A skipped pass (empty container or content) leaves the previous placement and
    /// the needs-layout flag untouched and returns `None`.
    pub fn layout<M>(
        &mut self,
        container: Rect,
        anchor: Option<Rect>,
        measure: &mut M,
    ) -> Option<&PlacementResult>
    where
        M: MeasureContent + ?Sized,
    {
        let placement = compute_placement(container, anchor, &self.config, measure)?;
        self.needs_layout = false;
        self.placement = Some(placement);
        self.placement.as_ref()
    }
}

impl Default for BubblePopup {
    fn default() -> Self {
        Self {
            config: BubbleConfig::default(),
            needs_layout: true,
            placement: None,
            resize: ResizeDebouncer::default(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/popup/bubble.rs"]
mod tests;

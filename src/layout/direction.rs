use crate::foundation::core::{Axis, Rect, Size, Thickness};

/// Side of the anchor a bubble opens toward.
///
/// `Down` places the bubble below the anchor with its pointer on the bubble's top
/// edge; see [`PointerDirection::tip_facing`] for the direction the tip itself points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PointerDirection {
    /// No pointer; the bubble is centered in its container.
    #[default]
    None,
    /// Bubble above the anchor.
    Up,
    /// Bubble below the anchor.
    Down,
    /// Bubble to the left of the anchor.
    Left,
    /// Bubble to the right of the anchor.
    Right,
}

impl PointerDirection {
    /// Cardinal directions in selection priority order.
    pub const CANDIDATES: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// `true` for `Up` and `Down`.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// `true` when the bubble sits before the anchor on its cross axis (`Up`, `Left`).
    pub fn opens_before(self) -> bool {
        matches!(self, Self::Up | Self::Left)
    }

    /// `true` for `Left` and `Right`.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Axis along which the bubble slides and the pointer tip moves.
    ///
    /// A bubble above or below the anchor slides horizontally.
    pub fn primary_axis(self) -> Option<Axis> {
        match self {
            Self::None => None,
            Self::Up | Self::Down => Some(Axis::Horizontal),
            Self::Left | Self::Right => Some(Axis::Vertical),
        }
    }

    /// Direction the rendered pointer tip points (back toward the anchor).
    pub fn tip_facing(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Single-direction flag, empty for `None`.
    pub fn flag(self) -> AllowedDirections {
        match self {
            Self::None => AllowedDirections::empty(),
            Self::Up => AllowedDirections::UP,
            Self::Down => AllowedDirections::DOWN,
            Self::Left => AllowedDirections::LEFT,
            Self::Right => AllowedDirections::RIGHT,
        }
    }
}

bitflags::bitflags! {
    /// Set of directions the selector may choose from.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    pub struct AllowedDirections: u8 {
        /// Bubble may open above the anchor.
        const UP = 1;
        /// Bubble may open below the anchor.
        const DOWN = 1 << 1;
        /// Bubble may open left of the anchor.
        const LEFT = 1 << 2;
        /// Bubble may open right of the anchor.
        const RIGHT = 1 << 3;
        /// `UP | DOWN`.
        const VERTICAL = Self::UP.bits() | Self::DOWN.bits();
        /// `LEFT | RIGHT`.
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        /// Every cardinal direction.
        const ALL = Self::VERTICAL.bits() | Self::HORIZONTAL.bits();
    }
}

impl AllowedDirections {
    /// Whether `dir` is in the set. `None` is never allowed.
    pub fn allows(self, dir: PointerDirection) -> bool {
        let flag = dir.flag();
        !flag.is_empty() && self.contains(flag)
    }
}

impl Default for AllowedDirections {
    fn default() -> Self {
        Self::ALL
    }
}

/// Room left over for each candidate direction; positive means the bubble fits.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DirectionScores {
    /// Score for a bubble above the anchor.
    pub up: f64,
    /// Score for a bubble below the anchor.
    pub down: f64,
    /// Score for a bubble left of the anchor.
    pub left: f64,
    /// Score for a bubble right of the anchor.
    pub right: f64,
}

impl DirectionScores {
    /// Score every direction for a bubble of size `bubble` (pointer excluded).
    ///
    /// Each score is the smaller of the room beside the anchor and the room along the
    /// perpendicular axis of the container.
    pub fn measure(
        container: Size,
        anchor: Rect,
        bubble: Size,
        pointer_length: f64,
        margin: Thickness,
    ) -> Self {
        let above = anchor.y0 - bubble.height - pointer_length - margin.top;
        let below = container.height - anchor.y1 - bubble.height - pointer_length - margin.bottom;
        let before = anchor.x0 - bubble.width - pointer_length - margin.left;
        let after = container.width - anchor.x1 - bubble.width - pointer_length - margin.right;
        let horizontal = container.width - bubble.width - margin.horizontal();
        let vertical = container.height - bubble.height - margin.vertical();

        Self {
            up: room(above, horizontal),
            down: room(below, horizontal),
            left: room(before, vertical),
            right: room(after, vertical),
        }
    }

    /// Score for `dir`; `None` has no score.
    pub fn get(&self, dir: PointerDirection) -> Option<f64> {
        match dir {
            PointerDirection::None => None,
            PointerDirection::Up => Some(self.up),
            PointerDirection::Down => Some(self.down),
            PointerDirection::Left => Some(self.left),
            PointerDirection::Right => Some(self.right),
        }
    }

    fn allowed(&self, allowed: AllowedDirections) -> impl Iterator<Item = (PointerDirection, f64)> {
        PointerDirection::CANDIDATES
            .into_iter()
            .filter(move |&dir| allowed.allows(dir))
            .filter_map(move |dir| self.get(dir).map(|score| (dir, score)))
            .filter(|&(_, score)| score.is_finite())
    }
}

/// Smaller of the two room values; NaN in either one yields NaN.
fn room(primary: f64, cross: f64) -> f64 {
    if primary.is_nan() || cross.is_nan() {
        f64::NAN
    } else {
        primary.min(cross)
    }
}

/// Pick a direction from `scores`.
///
/// The first pass takes the highest strictly positive score. When nothing fits, the
/// fallback pass takes the score closest to zero. Both passes walk
/// [`PointerDirection::CANDIDATES`] and only replace on a strict improvement, so ties
/// go to the earlier direction. Returns `None` when `allowed` is empty or none of the
/// allowed scores is finite.
pub fn select_direction(scores: &DirectionScores, allowed: AllowedDirections) -> PointerDirection {
    let mut best = PointerDirection::None;
    let mut space = 0.0;
    for (dir, score) in scores.allowed(allowed) {
        if score > space {
            best = dir;
            space = score;
        }
    }
    if best != PointerDirection::None {
        return best;
    }

    let mut shortfall = f64::MAX;
    for (dir, score) in scores.allowed(allowed) {
        if score.abs() < shortfall {
            best = dir;
            shortfall = score.abs();
        }
    }
    best
}

#[cfg(test)]
#[path = "../../tests/unit/layout/direction.rs"]
mod tests;

//! Align popups against their anchors.
use crate::LayoutDirection;

/// A logical horizontal edge, relative to the reading direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// The edge where text starts (left in LTR, right in RTL).
    Start,

    /// The edge where text ends (right in LTR, left in RTL).
    End,
}

impl Alignment {
    /// Resolves the alignment to a horizontal edge based on the provided layout direction.
    #[must_use]
    pub fn resolve_horizontal_in(self, direction: LayoutDirection) -> Horizontal {
        match (self, direction.is_rtl()) {
            (Self::Start, false) | (Self::End, true) => Horizontal::Left,
            (Self::Start, true) | (Self::End, false) => Horizontal::Right,
        }
    }
}

/// A physical horizontal edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizontal {
    /// The left edge.
    Left,

    /// The right edge.
    Right,
}

/// A physical vertical edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vertical {
    /// The top edge.
    Top,

    /// The bottom edge.
    Bottom,
}

/// A corner of a rectangle, expressed in logical terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Corner {
    /// The horizontal edge of the corner.
    pub x: Alignment,

    /// The vertical edge of the corner.
    pub y: Vertical,
}

impl Corner {
    /// The top corner on the start side.
    pub const TOP_START: Self = Self::new(Alignment::Start, Vertical::Top);

    /// The top corner on the end side.
    pub const TOP_END: Self = Self::new(Alignment::End, Vertical::Top);

    /// The bottom corner on the start side.
    pub const BOTTOM_START: Self = Self::new(Alignment::Start, Vertical::Bottom);

    /// The bottom corner on the end side.
    pub const BOTTOM_END: Self = Self::new(Alignment::End, Vertical::Bottom);

    /// Creates a new [`Corner`].
    pub const fn new(x: Alignment, y: Vertical) -> Self {
        Self { x, y }
    }
}

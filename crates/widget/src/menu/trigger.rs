//! The element that opens a menu.
use crate::core::{LayoutDirection, Point, Rectangle};

/// The shape of a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// A labelled button. The whole button opens the menu.
    #[default]
    Button,
    /// An icon button. The whole button opens the menu.
    Icon,
    /// A button split into a primary action and a disclosure segment that
    /// opens the menu.
    Split,
}

/// The lifecycle of a menu.
///
/// `Opening` and `Closing` only last while a transition is being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// No popup is shown.
    #[default]
    Closed,
    /// Placement is being computed.
    Opening,
    /// At least one popup is shown.
    Open,
    /// Popups are being hidden.
    Closing,
}

/// A clickable part of a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// The primary segment of a split trigger.
    Action,
    /// The part that opens the menu.
    Menu,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub(super) struct Trigger {
    pub(super) kind: Kind,
    pub(super) bounds: Rectangle,
    pub(super) disabled: bool,
    pub(super) state: State,
}

impl Trigger {
    pub(super) fn transition(&mut self, state: State) {
        log::trace!("Menu trigger {:?} -> {:?}", self.state, state);

        self.state = state;
    }

    pub(super) fn is_open(&self) -> bool {
        self.state == State::Open
    }

    /// Returns the segment under `point`.
    ///
    /// The disclosure segment of a split trigger sits on its end side.
    pub(super) fn segment_at(
        &self,
        point: Point,
        disclosure_width: f32,
        direction: LayoutDirection,
    ) -> Option<Segment> {
        if !self.bounds.contains(point) {
            return None;
        }

        if self.kind != Kind::Split {
            return Some(Segment::Menu);
        }

        let disclosure = if direction.is_rtl() {
            point.x < self.bounds.x + disclosure_width
        } else {
            point.x >= self.bounds.right() - disclosure_width
        };

        Some(if disclosure {
            Segment::Menu
        } else {
            Segment::Action
        })
    }
}

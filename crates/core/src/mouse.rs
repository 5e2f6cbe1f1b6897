//! Handle mouse events.
use crate::Point;

/// The button of a mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// The left mouse button.
    Left,

    /// The right mouse button.
    Right,

    /// The middle (wheel) button.
    Middle,
}

/// A mouse event.
///
/// Positions are in viewport coordinates, the same space anchors and
/// popup bounds live in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The mouse cursor was moved.
    CursorMoved {
        /// The new position of the mouse cursor.
        position: Point,
    },

    /// The mouse cursor left the viewport.
    CursorLeft,

    /// A mouse button was pressed.
    ButtonPressed(Button),

    /// A mouse button was released.
    ButtonReleased(Button),
}

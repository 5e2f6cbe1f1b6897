//! Handle events of a user interface.
use crate::keyboard;
use crate::mouse;
use crate::window;

/// A user interface event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A keyboard event
    Keyboard(keyboard::Event),

    /// A mouse event
    Mouse(mouse::Event),

    /// A viewport event
    Window(window::Event),
}

impl From<keyboard::Event> for Event {
    fn from(event: keyboard::Event) -> Self {
        Self::Keyboard(event)
    }
}

impl From<mouse::Event> for Event {
    fn from(event: mouse::Event) -> Self {
        Self::Mouse(event)
    }
}

impl From<window::Event> for Event {
    fn from(event: window::Event) -> Self {
        Self::Window(event)
    }
}

/// The status of an [`Event`] after being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The [`Event`] was **NOT** handled by any widget.
    Ignored,

    /// The [`Event`] was handled and processed by a widget.
    Captured,
}

impl Status {
    /// Merges two [`Status`] into one.
    ///
    /// `Captured` takes precedence over `Ignored`:
    ///
    /// ```
    /// use perch_core::event::Status;
    ///
    /// assert_eq!(Status::Ignored.merge(Status::Ignored), Status::Ignored);
    /// assert_eq!(Status::Ignored.merge(Status::Captured), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Ignored), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Captured), Status::Captured);
    /// ```
    pub fn merge(self, b: Self) -> Self {
        match self {
            Status::Ignored => b,
            Status::Captured => Status::Captured,
        }
    }
}

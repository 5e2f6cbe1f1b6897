//! Collect what a menu asks of its host during an update.
use crate::core::overlay;
use crate::menu::Signal;
use crate::surface::{Popup, Surface};

/// A focus target requested by a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The trigger that opened the menu.
    Trigger,
    /// An item of an open popup.
    Item {
        /// The depth of the popup.
        level: usize,
        /// The flattened index of the item.
        index: usize,
    },
}

/// A connection to the host of a menu.
///
/// A menu leverages a [`Shell`] to publish [`Signal`]s, show and hide
/// popups, and ask for focus changes. Focus requests are not applied right
/// away: the host reads [`focus_request`] after the event has been processed
/// and moves the focus once the popups are rendered.
///
/// [`focus_request`]: Self::focus_request
pub struct Shell<'a, Message> {
    signals: &'a mut Vec<Signal<Message>>,
    surface: &'a mut dyn Surface<Message>,
    focus_request: Option<Focus>,
    redraw_request: bool,
}

impl<'a, Message> Shell<'a, Message> {
    /// Creates a new [`Shell`] with the provided buffer of signals and
    /// popup surface.
    pub fn new(
        signals: &'a mut Vec<Signal<Message>>,
        surface: &'a mut dyn Surface<Message>,
    ) -> Self {
        Self {
            signals,
            surface,
            focus_request: None,
            redraw_request: false,
        }
    }

    /// Returns true if the [`Shell`] contains no published signals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Publish the given [`Signal`] for an application to process it.
    pub fn publish(&mut self, signal: Signal<Message>) {
        self.signals.push(signal);
    }

    /// Shows or moves a popup.
    pub fn show(&mut self, popup: &Popup<'_, Message>) {
        self.surface.show(popup);
    }

    /// Hides a popup.
    pub fn hide(&mut self, id: overlay::Id) {
        self.surface.hide(id);
    }

    /// Requests the focus to move to `focus`. The last request wins.
    pub fn request_focus(&mut self, focus: Focus) {
        self.focus_request = Some(focus);
    }

    /// Returns the pending focus request, if any.
    #[must_use]
    pub fn focus_request(&self) -> Option<Focus> {
        self.focus_request
    }

    /// Requests a new frame to be drawn as soon as possible.
    pub fn request_redraw(&mut self) {
        self.redraw_request = true;
    }

    /// Returns whether a redraw was requested.
    #[must_use]
    pub fn is_redraw_requested(&self) -> bool {
        self.redraw_request
    }
}

impl<Message> std::fmt::Debug for Shell<'_, Message> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("signals", &self.signals.len())
            .field("focus_request", &self.focus_request)
            .field("redraw_request", &self.redraw_request)
            .finish_non_exhaustive()
    }
}

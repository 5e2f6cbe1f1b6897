//! Track changes of the viewport a popup lives in.
use crate::{Size, Vector};

/// A viewport-related event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The viewport was resized.
    Resized(Size),

    /// The content under the viewport was scrolled.
    ///
    /// `delta` is how far the content moved up and to the left, so an anchor
    /// living in that content shifts by `-delta`.
    Scrolled {
        /// The scrolled amount.
        delta: Vector,
    },

    /// The window lost focus.
    Unfocused,
}

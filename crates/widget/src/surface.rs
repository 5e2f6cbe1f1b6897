//! Show popups on whatever the host draws with.
use crate::core::menu::MenuItem;
use crate::core::{Rectangle, overlay};

/// A layer popups are shown on.
///
/// The menu calls [`show`] when a popup opens or moves and [`hide`] when it
/// closes. Everything else about drawing is up to the implementor.
///
/// [`show`]: Self::show
/// [`hide`]: Self::hide
pub trait Surface<Message> {
    /// Shows the popup, or moves it if its id is already shown.
    fn show(&mut self, popup: &Popup<'_, Message>);

    /// Hides the popup with the given id.
    fn hide(&mut self, id: overlay::Id);
}

/// A surface that draws nothing.
impl<Message> Surface<Message> for () {
    fn show(&mut self, _popup: &Popup<'_, Message>) {}

    fn hide(&mut self, _id: overlay::Id) {}
}

/// A snapshot of an open popup, in viewport coordinates.
#[derive(Debug, Clone)]
pub struct Popup<'a, Message> {
    /// The id of the popup.
    pub id: overlay::Id,
    /// The depth of the popup. `0` is the root list.
    pub level: usize,
    /// Where the popup goes.
    pub bounds: Rectangle,
    /// Index of the placement candidate that was chosen.
    pub candidate: usize,
    /// Whether the popup fits inside the viewport margin.
    pub fits: bool,
    /// How far the content is scrolled.
    pub scroll_offset: f32,
    /// The focused item, by flattened index.
    pub focused: Option<usize>,
    /// The rows, top to bottom. Row bounds account for scrolling and may lie
    /// outside of `bounds`.
    pub rows: Vec<Row<'a, Message>>,
}

/// A row of a [`Popup`].
#[derive(Debug, Clone)]
pub enum Row<'a, Message> {
    /// A section header.
    Header {
        /// The header text.
        text: &'a str,
        /// Where the row goes.
        bounds: Rectangle,
    },
    /// A menu item.
    Item {
        /// The flattened index of the item.
        index: usize,
        /// The item.
        item: &'a MenuItem<Message>,
        /// Where the row goes.
        bounds: Rectangle,
        /// Whether the item has the focus.
        focused: bool,
        /// Whether the submenu of the item is open.
        expanded: bool,
    },
    /// A divider between sections.
    Divider {
        /// Where the row goes.
        bounds: Rectangle,
    },
}

impl<Message> Row<'_, Message> {
    /// Returns where the row goes.
    pub fn bounds(&self) -> Rectangle {
        match self {
            Row::Header { bounds, .. } | Row::Item { bounds, .. } | Row::Divider { bounds } => {
                *bounds
            }
        }
    }
}

//! perch is a headless menu and focus-trap library for any UI toolkit.
//!
//! It computes where popups go, which item has the keyboard focus and what
//! happened, and leaves drawing and windowing to the host.
//!
//! ```ignore
//! use perch::core::menu::{self, MenuSection};
//! use perch::widget::{Menu, Shell};
//!
//! let mut menu = Menu::new(vec![MenuSection::new(vec![
//!     menu::item!("Open", Message::Open),
//!     menu::item!("Save", Message::Save),
//! ])])
//! .anchor(button_bounds)
//! .viewport(window_size);
//! ```
//!
//! The [`core`] crate holds geometry, input events, the menu data model and
//! [`Settings`]. The [`widget`] crate holds the state machines.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use perch_core as core;
pub use perch_widget as widget;

pub use crate::core::event;
pub use crate::core::keyboard;
pub use crate::core::mouse;
pub use crate::core::window;
pub use crate::core::{
    Alignment, Event, LayoutDirection, Point, Rectangle, Settings, Size, Vector,
    layout_direction, set_layout_direction,
};
pub use crate::widget::card::{self, Card};
pub use crate::widget::menu::{self, Menu};
pub use crate::widget::{Focus, Popup, Shell, Surface};

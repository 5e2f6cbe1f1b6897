//! The core library of [perch].
//!
//! This library holds basic types that can be reused and re-exported in
//! different runtime implementations: geometry, input events, the menu data
//! model and the [`Settings`] every widget reads its metrics from.
//!
//! Nothing in here draws or owns a window. A host feeds geometry and
//! [`Event`]s in and renders whatever the widgets report back.
//!
//! [perch]: https://github.com/perch-ui/perch
pub mod alignment;
pub mod event;
pub mod keyboard;
pub mod menu;
pub mod mouse;
pub mod overlay;
pub mod settings;
pub mod window;

mod layout_direction;
mod point;
mod rectangle;
mod size;
mod vector;

pub use alignment::Alignment;
pub use event::Event;
pub use layout_direction::{LayoutDirection, layout_direction, set_layout_direction};
pub use point::Point;
pub use rectangle::Rectangle;
pub use settings::Settings;
pub use size::Size;
pub use vector::Vector;

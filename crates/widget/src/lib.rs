//! Headless widgets for [perch].
//!
//! Every widget in here is a plain state machine. It receives geometry and
//! input [`Event`]s from a host, and reports back what should be shown, which
//! element should take the focus next and what the application should react
//! to. Drawing is left to the host.
//!
//! [perch]: https://github.com/perch-ui/perch
//! [`Event`]: crate::core::Event
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use perch_core as core;

pub mod card;
pub mod menu;
pub mod positioner;
pub mod surface;

mod shell;

pub use card::Card;
pub use menu::Menu;
pub use positioner::{Candidate, Placement, Positioner};
pub use shell::{Focus, Shell};
pub use surface::{Popup, Surface};

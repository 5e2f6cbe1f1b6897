//! Layout direction support for RTL (right-to-left) languages.
//!
//! This module provides the [`LayoutDirection`] enum and global state management
//! for bidirectional layout support (Arabic, Hebrew, Persian, etc.).
//!
//! # Global Layout Direction
//!
//! There's a global layout direction that widgets
//! use as a fallback when they don't have an explicit direction set:
//!
//! ```rust,ignore
//! use perch_core::{LayoutDirection, set_layout_direction, layout_direction};
//!
//! // Set global direction to RTL
//! set_layout_direction(LayoutDirection::Rtl);
//!
//! // Widgets without explicit direction use the global value
//! assert!(layout_direction().is_rtl());
//! ```
//!
//! # Per-Widget Override
//!
//! Menus can pin their own direction via `Menu::layout_direction`, which
//! mirrors popup placement and swaps the meaning of ArrowLeft/ArrowRight:
//!
//! ```rust,ignore
//! use perch::{LayoutDirection, widget::Menu};
//!
//! // This menu is always RTL, regardless of global setting
//! let menu = Menu::new(sections).layout_direction(LayoutDirection::Rtl);
//! ```

use std::sync::atomic::{AtomicU8, Ordering};

/// Global layout direction state.
///
/// Stored as u8: 0 = Ltr, 1 = Rtl.
static LAYOUT_DIRECTION: AtomicU8 = AtomicU8::new(0);

/// Returns the global layout direction.
///
/// Widgets use this as a fallback when they don't have an explicit direction set.
/// This is typically set by the shell based on system locale or user preference.
pub fn layout_direction() -> LayoutDirection {
    match LAYOUT_DIRECTION.load(Ordering::Relaxed) {
        1 => LayoutDirection::Rtl,
        _ => LayoutDirection::Ltr,
    }
}

/// Sets the global layout direction.
///
/// Call this when the host switches locale. Menus that were given an
/// explicit direction ignore it.
pub fn set_layout_direction(direction: LayoutDirection) {
    LAYOUT_DIRECTION.store(direction as u8, Ordering::Relaxed);
}

/// The direction of the layout flow.
///
/// This determines whether the layout flows from left-to-right (LTR)
/// or right-to-left (RTL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum LayoutDirection {
    /// Left-to-right layout (default for most Western languages).
    #[default]
    Ltr = 0,
    /// Right-to-left layout (for Arabic, Hebrew, etc.).
    Rtl = 1,
}

impl LayoutDirection {
    /// Returns `true` if the layout direction is left-to-right.
    pub fn is_ltr(self) -> bool {
        matches!(self, Self::Ltr)
    }

    /// Returns `true` if the layout direction is right-to-left.
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

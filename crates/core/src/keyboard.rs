//! Listen to keyboard events.
use bitflags::bitflags;
use smol_str::SmolStr;

/// A key on the keyboard.
///
/// Only the keys the widgets of this crate react to are named; anything else
/// arrives as [`Key::Character`] or [`Key::Unidentified`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key<C = SmolStr> {
    /// A key with an established name.
    Named(Named),

    /// A key string that corresponds to the character typed by the user,
    /// taking into account the current modifiers.
    Character(C),

    /// An unidentified key.
    Unidentified,
}

impl Key {
    /// Convert `Key::<SmolStr>` into `Key::<&str>`.
    pub fn as_ref(&self) -> Key<&str> {
        match self {
            Self::Named(named) => Key::Named(*named),
            Self::Character(c) => Key::Character(c.as_ref()),
            Self::Unidentified => Key::Unidentified,
        }
    }
}

impl From<Named> for Key {
    fn from(named: Named) -> Self {
        Self::Named(named)
    }
}

/// A named key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Named {
    Alt,
    Control,
    Shift,
    Super,
    Enter,
    Tab,
    Space,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    End,
    Home,
    PageDown,
    PageUp,
    Backspace,
    Delete,
    Escape,
    ContextMenu,
}

bitflags! {
    /// The current state of the keyboard modifiers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u32 {
        /// The "shift" key.
        const SHIFT = 0b100;
        /// The "control" key.
        const CTRL = 0b100 << 3;
        /// The "alt" key.
        const ALT = 0b100 << 6;
        /// The "windows" key on Windows, "command" key on Mac, and
        /// "super" key on Linux.
        const LOGO = 0b100 << 9;
    }
}

impl Modifiers {
    /// Returns true if the [`SHIFT`] key is pressed in the [`Modifiers`].
    ///
    /// [`SHIFT`]: Self::SHIFT
    pub fn shift(self) -> bool {
        self.contains(Self::SHIFT)
    }

    /// Returns true if the [`CTRL`] key is pressed in the [`Modifiers`].
    ///
    /// [`CTRL`]: Self::CTRL
    pub fn control(self) -> bool {
        self.contains(Self::CTRL)
    }

    /// Returns true if the [`ALT`] key is pressed in the [`Modifiers`].
    ///
    /// [`ALT`]: Self::ALT
    pub fn alt(self) -> bool {
        self.contains(Self::ALT)
    }

    /// Returns true if the [`LOGO`] key is pressed in the [`Modifiers`].
    ///
    /// [`LOGO`]: Self::LOGO
    pub fn logo(self) -> bool {
        self.contains(Self::LOGO)
    }

    /// Returns true if any modifier that turns a keystroke into a command
    /// (control, alt or logo) is pressed.
    pub fn is_command(self) -> bool {
        self.intersects(Self::CTRL | Self::ALT | Self::LOGO)
    }
}

/// A keyboard event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard key was pressed.
    KeyPressed {
        /// The key pressed.
        key: Key,

        /// The state of the modifier keys.
        modifiers: Modifiers,
    },

    /// A keyboard key was released.
    KeyReleased {
        /// The key released.
        key: Key,

        /// The state of the modifier keys.
        modifiers: Modifiers,
    },
}

impl Event {
    /// Creates a [`Event::KeyPressed`] for a [`Named`] key without modifiers.
    pub fn pressed(named: Named) -> Self {
        Self::KeyPressed {
            key: Key::Named(named),
            modifiers: Modifiers::empty(),
        }
    }
}

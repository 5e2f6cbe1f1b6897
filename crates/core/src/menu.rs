//! Menu data model.
//!
//! A menu is an ordered list of [`MenuSection`]s. Each section holds
//! [`MenuItem`]s and may carry a header and a trailing divider. For keyboard
//! traversal the sections collapse into a single flat list (see [`flatten`]);
//! section boundaries never stop arrow-key navigation.
//!
//! # Macros for Stable IDs
//!
//! ```ignore
//! use perch_core::menu;
//!
//! let edit = menu::submenu!("Edit", [
//!     menu::item!("Cut", Message::Cut),
//!     menu::item!("Copy", Message::Copy),
//!     menu::item!("Paste", Message::Paste),
//! ]);
//! ```

/// Stable identifier for a menu item.
///
/// A 64-bit FNV-1a hash of a string or of a source location. Hosts map
/// activation events back to their own commands with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuId(pub u64);

impl MenuId {
    /// Creates a new [`MenuId`] from a raw u64 value.
    #[must_use]
    pub const fn from_u64(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Creates a [`MenuId`] by hashing a string at compile time.
    #[must_use]
    pub const fn from_str(s: &str) -> Self {
        Self(fnv1a(FNV1A_OFFSET, s.as_bytes()))
    }

    /// Derives a deterministic child [`MenuId`] from this ID and a numeric value.
    ///
    /// Useful for generated lists (recent files, open windows) that need
    /// ids which survive a rebuild of the sections.
    #[must_use]
    pub const fn child(self, value: u64) -> Self {
        let hash = fnv1a(FNV1A_OFFSET, &self.0.to_be_bytes());
        Self(fnv1a(hash, &value.to_be_bytes()))
    }

    /// Creates a [`MenuId`] from file and line number.
    #[must_use]
    pub const fn from_location(file: &str, line: u32) -> Self {
        let hash = fnv1a(FNV1A_OFFSET, file.as_bytes());
        let hash = fnv1a(hash, b":");
        Self(fnv1a(hash, &line.to_be_bytes()))
    }
}

const FNV1A_OFFSET: u64 = 0xcbf29ce484222325;
const FNV1A_PRIME: u64 = 0x00000100000001B3;

const fn fnv1a(mut hash: u64, bytes: &[u8]) -> u64 {
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV1A_PRIME);
        i += 1;
    }
    hash
}

/// What activating a [`MenuItem`] does.
///
/// An item either runs an action or opens a submenu, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind<Message> {
    /// A leaf item. Activating it publishes the message, if any, and closes
    /// the menu.
    Action(Option<Message>),

    /// A submenu root. Activating it opens the nested items.
    Submenu(Vec<MenuItem<Message>>),
}

/// A single entry of a menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem<Message> {
    /// Stable identifier of the item.
    pub id: MenuId,
    /// Text label.
    pub label: String,
    /// Optional icon name, resolved by the host.
    pub icon: Option<String>,
    /// Optional shortcut hint, displayed only.
    pub shortcut: Option<String>,
    /// Whether the item ignores activation.
    pub disabled: bool,
    /// Whether the item is rendered as selected.
    pub selected: bool,
    /// Whether the item carries a checkmark.
    pub checked: bool,
    /// Action or nested items.
    pub kind: ItemKind<Message>,
}

impl<Message> MenuItem<Message> {
    /// Creates an enabled leaf [`MenuItem`] without an action.
    pub fn new(id: MenuId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            icon: None,
            shortcut: None,
            disabled: false,
            selected: false,
            checked: false,
            kind: ItemKind::Action(None),
        }
    }

    /// Creates a leaf [`MenuItem`] publishing `on_activate`.
    ///
    /// For automatic stable IDs, prefer [`item!`].
    pub fn item_with_id(id: MenuId, label: impl Into<String>, on_activate: Message) -> Self {
        Self::new(id, label).on_activate(on_activate)
    }

    /// Creates a submenu root [`MenuItem`].
    ///
    /// For automatic stable IDs, prefer [`submenu!`].
    pub fn submenu_with_id(
        id: MenuId,
        label: impl Into<String>,
        children: Vec<MenuItem<Message>>,
    ) -> Self {
        Self {
            kind: ItemKind::Submenu(children),
            ..Self::new(id, label)
        }
    }

    /// Turns the item into a leaf publishing `message` when activated.
    #[must_use]
    pub fn on_activate(mut self, message: Message) -> Self {
        self.kind = ItemKind::Action(Some(message));
        self
    }

    /// Sets the icon name.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the shortcut hint.
    #[must_use]
    pub fn shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    /// Sets whether the item is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets whether the item is selected.
    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Sets whether the item is checked.
    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Returns `true` unless the item is disabled.
    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }

    /// Returns `true` if the item is a submenu root.
    pub fn is_submenu(&self) -> bool {
        matches!(self.kind, ItemKind::Submenu(_))
    }

    /// Returns the nested items of a submenu root, or an empty slice.
    pub fn children(&self) -> &[MenuItem<Message>] {
        match &self.kind {
            ItemKind::Submenu(children) => children,
            ItemKind::Action(_) => &[],
        }
    }

    /// Returns the action of a leaf item, if any.
    pub fn action(&self) -> Option<&Message> {
        match &self.kind {
            ItemKind::Action(action) => action.as_ref(),
            ItemKind::Submenu(_) => None,
        }
    }
}

/// A group of items, optionally introduced by a header and followed by a
/// divider.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSection<Message> {
    /// Optional header text.
    pub header: Option<String>,
    /// Items of the section, in display order.
    pub items: Vec<MenuItem<Message>>,
    /// Whether a divider follows the section.
    pub divider: bool,
}

impl<Message> MenuSection<Message> {
    /// Creates a new [`MenuSection`] without header or divider.
    pub fn new(items: Vec<MenuItem<Message>>) -> Self {
        Self {
            header: None,
            items,
            divider: false,
        }
    }

    /// Sets the header text.
    #[must_use]
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Sets whether a divider follows the section.
    #[must_use]
    pub fn divider(mut self, divider: bool) -> Self {
        self.divider = divider;
        self
    }
}

impl<Message> From<Vec<MenuItem<Message>>> for MenuSection<Message> {
    fn from(items: Vec<MenuItem<Message>>) -> Self {
        Self::new(items)
    }
}

/// Concatenates the items of every section into one traversal order.
///
/// The position of an item in the returned list is its flattened index.
pub fn flatten<Message>(sections: &[MenuSection<Message>]) -> Vec<&MenuItem<Message>> {
    sections
        .iter()
        .flat_map(|section| section.items.iter())
        .collect()
}

/// Searches `items` and all of their submenus for the item with `id`.
pub fn find<'a, Message>(
    items: impl IntoIterator<Item = &'a MenuItem<Message>>,
    id: MenuId,
) -> Option<&'a MenuItem<Message>>
where
    Message: 'a,
{
    for item in items {
        if item.id == id {
            return Some(item);
        }

        if let Some(found) = find(item.children(), id) {
            return Some(found);
        }
    }

    None
}

/// Creates a menu item with a stable ID based on source location hash.
///
/// # Examples
/// ```ignore
/// use perch_core::menu;
///
/// let item = menu::item!("Open", Message::Open);
/// let item = menu::item!("Save", Message::Save, id = MenuId::from_str("file.save"));
/// ```
#[macro_export]
macro_rules! menu_item {
    ($label:expr, $on_activate:expr $(,)?) => {
        $crate::menu::MenuItem::item_with_id(
            $crate::menu::MenuId::from_location(file!(), line!()),
            $label,
            $on_activate,
        )
    };
    ($label:expr, $on_activate:expr, id = $id:expr $(,)?) => {
        $crate::menu::MenuItem::item_with_id($id, $label, $on_activate)
    };
}

/// Creates a submenu with a stable ID based on source location hash.
///
/// # Example
/// ```ignore
/// use perch_core::menu;
///
/// let share = menu::submenu!("Share", [
///     menu::item!("Email", Message::Email),
///     menu::item!("Link", Message::Link),
/// ]);
/// ```
#[macro_export]
macro_rules! menu_submenu {
    ($label:expr, [$($child:expr),* $(,)?] $(,)?) => {
        $crate::menu::MenuItem::submenu_with_id(
            $crate::menu::MenuId::from_location(file!(), line!()),
            $label,
            vec![$($child),*],
        )
    };
    ($label:expr, [$($child:expr),* $(,)?], id = $id:expr $(,)?) => {
        $crate::menu::MenuItem::submenu_with_id($id, $label, vec![$($child),*])
    };
}

#[doc(inline)]
pub use crate::menu_item as item;
#[doc(inline)]
pub use crate::menu_submenu as submenu;

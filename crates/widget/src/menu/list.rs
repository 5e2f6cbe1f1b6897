//! Keyboard focus over a flat list of items.
use crate::core::menu::{MenuId, MenuItem};

/// Where to move the focus of an [`ItemList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The next enabled item, wrapping to the top.
    Next,
    /// The previous enabled item, wrapping to the bottom.
    Previous,
    /// The first enabled item.
    First,
    /// The last enabled item.
    Last,
}

/// What the list needs to know about an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The id of the item.
    pub id: MenuId,
    /// Whether the item accepts focus and activation.
    pub enabled: bool,
    /// Whether the item opens a submenu.
    pub submenu: bool,
    initial: Option<char>,
}

impl Entry {
    /// Creates an [`Entry`] describing `item`.
    pub fn new<Message>(item: &MenuItem<Message>) -> Self {
        Self {
            id: item.id,
            enabled: item.is_enabled(),
            submenu: !item.children().is_empty(),
            initial: item
                .label
                .chars()
                .next()
                .and_then(|c| c.to_lowercase().next()),
        }
    }
}

/// A flat list of items with a single focused index.
///
/// While the list holds at least one enabled item, the focus is always on an
/// enabled item. A list without enabled items keeps its initial focus and
/// ignores navigation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemList {
    entries: Vec<Entry>,
    focused: Option<usize>,
}

impl ItemList {
    /// Creates an [`ItemList`] focused on its initial item.
    pub fn new(entries: Vec<Entry>) -> Self {
        let focused = initial_focus(&entries);

        Self { entries, focused }
    }

    /// Creates an [`ItemList`] from menu items, in order.
    pub fn from_items<'a, Message: 'a>(
        items: impl IntoIterator<Item = &'a MenuItem<Message>>,
    ) -> Self {
        Self::new(items.into_iter().map(Entry::new).collect())
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries of the list.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the focused index.
    ///
    /// `None` only for an empty list.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Returns the focused entry.
    pub fn focused_entry(&self) -> Option<&Entry> {
        self.focused.and_then(|index| self.entries.get(index))
    }

    /// Returns `true` if at least one item is enabled.
    pub fn has_enabled(&self) -> bool {
        self.entries.iter().any(|entry| entry.enabled)
    }

    /// Moves the focus, skipping disabled items.
    ///
    /// Returns `true` if the focused index changed.
    pub fn move_focus(&mut self, direction: Direction) -> bool {
        let len = self.entries.len();

        if !self.has_enabled() {
            return false;
        }

        let enabled = |index: &usize| self.entries[*index].enabled;

        let target = match direction {
            Direction::First => (0..len).find(enabled),
            Direction::Last => (0..len).rev().find(enabled),
            Direction::Next => {
                let start = self.focused.map_or(0, |index| index + 1);

                (0..len).map(|step| (start + step) % len).find(enabled)
            }
            Direction::Previous => {
                let start = self.focused.unwrap_or(0) + len;

                (1..=len).map(|step| (start - step) % len).find(enabled)
            }
        };

        self.set_focus(target)
    }

    /// Focuses the item at `index` if it is enabled.
    ///
    /// Returns `true` if the focused index changed.
    pub fn focus(&mut self, index: usize) -> bool {
        match self.entries.get(index) {
            Some(entry) if entry.enabled => self.set_focus(Some(index)),
            _ => false,
        }
    }

    /// Focuses the next enabled item whose label starts with `c`, ignoring
    /// case and wrapping around.
    ///
    /// Returns `true` if the focused index changed.
    pub fn typeahead(&mut self, c: char) -> bool {
        let len = self.entries.len();
        let Some(c) = c.to_lowercase().next() else {
            return false;
        };
        let start = self.focused.map_or(0, |index| index + 1);

        let target = (0..len).map(|step| (start + step) % len).find(|index| {
            let entry = &self.entries[*index];

            entry.enabled && entry.initial == Some(c)
        });

        self.set_focus(target)
    }

    /// Moves the focus back to the initial item.
    pub fn reset(&mut self) {
        self.focused = initial_focus(&self.entries);
    }

    /// Replaces the entries, keeping the focused index when it still points
    /// at an enabled item.
    pub fn set_entries(&mut self, entries: Vec<Entry>) {
        let keep = self
            .focused
            .and_then(|index| entries.get(index))
            .is_some_and(|entry| entry.enabled);

        self.entries = entries;

        if !keep {
            self.reset();
        }
    }

    fn set_focus(&mut self, target: Option<usize>) -> bool {
        match target {
            Some(index) if self.focused != Some(index) => {
                self.focused = Some(index);
                true
            }
            _ => false,
        }
    }
}

/// The first enabled item, or the first item if none is enabled.
fn initial_focus(entries: &[Entry]) -> Option<usize> {
    if entries.is_empty() {
        return None;
    }

    Some(entries.iter().position(|entry| entry.enabled).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[(&str, bool)]) -> ItemList {
        let items: Vec<MenuItem<()>> = items
            .iter()
            .map(|(label, enabled)| {
                MenuItem::new(MenuId::from_str(label), *label).disabled(!enabled)
            })
            .collect();

        ItemList::from_items(&items)
    }

    #[test]
    fn test_arrow_down_skips_disabled_and_wraps() {
        let mut list = list(&[("A", true), ("B", false), ("C", true)]);

        assert_eq!(list.focused(), Some(0));

        assert!(list.move_focus(Direction::Next));
        assert_eq!(list.focused(), Some(2));

        assert!(list.move_focus(Direction::Next));
        assert_eq!(list.focused(), Some(0));
    }

    #[test]
    fn test_previous_wraps_to_last_enabled() {
        let mut list = list(&[("A", true), ("B", true), ("C", false)]);

        assert!(list.move_focus(Direction::Previous));
        assert_eq!(list.focused(), Some(1));
    }

    #[test]
    fn test_initial_focus_is_first_enabled() {
        assert_eq!(list(&[("A", false), ("B", true)]).focused(), Some(1));
        assert_eq!(list(&[("A", false), ("B", false)]).focused(), Some(0));
        assert_eq!(list(&[]).focused(), None);
    }

    #[test]
    fn test_zero_enabled_items_are_inert() {
        let mut list = list(&[("A", false), ("B", false)]);

        for direction in [
            Direction::Next,
            Direction::Previous,
            Direction::First,
            Direction::Last,
        ] {
            assert!(!list.move_focus(direction));
            assert_eq!(list.focused(), Some(0));
        }

        assert!(!list.typeahead('b'));
        assert!(!list.focus(1));
    }

    #[test]
    fn test_focus_never_lands_on_disabled() {
        let mut list = list(&[
            ("A", false),
            ("B", true),
            ("C", false),
            ("D", false),
            ("E", true),
        ]);

        for direction in [
            Direction::Next,
            Direction::Next,
            Direction::Previous,
            Direction::Last,
            Direction::Previous,
            Direction::First,
            Direction::Previous,
        ] {
            let _ = list.move_focus(direction);

            let focused = list.focused().expect("focus");
            assert!(list.entries()[focused].enabled);
        }
    }

    #[test]
    fn test_home_and_end() {
        let mut list = list(&[("A", false), ("B", true), ("C", true), ("D", false)]);

        assert!(list.move_focus(Direction::Last));
        assert_eq!(list.focused(), Some(2));

        assert!(list.move_focus(Direction::First));
        assert_eq!(list.focused(), Some(1));
    }

    #[test]
    fn test_typeahead_cycles_matches() {
        let mut list = list(&[
            ("Copy", true),
            ("Cut", true),
            ("Paste", true),
            ("Clear", false),
        ]);

        assert!(list.typeahead('c'));
        assert_eq!(list.focused(), Some(1));

        assert!(list.typeahead('C'));
        assert_eq!(list.focused(), Some(0));

        assert!(list.typeahead('p'));
        assert_eq!(list.focused(), Some(2));

        assert!(!list.typeahead('x'));
        assert_eq!(list.focused(), Some(2));
    }

    #[test]
    fn test_set_entries_keeps_valid_focus() {
        let mut list = list(&[("A", true), ("B", true), ("C", true)]);
        assert!(list.focus(2));

        let replacement = self::list(&[("X", true), ("Y", true), ("Z", true), ("W", true)]);
        list.set_entries(replacement.entries().to_vec());
        assert_eq!(list.focused(), Some(2));

        let shorter = self::list(&[("X", true)]);
        list.set_entries(shorter.entries().to_vec());
        assert_eq!(list.focused(), Some(0));

        list.set_entries(Vec::new());
        assert_eq!(list.focused(), None);
        assert!(!list.move_focus(Direction::Next));
    }
}

//! A [`Menu`] opened from a trigger, with nested submenus and keyboard
//! navigation.
//!
//! The menu owns no window. A host feeds it the trigger bounds, the viewport
//! size and input [`Event`]s, and it reports back through a [`Shell`]:
//! [`Signal`]s to act on, popups to show or hide, and focus requests.
//!
//! # Example
//!
//! ```ignore
//! use perch::core::menu::{self, MenuSection};
//! use perch::widget::menu::{Menu, Signal};
//! use perch::widget::Shell;
//!
//! let mut menu = Menu::new(vec![
//!     MenuSection::new(vec![
//!         menu::item!("Cut", Message::Cut),
//!         menu::item!("Copy", Message::Copy),
//!         menu::submenu!("Share", [
//!             menu::item!("Email", Message::Email),
//!         ]),
//!     ]),
//! ])
//! .anchor(trigger_bounds)
//! .viewport(window_size);
//!
//! let mut signals = Vec::new();
//! let mut shell = Shell::new(&mut signals, &mut surface);
//!
//! let _ = menu.update(&event, &mut shell);
//!
//! for signal in signals {
//!     if let Signal::ItemActivated { action: Some(message), .. } = signal {
//!         app.update(message);
//!     }
//! }
//! ```
mod layout;
mod level;
mod list;
mod trigger;


pub use list::{Direction, Entry, ItemList};
pub use trigger::{Kind, Segment, State};

use layout::{Layout, RowKind};
use level::Level;
use trigger::Trigger;

use crate::core::event::{self, Event};
use crate::core::keyboard::{self, Key, Named};
use crate::core::menu::{self as model, MenuId, MenuItem, MenuSection};
use crate::core::{LayoutDirection, Point, Rectangle, Settings, Size, mouse, window};
use crate::positioner::{self, Positioner};
use crate::shell::{Focus, Shell};
use crate::surface::{Popup, Row};

/// Why a menu closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Escape, or collapsing past the root list.
    Keyboard,
    /// A press outside of the trigger and the popups, or the window lost
    /// focus.
    Outside,
    /// An item was activated.
    Selection,
    /// Tab or Shift+Tab moved the focus on.
    Tab,
    /// The trigger left the viewport.
    Detached,
    /// [`Menu::close`] was called, or the trigger got disabled.
    Programmatic,
    /// The trigger was pressed again.
    Toggle,
}

impl CloseReason {
    /// Returns `true` if closing for this reason hands the focus back to the
    /// trigger.
    pub fn refocuses_trigger(self) -> bool {
        matches!(self, Self::Keyboard | Self::Selection)
    }
}

/// Something that happened in a [`Menu`].
#[derive(Debug, Clone, PartialEq)]
pub enum Signal<Message> {
    /// The root popup was shown.
    Opened,
    /// Every popup was hidden.
    Closed(CloseReason),
    /// A leaf item was activated. The menu closes right after.
    ItemActivated {
        /// The id of the item.
        id: MenuId,
        /// The action of the item, if it has one.
        action: Option<Message>,
    },
    /// A submenu was opened.
    SubmenuActivated {
        /// The id of the item that opened the submenu.
        id: MenuId,
        /// The depth of the new popup.
        level: usize,
    },
    /// The primary segment of a split trigger was activated.
    PrimaryAction,
}

/// A menu attached to a trigger.
///
/// Keyboard events are interpreted as addressed to the menu: while it is
/// closed they act on the trigger (forward them only while the trigger has
/// focus), while it is open they act on the focused popup.
#[derive(Debug)]
pub struct Menu<Message> {
    sections: Vec<MenuSection<Message>>,
    trigger: Trigger,
    settings: Settings,
    viewport: Size,
    direction: Option<LayoutDirection>,
    width: f32,
    levels: Vec<Level>,
    focus_level: usize,
    cursor: Option<Point>,
}

impl<Message> Menu<Message> {
    /// Creates a closed [`Menu`] with the given sections.
    pub fn new(sections: Vec<MenuSection<Message>>) -> Self {
        Self {
            sections,
            trigger: Trigger::default(),
            settings: Settings::default(),
            viewport: Size::INFINITY,
            direction: None,
            width: 0.0,
            levels: Vec::new(),
            focus_level: 0,
            cursor: None,
        }
    }

    /// Sets the [`Kind`] of the trigger.
    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.trigger.kind = kind;
        self
    }

    /// Sets the bounds of the trigger.
    #[must_use]
    pub fn anchor(mut self, bounds: Rectangle) -> Self {
        self.trigger.bounds = bounds;
        self
    }

    /// Sets the size of the viewport popups are placed in.
    #[must_use]
    pub fn viewport(mut self, size: Size) -> Self {
        self.viewport = size;
        self
    }

    /// Sets the [`Settings`].
    #[must_use]
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Pins the layout direction instead of following the global one.
    #[must_use]
    pub fn layout_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Sets the natural width of the popup content.
    ///
    /// Popups are never narrower than their minimum width: the trigger width
    /// for the root list, [`Settings::submenu_min_width`] for submenus.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Sets whether the trigger is disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.trigger.disabled = disabled;
        self
    }

    /// Returns the sections of the menu.
    pub fn sections(&self) -> &[MenuSection<Message>] {
        &self.sections
    }

    /// Returns the bounds of the trigger.
    pub fn bounds(&self) -> Rectangle {
        self.trigger.bounds
    }

    /// Returns the current [`State`].
    pub fn state(&self) -> State {
        self.trigger.state
    }

    /// Returns `true` if the menu is open.
    pub fn is_open(&self) -> bool {
        self.trigger.is_open()
    }

    /// Returns `true` if the trigger is disabled.
    pub fn is_disabled(&self) -> bool {
        self.trigger.disabled
    }

    /// Returns the number of open popups.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Returns the layout direction in effect.
    pub fn direction(&self) -> LayoutDirection {
        self.direction.unwrap_or_else(crate::core::layout_direction)
    }

    /// Returns the focused item of the innermost focused popup.
    pub fn focused(&self) -> Option<Focus> {
        let level = self.levels.get(self.focus_level)?;

        level.list.focused().map(|index| Focus::Item {
            level: self.focus_level,
            index,
        })
    }

    /// Returns the focused [`MenuItem`], if the menu is open.
    pub fn focused_item(&self) -> Option<&MenuItem<Message>> {
        let index = self.levels.get(self.focus_level)?.list.focused()?;

        self.items(self.focus_level).get(index).copied()
    }

    /// Finds an item anywhere in the menu, submenus included.
    pub fn find(&self, id: MenuId) -> Option<&MenuItem<Message>> {
        model::find(self.sections.iter().flat_map(|section| &section.items), id)
    }

    /// Returns a snapshot of the popup at depth `level`.
    pub fn popup(&self, level: usize) -> Option<Popup<'_, Message>> {
        let open = self.levels.get(level)?;
        let items = self.items(level);
        let expanded = self.levels.get(level + 1).and_then(Level::parent_index);
        let focused = open.list.focused();

        let rows = open
            .layout
            .rows
            .iter()
            .filter_map(|row| {
                let bounds = open.row_bounds(row);

                Some(match row.kind {
                    RowKind::Header(section) => Row::Header {
                        text: self.sections.get(section)?.header.as_deref()?,
                        bounds,
                    },
                    RowKind::Item(index) => Row::Item {
                        index,
                        item: items.get(index).copied()?,
                        bounds,
                        focused: focused == Some(index),
                        expanded: expanded == Some(index),
                    },
                    RowKind::Divider => Row::Divider { bounds },
                })
            })
            .collect();

        Some(Popup {
            id: open.id,
            level,
            bounds: open.bounds(),
            candidate: open.placement.candidate,
            fits: open.placement.fits,
            scroll_offset: open.scroll_offset,
            focused,
            rows,
        })
    }

    /// Returns a snapshot of every open popup, root first.
    pub fn popups(&self) -> Vec<Popup<'_, Message>> {
        (0..self.levels.len())
            .filter_map(|level| self.popup(level))
            .collect()
    }

    /// The items shown at depth `level`, by flattened index.
    fn items(&self, level: usize) -> Vec<&MenuItem<Message>> {
        let mut items = model::flatten(&self.sections);

        for open in self.levels.iter().take(level + 1).skip(1) {
            let children = open
                .parent_index()
                .and_then(|index| items.get(index).copied())
                .map(MenuItem::children);

            items = children.map(|children| children.iter().collect()).unwrap_or_default();
        }

        items
    }

    fn root_level(&self) -> Level {
        Level::new(
            None,
            ItemList::from_items(model::flatten(&self.sections)),
            Layout::sections(&self.sections, &self.settings),
            Positioner::menu(&self.settings, self.direction()),
        )
    }

    fn child_level(&self, level: usize, index: usize) -> Option<Level> {
        let items = self.items(level);
        let item = items.get(index)?;
        let children = item.children();

        if children.is_empty() {
            return None;
        }

        Some(Level::new(
            Some((index, item.id)),
            ItemList::from_items(children),
            Layout::items(children.len(), &self.settings),
            Positioner::submenu(&self.settings, self.direction()),
        ))
    }

    fn anchor_of(&self, level: usize) -> Option<Rectangle> {
        if level == 0 {
            return Some(self.trigger.bounds);
        }

        let index = self.levels.get(level)?.parent_index()?;

        self.levels.get(level - 1)?.item_bounds(index)
    }

    fn place(&mut self, level: usize) -> bool {
        let Some(anchor) = self.anchor_of(level) else {
            return false;
        };
        let (width, viewport) = (self.width, self.viewport);

        match self.levels.get_mut(level) {
            Some(open) => {
                open.place(anchor, width, viewport);
                true
            }
            None => false,
        }
    }

    fn show(&self, level: usize, shell: &mut Shell<'_, Message>) {
        if let Some(popup) = self.popup(level) {
            shell.show(&popup);
        }
    }

    /// Hides every popup deeper than `len`.
    fn truncate(&mut self, len: usize, shell: &mut Shell<'_, Message>) {
        if self.levels.len() <= len {
            return;
        }

        for open in self.levels.drain(len..).rev() {
            shell.hide(open.id);
        }

        log::debug!("Closed submenus down to depth {len}");

        self.focus_level = self.focus_level.min(len.saturating_sub(1));
    }

    fn request_item_focus(&self, shell: &mut Shell<'_, Message>) {
        let level = self.focus_level;
        let focused = self
            .levels
            .get(level)
            .and_then(|open| Some((open.list.focused()?, open.list.focused_entry()?)));

        if let Some((index, entry)) = focused
            && entry.enabled
        {
            shell.request_focus(Focus::Item { level, index });
        }
    }
}

impl<Message: Clone> Menu<Message> {
    /// Processes an [`Event`].
    pub fn update(&mut self, event: &Event, shell: &mut Shell<'_, Message>) -> event::Status {
        match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers }) => {
                if self.is_open() {
                    self.on_key(key, *modifiers, shell)
                } else {
                    self.on_trigger_key(key, shell)
                }
            }
            Event::Keyboard(keyboard::Event::KeyReleased { .. }) => event::Status::Ignored,
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor = Some(*position);
                self.on_cursor_moved(*position, shell)
            }
            Event::Mouse(mouse::Event::CursorLeft) => {
                self.cursor = None;
                event::Status::Ignored
            }
            Event::Mouse(mouse::Event::ButtonPressed(button)) => self.on_press(*button, shell),
            Event::Mouse(mouse::Event::ButtonReleased(_)) => event::Status::Ignored,
            Event::Window(window::Event::Resized(size)) => {
                self.set_viewport(*size, shell);
                event::Status::Ignored
            }
            Event::Window(window::Event::Scrolled { delta }) => {
                self.set_anchor(self.trigger.bounds - *delta, shell);
                event::Status::Ignored
            }
            Event::Window(window::Event::Unfocused) => {
                let _ = self.close(CloseReason::Outside, shell);
                event::Status::Ignored
            }
        }
    }

    /// Opens the menu, focusing its first enabled item.
    ///
    /// Does nothing if the menu is open, the trigger is disabled or there
    /// are no items.
    pub fn open(&mut self, shell: &mut Shell<'_, Message>) -> event::Status {
        self.open_with(Direction::First, shell)
    }

    /// Opens the menu, focusing the first or the last enabled item.
    pub fn open_with(
        &mut self,
        direction: Direction,
        shell: &mut Shell<'_, Message>,
    ) -> event::Status {
        if self.is_open() {
            return event::Status::Ignored;
        }

        if self.trigger.disabled {
            log::trace!("Ignored activation of a disabled menu trigger");
            return event::Status::Ignored;
        }

        if self.sections.iter().all(|section| section.items.is_empty()) {
            log::trace!("Ignored activation of an empty menu");
            return event::Status::Ignored;
        }

        self.trigger.transition(State::Opening);

        let mut root = self.root_level();

        if matches!(direction, Direction::Last | Direction::Previous) {
            let _ = root.list.move_focus(Direction::Last);
        }

        self.levels = vec![root];
        self.focus_level = 0;
        let _ = self.place(0);

        self.trigger.transition(State::Open);
        log::debug!(
            "Opened menu with {} items at {:?}",
            self.levels[0].list.len(),
            self.levels[0].bounds()
        );

        self.show(0, shell);
        shell.publish(Signal::Opened);
        self.request_item_focus(shell);
        shell.request_redraw();

        event::Status::Captured
    }

    /// Closes every popup.
    pub fn close(&mut self, reason: CloseReason, shell: &mut Shell<'_, Message>) -> event::Status {
        if !self.is_open() {
            return event::Status::Ignored;
        }

        self.trigger.transition(State::Closing);

        for open in self.levels.drain(..).rev() {
            shell.hide(open.id);
        }

        self.focus_level = 0;
        self.trigger.transition(State::Closed);
        log::debug!("Closed menu: {reason:?}");

        shell.publish(Signal::Closed(reason));

        if reason.refocuses_trigger() {
            shell.request_focus(Focus::Trigger);
        }

        shell.request_redraw();

        event::Status::Captured
    }

    /// Opens the menu if it is closed, closes it otherwise.
    pub fn toggle(&mut self, shell: &mut Shell<'_, Message>) -> event::Status {
        if self.is_open() {
            self.close(CloseReason::Toggle, shell)
        } else {
            self.open(shell)
        }
    }

    /// Moves the focus of the focused popup.
    ///
    /// Submenus opened from the previously focused item are closed.
    pub fn move_focus(
        &mut self,
        direction: Direction,
        shell: &mut Shell<'_, Message>,
    ) -> event::Status {
        self.refocus(shell, |list| list.move_focus(direction))
    }

    /// Activates the focused item.
    ///
    /// A submenu root opens its submenu and moves the focus into it. A leaf
    /// publishes [`Signal::ItemActivated`] and closes the menu. Disabled
    /// items do nothing.
    pub fn activate_focused(&mut self, shell: &mut Shell<'_, Message>) -> event::Status {
        if !self.is_open() {
            return event::Status::Ignored;
        }

        let level = self.focus_level;
        let Some((index, entry)) = self.levels.get(level).and_then(|open| {
            Some((open.list.focused()?, open.list.focused_entry()?.clone()))
        }) else {
            return event::Status::Captured;
        };

        if !entry.enabled {
            log::trace!("Ignored activation of disabled item {:?}", entry.id);
            return event::Status::Captured;
        }

        if entry.submenu {
            return self.expand(shell);
        }

        let action = self
            .items(level)
            .get(index)
            .and_then(|item| item.action().cloned());

        log::debug!("Activated menu item {:?}", entry.id);

        shell.publish(Signal::ItemActivated {
            id: entry.id,
            action,
        });

        let _ = self.close(CloseReason::Selection, shell);

        event::Status::Captured
    }

    /// Opens the submenu of the focused item and focuses its first enabled
    /// item.
    pub fn expand(&mut self, shell: &mut Shell<'_, Message>) -> event::Status {
        if !self.is_open() {
            return event::Status::Ignored;
        }

        let level = self.focus_level;
        let Some((index, entry)) = self.levels.get(level).and_then(|open| {
            Some((open.list.focused()?, open.list.focused_entry()?.clone()))
        }) else {
            return event::Status::Captured;
        };

        if !entry.enabled || !entry.submenu {
            return event::Status::Captured;
        }

        let child = level + 1;
        let already_open = self.levels.get(child).and_then(Level::parent_index) == Some(index);

        if already_open {
            self.truncate(child + 1, shell);

            if let Some(open) = self.levels.get_mut(child) {
                open.list.reset();
                open.scroll_offset = 0.0;
            }

            self.show(child, shell);
        } else if self.open_child(level, index, shell).is_none() {
            return event::Status::Captured;
        }

        self.focus_level = child;
        self.request_item_focus(shell);
        shell.request_redraw();

        event::Status::Captured
    }

    /// Closes the focused submenu and focuses the item that opened it, or
    /// closes the menu when the root list has the focus.
    pub fn collapse_or_exit(&mut self, shell: &mut Shell<'_, Message>) -> event::Status {
        if !self.is_open() {
            return event::Status::Ignored;
        }

        if self.focus_level == 0 {
            return self.close(CloseReason::Keyboard, shell);
        }

        let parent = self.focus_level - 1;
        let index = self
            .levels
            .get(self.focus_level)
            .and_then(Level::parent_index);

        self.truncate(parent + 1, shell);
        self.focus_level = parent;

        if let Some(index) = index {
            if let Some(open) = self.levels.get_mut(parent) {
                let _ = open.list.focus(index);
            }

            shell.request_focus(Focus::Item {
                level: parent,
                index,
            });
        }

        shell.request_redraw();

        event::Status::Captured
    }

    /// Replaces the sections.
    ///
    /// While open, the focused item is kept when it still exists. A submenu
    /// is closed once its root item moves, disappears or becomes disabled.
    /// An empty menu stays open.
    pub fn set_sections(
        &mut self,
        sections: Vec<MenuSection<Message>>,
        shell: &mut Shell<'_, Message>,
    ) {
        self.sections = sections;

        if !self.is_open() {
            return;
        }

        let entries: Vec<Entry> = model::flatten(&self.sections)
            .into_iter()
            .map(Entry::new)
            .collect();
        let layout = Layout::sections(&self.sections, &self.settings);

        if let Some(root) = self.levels.first_mut() {
            root.list.set_entries(entries);
            root.layout = layout;
        }

        for level in 1..self.levels.len() {
            let update = {
                let items = self.items(level - 1);

                self.levels[level]
                    .parent
                    .and_then(|(index, id)| {
                        items
                            .get(index)
                            .copied()
                            .filter(|item| item.id == id && item.is_enabled())
                    })
                    .map(MenuItem::children)
                    .filter(|children| !children.is_empty())
                    .map(|children| {
                        (
                            children.iter().map(Entry::new).collect::<Vec<_>>(),
                            Layout::items(children.len(), &self.settings),
                        )
                    })
            };

            let Some((entries, layout)) = update else {
                self.truncate(level, shell);
                break;
            };

            if let Some(open) = self.levels.get_mut(level) {
                open.list.set_entries(entries);
                open.layout = layout;
            }
        }

        log::debug!("Replaced menu sections while open");

        self.reposition(shell);
    }

    /// Moves the trigger.
    ///
    /// An open menu follows it, or closes if it left the viewport.
    pub fn set_anchor(&mut self, bounds: Rectangle, shell: &mut Shell<'_, Message>) {
        self.trigger.bounds = bounds;
        self.reposition(shell);
    }

    /// Resizes the viewport, placing open popups again.
    pub fn set_viewport(&mut self, size: Size, shell: &mut Shell<'_, Message>) {
        self.viewport = size;
        self.reposition(shell);
    }

    /// Enables or disables the trigger. Disabling closes an open menu.
    pub fn set_disabled(&mut self, disabled: bool, shell: &mut Shell<'_, Message>) {
        self.trigger.disabled = disabled;

        if disabled {
            let _ = self.close(CloseReason::Programmatic, shell);
        }
    }

    /// Runs the placement search of every open popup again.
    pub fn reposition(&mut self, shell: &mut Shell<'_, Message>) {
        if !self.is_open() {
            return;
        }

        if positioner::is_detached(self.trigger.bounds, self.viewport) {
            log::debug!("Menu trigger left the viewport");

            let _ = self.close(CloseReason::Detached, shell);
            return;
        }

        for level in 0..self.levels.len() {
            if !self.place(level) {
                self.truncate(level, shell);
                break;
            }

            self.show(level, shell);
        }

        shell.request_redraw();
    }

    fn refocus(
        &mut self,
        shell: &mut Shell<'_, Message>,
        f: impl FnOnce(&mut ItemList) -> bool,
    ) -> event::Status {
        if !self.is_open() {
            return event::Status::Ignored;
        }

        let level = self.focus_level;
        let mut moved = None;

        if let Some(open) = self.levels.get_mut(level)
            && f(&mut open.list)
        {
            moved = open.list.focused();

            if let Some(index) = moved {
                open.scroll_to(index);
            }
        }

        if let Some(index) = moved {
            self.truncate(level + 1, shell);
            self.show(level, shell);
            shell.request_focus(Focus::Item { level, index });
            shell.request_redraw();
        }

        event::Status::Captured
    }

    fn open_child(
        &mut self,
        level: usize,
        index: usize,
        shell: &mut Shell<'_, Message>,
    ) -> Option<usize> {
        self.truncate(level + 1, shell);

        let child = self.child_level(level, index)?;
        let id = child.parent.map(|(_, id)| id)?;

        self.levels.push(child);

        let depth = self.levels.len() - 1;
        let _ = self.place(depth);

        log::debug!("Opened submenu {id:?} at depth {depth}");

        self.show(depth, shell);
        shell.publish(Signal::SubmenuActivated { id, level: depth });

        Some(depth)
    }

    fn primary_action(&mut self, shell: &mut Shell<'_, Message>) -> event::Status {
        if self.trigger.disabled {
            log::trace!("Ignored primary action of a disabled trigger");
            return event::Status::Ignored;
        }

        shell.publish(Signal::PrimaryAction);

        event::Status::Captured
    }

    fn on_trigger_key(&mut self, key: &Key, shell: &mut Shell<'_, Message>) -> event::Status {
        match key.as_ref() {
            Key::Named(Named::Enter | Named::Space) if self.trigger.kind == Kind::Split => {
                self.primary_action(shell)
            }
            Key::Named(Named::Enter | Named::Space | Named::ArrowDown) => {
                self.open_with(Direction::First, shell)
            }
            Key::Named(Named::ArrowUp) => self.open_with(Direction::Last, shell),
            _ => event::Status::Ignored,
        }
    }

    fn on_key(
        &mut self,
        key: &Key,
        modifiers: keyboard::Modifiers,
        shell: &mut Shell<'_, Message>,
    ) -> event::Status {
        let rtl = self.direction().is_rtl();

        match key.as_ref() {
            Key::Named(Named::Escape) => self.collapse_or_exit(shell),
            Key::Named(Named::ArrowDown) => self.move_focus(Direction::Next, shell),
            Key::Named(Named::ArrowUp) => self.move_focus(Direction::Previous, shell),
            Key::Named(Named::Home) => self.move_focus(Direction::First, shell),
            Key::Named(Named::End) => self.move_focus(Direction::Last, shell),
            Key::Named(Named::ArrowRight) if !rtl => self.expand(shell),
            Key::Named(Named::ArrowLeft) if rtl => self.expand(shell),
            Key::Named(Named::ArrowLeft | Named::ArrowRight) => self.collapse_or_exit(shell),
            Key::Named(Named::Enter | Named::Space) => self.activate_focused(shell),
            Key::Named(Named::Tab) => {
                let _ = self.close(CloseReason::Tab, shell);

                // Let the host move the focus on
                event::Status::Ignored
            }
            Key::Character(text) if !modifiers.is_command() => {
                let Some(c) = text.chars().next() else {
                    return event::Status::Ignored;
                };

                self.refocus(shell, |list| list.typeahead(c))
            }
            _ => event::Status::Ignored,
        }
    }

    fn on_cursor_moved(
        &mut self,
        position: Point,
        shell: &mut Shell<'_, Message>,
    ) -> event::Status {
        if !self.is_open() {
            return event::Status::Ignored;
        }

        let Some(level) = self.levels.iter().rposition(|open| open.contains(position)) else {
            return event::Status::Ignored;
        };

        match self.levels[level].hit(position) {
            Some(index) => self.hover(level, index, shell),
            None => event::Status::Captured,
        }
    }

    /// Points at the item `index` of the popup at depth `level`.
    fn hover(
        &mut self,
        level: usize,
        index: usize,
        shell: &mut Shell<'_, Message>,
    ) -> event::Status {
        let Some(entry) = self
            .levels
            .get(level)
            .and_then(|open| open.list.entries().get(index))
            .cloned()
        else {
            return event::Status::Captured;
        };

        let child_of_item =
            self.levels.get(level + 1).and_then(Level::parent_index) == Some(index);

        self.truncate(if child_of_item { level + 2 } else { level + 1 }, shell);
        self.focus_level = level;

        if !entry.enabled {
            return event::Status::Captured;
        }

        let changed = self
            .levels
            .get_mut(level)
            .is_some_and(|open| open.list.focus(index));

        if changed {
            self.show(level, shell);
            shell.request_redraw();
        }

        if entry.submenu && !child_of_item {
            let _ = self.open_child(level, index, shell);
            shell.request_redraw();
        }

        event::Status::Captured
    }

    fn on_press(
        &mut self,
        button: mouse::Button,
        shell: &mut Shell<'_, Message>,
    ) -> event::Status {
        let Some(position) = self.cursor else {
            return event::Status::Ignored;
        };

        let segment = self.trigger.segment_at(
            position,
            self.settings.disclosure_width,
            self.direction(),
        );

        if !self.is_open() {
            return match (button, segment) {
                (mouse::Button::Left, Some(Segment::Menu)) => {
                    self.open_with(Direction::First, shell)
                }
                (mouse::Button::Left, Some(Segment::Action)) => self.primary_action(shell),
                _ => event::Status::Ignored,
            };
        }

        if let Some(level) = self.levels.iter().rposition(|open| open.contains(position)) {
            if button != mouse::Button::Left {
                return event::Status::Captured;
            }

            let Some(index) = self.levels[level].hit(position) else {
                return event::Status::Captured;
            };

            let _ = self.hover(level, index, shell);

            let focused = self
                .levels
                .get(level)
                .and_then(|open| open.list.focused());

            if focused != Some(index) {
                log::trace!("Ignored press on disabled item {index}");
                return event::Status::Captured;
            }

            return self.activate_focused(shell);
        }

        match (button, segment) {
            (mouse::Button::Left, Some(Segment::Menu)) => self.close(CloseReason::Toggle, shell),
            (mouse::Button::Left, Some(Segment::Action)) => {
                let _ = self.close(CloseReason::Outside, shell);
                self.primary_action(shell)
            }
            (_, Some(_)) => event::Status::Captured,
            (_, None) => {
                let _ = self.close(CloseReason::Outside, shell);
                event::Status::Ignored
            }
        }
    }
}

//! Keyboard focus trapping for composite containers.
//!
//! A [`Card`] is a focusable container holding a known number of inner
//! focusable elements. Depending on its [`Mode`], Enter or Tab moves the
//! focus inside and Tab cycles among the inner elements instead of leaving.
//! Escape always hands the focus back to the container.
//!
//! Like menus, a card only records where the focus should go; the host reads
//! [`Card::take_focus_request`] and applies it after rendering.
use crate::core::event::{self, Event};
use crate::core::keyboard::{self, Key, Named};

/// How a [`Card`] treats the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The card does not handle the keyboard.
    #[default]
    Off,
    /// Enter traps the focus inside. Tab and Shift+Tab cycle among the inner
    /// elements until Escape.
    NoTab,
    /// Tab from the container jumps to the first inner element. Tab then
    /// moves on normally.
    TabOnly,
    /// Enter traps the focus inside. Tab past the last inner element leaves
    /// the card and Shift+Tab from the first one returns to the container.
    TabExit,
}

/// Where the focus is, from the point of view of a [`Card`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The container itself.
    #[default]
    Container,
    /// The inner element with this index.
    Inner(usize),
    /// Somewhere outside of the card.
    Outside,
}

/// The focus state machine of a card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Card {
    mode: Mode,
    focusables: usize,
    focus: Focus,
    trapped: bool,
    focus_request: Option<Focus>,
}

impl Card {
    /// Creates a [`Card`] with `focusables` inner elements.
    pub fn new(mode: Mode, focusables: usize) -> Self {
        Self {
            mode,
            focusables,
            ..Self::default()
        }
    }

    /// Returns the [`Mode`].
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns where the card believes the focus is.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns `true` while Tab is kept inside the card.
    pub fn is_trapped(&self) -> bool {
        self.trapped
    }

    /// Returns the number of inner focusable elements.
    pub fn focusables(&self) -> usize {
        self.focusables
    }

    /// Updates the number of inner focusable elements.
    ///
    /// A focused element that no longer exists moves the focus to the last
    /// remaining one, or to the container when none is left.
    pub fn set_focusables(&mut self, focusables: usize) {
        self.focusables = focusables;

        if let Focus::Inner(index) = self.focus
            && index >= focusables
        {
            match focusables.checked_sub(1) {
                Some(last) => self.move_to(Focus::Inner(last)),
                None => self.exit(Focus::Container),
            }
        }
    }

    /// Tells the card the focus moved on its own, by pointer or by the host
    /// walking the tab order.
    pub fn on_focus(&mut self, focus: Focus) {
        self.focus = match focus {
            Focus::Inner(index) if index >= self.focusables => Focus::Outside,
            focus => focus,
        };

        if !matches!(self.focus, Focus::Inner(_)) && self.trapped {
            log::debug!("Card focus trap released: focus moved to {:?}", self.focus);
            self.trapped = false;
        }
    }

    /// Takes the pending focus request, if any.
    pub fn take_focus_request(&mut self) -> Option<Focus> {
        self.focus_request.take()
    }

    /// Processes a keyboard [`Event`] received while the card or one of its
    /// inner elements has the focus.
    ///
    /// Returns [`event::Status::Ignored`] whenever the host should move the
    /// focus on by itself.
    pub fn update(&mut self, event: &Event) -> event::Status {
        let Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers }) = event else {
            return event::Status::Ignored;
        };

        if self.mode == Mode::Off || self.focus == Focus::Outside {
            return event::Status::Ignored;
        }

        match key.as_ref() {
            Key::Named(Named::Enter) if self.focus == Focus::Container => self.enter(),
            Key::Named(Named::Escape) if self.trapped => {
                self.exit(Focus::Container);
                event::Status::Captured
            }
            Key::Named(Named::Tab) if modifiers.shift() => self.tab_backward(),
            Key::Named(Named::Tab) => self.tab_forward(),
            _ => event::Status::Ignored,
        }
    }

    fn enter(&mut self) -> event::Status {
        if !matches!(self.mode, Mode::NoTab | Mode::TabExit) || self.focusables == 0 {
            return event::Status::Ignored;
        }

        log::debug!("Card focus trap engaged ({:?})", self.mode);

        self.trapped = true;
        self.move_to(Focus::Inner(0));

        event::Status::Captured
    }

    fn tab_forward(&mut self) -> event::Status {
        match (self.mode, self.focus) {
            (Mode::TabOnly, Focus::Container) if self.focusables > 0 => {
                self.trapped = true;
                self.move_to(Focus::Inner(0));
                event::Status::Captured
            }
            (Mode::NoTab, Focus::Inner(index)) if self.trapped => {
                self.move_to(Focus::Inner((index + 1) % self.focusables.max(1)));
                event::Status::Captured
            }
            (Mode::TabExit, Focus::Inner(index)) if self.trapped => {
                if index + 1 < self.focusables {
                    self.move_to(Focus::Inner(index + 1));
                    event::Status::Captured
                } else {
                    // Past the last element: the host continues the tab order
                    self.trapped = false;
                    self.focus = Focus::Outside;
                    log::debug!("Card focus trap exited forward");
                    event::Status::Ignored
                }
            }
            _ => event::Status::Ignored,
        }
    }

    fn tab_backward(&mut self) -> event::Status {
        match (self.mode, self.focus) {
            (Mode::NoTab, Focus::Inner(index)) if self.trapped => {
                let count = self.focusables.max(1);

                self.move_to(Focus::Inner((index + count - 1) % count));
                event::Status::Captured
            }
            (Mode::TabExit, Focus::Inner(0)) if self.trapped => {
                self.exit(Focus::Container);
                event::Status::Captured
            }
            (Mode::TabExit, Focus::Inner(index)) if self.trapped => {
                self.move_to(Focus::Inner(index - 1));
                event::Status::Captured
            }
            _ => event::Status::Ignored,
        }
    }

    fn move_to(&mut self, focus: Focus) {
        self.focus = focus;
        self.focus_request = Some(focus);
    }

    fn exit(&mut self, focus: Focus) {
        if self.trapped {
            log::debug!("Card focus trap released");
        }

        self.trapped = false;
        self.move_to(focus);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::keyboard::Modifiers;

    fn press(card: &mut Card, key: Named) -> event::Status {
        card.update(&keyboard::Event::pressed(key).into())
    }

    fn shift_tab(card: &mut Card) -> event::Status {
        card.update(
            &keyboard::Event::KeyPressed {
                key: Key::Named(Named::Tab),
                modifiers: Modifiers::SHIFT,
            }
            .into(),
        )
    }

    #[test]
    fn test_no_tab_cycles_until_escape() {
        let mut card = Card::new(Mode::NoTab, 2);

        assert_eq!(press(&mut card, Named::Enter), event::Status::Captured);
        assert_eq!(card.take_focus_request(), Some(Focus::Inner(0)));

        let _ = press(&mut card, Named::Tab);
        assert_eq!(card.take_focus_request(), Some(Focus::Inner(1)));

        let _ = press(&mut card, Named::Tab);
        assert_eq!(card.take_focus_request(), Some(Focus::Inner(0)));

        let _ = shift_tab(&mut card);
        assert_eq!(card.take_focus_request(), Some(Focus::Inner(1)));

        assert_eq!(press(&mut card, Named::Escape), event::Status::Captured);
        assert_eq!(card.take_focus_request(), Some(Focus::Container));
        assert!(!card.is_trapped());
    }

    #[test]
    fn test_no_tab_does_not_trap_tab_from_container() {
        let mut card = Card::new(Mode::NoTab, 2);

        assert_eq!(press(&mut card, Named::Tab), event::Status::Ignored);
        assert_eq!(card.take_focus_request(), None);
    }

    #[test]
    fn test_tab_only_jumps_in_without_cycling() {
        let mut card = Card::new(Mode::TabOnly, 2);

        assert_eq!(press(&mut card, Named::Enter), event::Status::Ignored);

        assert_eq!(press(&mut card, Named::Tab), event::Status::Captured);
        assert_eq!(card.take_focus_request(), Some(Focus::Inner(0)));

        assert_eq!(press(&mut card, Named::Tab), event::Status::Ignored);
        card.on_focus(Focus::Inner(1));

        assert_eq!(press(&mut card, Named::Escape), event::Status::Captured);
        assert_eq!(card.take_focus_request(), Some(Focus::Container));
    }

    #[test]
    fn test_tab_exit_leaves_past_the_last_element() {
        let mut card = Card::new(Mode::TabExit, 2);

        let _ = press(&mut card, Named::Enter);
        let _ = press(&mut card, Named::Tab);
        assert_eq!(card.focus(), Focus::Inner(1));

        assert_eq!(press(&mut card, Named::Tab), event::Status::Ignored);
        assert_eq!(card.focus(), Focus::Outside);
        assert!(!card.is_trapped());
    }

    #[test]
    fn test_tab_exit_shift_tab_returns_to_container() {
        let mut card = Card::new(Mode::TabExit, 3);

        let _ = press(&mut card, Named::Enter);
        assert_eq!(shift_tab(&mut card), event::Status::Captured);

        assert_eq!(card.focus(), Focus::Container);
        assert!(!card.is_trapped());
    }

    #[test]
    fn test_tab_exit_counts_focusables_added_while_trapped() {
        let mut card = Card::new(Mode::TabExit, 1);

        let _ = press(&mut card, Named::Enter);
        card.set_focusables(2);

        assert_eq!(press(&mut card, Named::Tab), event::Status::Captured);
        assert_eq!(card.focus(), Focus::Inner(1));
    }

    #[test]
    fn test_removing_focusables_clamps_focus() {
        let mut card = Card::new(Mode::NoTab, 3);

        let _ = press(&mut card, Named::Enter);
        let _ = press(&mut card, Named::Tab);
        let _ = press(&mut card, Named::Tab);
        let _ = card.take_focus_request();

        card.set_focusables(2);
        assert_eq!(card.take_focus_request(), Some(Focus::Inner(1)));

        card.set_focusables(0);
        assert_eq!(card.take_focus_request(), Some(Focus::Container));
        assert!(!card.is_trapped());
    }

    #[test]
    fn test_off_ignores_everything() {
        let mut card = Card::new(Mode::Off, 2);

        for key in [Named::Enter, Named::Tab, Named::Escape] {
            assert_eq!(press(&mut card, key), event::Status::Ignored);
        }

        assert_eq!(card.take_focus_request(), None);
    }
}

//! One open popup of a menu chain.
use super::layout::{Layout, Row, RowKind};
use super::list::ItemList;
use crate::core::menu::MenuId;
use crate::core::{Point, Rectangle, Size, overlay};
use crate::positioner::{Placement, Positioner};

/// An open popup: the root list or a submenu.
#[derive(Debug, Clone)]
pub(super) struct Level {
    pub(super) id: overlay::Id,
    /// The item of the previous level that opened this one.
    pub(super) parent: Option<(usize, MenuId)>,
    pub(super) list: ItemList,
    pub(super) layout: Layout,
    pub(super) positioner: Positioner,
    pub(super) placement: Placement,
    pub(super) scroll_offset: f32,
}

impl Level {
    pub(super) fn new(
        parent: Option<(usize, MenuId)>,
        list: ItemList,
        layout: Layout,
        positioner: Positioner,
    ) -> Self {
        Self {
            id: overlay::Id::unique(),
            parent,
            list,
            layout,
            positioner,
            placement: Placement {
                bounds: Rectangle::default(),
                candidate: 0,
                fits: false,
            },
            scroll_offset: 0.0,
        }
    }

    pub(super) fn parent_index(&self) -> Option<usize> {
        self.parent.map(|(index, _)| index)
    }

    pub(super) fn bounds(&self) -> Rectangle {
        self.placement.bounds
    }

    /// Runs the placement search again and keeps the scroll offset in range.
    pub(super) fn place(&mut self, anchor: Rectangle, width: f32, viewport: Size) {
        let content = Size::new(width, self.layout.height());

        self.placement = self.positioner.place(anchor, content, viewport);
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll());

        if let Some(index) = self.list.focused() {
            self.scroll_to(index);
        }
    }

    fn max_scroll(&self) -> f32 {
        (self.layout.height() - self.placement.bounds.height).max(0.0)
    }

    /// Returns the bounds of `row` in viewport coordinates.
    pub(super) fn row_bounds(&self, row: &Row) -> Rectangle {
        let bounds = self.placement.bounds;

        Rectangle::new(
            Point::new(bounds.x, bounds.y + row.top - self.scroll_offset),
            Size::new(bounds.width, row.height),
        )
    }

    pub(super) fn item_bounds(&self, index: usize) -> Option<Rectangle> {
        self.layout.item(index).map(|row| self.row_bounds(row))
    }

    pub(super) fn contains(&self, point: Point) -> bool {
        self.placement.bounds.contains(point)
    }

    /// Returns the item under `point`, if any.
    pub(super) fn hit(&self, point: Point) -> Option<usize> {
        if !self.contains(point) {
            return None;
        }

        let y = point.y - self.placement.bounds.y + self.scroll_offset;

        match self.layout.row_at(y)?.kind {
            RowKind::Item(index) => Some(index),
            RowKind::Header(_) | RowKind::Divider => None,
        }
    }

    /// Scrolls the least amount needed to show the item at `index`.
    pub(super) fn scroll_to(&mut self, index: usize) {
        let Some(row) = self.layout.item(index) else {
            return;
        };
        let visible = self.placement.bounds.height;

        if index == 0 {
            // Reveal the padding and any header above the first item
            self.scroll_offset = 0.0;
        } else if row.top < self.scroll_offset {
            self.scroll_offset = row.top;
        } else if row.top + row.height > self.scroll_offset + visible {
            self.scroll_offset = row.top + row.height - visible;
        }

        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::menu::MenuItem;
    use crate::core::{LayoutDirection, Settings};

    fn level(count: usize, settings: &Settings) -> Level {
        let items: Vec<MenuItem<()>> = (0..count)
            .map(|i| MenuItem::new(MenuId::from_str("item").child(i as u64), format!("{i}")))
            .collect();

        Level::new(
            None,
            ItemList::from_items(&items),
            Layout::items(count, settings),
            Positioner::menu(settings, LayoutDirection::Ltr),
        )
    }

    #[test]
    fn test_hit_accounts_for_padding() {
        let settings = Settings::default();
        let mut level = level(3, &settings);
        let anchor = Rectangle::new(Point::new(10.0, 10.0), Size::new(100.0, 30.0));

        level.place(anchor, 0.0, Size::new(800.0, 600.0));

        // Popup starts at y = 44, first row at y = 52
        assert_eq!(level.hit(Point::new(20.0, 48.0)), None);
        assert_eq!(level.hit(Point::new(20.0, 52.0)), Some(0));
        assert_eq!(level.hit(Point::new(20.0, 90.0)), Some(1));
        assert_eq!(level.hit(Point::new(200.0, 90.0)), None);
    }

    #[test]
    fn test_focused_item_is_scrolled_into_view() {
        let settings = Settings::default().max_height(100.0);
        let mut level = level(10, &settings);
        let anchor = Rectangle::new(Point::new(10.0, 10.0), Size::new(100.0, 30.0));

        level.place(anchor, 0.0, Size::new(800.0, 600.0));
        assert_eq!(level.bounds().height, 100.0);
        assert_eq!(level.scroll_offset, 0.0);

        level.scroll_to(5);
        // Row 5 spans 168..200 in content space
        assert_eq!(level.scroll_offset, 100.0);

        let item = level.item_bounds(5).expect("item bounds");
        assert_eq!(item.bottom(), level.bounds().bottom());

        level.scroll_to(9);
        assert_eq!(level.scroll_offset, 228.0);

        level.scroll_to(1);
        assert_eq!(level.scroll_offset, 40.0);

        level.scroll_to(0);
        assert_eq!(level.scroll_offset, 0.0);
    }
}

//! Vertical row layout of a menu popup

use crate::core::Settings;
use crate::core::menu::MenuSection;

/// What occupies a row of a popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum RowKind {
    /// The header of the section with this index.
    Header(usize),
    /// The item with this flattened index.
    Item(usize),
    Divider,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Row {
    pub(super) kind: RowKind,
    pub(super) top: f32,
    pub(super) height: f32,
}

/// Row positions in content space, where `0.0` is the top edge of the popup
/// before scrolling.
#[derive(Debug, Clone, PartialEq, Default)]
pub(super) struct Layout {
    pub(super) rows: Vec<Row>,
    /// Row index of every item, by flattened index.
    item_rows: Vec<usize>,
    height: f32,
}

impl Layout {
    pub(super) fn sections<Message>(
        sections: &[MenuSection<Message>],
        settings: &Settings,
    ) -> Self {
        let mut builder = Builder::new(settings);

        for (index, section) in sections.iter().enumerate() {
            if section.header.is_some() {
                builder.push(RowKind::Header(index), settings.header_height);
            }

            for _ in &section.items {
                builder.push_item(settings.item_height);
            }

            if section.divider {
                builder.push(RowKind::Divider, settings.divider_height);
            }
        }

        builder.finish()
    }

    pub(super) fn items(count: usize, settings: &Settings) -> Self {
        let mut builder = Builder::new(settings);

        for _ in 0..count {
            builder.push_item(settings.item_height);
        }

        builder.finish()
    }

    /// Total content height, padding included.
    pub(super) fn height(&self) -> f32 {
        self.height
    }

    pub(super) fn item(&self, index: usize) -> Option<&Row> {
        self.item_rows.get(index).and_then(|&row| self.rows.get(row))
    }

    /// Returns the row covering content offset `y`.
    pub(super) fn row_at(&self, y: f32) -> Option<&Row> {
        let index = self.rows.partition_point(|row| row.top + row.height <= y);

        self.rows.get(index).filter(|row| row.top <= y)
    }
}

struct Builder {
    layout: Layout,
    cursor: f32,
    padding: f32,
}

impl Builder {
    fn new(settings: &Settings) -> Self {
        Self {
            layout: Layout::default(),
            cursor: settings.list_padding,
            padding: settings.list_padding,
        }
    }

    fn push(&mut self, kind: RowKind, height: f32) {
        self.layout.rows.push(Row {
            kind,
            top: self.cursor,
            height,
        });
        self.cursor += height;
    }

    fn push_item(&mut self, height: f32) {
        let index = self.layout.item_rows.len();

        self.layout.item_rows.push(self.layout.rows.len());
        self.push(RowKind::Item(index), height);
    }

    fn finish(mut self) -> Layout {
        self.layout.height = self.cursor + self.padding;
        self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::menu::{MenuId, MenuItem};

    fn item(name: &str) -> MenuItem<()> {
        MenuItem::new(MenuId::from_str(name), name)
    }

    #[test]
    fn test_sections_layout() {
        let settings = Settings::default();
        let sections = vec![
            MenuSection::new(vec![item("a"), item("b")])
                .header("Edit")
                .divider(true),
            MenuSection::new(vec![item("c")]),
        ];

        let layout = Layout::sections(&sections, &settings);

        let kinds: Vec<_> = layout.rows.iter().map(|row| row.kind).collect();
        assert_eq!(
            kinds,
            [
                RowKind::Header(0),
                RowKind::Item(0),
                RowKind::Item(1),
                RowKind::Divider,
                RowKind::Item(2),
            ]
        );

        // 8 + 28 + 32 + 32 + 9 + 32 + 8
        assert_eq!(layout.height(), 149.0);
        assert_eq!(layout.item(2).map(|row| row.top), Some(109.0));
    }

    #[test]
    fn test_row_at() {
        let layout = Layout::items(3, &Settings::default());

        assert_eq!(layout.row_at(4.0), None);
        assert_eq!(layout.row_at(8.0).map(|row| row.kind), Some(RowKind::Item(0)));
        assert_eq!(layout.row_at(40.0).map(|row| row.kind), Some(RowKind::Item(1)));
        assert_eq!(layout.row_at(103.9).map(|row| row.kind), Some(RowKind::Item(2)));
        assert_eq!(layout.row_at(104.0), None);
    }

    #[test]
    fn test_empty_layout_is_only_padding() {
        let layout = Layout::items(0, &Settings::default());

        assert!(layout.rows.is_empty());
        assert_eq!(layout.height(), 16.0);
        assert!(layout.item(0).is_none());
    }
}

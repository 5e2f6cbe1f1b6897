//! Place popups next to their anchors.
//!
//! A [`Positioner`] tries an ordered list of [`Candidate`]s. Each candidate
//! pins a corner of the popup to a corner of the anchor. The first candidate
//! whose popup fits inside the viewport, inset by the margin, wins. When none
//! fits, the last candidate is used and the popup may overflow.
use crate::core::alignment::{Corner, Horizontal, Vertical};
use crate::core::{LayoutDirection, Point, Rectangle, Settings, Size, Vector};

/// A way to attach a popup to its anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// The corner of the anchor the popup attaches to.
    pub origin: Corner,
    /// The corner of the popup placed on `origin`.
    pub overlay: Corner,
    /// Extra displacement. Positive `x` points towards the end edge.
    pub offset: Vector,
}

impl Candidate {
    /// Creates a new [`Candidate`].
    pub const fn new(origin: Corner, overlay: Corner, offset: Vector) -> Self {
        Self {
            origin,
            overlay,
            offset,
        }
    }

    /// Below the anchor, start edges aligned.
    pub const fn below_start(gap: f32) -> Self {
        Self::new(Corner::BOTTOM_START, Corner::TOP_START, Vector::new(0.0, gap))
    }

    /// Above the anchor, start edges aligned.
    pub const fn above_start(gap: f32) -> Self {
        Self::new(Corner::TOP_START, Corner::BOTTOM_START, Vector::new(0.0, -gap))
    }

    /// Below the anchor, end edges aligned.
    pub const fn below_end(gap: f32) -> Self {
        Self::new(Corner::BOTTOM_END, Corner::TOP_END, Vector::new(0.0, gap))
    }

    /// Above the anchor, end edges aligned.
    pub const fn above_end(gap: f32) -> Self {
        Self::new(Corner::TOP_END, Corner::BOTTOM_END, Vector::new(0.0, -gap))
    }

    /// Computes the popup rectangle for this candidate.
    pub fn resolve(&self, anchor: Rectangle, size: Size, direction: LayoutDirection) -> Rectangle {
        let origin_x = match self.origin.x.resolve_horizontal_in(direction) {
            Horizontal::Left => anchor.x,
            Horizontal::Right => anchor.right(),
        };
        let origin_y = match self.origin.y {
            Vertical::Top => anchor.y,
            Vertical::Bottom => anchor.bottom(),
        };

        let x = match self.overlay.x.resolve_horizontal_in(direction) {
            Horizontal::Left => origin_x,
            Horizontal::Right => origin_x - size.width,
        };
        let y = match self.overlay.y {
            Vertical::Top => origin_y,
            Vertical::Bottom => origin_y - size.height,
        };

        let dx = if direction.is_rtl() {
            -self.offset.x
        } else {
            self.offset.x
        };

        Rectangle::new(Point::new(x + dx, y + self.offset.y), size)
    }
}

/// Candidates for a popup opened from a trigger.
///
/// Below-start, above-start, below-end, above-end.
pub fn menu_candidates(gap: f32) -> Vec<Candidate> {
    vec![
        Candidate::below_start(gap),
        Candidate::above_start(gap),
        Candidate::below_end(gap),
        Candidate::above_end(gap),
    ]
}

/// Candidates for a submenu opened from an item.
///
/// Beside the item on the end side first, then on the start side, then
/// stacked below or above it. `padding` lifts the popup so its first row
/// lines up with the item.
pub fn submenu_candidates(gap: f32, padding: f32) -> Vec<Candidate> {
    vec![
        Candidate::new(Corner::TOP_END, Corner::TOP_START, Vector::new(gap, -padding)),
        Candidate::new(
            Corner::BOTTOM_END,
            Corner::BOTTOM_START,
            Vector::new(gap, padding),
        ),
        Candidate::new(Corner::TOP_START, Corner::TOP_END, Vector::new(-gap, -padding)),
        Candidate::new(
            Corner::BOTTOM_START,
            Corner::BOTTOM_END,
            Vector::new(-gap, padding),
        ),
        Candidate::below_start(0.0),
        Candidate::above_start(0.0),
    ]
}

/// The outcome of a placement search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Where the popup goes, in viewport coordinates.
    pub bounds: Rectangle,
    /// Index of the chosen [`Candidate`].
    pub candidate: usize,
    /// Whether the popup fits inside the viewport minus the margin.
    pub fits: bool,
}

/// Searches placement candidates for a popup.
#[derive(Debug, Clone, PartialEq)]
pub struct Positioner {
    candidates: Vec<Candidate>,
    min_width: Option<f32>,
    max_width: f32,
    max_height: f32,
    margin: f32,
    direction: LayoutDirection,
}

impl Positioner {
    /// Creates a [`Positioner`] trying `candidates` in order.
    ///
    /// By default the popup is at least as wide as its anchor.
    pub fn new(candidates: Vec<Candidate>, direction: LayoutDirection) -> Self {
        Self {
            candidates,
            min_width: None,
            max_width: f32::INFINITY,
            max_height: f32::INFINITY,
            margin: 0.0,
            direction,
        }
    }

    /// The positioner of a popup opened from a trigger.
    pub fn menu(settings: &Settings, direction: LayoutDirection) -> Self {
        Self::new(menu_candidates(settings.menu_offset), direction)
            .max_width(settings.max_width)
            .max_height(settings.max_height)
            .margin(settings.viewport_margin)
    }

    /// The positioner of a submenu popup.
    pub fn submenu(settings: &Settings, direction: LayoutDirection) -> Self {
        Self::new(
            submenu_candidates(settings.submenu_offset, settings.list_padding),
            direction,
        )
        .min_width(settings.submenu_min_width)
        .max_width(settings.max_width)
        .max_height(settings.max_height)
        .margin(settings.viewport_margin)
    }

    /// Uses a fixed minimum width instead of the anchor width.
    #[must_use]
    pub fn min_width(mut self, min_width: f32) -> Self {
        self.min_width = Some(min_width);
        self
    }

    /// Sets the maximum width.
    #[must_use]
    pub fn max_width(mut self, max_width: f32) -> Self {
        self.max_width = max_width;
        self
    }

    /// Sets the preferred maximum height.
    #[must_use]
    pub fn max_height(mut self, max_height: f32) -> Self {
        self.max_height = max_height;
        self
    }

    /// Sets the margin kept free along the viewport edges.
    #[must_use]
    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Returns the candidates, in priority order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Returns the size a popup with the given natural `content` size takes.
    ///
    /// The width is clamped between the minimum and maximum width, the
    /// maximum winning a conflict. The height is capped by the preferred
    /// maximum and by the viewport height minus both margins.
    pub fn size(&self, anchor: Rectangle, content: Size, viewport: Size) -> Size {
        let min_width = self.min_width.unwrap_or(anchor.width);
        let max_height = self
            .max_height
            .min(viewport.height - self.margin * 2.0)
            .max(0.0);

        Size::new(
            content.width.max(min_width).min(self.max_width),
            content.height.min(max_height),
        )
    }

    /// Places a popup with natural `content` size next to `anchor`.
    ///
    /// The result only depends on the arguments and the candidates.
    pub fn place(&self, anchor: Rectangle, content: Size, viewport: Size) -> Placement {
        let size = self.size(anchor, content, viewport);
        let area = Rectangle::with_size(viewport).shrink(self.margin);

        for (index, candidate) in self.candidates.iter().enumerate() {
            let bounds = candidate.resolve(anchor, size, self.direction);

            if bounds.is_within(&area) {
                log::trace!("Placed popup with candidate {index} at {bounds:?}");

                return Placement {
                    bounds,
                    candidate: index,
                    fits: true,
                };
            }
        }

        let Some((index, candidate)) = self.candidates.iter().enumerate().next_back() else {
            return Placement {
                bounds: Rectangle::new(Point::new(anchor.x, anchor.bottom()), size),
                candidate: 0,
                fits: false,
            };
        };

        log::debug!(
            "No placement candidate fits {size:?} in {viewport:?}; falling back to candidate {index}"
        );

        Placement {
            bounds: candidate.resolve(anchor, size, self.direction),
            candidate: index,
            fits: false,
        }
    }
}

/// Returns `true` if `anchor` is no longer visible in the viewport.
///
/// Degenerate anchors (a context-menu click point, for instance) count as
/// visible while their position is inside the viewport.
pub fn is_detached(anchor: Rectangle, viewport: Size) -> bool {
    let visible = Rectangle::with_size(viewport);

    if anchor.width <= 0.0 || anchor.height <= 0.0 {
        let p = anchor.position();

        return !(p.x >= 0.0 && p.y >= 0.0 && p.x <= viewport.width && p.y <= viewport.height);
    }

    visible.intersection(&anchor).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(800.0, 600.0);

    fn menu() -> Positioner {
        Positioner::new(menu_candidates(0.0), LayoutDirection::Ltr)
            .max_width(280.0)
            .max_height(480.0)
            .margin(8.0)
    }

    #[test]
    fn test_below_start_is_preferred() {
        let anchor = Rectangle::new(Point::new(100.0, 100.0), Size::new(120.0, 40.0));

        let placement = menu().place(anchor, Size::new(200.0, 250.0), VIEWPORT);

        assert_eq!(placement.candidate, 0);
        assert!(placement.fits);
        assert_eq!(placement.bounds.position(), Point::new(100.0, 140.0));
    }

    #[test]
    fn test_flips_above_near_viewport_bottom() {
        let anchor = Rectangle::new(Point::new(100.0, 400.0), Size::new(120.0, 40.0));

        let placement = menu().place(anchor, Size::new(200.0, 250.0), VIEWPORT);

        assert_eq!(placement.candidate, 1);
        assert!(placement.fits);
        assert_eq!(
            placement.bounds,
            Rectangle::new(Point::new(100.0, 150.0), Size::new(200.0, 250.0))
        );
    }

    #[test]
    fn test_end_alignment_near_right_edge() {
        let anchor = Rectangle::new(Point::new(700.0, 100.0), Size::new(60.0, 40.0));

        let placement = menu().place(anchor, Size::new(200.0, 100.0), VIEWPORT);

        assert_eq!(placement.candidate, 2);
        assert_eq!(placement.bounds.right(), 760.0);
    }

    #[test]
    fn test_falls_back_to_last_candidate() {
        let anchor = Rectangle::new(Point::new(10.0, 10.0), Size::new(780.0, 580.0));

        let placement = menu().place(anchor, Size::new(200.0, 100.0), VIEWPORT);

        assert_eq!(placement.candidate, 3);
        assert!(!placement.fits);
    }

    #[test]
    fn test_width_is_clamped() {
        let positioner = menu();
        let anchor = Rectangle::new(Point::new(0.0, 0.0), Size::new(150.0, 40.0));

        assert_eq!(
            positioner.size(anchor, Size::new(10.0, 100.0), VIEWPORT).width,
            150.0
        );
        assert_eq!(
            positioner.size(anchor, Size::new(500.0, 100.0), VIEWPORT).width,
            280.0
        );
        assert_eq!(
            positioner
                .clone()
                .min_width(112.0)
                .size(anchor, Size::new(10.0, 100.0), VIEWPORT)
                .width,
            112.0
        );
    }

    #[test]
    fn test_height_is_capped_by_viewport() {
        let size = menu().size(
            Rectangle::default(),
            Size::new(100.0, 1000.0),
            Size::new(800.0, 300.0),
        );

        assert_eq!(size.height, 284.0);
    }

    #[test]
    fn test_placement_is_deterministic() {
        let positioner = Positioner::submenu(&Settings::default(), LayoutDirection::Ltr);
        let anchor = Rectangle::new(Point::new(650.0, 300.0), Size::new(140.0, 32.0));

        let first = positioner.place(anchor, Size::new(180.0, 200.0), VIEWPORT);

        for _ in 0..10 {
            assert_eq!(
                positioner.place(anchor, Size::new(180.0, 200.0), VIEWPORT),
                first
            );
        }
    }

    #[test]
    fn test_submenu_prefers_end_side_then_start_side() {
        let positioner = Positioner::submenu(&Settings::default(), LayoutDirection::Ltr);

        let roomy = Rectangle::new(Point::new(100.0, 100.0), Size::new(140.0, 32.0));
        let placement = positioner.place(roomy, Size::new(180.0, 100.0), VIEWPORT);
        assert_eq!(placement.candidate, 0);
        assert_eq!(placement.bounds.position(), Point::new(240.0, 92.0));

        let cramped = Rectangle::new(Point::new(600.0, 100.0), Size::new(140.0, 32.0));
        let placement = positioner.place(cramped, Size::new(180.0, 100.0), VIEWPORT);
        assert_eq!(placement.candidate, 2);
        assert_eq!(placement.bounds.right(), 600.0);
    }

    #[test]
    fn test_rtl_mirrors_start_alignment() {
        let positioner = Positioner::new(menu_candidates(0.0), LayoutDirection::Rtl).margin(8.0);
        let anchor = Rectangle::new(Point::new(400.0, 100.0), Size::new(100.0, 40.0));

        let placement = positioner.place(anchor, Size::new(200.0, 100.0), VIEWPORT);

        assert_eq!(placement.candidate, 0);
        assert_eq!(placement.bounds.right(), 500.0);
    }

    #[test]
    fn test_detached_anchor() {
        let visible = Rectangle::new(Point::new(10.0, 10.0), Size::new(50.0, 20.0));
        let scrolled_away = Rectangle::new(Point::new(10.0, -40.0), Size::new(50.0, 20.0));
        let partially = Rectangle::new(Point::new(10.0, -10.0), Size::new(50.0, 20.0));

        assert!(!is_detached(visible, VIEWPORT));
        assert!(is_detached(scrolled_away, VIEWPORT));
        assert!(!is_detached(partially, VIEWPORT));
        assert!(!is_detached(
            Rectangle::new(Point::new(5.0, 5.0), Size::ZERO),
            VIEWPORT
        ));
    }
}

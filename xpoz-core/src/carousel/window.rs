use xpoz_contracts::dimensioned::Dimensioned;
use xpoz_contracts::id::Identifiable;
use xpoz_model::geometry::Size;

use super::config::{CarouselConfig, WINDOW_SIZE};
use super::slide::SlideLayout;
use crate::gallery::GalleryList;

/// Fixed window of slides over an arbitrarily long gallery.
///
/// Gallery index `i` is always shown by slot `i % window` with
/// `jumps = i / window`, so the mounted slides stay edge to edge on the
/// track while the user navigates in either direction.
#[derive(Debug, Clone)]
pub struct Carousel {
    config: CarouselConfig,
    viewport: Size,
    slides: Vec<SlideLayout>,
    index: usize,
}

impl Carousel {
    pub fn new(config: CarouselConfig, viewport: Size) -> Self {
        let config = CarouselConfig {
            window: config.window.max(WINDOW_SIZE),
            ..config
        };
        let slides = (0..config.window)
            .map(|pos| SlideLayout::with_config(pos, &config))
            .collect();
        Self {
            config,
            viewport,
            slides,
            index: 0,
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Gallery index of the current slide.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slides(&self) -> &[SlideLayout] {
        &self.slides
    }

    fn slot_of(&self, index: usize) -> usize {
        index % self.config.window
    }

    /// Slot that shows (or would show) gallery index `index`.
    pub fn slide_for(&self, index: usize) -> &SlideLayout {
        &self.slides[self.slot_of(index)]
    }

    pub fn current_slide(&self) -> &SlideLayout {
        self.slide_for(self.index)
    }

    pub fn current_slide_mut(&mut self) -> &mut SlideLayout {
        let slot = self.slot_of(self.index);
        &mut self.slides[slot]
    }

    /// Make `index` current and lay out it and its neighbours.
    ///
    /// Returns `false` without changing anything when `index` is past the
    /// end of the gallery.
    pub fn show<T>(&mut self, index: usize, gallery: &GalleryList<T>) -> bool
    where
        T: Identifiable + Dimensioned,
    {
        if index >= gallery.size() {
            return false;
        }
        self.index = index;

        let window = self.config.window;
        let half = (window - 1) / 2;
        let mut assigned = vec![false; window];

        for i in index.saturating_sub(half)..=index + half {
            let Some(node) = gallery.node(i) else {
                continue;
            };
            let slot = i % window;
            let slide = &mut self.slides[slot];
            if slide.item != Some(node.id()) {
                slide.scale = 1.0;
            }
            slide.jumps = (i / window) as i64;
            slide.set_item(Some(node), self.viewport);
            assigned[slot] = true;
        }

        for (slide, _) in self
            .slides
            .iter_mut()
            .zip(assigned)
            .filter(|(_, assigned)| !assigned)
        {
            slide.set_item::<T>(None, self.viewport);
        }

        tracing::debug!(index, size = gallery.size(), "carousel show");
        true
    }

    pub fn next<T>(&mut self, gallery: &GalleryList<T>) -> bool
    where
        T: Identifiable + Dimensioned,
    {
        self.show(self.index + 1, gallery)
    }

    pub fn prev<T>(&mut self, gallery: &GalleryList<T>) -> bool
    where
        T: Identifiable + Dimensioned,
    {
        match self.index.checked_sub(1) {
            Some(index) => self.show(index, gallery),
            None => false,
        }
    }

    /// Keep the same record current after `added` records were prepended.
    pub fn follow_prepend<T>(&mut self, added: usize, gallery: &GalleryList<T>) -> bool
    where
        T: Identifiable + Dimensioned,
    {
        self.show(self.index + added, gallery)
    }

    /// Recompute every mounted slide for a new viewport size.
    pub fn resize<T>(&mut self, viewport: Size, gallery: &GalleryList<T>)
    where
        T: Identifiable + Dimensioned,
    {
        self.viewport = viewport;
        if !gallery.is_empty() {
            let index = self.index.min(gallery.size() - 1);
            self.show(index, gallery);
        }
    }

    /// Track translation that brings the current slide on screen.
    pub fn offset(&self) -> f64 {
        -(self.index as f64 * self.config.stride(self.viewport.width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xpoz_model::asset::Asset;
    use xpoz_model::ids::AssetUuid;

    fn gallery(n: usize) -> GalleryList<Asset> {
        let mut list = GalleryList::new();
        list.append((0..n).map(|i| {
            Asset::photo(AssetUuid::new(format!("asset-{i}")).unwrap(), 1600, 900)
        }));
        list
    }

    fn carousel() -> Carousel {
        Carousel::new(CarouselConfig::default(), Size::new(1000.0, 800.0))
    }

    #[test]
    fn first_slide_has_no_previous_neighbour() {
        let g = gallery(5);
        let mut c = carousel();
        assert!(c.show(0, &g));

        assert_eq!(c.slides()[0].item, g.node(0).map(|n| n.id()));
        assert_eq!(c.slides()[1].item, g.node(1).map(|n| n.id()));
        assert!(c.slides()[2].item.is_none());
        assert_eq!(c.offset(), 0.0);
    }

    #[test]
    fn window_stays_contiguous_while_wrapping() {
        let g = gallery(10);
        let mut c = carousel();
        c.show(0, &g);
        for _ in 0..4 {
            assert!(c.next(&g));
        }
        assert_eq!(c.index(), 4);

        let mut xs: Vec<f64> = (3..=5).map(|i| c.slide_for(i).x).collect();
        xs.sort_by(f64::total_cmp);
        assert_eq!(xs, vec![3060.0, 4080.0, 5100.0]);
        assert_eq!(c.current_slide().jumps, 1);
        assert_eq!(c.offset(), -c.current_slide().x);
    }

    #[test]
    fn navigation_stops_at_the_ends() {
        let g = gallery(2);
        let mut c = carousel();
        c.show(1, &g);
        assert!(!c.next(&g));
        assert!(c.prev(&g));
        assert!(!c.prev(&g));
        assert_eq!(c.index(), 0);
        assert!(!c.show(7, &g));
    }

    #[test]
    fn following_a_prepend_keeps_the_current_record() {
        let mut g = gallery(3);
        let mut c = carousel();
        c.show(1, &g);
        let current = c.current_slide().item;

        g.prepend([
            Asset::photo(AssetUuid::new("p0").unwrap(), 10, 10),
            Asset::photo(AssetUuid::new("p1").unwrap(), 10, 10),
        ]);
        assert!(c.follow_prepend(2, &g));
        assert_eq!(c.index(), 3);
        assert_eq!(c.current_slide().item, current);
    }

    #[test]
    fn resize_recomputes_geometry() {
        let g = gallery(3);
        let mut c = carousel();
        c.show(1, &g);
        c.resize(Size::new(400.0, 800.0), &g);

        let slide = c.current_slide();
        assert_eq!(slide.width, 400.0);
        assert_eq!(slide.height, 225.0);
        assert_eq!(slide.x, 420.0);
    }

    #[test]
    fn undersized_window_is_widened() {
        let config = CarouselConfig {
            window: 1,
            ..CarouselConfig::default()
        };
        let c = Carousel::new(config, Size::new(100.0, 100.0));
        assert_eq!(c.slides().len(), WINDOW_SIZE);
    }
}

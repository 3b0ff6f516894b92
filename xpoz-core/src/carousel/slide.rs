use xpoz_contracts::dimensioned::Dimensioned;
use xpoz_contracts::id::Identifiable;
use xpoz_model::geometry::{Bounds, Point, Size};

use super::config::CarouselConfig;
use crate::gallery::{GalleryNode, NodeId};

/// Display box of an image fitted inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Fitted {
    pub width: f64,
    pub height: f64,
    pub top: f64,
    pub left: f64,
}

/// Fit `intrinsic` inside `viewport`, preserving the aspect ratio.
///
/// Height-fit is tried first; if that overflows horizontally the image is
/// fitted by width and centred vertically instead.
pub fn fit_to_viewport(intrinsic: Size, viewport: Size) -> Fitted {
    let ratio = intrinsic.ratio();
    let desired_height = viewport.height;
    let desired_width = desired_height * ratio;

    if desired_width > viewport.width {
        let height = viewport.width / ratio;
        Fitted {
            width: viewport.width,
            height,
            top: viewport.height / 2.0 - height / 2.0,
            left: 0.0,
        }
    } else {
        Fitted {
            width: desired_width,
            height: desired_height,
            top: 0.0,
            left: viewport.width / 2.0 - desired_width / 2.0,
        }
    }
}

/// Layout state of one slot of the carousel window.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideLayout {
    /// Node currently shown in this slot.
    pub item: Option<NodeId>,
    /// Current zoom factor; 1.0 is fit-to-viewport.
    pub scale: f64,
    pub zoomed_scale: f64,
    pub width: f64,
    pub height: f64,
    pub ratio: f64,
    pub top: f64,
    pub left: f64,
    /// Horizontal position of the slot on the carousel track.
    pub x: f64,
    pub y: f64,
    /// Full-window wraps applied to this slot.
    pub jumps: i64,
    /// Fixed slot index inside the window.
    pub pos: usize,
    spacing: f64,
    window: usize,
}

impl SlideLayout {
    pub fn new(pos: usize) -> Self {
        Self::with_config(pos, &CarouselConfig::default())
    }

    pub fn with_config(pos: usize, config: &CarouselConfig) -> Self {
        Self {
            item: None,
            scale: 1.0,
            zoomed_scale: config.zoomed_scale,
            width: 0.0,
            height: 0.0,
            ratio: 0.0,
            top: 0.0,
            left: 0.0,
            x: 0.0,
            y: 0.0,
            jumps: 0,
            pos,
            spacing: config.spacing,
            window: config.window,
        }
    }

    /// Show `node` in this slot and recompute its geometry for `viewport`.
    ///
    /// Passing `None` clears the slot but leaves the previous geometry as is.
    pub fn set_item<T>(
        &mut self,
        node: Option<&GalleryNode<T>>,
        viewport: Size,
    ) -> &mut Self
    where
        T: Identifiable + Dimensioned,
    {
        self.item = node.map(GalleryNode::id);
        let Some(node) = node else {
            return self;
        };

        let intrinsic = node.item().intrinsic_size();
        let fitted = fit_to_viewport(intrinsic, viewport);
        self.ratio = intrinsic.ratio();
        self.width = fitted.width;
        self.height = fitted.height;
        self.top = fitted.top;
        self.left = fitted.left;
        self.x = self.slot_x(viewport.width);

        tracing::trace!(
            pos = self.pos,
            jumps = self.jumps,
            width = self.width,
            height = self.height,
            x = self.x,
            "slide layout"
        );
        self
    }

    /// `pos` slots plus `jumps` whole windows along the track.
    pub fn slot_x(&self, viewport_width: f64) -> f64 {
        let stride = viewport_width + self.spacing;
        self.pos as f64 * stride + self.jumps as f64 * (self.window as f64 * stride)
    }

    pub fn is_zoomed(&self) -> bool {
        self.scale > 1.0
    }

    /// Legal pan range around `origin` once the slide is magnified to
    /// `zoomed_scale`: panning must not reveal anything past the image edge.
    pub fn zoomed_bounds_for_origin(&self, origin: Point) -> Bounds {
        self.bounds_for_scale(origin, self.zoomed_scale)
    }

    /// Same as [`Self::zoomed_bounds_for_origin`] for an arbitrary scale.
    pub fn bounds_for_scale(&self, origin: Point, scale: f64) -> Bounds {
        let delta_x = (self.width * scale - self.width) / 2.0;
        let delta_y = (self.height * scale - self.height) / 2.0;
        Bounds::new(
            Point::new(origin.x - delta_x, origin.y - delta_y),
            Point::new(origin.x + delta_x, origin.y + delta_y),
        )
    }

    /// Centre of the fitted image in viewport coordinates.
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::GalleryList;
    use xpoz_model::asset::Asset;
    use xpoz_model::ids::AssetUuid;

    fn gallery_with(width: u32, height: u32) -> GalleryList<Asset> {
        let mut list = GalleryList::new();
        list.append([Asset::photo(AssetUuid::new("a").unwrap(), width, height)]);
        list
    }

    #[test]
    fn height_fit_when_width_fits() {
        let gallery = gallery_with(2000, 1000);
        let mut slide = SlideLayout::new(0);
        slide.set_item(gallery.node(0), Size::new(1000.0, 500.0));

        assert_eq!(slide.width, 1000.0);
        assert_eq!(slide.height, 500.0);
        assert_eq!(slide.top, 0.0);
        assert_eq!(slide.left, 0.0);
    }

    #[test]
    fn width_fit_when_height_fit_overflows() {
        let gallery = gallery_with(2000, 1000);
        let mut slide = SlideLayout::new(0);
        slide.set_item(gallery.node(0), Size::new(500.0, 1000.0));

        assert_eq!(slide.width, 500.0);
        assert_eq!(slide.height, 250.0);
        assert_eq!(slide.top, 375.0);
        assert_eq!(slide.left, 0.0);
    }

    #[test]
    fn portrait_is_centred_horizontally() {
        let gallery = gallery_with(500, 1000);
        let mut slide = SlideLayout::new(0);
        slide.set_item(gallery.node(0), Size::new(1000.0, 500.0));

        assert_eq!(slide.width, 250.0);
        assert_eq!(slide.left, 375.0);
        assert_eq!(slide.top, 0.0);
    }

    #[test]
    fn slot_position_includes_spacing_and_jumps() {
        let gallery = gallery_with(100, 100);
        let mut slide = SlideLayout::new(2);
        slide.jumps = 1;
        slide.set_item(gallery.node(0), Size::new(1000.0, 500.0));

        // 2 * 1020 + 1 * 3 * 1020
        assert_eq!(slide.x, 5100.0);
    }

    #[test]
    fn clearing_keeps_previous_geometry() {
        let gallery = gallery_with(2000, 1000);
        let mut slide = SlideLayout::new(1);
        slide.set_item(gallery.node(0), Size::new(1000.0, 500.0));
        let before = (slide.width, slide.height, slide.x);

        slide.set_item::<Asset>(None, Size::new(10.0, 10.0));

        assert!(slide.item.is_none());
        assert_eq!((slide.width, slide.height, slide.x), before);
    }

    #[test]
    fn zoomed_bounds_are_symmetric_around_origin() {
        let mut slide = SlideLayout::new(0);
        slide.width = 200.0;
        slide.height = 100.0;
        slide.zoomed_scale = 2.0;

        let bounds = slide.zoomed_bounds_for_origin(Point::new(100.0, 100.0));
        assert_eq!(
            bounds,
            Bounds::new(Point::new(0.0, 50.0), Point::new(200.0, 150.0))
        );
    }
}

//! Applies recognized gestures to the carousel and the current slide.

use xpoz_contracts::dimensioned::Dimensioned;
use xpoz_contracts::gesture::{Gesture, GestureSource};
use xpoz_contracts::id::Identifiable;
use xpoz_model::geometry::Point;

use crate::carousel::Carousel;
use crate::gallery::GalleryList;
use crate::geometry::{clamp, out_of_bounds, round_bounds};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// What the UI has to render after a gesture was applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Nothing changed.
    Ignored,
    /// Carousel track is being dragged; `offset` is the full translation.
    Dragging { offset: f64 },
    /// A swipe moved the carousel to a neighbouring slide.
    Navigated(Direction),
    /// A swipe was too short or hit the end; the track returns to `offset`.
    SnapBack { offset: f64 },
    /// Zoom level of the current slide changed.
    Zoomed { scale: f64, origin: Point },
    /// Zoomed image was panned to `origin`.
    Panned { origin: Point },
    /// Pan ended out of bounds and `origin` was pulled back inside.
    Corrected { origin: Point },
    /// Overlay controls were shown or hidden.
    ChromeToggled { visible: bool },
}

/// Pan/zoom state for the current slide.
#[derive(Debug, Clone)]
pub struct GestureController {
    /// Horizontal drag of the whole track while at fit scale.
    drag: f64,
    /// Translation of the magnified image relative to its fitted position.
    origin: Point,
    pan_start_origin: Point,
    pinch_start_scale: Option<f64>,
    chrome_visible: bool,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureController {
    pub fn new() -> Self {
        Self {
            drag: 0.0,
            origin: Point::ORIGIN,
            pan_start_origin: Point::ORIGIN,
            pinch_start_scale: None,
            chrome_visible: true,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn drag(&self) -> f64 {
        self.drag
    }

    pub fn chrome_visible(&self) -> bool {
        self.chrome_visible
    }

    /// Drain `source`, applying every gesture in order.
    pub fn run<S, T>(
        &mut self,
        source: &mut S,
        carousel: &mut Carousel,
        gallery: &GalleryList<T>,
    ) -> Vec<GestureOutcome>
    where
        S: GestureSource + ?Sized,
        T: Identifiable + Dimensioned,
    {
        let mut outcomes = Vec::new();
        while let Some(gesture) = source.next_gesture() {
            outcomes.push(self.apply(gesture, carousel, gallery));
        }
        outcomes
    }

    pub fn apply<T>(
        &mut self,
        gesture: Gesture,
        carousel: &mut Carousel,
        gallery: &GalleryList<T>,
    ) -> GestureOutcome
    where
        T: Identifiable + Dimensioned,
    {
        tracing::trace!(gesture = gesture.name(), "apply gesture");
        let zoomed = carousel.current_slide().is_zoomed();

        match gesture {
            Gesture::PanStart => {
                self.pan_start_origin = self.origin;
                self.drag = 0.0;
                GestureOutcome::Ignored
            }
            Gesture::PanMove { delta } if zoomed => {
                self.origin = self.pan_start_origin + delta;
                GestureOutcome::Panned {
                    origin: self.origin,
                }
            }
            Gesture::PanMove { delta } => {
                self.drag = delta.x;
                GestureOutcome::Dragging {
                    offset: carousel.offset() + self.drag,
                }
            }
            Gesture::PanEnd | Gesture::PanCancel if zoomed => {
                self.settle_origin(carousel)
            }
            Gesture::PanEnd | Gesture::PanCancel => {
                self.finish_swipe(carousel, gallery)
            }
            Gesture::SingleTap { .. } => {
                self.chrome_visible = !self.chrome_visible;
                GestureOutcome::ChromeToggled {
                    visible: self.chrome_visible,
                }
            }
            Gesture::DoubleTap { at } => {
                self.pinch_start_scale = None;
                let slide = carousel.current_slide_mut();
                if slide.is_zoomed() {
                    slide.scale = 1.0;
                    self.origin = Point::ORIGIN;
                } else {
                    slide.scale = slide.zoomed_scale;
                    // Keep the tapped point under the finger, limited to
                    // what the magnified image can cover.
                    let centre = slide.center();
                    let wanted = Point::new(
                        (centre.x - at.x) * (slide.scale - 1.0),
                        (centre.y - at.y) * (slide.scale - 1.0),
                    );
                    let bounds = slide.zoomed_bounds_for_origin(Point::ORIGIN);
                    self.origin = Point::new(
                        clamp(wanted.x, bounds.min.x, bounds.max.x),
                        clamp(wanted.y, bounds.min.y, bounds.max.y),
                    );
                }
                GestureOutcome::Zoomed {
                    scale: slide.scale,
                    origin: self.origin,
                }
            }
            Gesture::PinchStart => {
                self.pinch_start_scale = Some(carousel.current_slide().scale);
                GestureOutcome::Ignored
            }
            Gesture::PinchEnd => {
                self.pinch_start_scale = None;
                GestureOutcome::Ignored
            }
            Gesture::Pinch { scale, .. } => {
                let slide = carousel.current_slide_mut();
                // Recognizers that skip `PinchStart` start from the
                // current scale.
                let start = *self.pinch_start_scale.get_or_insert(slide.scale);
                slide.scale = clamp(start * scale, 1.0, slide.zoomed_scale);
                if !slide.is_zoomed() {
                    self.origin = Point::ORIGIN;
                }
                GestureOutcome::Zoomed {
                    scale: slide.scale,
                    origin: self.origin,
                }
            }
        }
    }

    fn settle_origin(&mut self, carousel: &Carousel) -> GestureOutcome {
        let slide = carousel.current_slide();
        let bounds =
            round_bounds(slide.bounds_for_scale(Point::ORIGIN, slide.scale));
        match out_of_bounds(self.origin, bounds) {
            Some(correction) => {
                self.origin = self.origin + correction;
                GestureOutcome::Corrected {
                    origin: self.origin,
                }
            }
            None => GestureOutcome::Panned {
                origin: self.origin,
            },
        }
    }

    fn finish_swipe<T>(
        &mut self,
        carousel: &mut Carousel,
        gallery: &GalleryList<T>,
    ) -> GestureOutcome
    where
        T: Identifiable + Dimensioned,
    {
        let drag = std::mem::take(&mut self.drag);
        let threshold =
            carousel.config().swipe_threshold * carousel.viewport().width;

        let direction = if drag < -threshold {
            Some(Direction::Next)
        } else if drag > threshold {
            Some(Direction::Previous)
        } else {
            None
        };

        let moved = match direction {
            Some(Direction::Next) => carousel.next(gallery),
            Some(Direction::Previous) => carousel.prev(gallery),
            None => false,
        };

        match direction {
            Some(direction) if moved => {
                self.origin = Point::ORIGIN;
                self.pinch_start_scale = None;
                tracing::debug!(?direction, index = carousel.index(), "swipe");
                GestureOutcome::Navigated(direction)
            }
            _ => GestureOutcome::SnapBack {
                offset: carousel.offset(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::CarouselConfig;
    use xpoz_contracts::gesture::ScriptedGestures;
    use xpoz_model::asset::Asset;
    use xpoz_model::geometry::Size;
    use xpoz_model::ids::AssetUuid;

    fn setup(n: usize) -> (GalleryList<Asset>, Carousel) {
        let mut gallery = GalleryList::new();
        gallery.append((0..n).map(|i| {
            Asset::photo(AssetUuid::new(format!("a{i}")).unwrap(), 2000, 1000)
        }));
        let mut carousel =
            Carousel::new(CarouselConfig::default(), Size::new(1000.0, 500.0));
        carousel.show(0, &gallery);
        (gallery, carousel)
    }

    fn pan(dx: f64, dy: f64) -> [Gesture; 3] {
        [
            Gesture::PanStart,
            Gesture::PanMove {
                delta: Point::new(dx, dy),
            },
            Gesture::PanEnd,
        ]
    }

    #[test]
    fn long_swipe_left_navigates_next() {
        let (gallery, mut carousel) = setup(3);
        let mut controller = GestureController::new();
        let mut source = ScriptedGestures::new(pan(-300.0, 0.0));

        let outcomes = controller.run(&mut source, &mut carousel, &gallery);

        assert_eq!(outcomes[1], GestureOutcome::Dragging { offset: -300.0 });
        assert_eq!(outcomes[2], GestureOutcome::Navigated(Direction::Next));
        assert_eq!(carousel.index(), 1);
        assert_eq!(controller.drag(), 0.0);
    }

    #[test]
    fn short_swipe_snaps_back() {
        let (gallery, mut carousel) = setup(3);
        let mut controller = GestureController::new();
        let mut source = ScriptedGestures::new(pan(-150.0, 0.0));

        let outcomes = controller.run(&mut source, &mut carousel, &gallery);
        assert_eq!(outcomes[2], GestureOutcome::SnapBack { offset: 0.0 });
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn swipe_past_the_start_snaps_back() {
        let (gallery, mut carousel) = setup(3);
        let mut controller = GestureController::new();
        let mut source = ScriptedGestures::new(pan(400.0, 0.0));

        let outcomes = controller.run(&mut source, &mut carousel, &gallery);
        assert_eq!(outcomes[2], GestureOutcome::SnapBack { offset: 0.0 });
    }

    #[test]
    fn double_tap_toggles_zoom() {
        let (gallery, mut carousel) = setup(1);
        let mut controller = GestureController::new();
        let centre = carousel.current_slide().center();

        let zoom_in = controller.apply(
            Gesture::DoubleTap { at: centre },
            &mut carousel,
            &gallery,
        );
        assert_eq!(
            zoom_in,
            GestureOutcome::Zoomed {
                scale: 2.7,
                origin: Point::ORIGIN
            }
        );

        let zoom_out = controller.apply(
            Gesture::DoubleTap { at: centre },
            &mut carousel,
            &gallery,
        );
        assert_eq!(
            zoom_out,
            GestureOutcome::Zoomed {
                scale: 1.0,
                origin: Point::ORIGIN
            }
        );
    }

    #[test]
    fn zoomed_pan_is_pulled_back_inside() {
        let (gallery, mut carousel) = setup(2);
        let mut controller = GestureController::new();
        let centre = carousel.current_slide().center();
        controller.apply(Gesture::DoubleTap { at: centre }, &mut carousel, &gallery);

        // Fitted 1000x500 at 2.7x leaves 850 x 425 of slack per side.
        let mut source = ScriptedGestures::new(pan(-900.0, 10.0));
        let outcomes = controller.run(&mut source, &mut carousel, &gallery);

        assert_eq!(
            outcomes[1],
            GestureOutcome::Panned {
                origin: Point::new(-900.0, 10.0)
            }
        );
        assert_eq!(
            outcomes[2],
            GestureOutcome::Corrected {
                origin: Point::new(-850.0, 10.0)
            }
        );
        // Zoomed pans never move the track.
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn pinch_is_clamped_to_zoom_range() {
        let (gallery, mut carousel) = setup(1);
        let mut controller = GestureController::new();

        let out = controller.apply(
            Gesture::Pinch {
                scale: 5.0,
                center: Point::ORIGIN,
            },
            &mut carousel,
            &gallery,
        );
        assert!(matches!(out, GestureOutcome::Zoomed { scale, .. } if scale == 2.7));

        let out = controller.apply(
            Gesture::Pinch {
                scale: 0.1,
                center: Point::ORIGIN,
            },
            &mut carousel,
            &gallery,
        );
        assert!(matches!(out, GestureOutcome::Zoomed { scale, .. } if scale == 1.0));
    }

    fn pinch(scale: f64) -> Gesture {
        Gesture::Pinch {
            scale,
            center: Point::ORIGIN,
        }
    }

    fn scale_of(outcome: GestureOutcome) -> f64 {
        match outcome {
            GestureOutcome::Zoomed { scale, .. } => scale,
            other => panic!("expected a zoom, got {other:?}"),
        }
    }

    #[test]
    fn new_pinch_starts_from_the_current_scale() {
        let (gallery, mut carousel) = setup(1);
        let mut controller = GestureController::new();
        let centre = carousel.current_slide().center();

        let mut source = ScriptedGestures::new([
            Gesture::PinchStart,
            pinch(2.0),
            Gesture::PinchEnd,
            Gesture::DoubleTap { at: centre },
            Gesture::DoubleTap { at: centre },
            Gesture::PinchStart,
            pinch(0.8),
        ]);
        let outcomes = controller.run(&mut source, &mut carousel, &gallery);

        assert_eq!(scale_of(outcomes[1]), 2.0);
        assert_eq!(scale_of(outcomes[3]), 1.0);
        assert_eq!(scale_of(outcomes[4]), 2.7);
        assert!((scale_of(outcomes[6]) - 2.16).abs() < 1e-9);
    }

    #[test]
    fn double_tap_forgets_an_unfinished_pinch() {
        let (gallery, mut carousel) = setup(1);
        let mut controller = GestureController::new();
        let centre = carousel.current_slide().center();

        // No pinch boundaries at all.
        controller.apply(pinch(2.0), &mut carousel, &gallery);
        controller.apply(Gesture::DoubleTap { at: centre }, &mut carousel, &gallery);
        controller.apply(Gesture::DoubleTap { at: centre }, &mut carousel, &gallery);
        let out = controller.apply(pinch(0.8), &mut carousel, &gallery);

        assert!((scale_of(out) - 2.16).abs() < 1e-9);
    }

    #[test]
    fn single_tap_toggles_chrome() {
        let (gallery, mut carousel) = setup(1);
        let mut controller = GestureController::new();
        let tap = Gesture::SingleTap { at: Point::ORIGIN };

        assert_eq!(
            controller.apply(tap, &mut carousel, &gallery),
            GestureOutcome::ChromeToggled { visible: false }
        );
        assert!(!controller.chrome_visible());
    }
}

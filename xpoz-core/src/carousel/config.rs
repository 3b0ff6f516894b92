/// Gap between neighbouring slides, in viewport pixels.
pub const SLIDE_SPACING: f64 = 20.0;

/// Number of simultaneously mounted slides.
pub const WINDOW_SIZE: usize = 3;

/// Magnification applied by a double tap.
pub const DEFAULT_ZOOMED_SCALE: f64 = 2.7;

/// Fraction of the viewport width a drag must exceed to change slides.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 0.2;

/// Static configuration for a carousel instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub spacing: f64,
    /// Must be at least 3 so the previous, current and next slides are
    /// mounted at the same time.
    pub window: usize,
    pub zoomed_scale: f64,
    pub swipe_threshold: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            spacing: SLIDE_SPACING,
            window: WINDOW_SIZE,
            zoomed_scale: DEFAULT_ZOOMED_SCALE,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

impl CarouselConfig {
    /// Horizontal distance between the left edges of two adjacent slides.
    pub fn stride(&self, viewport_width: f64) -> f64 {
        viewport_width + self.spacing
    }
}

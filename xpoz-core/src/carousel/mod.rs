//! Carousel viewport: per-slide fit geometry and the rotating slide window.

pub mod config;
pub mod slide;
pub mod window;

pub use config::CarouselConfig;
pub use slide::{Fitted, SlideLayout, fit_to_viewport};
pub use window::Carousel;

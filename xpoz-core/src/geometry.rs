//! Pure helpers for pan/zoom bookkeeping.

use xpoz_model::geometry::{Bounds, Point};

/// Two-sided clamp. Unlike `f64::clamp` this never panics when `min > max`;
/// `max` wins in that case.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Strict open-interval membership: `lower < value < upper`.
pub fn between(value: f64, lower: f64, upper: f64) -> bool {
    value > lower && value < upper
}

/// Correction needed to bring `point` back inside `bounds`.
///
/// Returns `None` when the point lies within the bounds (edges inclusive).
/// Otherwise each axis of the returned vector holds the signed, rounded
/// distance to the nearest edge, or zero if that axis is already in range.
pub fn out_of_bounds(point: Point, bounds: Bounds) -> Option<Point> {
    if bounds.contains(point) {
        return None;
    }

    let axis = |value: f64, min: f64, max: f64| {
        if max < value {
            max - value
        } else if min > value {
            min - value
        } else {
            0.0
        }
    };

    Some(Point::new(
        round_half_up(axis(point.x, bounds.min.x, bounds.max.x)),
        round_half_up(axis(point.y, bounds.min.y, bounds.max.y)),
    ))
}

/// Nearest integer, halves towards positive infinity: `-0.5` gives `0`.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

pub fn round_point(point: Point) -> Point {
    Point::new(round_half_up(point.x), round_half_up(point.y))
}

pub fn round_bounds(bounds: Bounds) -> Bounds {
    Bounds::new(round_point(bounds.min), round_point(bounds.max))
}

//! Typed gesture events as reported by an external recognizer.

use std::collections::VecDeque;

use xpoz_model::geometry::Point;

/// One recognized touch gesture. Coordinates are viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    PanStart,
    /// Cumulative translation since the matching `PanStart`.
    PanMove { delta: Point },
    PanEnd,
    /// Interrupted pan; consumers treat it like `PanEnd`.
    PanCancel,
    SingleTap { at: Point },
    DoubleTap { at: Point },
    PinchStart,
    /// Cumulative pinch scale since the matching `PinchStart`.
    Pinch { scale: f64, center: Point },
    PinchEnd,
}

impl Gesture {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PanStart => "Gesture::PanStart",
            Self::PanMove { .. } => "Gesture::PanMove",
            Self::PanEnd => "Gesture::PanEnd",
            Self::PanCancel => "Gesture::PanCancel",
            Self::SingleTap { .. } => "Gesture::SingleTap",
            Self::DoubleTap { .. } => "Gesture::DoubleTap",
            Self::PinchStart => "Gesture::PinchStart",
            Self::Pinch { .. } => "Gesture::Pinch",
            Self::PinchEnd => "Gesture::PinchEnd",
        }
    }

    /// True for events that finish a pan sequence.
    pub fn ends_pan(&self) -> bool {
        matches!(self, Self::PanEnd | Self::PanCancel)
    }
}

/// A producer of gestures. The recognition algorithm lives outside the core.
pub trait GestureSource {
    fn next_gesture(&mut self) -> Option<Gesture>;
}

/// Replays a fixed list of gestures in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedGestures {
    queue: VecDeque<Gesture>,
}

impl ScriptedGestures {
    pub fn new(gestures: impl IntoIterator<Item = Gesture>) -> Self {
        Self {
            queue: gestures.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl GestureSource for ScriptedGestures {
    fn next_gesture(&mut self) -> Option<Gesture> {
        self.queue.pop_front()
    }
}

impl<S: GestureSource + ?Sized> GestureSource for &mut S {
    fn next_gesture(&mut self) -> Option<Gesture> {
        (**self).next_gesture()
    }
}

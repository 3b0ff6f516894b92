//! Trait surfaces that describe interactions with xpoz data models.

pub mod dimensioned;
pub mod gesture;
pub mod id;

/// Frequently used trait combinators for UI and orchestration crates.
pub mod prelude {
    pub use super::dimensioned::Dimensioned;
    pub use super::gesture::{Gesture, GestureSource, ScriptedGestures};
    pub use super::id::Identifiable;
}

//! UI focused snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in the carousel or other presentation layers.

pub use super::album::{Album, AlbumRef};
pub use super::asset::{Asset, AssetRef};
pub use super::geometry::{Bounds, Point, Size};
pub use super::ids::{AlbumUuid, AssetUuid, TokenId};
pub use super::image::ImageVariant;
pub use super::token::{Token, TokenInput, Viewer};

//! Core data model definitions shared across xpoz crates.
#![allow(missing_docs)]

pub mod album;
pub mod asset;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod image;
pub mod prelude;
pub mod token;

// Intentionally curated re-exports for downstream consumers.
pub use album::{Album, AlbumRef};
pub use asset::{Asset, AssetRef};
pub use error::{ModelError, Result as ModelResult};
pub use geometry::{Bounds, Point, Size};
pub use ids::{AlbumUuid, AssetUuid, TokenId};
pub use image::ImageVariant;
pub use token::{Token, TokenInput, Viewer};

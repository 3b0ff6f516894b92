//! Client core for the xpoz photo gallery.
//!
//! Pure gallery/carousel state lives in [`gallery`], [`carousel`] and
//! [`gesture`]; backend access lives in [`graphql`], [`api`] and [`image`].

pub mod api;
pub mod carousel;
pub mod error;
pub mod gallery;
pub mod geometry;
pub mod gesture;
pub mod graphql;
pub mod image;
pub mod prelude;
pub mod routes;

pub use error::{CoreError, Result};

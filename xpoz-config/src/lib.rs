//! Configuration for the xpoz client.
//!
//! Values come from three layers, highest precedence first: environment
//! variables (including an optional `.env` file), a TOML file, and built-in
//! defaults.

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;

pub use loader::{ConfigLoader, error::ConfigLoadError};
pub use models::{ApiConfig, Config, ConfigMetadata, ImagesConfig};
pub use models::sources::{EnvConfig, FileConfig};

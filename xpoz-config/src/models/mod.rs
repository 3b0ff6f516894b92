pub mod sources;

use std::path::PathBuf;
use std::time::Duration;
use url::Url;
use xpoz_core::carousel::CarouselConfig;
use xpoz_core::carousel::config::WINDOW_SIZE;

use crate::constants::*;
use crate::loader::error::ConfigLoadError;
use sources::{EnvConfig, FileConfig};

/// Fully resolved client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub images: ImagesConfig,
    pub carousel: CarouselConfig,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub endpoint: Url,
    /// Bearer token sent with every GraphQL request.
    pub token: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ImagesConfig {
    pub server: Url,
}

impl ImagesConfig {
    /// Base used for `<server>/<variant>/<uuid>` URLs.
    pub fn base(&self) -> &str {
        self.server.as_str().trim_end_matches('/')
    }
}

/// Where the values came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

impl Config {
    /// Resolve layered sources: env first, then file, then defaults.
    pub fn resolve(
        file: FileConfig,
        env: EnvConfig,
        metadata: ConfigMetadata,
    ) -> Result<Self, ConfigLoadError> {
        let endpoint = env
            .api_endpoint
            .or(file.api.endpoint)
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());
        let server = env
            .image_server
            .or(file.images.server)
            .unwrap_or_else(|| DEFAULT_IMAGE_SERVER.to_string());

        let timeout_secs = env
            .api_timeout_secs
            .or(file.api.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigLoadError::InvalidValue {
                key: "api.timeout_secs",
                reason: "must be at least 1 second".into(),
            });
        }

        let defaults = CarouselConfig::default();
        let carousel = CarouselConfig {
            spacing: env
                .carousel_spacing
                .or(file.carousel.spacing)
                .unwrap_or(defaults.spacing),
            window: env
                .carousel_window
                .or(file.carousel.window)
                .unwrap_or(defaults.window),
            zoomed_scale: env
                .carousel_zoomed_scale
                .or(file.carousel.zoomed_scale)
                .unwrap_or(defaults.zoomed_scale),
            swipe_threshold: env
                .carousel_swipe_threshold
                .or(file.carousel.swipe_threshold)
                .unwrap_or(defaults.swipe_threshold),
        };
        validate_carousel(&carousel)?;

        Ok(Self {
            api: ApiConfig {
                endpoint: parse_url("api.endpoint", endpoint)?,
                token: env.api_token.or(file.api.token),
                timeout: Duration::from_secs(timeout_secs),
            },
            images: ImagesConfig {
                server: parse_url("images.server", server)?,
            },
            carousel,
            metadata,
        })
    }
}

fn parse_url(key: &'static str, value: String) -> Result<Url, ConfigLoadError> {
    Url::parse(&value).map_err(|source| ConfigLoadError::InvalidUrl {
        key,
        value,
        source,
    })
}

fn validate_carousel(config: &CarouselConfig) -> Result<(), ConfigLoadError> {
    if config.window < WINDOW_SIZE {
        return Err(ConfigLoadError::InvalidValue {
            key: "carousel.window",
            reason: format!("must be at least {WINDOW_SIZE}"),
        });
    }
    if config.spacing.is_nan() || config.spacing < 0.0 {
        return Err(ConfigLoadError::InvalidValue {
            key: "carousel.spacing",
            reason: "must not be negative".into(),
        });
    }
    if config.zoomed_scale.is_nan() || config.zoomed_scale < 1.0 {
        return Err(ConfigLoadError::InvalidValue {
            key: "carousel.zoomed_scale",
            reason: "must be at least 1".into(),
        });
    }
    if !(0.0 < config.swipe_threshold && config.swipe_threshold < 1.0) {
        return Err(ConfigLoadError::InvalidValue {
            key: "carousel.swipe_threshold",
            reason: "must be between 0 and 1".into(),
        });
    }
    Ok(())
}

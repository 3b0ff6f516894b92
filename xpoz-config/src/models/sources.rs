use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::loader::error::ConfigLoadError;
use crate::util::{non_empty, parse_number};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub api: FileApiConfig,
    #[serde(default)]
    pub images: FileImagesConfig,
    #[serde(default)]
    pub carousel: FileCarouselConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileApiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileImagesConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCarouselConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoomed_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swipe_threshold: Option<f64>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<String>,
    pub api_endpoint: Option<String>,
    pub api_token: Option<String>,
    pub api_timeout_secs: Option<u64>,
    pub image_server: Option<String>,
    pub carousel_spacing: Option<f64>,
    pub carousel_window: Option<usize>,
    pub carousel_zoomed_scale: Option<f64>,
    pub carousel_swipe_threshold: Option<f64>,
}

impl EnvConfig {
    /// Read from the process environment.
    pub fn gather() -> Result<Self, ConfigLoadError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            config_path: non_empty(lookup(ENV_CONFIG_PATH)),
            api_endpoint: non_empty(lookup(ENV_API_ENDPOINT)),
            api_token: non_empty(lookup(ENV_API_TOKEN)),
            api_timeout_secs: parse_number(
                ENV_API_TIMEOUT_SECS,
                lookup(ENV_API_TIMEOUT_SECS),
            )?,
            image_server: non_empty(lookup(ENV_IMAGE_SERVER)),
            carousel_spacing: parse_number(
                ENV_CAROUSEL_SPACING,
                lookup(ENV_CAROUSEL_SPACING),
            )?,
            carousel_window: parse_number(
                ENV_CAROUSEL_WINDOW,
                lookup(ENV_CAROUSEL_WINDOW),
            )?,
            carousel_zoomed_scale: parse_number(
                ENV_CAROUSEL_ZOOMED_SCALE,
                lookup(ENV_CAROUSEL_ZOOMED_SCALE),
            )?,
            carousel_swipe_threshold: parse_number(
                ENV_CAROUSEL_SWIPE_THRESHOLD,
                lookup(ENV_CAROUSEL_SWIPE_THRESHOLD),
            )?,
        })
    }
}

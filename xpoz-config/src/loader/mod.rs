pub mod error;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::models::sources::{EnvConfig, FileConfig};
use crate::models::{Config, ConfigMetadata};
use error::ConfigLoadError;

const DEFAULT_ENV_FILE: &str = ".env";

/// Builds a [`Config`] from an optional TOML file, an optional `.env` file
/// and the environment.
///
/// The `.env` file is read as a fallback layer under real environment
/// variables; it never modifies the process environment.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
    read_env_file: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_file: None,
            read_env_file: true,
        }
    }

    /// Use this TOML file instead of `XPOZ_CONFIG`.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Read this file instead of `./.env`. A missing file is an error.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self.read_env_file = true;
        self
    }

    pub fn without_env_file(mut self) -> Self {
        self.env_file = None;
        self.read_env_file = false;
        self
    }

    pub fn load(&self) -> Result<Config, ConfigLoadError> {
        self.load_with(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` in place of the process environment.
    pub fn load_with<F>(&self, lookup: F) -> Result<Config, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (dotenv, env_file) = self.read_env_file()?;
        let env = EnvConfig::from_lookup(|key| {
            lookup(key).or_else(|| dotenv.get(key).cloned())
        })?;

        let config_path = self
            .config_path
            .clone()
            .or_else(|| env.config_path.as_ref().map(PathBuf::from));
        let file = match &config_path {
            Some(path) => read_file_config(path)?,
            None => FileConfig::default(),
        };

        let metadata = ConfigMetadata {
            config_path,
            env_file,
        };
        let config = Config::resolve(file, env, metadata)?;
        tracing::debug!(
            endpoint = %config.api.endpoint,
            images = %config.images.server,
            config_path = ?config.metadata.config_path,
            env_file = ?config.metadata.env_file,
            "configuration loaded"
        );
        Ok(config)
    }

    fn read_env_file(
        &self,
    ) -> Result<(HashMap<String, String>, Option<PathBuf>), ConfigLoadError> {
        if !self.read_env_file {
            return Ok((HashMap::new(), None));
        }

        let (path, required) = match &self.env_file {
            Some(path) => (path.clone(), true),
            None => (PathBuf::from(DEFAULT_ENV_FILE), false),
        };

        let iter = match dotenvy::from_path_iter(&path) {
            Ok(iter) => iter,
            Err(err) if err.not_found() && !required => {
                return Ok((HashMap::new(), None));
            }
            Err(err) => return Err(err.into()),
        };

        let vars = iter.collect::<Result<HashMap<_, _>, _>>()?;
        tracing::debug!(path = %path.display(), count = vars.len(), "read env file");
        Ok((vars, Some(path)))
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| {
        ConfigLoadError::FileIo {
            path: path.to_path_buf(),
            source,
        }
    })?;
    toml::from_str(&raw).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

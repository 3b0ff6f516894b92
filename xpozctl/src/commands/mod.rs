mod albums;
mod layout;
mod tokens;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use xpoz_config::{Config, ConfigLoader};
use xpoz_core::api::GalleryApi;
use xpoz_core::graphql::HttpTransport;
use xpoz_core::routes::Route;

use crate::cli::{Cli, Command};

pub async fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        env_file,
        endpoint,
        token,
        json,
        command,
    } = cli;
    let output = Output { json };
    let load = || load_config(config_path.as_deref(), env_file.as_deref());

    match command {
        Command::Layout(args) => layout::run(&args, &load()?, output),
        Command::Route { path } => route(&path, output),
        Command::Albums { page } => {
            let api = connect(&load()?, endpoint, token)?;
            albums::list(&api, page, output).await
        }
        Command::Album {
            uuid,
            pages,
            from_page,
            variant,
        } => {
            let config = load()?;
            let api = connect(&config, endpoint, token)?;
            let request = albums::AlbumRequest {
                uuid,
                from_page,
                pages,
                variant,
            };
            albums::show(&api, &config, request, output).await
        }
        Command::Tokens { action } => {
            let api = connect(&load()?, endpoint, token)?;
            tokens::run(&api, action, output).await
        }
        Command::Me => {
            let api = connect(&load()?, endpoint, token)?;
            let me = api.me().await?;
            output.emit(&me, || {
                let role = if me.admin { "admin" } else { "viewer" };
                println!("{} ({role})", me.name);
            })
        }
    }
}

fn load_config(path: Option<&Path>, env_file: Option<&Path>) -> Result<Config> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = path {
        loader = loader.with_config_path(path);
    }
    if let Some(env_file) = env_file {
        loader = loader.with_env_file(env_file);
    }
    let config = loader.load().context("failed to load configuration")?;
    tracing::debug!(
        endpoint = %config.api.endpoint,
        config_path = ?path,
        "loaded configuration"
    );
    Ok(config)
}

fn connect(
    config: &Config,
    endpoint: Option<String>,
    token: Option<String>,
) -> Result<GalleryApi<HttpTransport>> {
    let endpoint = match endpoint {
        Some(raw) => raw
            .parse::<url::Url>()
            .with_context(|| format!("invalid --endpoint '{raw}'"))?,
        None => config.api.endpoint.clone(),
    };
    let token = token.or_else(|| config.api.token.clone());
    tracing::debug!(%endpoint, has_token = token.is_some(), "connecting to gallery backend");
    let transport = HttpTransport::new(endpoint, token, config.api.timeout)?;
    Ok(GalleryApi::new(transport))
}

fn route(path: &str, output: Output) -> Result<()> {
    let route = Route::parse(path).with_context(|| format!("no screen for path '{path}'"))?;
    let (screen, album) = match &route {
        Route::Albums => ("albums", None),
        Route::Album(uuid) => ("album", Some(uuid.as_str())),
    };
    let value = serde_json::json!({ "screen": screen, "album": album, "path": route.path() });
    output.emit(&value, || match album {
        Some(uuid) => println!("album {uuid}"),
        None => println!("albums"),
    })
}

/// Chooses between JSON and the human-readable rendering.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn emit<T, F>(self, value: &T, text: F) -> Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(),
    {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            text();
        }
        Ok(())
    }
}

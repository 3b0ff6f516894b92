use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use xpoz_model::geometry::Size;
use xpoz_model::ids::{AlbumUuid, TokenId};

#[derive(Debug, Parser)]
#[command(name = "xpozctl", version, about = "Browse and administer an xpoz gallery")]
pub struct Cli {
    /// TOML config file (defaults to $XPOZ_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Env file read under the real environment (defaults to ./.env)
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,
    /// Override the GraphQL endpoint
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
    /// Override the bearer token
    #[arg(long, global = true)]
    pub token: Option<String>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List albums visible to the current token
    Albums {
        /// Zero-based page (10 albums per page)
        #[arg(long, default_value_t = 0)]
        page: u32,
    },
    /// Show an album and its assets
    Album {
        uuid: AlbumUuid,
        /// Number of asset pages to load (20 assets per page)
        #[arg(long, default_value_t = 1)]
        pages: u32,
        /// First page to load
        #[arg(long, default_value_t = 0)]
        from_page: u32,
        /// Print image URLs for this variant
        #[arg(long)]
        variant: Option<xpoz_model::image::ImageVariant>,
    },
    /// Manage access tokens (admin only)
    Tokens {
        #[command(subcommand)]
        action: TokenAction,
    },
    /// Show the identity of the current token
    Me,
    /// Compute slide geometry for a viewport without contacting the backend
    Layout(LayoutArgs),
    /// Resolve a client path to its screen
    Route { path: String },
}

#[derive(Debug, Subcommand)]
pub enum TokenAction {
    /// List all tokens
    List,
    /// Create a token
    Create(TokenFields),
    /// Update a token; unspecified fields keep their current value
    Update {
        id: TokenId,
        #[command(flatten)]
        fields: TokenUpdate,
    },
    /// Delete a token
    Delete { id: TokenId },
}

#[derive(Debug, Args)]
pub struct TokenFields {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub admin: bool,
    /// Bind the token to the first session that uses it
    #[arg(long)]
    pub session_bound: bool,
    /// Restrict the token to this album (repeatable)
    #[arg(long = "album")]
    pub albums: Vec<AlbumUuid>,
}

#[derive(Debug, Args)]
pub struct TokenUpdate {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub admin: Option<bool>,
    #[arg(long)]
    pub session_bound: Option<bool>,
    /// Replace the album whitelist (repeatable)
    #[arg(long = "album")]
    pub albums: Option<Vec<AlbumUuid>>,
    /// Remove every whitelisted album
    #[arg(long, conflicts_with = "albums")]
    pub clear_albums: bool,
}

#[derive(Debug, Args)]
pub struct LayoutArgs {
    /// Viewport as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size)]
    pub viewport: Size,
    /// Intrinsic asset size as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size)]
    pub asset: Size,
    /// Gallery index the asset sits at
    #[arg(long, default_value_t = 0)]
    pub index: usize,
}

pub fn parse_size(raw: &str) -> Result<Size, String> {
    let (w, h) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{raw}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite() && *n > 0.0)
            .ok_or_else(|| format!("invalid dimension '{v}'"))
    };
    Ok(Size::new(parse(w)?, parse(h)?))
}

use crate::asset::{Asset, AssetRef};
use crate::ids::AlbumUuid;

/// Named collection of assets with aggregate counts.
///
/// Listing queries leave `assets` empty; the detail query fills it with one
/// page of records.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Album {
    pub uuid: AlbumUuid,
    pub title: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub photos_count: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub videos_count: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub created_at: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub key_assets: Vec<AssetRef>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub assets: Vec<Asset>,
}

impl Album {
    pub fn items_count(&self) -> u32 {
        self.photos_count.saturating_add(self.videos_count)
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }
}

/// Reference to an album by identifier only (token whitelists).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlbumRef {
    pub uuid: AlbumUuid,
}

use anyhow::Result;
use serde::Serialize;
use xpoz_config::Config;
use xpoz_core::api::{AlbumPager, GalleryApi};
use xpoz_core::gallery::GalleryList;
use xpoz_core::graphql::GraphQlTransport;
use xpoz_core::image::variant_url;
use xpoz_model::album::Album;
use xpoz_model::asset::Asset;
use xpoz_model::ids::AlbumUuid;
use xpoz_model::image::ImageVariant;

use super::Output;

pub async fn list<T: GraphQlTransport>(
    api: &GalleryApi<T>,
    page: u32,
    output: Output,
) -> Result<()> {
    let albums = api.my_albums(page).await?;
    output.emit(&albums, || {
        if albums.is_empty() {
            println!("no albums on page {page}");
        }
        for album in &albums {
            println!(
                "{}  {}  ({} photos, {} videos)",
                album.uuid,
                album.display_title(),
                album.photos_count,
                album.videos_count
            );
        }
    })
}

#[derive(Debug)]
pub struct AlbumRequest {
    pub uuid: AlbumUuid,
    pub from_page: u32,
    pub pages: u32,
    pub variant: Option<ImageVariant>,
}

#[derive(Debug, Serialize)]
struct AlbumListing<'a> {
    album: Option<&'a Album>,
    pages: Option<(u32, u32)>,
    exhausted: bool,
    assets: Vec<AssetLine<'a>>,
}

#[derive(Debug, Serialize)]
struct AssetLine<'a> {
    #[serde(flatten)]
    asset: &'a Asset,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

pub async fn show<T: GraphQlTransport>(
    api: &GalleryApi<T>,
    config: &Config,
    request: AlbumRequest,
    output: Output,
) -> Result<()> {
    let mut pager = AlbumPager::starting_at(request.uuid, request.from_page);
    let mut gallery = GalleryList::new();

    for _ in 0..request.pages.max(1) {
        pager.load_next(api, &mut gallery).await?;
        if pager.is_exhausted() {
            break;
        }
    }

    let listing = AlbumListing {
        album: pager.album(),
        pages: pager.highest_page().map(|high| (pager.lowest_page(), high)),
        exhausted: pager.is_exhausted(),
        assets: gallery
            .iter()
            .map(|asset| AssetLine {
                asset,
                url: request
                    .variant
                    .map(|v| variant_url(config.images.base(), v, &asset.uuid)),
            })
            .collect(),
    };

    output.emit(&listing, || {
        if let Some(album) = listing.album {
            println!("{}  {}", album.uuid, album.display_title());
        }
        for line in &listing.assets {
            let kind = if line.asset.is_video { "video" } else { "photo" };
            match &line.url {
                Some(url) => println!("  {}  {kind}  {url}", line.asset.uuid),
                None => println!(
                    "  {}  {kind}  {}x{}",
                    line.asset.uuid, line.asset.width, line.asset.height
                ),
            }
        }
        if listing.exhausted {
            println!("(end of album)");
        }
    })
}

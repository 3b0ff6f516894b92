//! Typed access to the gallery backend.

use serde::Deserialize;
use serde_json::json;
use xpoz_model::album::Album;
use xpoz_model::asset::Asset;
use xpoz_model::ids::{AlbumUuid, TokenId};
use xpoz_model::token::{Token, TokenInput, Viewer};

use crate::error::{CoreError, Result};
use crate::gallery::GalleryList;
use crate::graphql::{GraphQlClient, GraphQlRequest, GraphQlTransport, queries};

#[derive(Debug, Deserialize)]
struct IdOnly {
    id: TokenId,
}

/// Wraps a [`GraphQlClient`] and returns model types.
#[derive(Debug, Clone)]
pub struct GalleryApi<T> {
    client: GraphQlClient<T>,
}

impl<T: GraphQlTransport> GalleryApi<T> {
    pub fn new(transport: T) -> Self {
        Self {
            client: GraphQlClient::new(transport),
        }
    }

    pub fn client(&self) -> &GraphQlClient<T> {
        &self.client
    }

    /// One page (10 records) of the albums visible to the current token.
    pub async fn my_albums(&self, page: u32) -> Result<Vec<Album>> {
        let request = GraphQlRequest::with_variables(
            queries::MY_ALBUMS,
            json!({ "page": page }),
        );
        self.client.query_required(request, "myAlbums").await
    }

    /// Album metadata plus one page (20 records) of its assets.
    ///
    /// `None` when the album does not exist or is not whitelisted.
    pub async fn album(&self, uuid: &AlbumUuid, page: u32) -> Result<Option<Album>> {
        let request = GraphQlRequest::with_variables(
            queries::ALBUM,
            json!({ "uuid": uuid, "page": page }),
        );
        self.client.query(request, "album").await
    }

    pub async fn tokens(&self) -> Result<Vec<Token>> {
        self.client
            .query_required(GraphQlRequest::new(queries::TOKENS), "tokens")
            .await
    }

    pub async fn me(&self) -> Result<Viewer> {
        self.client
            .query_required(GraphQlRequest::new(queries::ME), "me")
            .await
    }

    pub async fn create_token(&self, input: &TokenInput) -> Result<Token> {
        let request = GraphQlRequest::with_variables(
            queries::CREATE_TOKEN,
            json!({ "input": input }),
        );
        self.client.query_required(request, "createToken").await
    }

    pub async fn update_token(&self, id: &TokenId, input: &TokenInput) -> Result<TokenId> {
        let request = GraphQlRequest::with_variables(
            queries::UPDATE_TOKEN,
            json!({ "id": id, "input": input }),
        );
        let updated: IdOnly = self.client.query_required(request, "updateToken").await?;
        Ok(updated.id)
    }

    pub async fn delete_token(&self, id: &TokenId) -> Result<TokenId> {
        let request = GraphQlRequest::with_variables(
            queries::DELETE_TOKEN,
            json!({ "id": id }),
        );
        let deleted: IdOnly = self.client.query_required(request, "deleteToken").await?;
        Ok(deleted.id)
    }
}

/// Loads successive asset pages of one album into a [`GalleryList`].
///
/// Forward loads append, backward loads prepend. Callers showing the list in
/// a [`Carousel`](crate::carousel::Carousel) should pass the count returned by
/// [`AlbumPager::load_previous`] to `Carousel::follow_prepend`.
#[derive(Debug, Clone)]
pub struct AlbumPager {
    uuid: AlbumUuid,
    lowest_page: u32,
    highest_page: Option<u32>,
    exhausted: bool,
    album: Option<Album>,
}

impl AlbumPager {
    pub fn new(uuid: AlbumUuid) -> Self {
        Self::starting_at(uuid, 0)
    }

    /// Start paging at `page`, e.g. when a deep link opens mid-album.
    pub fn starting_at(uuid: AlbumUuid, page: u32) -> Self {
        Self {
            uuid,
            lowest_page: page,
            highest_page: None,
            exhausted: false,
            album: None,
        }
    }

    pub fn uuid(&self) -> &AlbumUuid {
        &self.uuid
    }

    pub fn lowest_page(&self) -> u32 {
        self.lowest_page
    }

    pub fn highest_page(&self) -> Option<u32> {
        self.highest_page
    }

    /// True once a forward load returned an empty page.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn has_previous(&self) -> bool {
        self.lowest_page > 0
    }

    /// Album metadata from the most recent load, without assets.
    pub fn album(&self) -> Option<&Album> {
        self.album.as_ref()
    }

    /// Fetch the page after the highest one loaded and append it.
    ///
    /// Returns the number of assets actually added.
    pub async fn load_next<T: GraphQlTransport>(
        &mut self,
        api: &GalleryApi<T>,
        gallery: &mut GalleryList<Asset>,
    ) -> Result<usize> {
        if self.exhausted {
            return Ok(0);
        }

        let page = self.highest_page.map_or(self.lowest_page, |p| p + 1);
        let assets = self.fetch(api, page).await?;
        if assets.is_empty() {
            tracing::debug!(album = %self.uuid, page, "album exhausted");
            self.exhausted = true;
            return Ok(0);
        }

        let before = gallery.size();
        gallery.append(assets);
        self.highest_page = Some(page);
        Ok(gallery.size() - before)
    }

    /// Fetch the page before the lowest one loaded and prepend it.
    ///
    /// Before anything is loaded this loads the starting page instead,
    /// unless that page was already found empty. Does nothing once page 0
    /// has been reached.
    pub async fn load_previous<T: GraphQlTransport>(
        &mut self,
        api: &GalleryApi<T>,
        gallery: &mut GalleryList<Asset>,
    ) -> Result<usize> {
        if self.highest_page.is_none() && !self.exhausted {
            return self.load_next(api, gallery).await;
        }
        let Some(page) = self.lowest_page.checked_sub(1) else {
            return Ok(0);
        };

        let assets = self.fetch(api, page).await?;
        let before = gallery.size();
        gallery.prepend(assets);
        self.lowest_page = page;
        if self.highest_page.is_none() && gallery.size() > before {
            self.highest_page = Some(page);
        }
        Ok(gallery.size() - before)
    }

    async fn fetch<T: GraphQlTransport>(
        &mut self,
        api: &GalleryApi<T>,
        page: u32,
    ) -> Result<Vec<Asset>> {
        let mut album = api
            .album(&self.uuid, page)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("album {}", self.uuid)))?;
        let assets = std::mem::take(&mut album.assets);
        tracing::debug!(album = %self.uuid, page, count = assets.len(), "fetched asset page");
        self.album = Some(album);
        Ok(assets)
    }
}

//! Image variant loading with latest-result-wins semantics.
//!
//! A slot shows the thumbnail placeholder as soon as a variant is requested.
//! Requesting again detaches the previous load; its completion is dropped.

use async_trait::async_trait;
use reqwest::Client;
use std::sync::{Arc, Mutex, PoisonError};
use xpoz_model::ids::AssetUuid;
use xpoz_model::image::ImageVariant;

use crate::error::{CoreError, Result};

/// `<server>/<variant>/<uuid>`
pub fn variant_url(server: &str, variant: ImageVariant, uuid: &AssetUuid) -> String {
    format!("{}/{}/{}", server.trim_end_matches('/'), variant, uuid)
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageState {
    #[default]
    Idle,
    Loading {
        placeholder: Option<String>,
        target: String,
    },
    Loaded {
        url: String,
    },
    Failed {
        url: String,
    },
}

impl ImageState {
    /// URL the element should currently display, if any.
    pub fn display_url(&self) -> Option<&str> {
        match self {
            ImageState::Idle | ImageState::Failed { .. } => None,
            ImageState::Loading { placeholder, .. } => placeholder.as_deref(),
            ImageState::Loaded { url } => Some(url),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ImageState::Loading { .. })
    }
}

/// Handle for one in-flight load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    url: String,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

/// Load state of one image element.
#[derive(Debug, Clone)]
pub struct ImageSlot {
    server: String,
    state: ImageState,
    generation: u64,
}

impl ImageSlot {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            state: ImageState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &ImageState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start loading `variant` of `uuid`, superseding any load in flight.
    pub fn request(&mut self, uuid: &AssetUuid, variant: ImageVariant) -> LoadTicket {
        self.detach();

        let target = variant_url(&self.server, variant, uuid);
        let placeholder = (!variant.is_placeholder())
            .then(|| variant_url(&self.server, ImageVariant::Thumb, uuid));
        self.state = ImageState::Loading {
            placeholder,
            target: target.clone(),
        };

        LoadTicket {
            generation: self.generation,
            url: target,
        }
    }

    /// Drop interest in the current load without starting another.
    pub fn detach(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Apply a finished load. Returns `false` for stale tickets.
    pub fn complete(&mut self, ticket: &LoadTicket, outcome: LoadOutcome) -> bool {
        if ticket.generation != self.generation {
            tracing::trace!(
                url = %ticket.url,
                ticket = ticket.generation,
                current = self.generation,
                "dropping stale image load"
            );
            return false;
        }

        self.state = match outcome {
            LoadOutcome::Loaded => ImageState::Loaded {
                url: ticket.url.clone(),
            },
            LoadOutcome::Failed => {
                tracing::warn!(url = %ticket.url, "image failed to load");
                ImageState::Failed {
                    url: ticket.url.clone(),
                }
            }
        };
        true
    }
}

/// Retrieves image bytes for a URL.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::Status {
                status: status.as_u16(),
                body: String::new(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Drives [`ImageSlot`]s through an [`ImageFetcher`].
#[derive(Debug)]
pub struct ImageLoader<F> {
    fetcher: Arc<F>,
}

impl<F> Clone for ImageLoader<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
        }
    }
}

impl<F: ImageFetcher> ImageLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
        }
    }

    /// Request `variant` on `slot` and wait for it.
    ///
    /// Returns whether this load's result was applied; `false` means a newer
    /// request superseded it while it was in flight.
    pub async fn load(
        &self,
        slot: &Arc<Mutex<ImageSlot>>,
        uuid: &AssetUuid,
        variant: ImageVariant,
    ) -> bool {
        let ticket = lock(slot).request(uuid, variant);

        let outcome = match self.fetcher.fetch(ticket.url()).await {
            Ok(_) => LoadOutcome::Loaded,
            Err(err) => {
                tracing::debug!(url = %ticket.url(), error = %err, "image fetch error");
                LoadOutcome::Failed
            }
        };

        lock(slot).complete(&ticket, outcome)
    }
}

fn lock(slot: &Mutex<ImageSlot>) -> std::sync::MutexGuard<'_, ImageSlot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uuid(raw: &str) -> AssetUuid {
        AssetUuid::new(raw).unwrap()
    }

    #[test]
    fn urls_follow_variant_layout() {
        assert_eq!(
            variant_url("http://img.local/asset/", ImageVariant::Render, &uuid("abc")),
            "http://img.local/asset/render/abc"
        );
    }

    #[test]
    fn request_shows_thumb_placeholder() {
        let mut slot = ImageSlot::new("http://s");
        slot.request(&uuid("a"), ImageVariant::Resized);
        assert_eq!(
            slot.state(),
            &ImageState::Loading {
                placeholder: Some("http://s/thumb/a".into()),
                target: "http://s/resized/a".into(),
            }
        );
        assert_eq!(slot.state().display_url(), Some("http://s/thumb/a"));
    }

    #[test]
    fn thumb_request_has_no_placeholder() {
        let mut slot = ImageSlot::new("http://s");
        slot.request(&uuid("a"), ImageVariant::Thumb);
        assert!(matches!(
            slot.state(),
            ImageState::Loading { placeholder: None, .. }
        ));
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut slot = ImageSlot::new("http://s");
        let first = slot.request(&uuid("a"), ImageVariant::Resized);
        let second = slot.request(&uuid("b"), ImageVariant::Resized);

        assert!(!slot.complete(&first, LoadOutcome::Loaded));
        assert!(slot.state().is_loading());

        assert!(slot.complete(&second, LoadOutcome::Loaded));
        assert_eq!(
            slot.state(),
            &ImageState::Loaded {
                url: "http://s/resized/b".into()
            }
        );
    }

    #[test]
    fn detach_drops_pending_result() {
        let mut slot = ImageSlot::new("http://s");
        let ticket = slot.request(&uuid("a"), ImageVariant::Original);
        slot.detach();
        assert!(!slot.complete(&ticket, LoadOutcome::Failed));
    }

    #[test]
    fn failure_is_recorded() {
        let mut slot = ImageSlot::new("http://s");
        let ticket = slot.request(&uuid("a"), ImageVariant::Original);
        assert!(slot.complete(&ticket, LoadOutcome::Failed));
        assert_eq!(
            slot.state(),
            &ImageState::Failed {
                url: "http://s/original/a".into()
            }
        );
        assert_eq!(slot.state().display_url(), None);
    }
}

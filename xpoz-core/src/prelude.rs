pub use crate::api::{AlbumPager, GalleryApi};
pub use crate::carousel::{Carousel, CarouselConfig, SlideLayout, fit_to_viewport};
pub use crate::error::{CoreError, Result};
pub use crate::gallery::{GalleryList, GalleryNode, NodeId};
pub use crate::gesture::{Direction, GestureController, GestureOutcome};
pub use crate::graphql::{GraphQlClient, GraphQlRequest, GraphQlTransport, HttpTransport};
pub use crate::image::{
    HttpImageFetcher, ImageFetcher, ImageLoader, ImageSlot, ImageState, LoadOutcome, LoadTicket,
    variant_url,
};
pub use crate::routes::Route;

pub use xpoz_contracts::prelude::*;
pub use xpoz_model::prelude::*;

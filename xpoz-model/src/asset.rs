use crate::geometry::Size;
use crate::ids::AssetUuid;

/// A single photo or video record as returned by the GraphQL backend.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Asset {
    pub uuid: AssetUuid,
    /// Intrinsic pixel width.
    pub width: u32,
    /// Intrinsic pixel height.
    pub height: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_video: bool,
    /// Seconds; zero for photos.
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub created_at: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub latitude: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub longitude: Option<f64>,
}

impl Asset {
    /// Minimal photo record, mostly useful for fixtures.
    pub fn photo(uuid: AssetUuid, width: u32, height: u32) -> Self {
        Self {
            uuid,
            width,
            height,
            is_video: false,
            duration: 0.0,
            created_at: None,
            latitude: None,
            longitude: None,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Reference to an asset by identifier only (album key assets).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetRef {
    pub uuid: AssetUuid,
}

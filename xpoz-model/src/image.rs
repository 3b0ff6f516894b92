use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// Renditions the image server exposes for every asset.
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ImageVariant {
    /// Untouched upload.
    Original,
    /// Downscaled for full-screen viewing.
    #[default]
    Resized,
    /// Edited render as exported by the library.
    Render,
    /// Small square used in grids and as a loading placeholder.
    Thumb,
}

impl ImageVariant {
    pub const ALL: [ImageVariant; 4] =
        [Self::Original, Self::Resized, Self::Render, Self::Thumb];

    /// Path segment used by the image server (e.g. "thumb").
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Resized => "resized",
            Self::Render => "render",
            Self::Thumb => "thumb",
        }
    }

    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Thumb)
    }
}

impl Display for ImageVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageVariant {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownVariant(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_variant_name() {
        for variant in ImageVariant::ALL {
            assert_eq!(variant.as_str().parse::<ImageVariant>(), Ok(variant));
        }
        assert_eq!("THUMB".parse::<ImageVariant>(), Ok(ImageVariant::Thumb));
    }

    #[test]
    fn rejects_unknown_variant() {
        assert!(matches!(
            "poster".parse::<ImageVariant>(),
            Err(ModelError::UnknownVariant(_))
        ));
    }
}

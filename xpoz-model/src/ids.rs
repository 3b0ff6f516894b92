use crate::error::ModelError;
use std::str::FromStr;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier, rejecting empty or blank input.
            pub fn new(raw: impl Into<String>) -> Result<Self, ModelError> {
                let raw = raw.into();
                if raw.trim().is_empty() {
                    return Err(ModelError::EmptyId($kind));
                }
                Ok(Self(raw))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_id!(
    /// Stable identifier of a photo or video asset as served by the backend.
    AssetUuid,
    "asset"
);

string_id!(
    /// Stable identifier of an album.
    AlbumUuid,
    "album"
);

string_id!(
    /// Identifier of an access token record.
    TokenId,
    "token"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_ids_are_rejected() {
        assert_eq!(AssetUuid::new("  "), Err(ModelError::EmptyId("asset")));
        assert!("".parse::<AlbumUuid>().is_err());
    }

    #[test]
    fn display_matches_raw() {
        let id: TokenId = "V1StGXR8".parse().unwrap();
        assert_eq!(id.to_string(), "V1StGXR8");
        assert_eq!(id.as_str(), "V1StGXR8");
    }
}

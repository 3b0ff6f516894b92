use crate::album::AlbumRef;
use crate::ids::{AlbumUuid, TokenId};

/// Access token managed from the admin screens.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Token {
    pub id: TokenId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub admin: bool,
    /// Bound tokens are consumed by the first session that presents them.
    #[cfg_attr(feature = "serde", serde(default))]
    pub session_bound: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub session_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub created_at: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub whitelisted_albums: Vec<AlbumRef>,
}

impl Token {
    /// True once a session-bound token has been claimed.
    pub fn is_claimed(&self) -> bool {
        self.session_bound && self.session_id.is_some()
    }
}

/// Payload for `createToken` and `updateToken`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TokenInput {
    pub name: String,
    pub admin: bool,
    pub session_bound: bool,
    pub whitelisted_albums: Vec<AlbumUuid>,
}

impl From<&Token> for TokenInput {
    fn from(token: &Token) -> Self {
        Self {
            name: token.name.clone(),
            admin: token.admin,
            session_bound: token.session_bound,
            whitelisted_albums: token
                .whitelisted_albums
                .iter()
                .map(|r| r.uuid.clone())
                .collect(),
        }
    }
}

/// The identity the current session authenticates as (`me` query).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewer {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub admin: bool,
}

use std::fmt;
use xpoz_model::ids::AlbumUuid;

/// Screens reachable by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Albums,
    /// `/album/:uuid`
    Album(AlbumUuid),
}

impl Route {
    /// Match a path, ignoring a query string, fragment or trailing slash.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        let mut segments = path.split('/').filter(|s| !s.is_empty());
        match (segments.next(), segments.next(), segments.next()) {
            (None, _, _) => Some(Route::Albums),
            (Some("album"), Some(uuid), None) => AlbumUuid::new(uuid).ok().map(Route::Album),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Albums => "/".to_string(),
            Route::Album(uuid) => format!("/album/{uuid}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

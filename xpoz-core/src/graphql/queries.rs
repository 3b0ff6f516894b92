//! Fixed GraphQL documents sent by the client.
//!
//! Every document selects `uuid` for identity and takes a zero-based `page`
//! where the backend paginates (10 albums or 20 assets per page).

pub const MY_ALBUMS: &str = r#"
query myAlbums($page: Int!) {
  myAlbums(page: $page) {
    uuid
    title
    photosCount
    videosCount
    createdAt
    keyAssets { uuid }
  }
}
"#;

pub const ALBUM: &str = r#"
query album($uuid: String!, $page: Int!) {
  album(uuid: $uuid) {
    uuid
    title
    photosCount
    videosCount
    createdAt
    assets(page: $page) {
      uuid
      width
      height
      isVideo
      duration
      createdAt
      latitude
      longitude
    }
  }
}
"#;

macro_rules! token_fields {
    () => {
        "id name admin sessionBound sessionId createdAt whitelistedAlbums { uuid }"
    };
}

pub const TOKENS: &str = concat!("query { tokens { ", token_fields!(), " } }");

pub const ME: &str = "query { me { name admin } }";

pub const CREATE_TOKEN: &str = concat!(
    "mutation($input: TokenInput!) { createToken(input: $input) { ",
    token_fields!(),
    " } }"
);

pub const UPDATE_TOKEN: &str =
    "mutation($id: String!, $input: TokenInput!) { updateToken(id: $id, input: $input) { id } }";

pub const DELETE_TOKEN: &str =
    "mutation($id: String!) { deleteToken(id: $id) { id } }";

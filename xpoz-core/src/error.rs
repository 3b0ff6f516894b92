use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Response carried no data for `{0}`")]
    MissingData(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, CoreError>;

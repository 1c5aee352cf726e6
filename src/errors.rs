use thiserror::Error;
use reqwest::StatusCode;

#[derive(Error, Debug)]
pub enum YouTubeError {
    #[error("Not found")]
    NotFound,
    #[error("Ratelimited")]
    Ratelimited,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Forbidden")]
    Forbidden,
    #[error("Internal server error")]
    InternalServerError,
    #[error("Unknown Status Code: {0}")]
    UnknownStatusCode(StatusCode),
    #[error("Malformed API response: {0}")]
    MalformedResponse(String),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum ChefError {
    #[error("YouTube API error: {0}")]
    Api(#[from] YouTubeError),
    #[error("Invalid channel tree: {0}")]
    InvalidTree(String),
    #[error("Missing configuration: {0}")]
    MissingConfig(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

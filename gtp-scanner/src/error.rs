use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalkError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("no article body found in page markup")]
    NoArticleBody,

    #[error("no qualifying link in article body")]
    NoQualifyingLink,

    #[error("malformed anchor: href closing quote not found")]
    MalformedAnchor,
}

pub type Result<T> = std::result::Result<T, WalkError>;

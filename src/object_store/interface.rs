use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("no object stored under key {0}")]
    NotFound(String),
}

/// Remote key/value byte storage: put-by-key plus resolve-to-public-URL.
/// Keys live in a flat namespace; callers supply fresh random keys.
pub trait ObjectStore: Send + Sync {
    fn upload(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError>;
    fn download_url(&self, key: &str) -> Result<String, StoreError>;
}

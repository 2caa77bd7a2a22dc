use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Third-party label detection: given a public image URL, returns the
/// textual label descriptions ranked by the service.
pub trait LabelDetector: Send + Sync {
    fn detect_labels(&self, image_url: &str, max_results: u32) -> Result<Vec<String>, DetectError>;
}

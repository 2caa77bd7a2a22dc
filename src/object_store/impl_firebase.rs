use crate::logger::interface::Logger;
use crate::object_store::interface::{ObjectStore, StoreError};
use serde::Deserialize;

const BASE_URL: &str = "https://firebasestorage.googleapis.com/v0/b";

/// Firebase Storage over its REST surface. Uploads are plain media posts;
/// the public URL carries the object's download token, which lives in the
/// object metadata.
pub struct ObjectStoreFirebase {
    client: reqwest::blocking::Client,
    bucket: String,
    logger: Box<dyn Logger>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObjectMetadata {
    download_tokens: Option<String>,
}

impl ObjectStoreFirebase {
    pub fn new(bucket: String, logger: Box<dyn Logger>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            bucket,
            logger: logger.with_namespace("store").with_namespace("firebase"),
        }
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/{}/o/{}", BASE_URL, self.bucket, urlencoding::encode(key))
    }

    fn check_status(
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        Err(StoreError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        })
    }
}

impl ObjectStore for ObjectStoreFirebase {
    fn upload(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let _ = self
            .logger
            .info(&format!("Uploading {} bytes under {}", bytes.len(), key));

        let url = format!(
            "{}/{}/o?uploadType=media&name={}",
            BASE_URL,
            self.bucket,
            urlencoding::encode(key)
        );
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/octet-stream")
            .body(bytes.to_vec())
            .send()?;
        Self::check_status(response)?;

        let _ = self.logger.info("Upload complete");
        Ok(())
    }

    fn download_url(&self, key: &str) -> Result<String, StoreError> {
        let response = self.client.get(self.object_url(key)).send()?;
        let metadata: ObjectMetadata = Self::check_status(response)?.json()?;

        // Tokens arrive comma-separated; any one of them resolves.
        let token = metadata
            .download_tokens
            .as_deref()
            .and_then(|tokens| tokens.split(',').next())
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                StoreError::MalformedResponse("object metadata carries no download token".to_string())
            })?
            .to_string();

        Ok(format!("{}?alt=media&token={}", self.object_url(key), token))
    }
}

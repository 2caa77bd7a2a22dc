use crate::label_detector::interface::{DetectError, LabelDetector};
use crate::logger::interface::Logger;
use serde::Deserialize;
use serde_json::json;

pub const DEFAULT_ENDPOINT: &str = "https://vision.googleapis.com/v1/images:annotate";

/// Google Vision `images:annotate` with a single LABEL_DETECTION feature,
/// authenticated by API key in the query string.
pub struct LabelDetectorGoogleVision {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
    logger: Box<dyn Logger>,
}

#[derive(Debug, Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<ImageResponse>,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    #[serde(rename = "labelAnnotations")]
    label_annotations: Option<Vec<LabelAnnotation>>,
}

#[derive(Debug, Deserialize)]
struct LabelAnnotation {
    description: String,
}

fn annotate_body(image_url: &str, max_results: u32) -> serde_json::Value {
    json!({
        "requests": [
            {
                "features": [{ "type": "LABEL_DETECTION", "maxResults": max_results }],
                "image": {
                    "source": {
                        "imageUri": image_url
                    }
                }
            }
        ]
    })
}

impl LabelDetectorGoogleVision {
    pub fn new(endpoint: String, api_key: String, logger: Box<dyn Logger>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint,
            api_key,
            logger: logger.with_namespace("detector").with_namespace("vision"),
        }
    }
}

impl LabelDetector for LabelDetectorGoogleVision {
    fn detect_labels(&self, image_url: &str, max_results: u32) -> Result<Vec<String>, DetectError> {
        let _ = self.logger.info(&format!("Annotating {}", image_url));

        let body = annotate_body(image_url, max_results);

        let url = format!("{}?key={}", self.endpoint, self.api_key);
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(DetectError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: AnnotateResponse = response.json()?;
        let first = parsed.responses.into_iter().next().ok_or_else(|| {
            DetectError::MalformedResponse("annotate response carries no results".to_string())
        })?;
        let annotations = first.label_annotations.ok_or_else(|| {
            DetectError::MalformedResponse("result carries no labelAnnotations".to_string())
        })?;

        Ok(annotations
            .into_iter()
            .map(|annotation| annotation.description)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotate_body_matches_wire_format() {
        let body = annotate_body("https://storage.example/abc", 7);

        assert_eq!(
            body,
            json!({
                "requests": [
                    {
                        "features": [{ "type": "LABEL_DETECTION", "maxResults": 7 }],
                        "image": { "source": { "imageUri": "https://storage.example/abc" } }
                    }
                ]
            })
        );
    }

    #[test]
    fn annotate_response_parses_label_descriptions() {
        let parsed: AnnotateResponse = serde_json::from_value(json!({
            "responses": [
                {
                    "labelAnnotations": [
                        { "description": "Hot dog", "score": 0.97 },
                        { "description": "Fast food", "score": 0.91 }
                    ]
                }
            ]
        }))
        .unwrap();

        let descriptions: Vec<String> = parsed.responses[0]
            .label_annotations
            .as_ref()
            .unwrap()
            .iter()
            .map(|annotation| annotation.description.clone())
            .collect();
        assert_eq!(descriptions, vec!["Hot dog", "Fast food"]);
    }
}

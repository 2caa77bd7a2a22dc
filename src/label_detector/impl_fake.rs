use crate::label_detector::interface::{DetectError, LabelDetector};
use rand::Rng;
use std::sync::Mutex;

/// Fake detector. By default it samples labels a vision service might
/// plausibly return; `with_labels` pins a deterministic answer and
/// `failing` simulates a dead endpoint.
pub struct LabelDetectorFake {
    fixed_labels: Option<Vec<String>>,
    fail: bool,
    calls: Mutex<Vec<String>>,
}

const SAMPLE_LABELS: &[&str] = &[
    "Hot dog",
    "Fast food",
    "Pizza",
    "Food",
    "Bun",
    "Sandwich",
    "Snack",
    "Dish",
    "Cuisine",
    "Ingredient",
];

impl LabelDetectorFake {
    pub fn new() -> Self {
        Self {
            fixed_labels: None,
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    #[allow(dead_code)]
    pub fn with_labels(labels: Vec<&str>) -> Self {
        Self {
            fixed_labels: Some(labels.into_iter().map(str::to_string).collect()),
            ..Self::new()
        }
    }

    #[allow(dead_code)]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// URLs this detector was asked about, in call order.
    #[allow(dead_code)]
    pub fn requested_urls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl LabelDetector for LabelDetectorFake {
    fn detect_labels(&self, image_url: &str, max_results: u32) -> Result<Vec<String>, DetectError> {
        self.calls.lock().unwrap().push(image_url.to_string());

        if self.fail {
            return Err(DetectError::MalformedResponse(
                "fake endpoint is down".to_string(),
            ));
        }

        if let Some(labels) = &self.fixed_labels {
            return Ok(labels.iter().take(max_results as usize).cloned().collect());
        }

        let mut rng = rand::rng();
        let count = (max_results as usize).min(SAMPLE_LABELS.len());
        let labels = (0..count)
            .map(|_| SAMPLE_LABELS[rng.random_range(0..SAMPLE_LABELS.len())].to_string())
            .collect();
        Ok(labels)
    }
}

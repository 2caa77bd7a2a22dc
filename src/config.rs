use crate::device_picker::interface::PickerConfig;
use crate::label_detector::impl_google_vision::DEFAULT_ENDPOINT;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub vision_endpoint: String,
    pub vision_api_key: String,
    pub storage_bucket: String,
    pub pictures_dir: PathBuf,
    pub max_label_results: u32,
    pub hot_dog_labels: Vec<String>,
    pub picker: PickerConfig,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vision_endpoint: DEFAULT_ENDPOINT.to_string(),
            vision_api_key: String::new(),
            storage_bucket: String::new(),
            pictures_dir: PathBuf::from("pictures"),
            max_label_results: 7,
            // Exact-string membership; any other casing ("Hot Dog") does
            // not match.
            hot_dog_labels: vec![
                "Hot dog".to_string(),
                "hot dog".to_string(),
                "Hot dog bun".to_string(),
            ],
            picker: PickerConfig::default(),
            logger_timezone: mountain_standard_time(),
        }
    }
}

impl Config {
    /// Secrets come from the environment once at startup; there is no
    /// runtime reconfiguration. Returns None when either secret is absent,
    /// in which case the caller runs against fakes.
    pub fn from_env() -> Option<Self> {
        let vision_api_key = std::env::var("VISION_API_KEY").ok()?;
        let storage_bucket = std::env::var("FIREBASE_STORAGE_BUCKET").ok()?;
        let mut config = Self {
            vision_api_key,
            storage_bucket,
            ..Self::default()
        };
        if let Ok(dir) = std::env::var("PICTURES_DIR") {
            config.pictures_dir = PathBuf::from(dir);
        }
        Some(config)
    }
}

fn mountain_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(7 * 3600).unwrap()
}

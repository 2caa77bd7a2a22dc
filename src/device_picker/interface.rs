use thiserror::Error;

/// How the OS picker is launched. The source of both knobs is the screen's
/// fixed picker configuration: editing on, 4:3 crop.
#[derive(Debug, Clone)]
pub struct PickerConfig {
    pub allows_editing: bool,
    pub aspect_ratio: (u32, u32),
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            allows_editing: true,
            aspect_ratio: (4, 3),
        }
    }
}

/// Result of a picker launch. Cancellation is an outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Picked { uri: String },
    Cancelled,
}

#[derive(Error, Debug)]
pub enum PickerError {
    #[error("permission not granted")]
    PermissionDenied,

    #[error("picker unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),
}

/// Device-side camera/gallery surface: permission requests, the two picker
/// launches, and raw byte access for a picked URI.
pub trait DevicePicker: Send + Sync {
    fn request_camera_permission(&self) -> Result<bool, PickerError>;
    fn request_gallery_permission(&self) -> Result<bool, PickerError>;
    fn capture_from_camera(&self, config: &PickerConfig) -> Result<PickerOutcome, PickerError>;
    fn pick_from_gallery(&self, config: &PickerConfig) -> Result<PickerOutcome, PickerError>;
    fn read_image(&self, uri: &str) -> Result<Vec<u8>, PickerError>;
}

use crate::device_picker::interface::{DevicePicker, PickerConfig, PickerError, PickerOutcome};
use crate::logger::interface::Logger;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Scripted picker for tests. Outcomes are served in order from a queue;
/// once the queue is empty every launch reports cancellation.
pub struct DevicePickerFake {
    camera_granted: bool,
    gallery_granted: bool,
    outcomes: Mutex<VecDeque<Result<PickerOutcome, PickerError>>>,
    images: Mutex<HashMap<String, Vec<u8>>>,
    logger: Box<dyn Logger>,
}

impl DevicePickerFake {
    pub fn new(logger: Box<dyn Logger>) -> Self {
        Self {
            camera_granted: true,
            gallery_granted: true,
            outcomes: Mutex::new(VecDeque::new()),
            images: Mutex::new(HashMap::new()),
            logger: logger.with_namespace("picker").with_namespace("fake"),
        }
    }

    #[allow(dead_code)]
    pub fn deny_all(mut self) -> Self {
        self.camera_granted = false;
        self.gallery_granted = false;
        self
    }

    pub fn with_image(self, uri: &str, bytes: Vec<u8>) -> Self {
        self.images.lock().unwrap().insert(uri.to_string(), bytes);
        self
    }

    #[allow(dead_code)]
    pub fn with_outcome(self, outcome: Result<PickerOutcome, PickerError>) -> Self {
        self.outcomes.lock().unwrap().push_back(outcome);
        self
    }

    fn next_outcome(&self) -> Result<PickerOutcome, PickerError> {
        if let Some(outcome) = self.outcomes.lock().unwrap().pop_front() {
            return outcome;
        }
        // No script left: fall back to picking a registered image, or
        // cancelling when there is none.
        match self.images.lock().unwrap().keys().next() {
            Some(uri) => Ok(PickerOutcome::Picked { uri: uri.clone() }),
            None => Ok(PickerOutcome::Cancelled),
        }
    }
}

impl DevicePicker for DevicePickerFake {
    fn request_camera_permission(&self) -> Result<bool, PickerError> {
        Ok(self.camera_granted)
    }

    fn request_gallery_permission(&self) -> Result<bool, PickerError> {
        Ok(self.gallery_granted)
    }

    fn capture_from_camera(&self, _config: &PickerConfig) -> Result<PickerOutcome, PickerError> {
        let _ = self.logger.info("Launching fake camera...");
        self.next_outcome()
    }

    fn pick_from_gallery(&self, _config: &PickerConfig) -> Result<PickerOutcome, PickerError> {
        let _ = self.logger.info("Launching fake gallery...");
        self.next_outcome()
    }

    fn read_image(&self, uri: &str) -> Result<Vec<u8>, PickerError> {
        self.images.lock().unwrap().get(uri).cloned().ok_or_else(|| {
            PickerError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no fake image for {}", uri),
            ))
        })
    }
}

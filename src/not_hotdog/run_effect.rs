use crate::not_hotdog::core::{Effect, Event, UploadError};
use crate::not_hotdog::main::NotHotdog;
use uuid::Uuid;

impl NotHotdog {
    pub fn run_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::RequestPermissions => {
                let camera = self
                    .device_picker
                    .request_camera_permission()
                    .unwrap_or(false);
                let gallery = self
                    .device_picker
                    .request_gallery_permission()
                    .unwrap_or(false);
                let _ = self
                    .event_sender
                    .send(Event::PermissionsChecked { camera, gallery });
            }
            Effect::SubscribeToIntents => {
                let events = self.device_input.events();
                while let Ok(intent) = events.recv() {
                    if self.event_sender.send(Event::Intent(intent)).is_err() {
                        break;
                    }
                }
            }
            Effect::LaunchCameraPicker => {
                let outcome = self.device_picker.capture_from_camera(&self.config.picker);
                let _ = self.event_sender.send(Event::PickDone(outcome));
            }
            Effect::LaunchGalleryPicker => {
                let outcome = self.device_picker.pick_from_gallery(&self.config.picker);
                let _ = self.event_sender.send(Event::PickDone(outcome));
            }
            Effect::UploadImage { local_uri } => {
                let result = self.upload_image(&local_uri);
                if let Err(e) = &result {
                    let _ = self.logger.error(&format!("upload failed: {}", e));
                }
                let _ = self.event_sender.send(Event::UploadDone(result));
            }
            Effect::DetectLabels { remote_url } => {
                let result = self
                    .label_detector
                    .detect_labels(&remote_url, self.config.max_label_results);
                if let Err(e) = &result {
                    let _ = self.logger.error(&format!("classification failed: {}", e));
                }
                let _ = self.event_sender.send(Event::ClassifyDone(result));
            }
        }
    }

    /// The four-step upload sequence: read bytes, mint a fresh random key,
    /// put, resolve the public URL. Keys are v4 UUIDs so uploads never
    /// collide within or across sessions.
    fn upload_image(&self, local_uri: &str) -> Result<String, UploadError> {
        let bytes = self.device_picker.read_image(local_uri)?;
        let key = Uuid::new_v4().to_string();
        self.object_store.upload(&key, &bytes)?;
        let url = self.object_store.download_url(&key)?;
        Ok(url)
    }
}

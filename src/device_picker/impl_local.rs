use crate::device_picker::interface::{DevicePicker, PickerConfig, PickerError, PickerOutcome};
use crate::logger::interface::Logger;
use std::path::{Path, PathBuf};

/// Filesystem-backed picker for running the screen on a dev machine. A
/// "gallery pick" returns the most recently modified file in the pictures
/// directory; there is no camera attached, so capture reports unavailable.
pub struct DevicePickerLocal {
    pictures_dir: PathBuf,
    logger: Box<dyn Logger>,
}

impl DevicePickerLocal {
    pub fn new(pictures_dir: PathBuf, logger: Box<dyn Logger>) -> Self {
        Self {
            pictures_dir,
            logger: logger.with_namespace("picker").with_namespace("local"),
        }
    }

    fn newest_file(&self) -> Result<Option<PathBuf>, PickerError> {
        let mut newest: Option<(std::time::SystemTime, PathBuf)> = None;
        for entry in std::fs::read_dir(&self.pictures_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let modified = entry.metadata()?.modified()?;
            if newest.as_ref().map(|(t, _)| modified > *t).unwrap_or(true) {
                newest = Some((modified, entry.path()));
            }
        }
        Ok(newest.map(|(_, path)| path))
    }
}

fn file_uri(path: &Path) -> String {
    format!("file://{}", path.display())
}

fn uri_path(uri: &str) -> &str {
    uri.strip_prefix("file://").unwrap_or(uri)
}

impl DevicePicker for DevicePickerLocal {
    fn request_camera_permission(&self) -> Result<bool, PickerError> {
        Ok(false)
    }

    fn request_gallery_permission(&self) -> Result<bool, PickerError> {
        Ok(self.pictures_dir.is_dir())
    }

    fn capture_from_camera(&self, _config: &PickerConfig) -> Result<PickerOutcome, PickerError> {
        Err(PickerError::Unavailable("no camera attached".to_string()))
    }

    fn pick_from_gallery(&self, config: &PickerConfig) -> Result<PickerOutcome, PickerError> {
        let _ = self.logger.info(&format!(
            "Picking newest file from {} (editing: {}, aspect {}:{})",
            self.pictures_dir.display(),
            config.allows_editing,
            config.aspect_ratio.0,
            config.aspect_ratio.1
        ));

        match self.newest_file()? {
            Some(path) => Ok(PickerOutcome::Picked {
                uri: file_uri(&path),
            }),
            None => Ok(PickerOutcome::Cancelled),
        }
    }

    fn read_image(&self, uri: &str) -> Result<Vec<u8>, PickerError> {
        Ok(std::fs::read(uri_path(uri))?)
    }
}

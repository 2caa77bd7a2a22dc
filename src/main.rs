use crate::config::Config;
use crate::device_display::impl_console::DeviceDisplayConsole;
use crate::device_input::impl_console::DeviceInputConsole;
use crate::device_picker::impl_fake::DevicePickerFake;
use crate::device_picker::impl_local::DevicePickerLocal;
use crate::device_picker::interface::DevicePicker;
use crate::label_detector::impl_fake::LabelDetectorFake;
use crate::label_detector::impl_google_vision::LabelDetectorGoogleVision;
use crate::label_detector::interface::LabelDetector;
use crate::logger::impl_console::LoggerConsole;
use crate::logger::interface::Logger;
use crate::not_hotdog::main::NotHotdog;
use crate::object_store::impl_fake::ObjectStoreFake;
use crate::object_store::impl_firebase::ObjectStoreFirebase;
use crate::object_store::interface::ObjectStore;
use std::sync::{Arc, Mutex};

mod config;
mod device_display;
mod device_input;
mod device_picker;
mod label_detector;
mod logger;
mod not_hotdog;
mod object_store;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let (config, logger, device_picker, object_store, label_detector) = match Config::from_env() {
        Some(config) => {
            let logger = LoggerConsole::new(config.logger_timezone);
            let device_picker: Arc<dyn DevicePicker> = Arc::new(DevicePickerLocal::new(
                config.pictures_dir.clone(),
                Box::new(logger.clone()),
            ));
            let object_store: Arc<dyn ObjectStore> = Arc::new(ObjectStoreFirebase::new(
                config.storage_bucket.clone(),
                Box::new(logger.clone()),
            ));
            let label_detector: Arc<dyn LabelDetector> = Arc::new(LabelDetectorGoogleVision::new(
                config.vision_endpoint.clone(),
                config.vision_api_key.clone(),
                Box::new(logger.clone()),
            ));
            (config, logger, device_picker, object_store, label_detector)
        }
        None => {
            let config = Config::default();
            let logger = LoggerConsole::new(config.logger_timezone);
            let _ = logger.info(
                "VISION_API_KEY / FIREBASE_STORAGE_BUCKET not set, running against fakes",
            );
            let device_picker: Arc<dyn DevicePicker> = Arc::new(
                DevicePickerFake::new(Box::new(logger.clone()))
                    .with_image("file:///fake/photo.jpg", vec![0u8; 64]),
            );
            let object_store: Arc<dyn ObjectStore> = Arc::new(ObjectStoreFake::new());
            let label_detector: Arc<dyn LabelDetector> = Arc::new(LabelDetectorFake::new());
            (config, logger, device_picker, object_store, label_detector)
        }
    };

    let device_input = Arc::new(DeviceInputConsole::new(Box::new(logger.clone())));
    let device_display = Arc::new(Mutex::new(DeviceDisplayConsole::new()));

    let app = NotHotdog::new(
        config,
        Arc::new(logger),
        device_picker,
        device_input,
        device_display,
        object_store,
        label_detector,
    );

    app.run()?;

    Ok(())
}

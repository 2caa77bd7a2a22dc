use crate::config::Config;
use crate::device_display::interface::DeviceDisplay;
use crate::device_input::interface::DeviceInput;
use crate::device_picker::interface::DevicePicker;
use crate::label_detector::interface::LabelDetector;
use crate::logger::interface::Logger;
use crate::not_hotdog::core::{Event, Model};
use crate::object_store::interface::ObjectStore;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct NotHotdog {
    pub model: Arc<Mutex<Model>>,
    pub event_sender: Sender<Event>,
    pub event_receiver: Arc<Mutex<Receiver<Event>>>,
    pub config: Config,
    pub logger: Arc<dyn Logger>,
    pub device_picker: Arc<dyn DevicePicker>,
    pub device_input: Arc<dyn DeviceInput>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay>>,
    pub object_store: Arc<dyn ObjectStore>,
    pub label_detector: Arc<dyn LabelDetector>,
}

impl NotHotdog {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger>,
        device_picker: Arc<dyn DevicePicker>,
        device_input: Arc<dyn DeviceInput>,
        device_display: Arc<Mutex<dyn DeviceDisplay>>,
        object_store: Arc<dyn ObjectStore>,
        label_detector: Arc<dyn LabelDetector>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();

        Self {
            model: Arc::new(Mutex::new(Model::default())),
            event_sender,
            event_receiver: Arc::new(Mutex::new(event_receiver)),
            config,
            logger,
            device_picker,
            device_input,
            device_display,
            object_store,
            label_detector,
        }
    }
}

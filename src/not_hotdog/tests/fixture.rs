use crate::config::Config;
use crate::device_display::impl_fake::DeviceDisplayFake;
use crate::device_input::impl_fake::DeviceInputFake;
use crate::device_input::interface::UserIntent;
use crate::device_picker::impl_fake::DevicePickerFake;
use crate::label_detector::impl_fake::LabelDetectorFake;
use crate::logger::impl_console::LoggerConsole;
use crate::logger::interface::Logger;
use crate::not_hotdog::core::{transition, Effect, Event, Model};
use crate::not_hotdog::main::NotHotdog;
use crate::object_store::impl_fake::ObjectStoreFake;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[allow(dead_code)]
pub struct Fixture {
    pub config: Config,
    pub picker: Arc<DevicePickerFake>,
    pub store: ObjectStoreFake,
    pub detector: Arc<LabelDetectorFake>,
    pub display: DeviceDisplayFake,
    pub app: NotHotdog,
}

impl Fixture {
    pub fn build(
        picker: DevicePickerFake,
        store: ObjectStoreFake,
        detector: LabelDetectorFake,
        script: Vec<UserIntent>,
    ) -> Self {
        let config = Config::default();
        let picker = Arc::new(picker);
        let detector = Arc::new(detector);
        let display = DeviceDisplayFake::new();
        let input = Arc::new(DeviceInputFake::new(script));

        let app = NotHotdog::new(
            config.clone(),
            Arc::new(LoggerConsole::new(config.logger_timezone)),
            picker.clone(),
            input,
            Arc::new(Mutex::new(display.clone())),
            Arc::new(store.clone()),
            detector.clone(),
        );

        Self {
            config,
            picker,
            store,
            detector,
            display,
            app,
        }
    }

    /// Runs effects synchronously on this thread and feeds the resulting
    /// events back through the reducer until nothing is pending, rendering
    /// after every transition the way the run loop does.
    pub fn drive(&self, mut model: Model, effects: Vec<Effect>) -> Model {
        let mut pending: VecDeque<Effect> = effects.into();
        while let Some(effect) = pending.pop_front() {
            self.app.run_effect(effect);
            while let Ok(event) = self.app.event_receiver.lock().unwrap().try_recv() {
                let (next, new_effects) = transition(&self.config, model, event);
                model = next;
                self.app.render(&model).unwrap();
                pending.extend(new_effects);
            }
        }
        model
    }

    /// Applies one event and then drives any effects it produced.
    pub fn send(&self, model: Model, event: Event) -> Model {
        let (model, effects) = transition(&self.config, model, event);
        self.app.render(&model).unwrap();
        self.drive(model, effects)
    }
}

pub fn test_logger() -> Box<dyn Logger> {
    Box::new(LoggerConsole::new(
        chrono::FixedOffset::west_opt(7 * 3600).unwrap(),
    ))
}

use crate::device_input::interface::{DeviceInput, UserIntent};
use std::sync::Mutex;

/// Replays a fixed script of intents, then goes quiet.
#[allow(dead_code)]
pub struct DeviceInputFake {
    script: Mutex<Vec<UserIntent>>,
}

#[allow(dead_code)]
impl DeviceInputFake {
    pub fn new(script: Vec<UserIntent>) -> Self {
        Self {
            script: Mutex::new(script),
        }
    }
}

impl DeviceInput for DeviceInputFake {
    fn events(&self) -> std::sync::mpsc::Receiver<UserIntent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let script = std::mem::take(&mut *self.script.lock().unwrap());
        std::thread::spawn(move || {
            for intent in script {
                if tx.send(intent).is_err() {
                    break;
                }
            }
        });
        rx
    }
}

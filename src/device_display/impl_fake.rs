use crate::device_display::interface::DeviceDisplay;
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Records everything written to it so tests can assert on the rendered
/// screen. Clones share the same backing buffers.
#[allow(dead_code)]
#[derive(Clone)]
pub struct DeviceDisplayFake {
    frame: Arc<Mutex<Vec<(u8, String)>>>,
    history: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl DeviceDisplayFake {
    pub fn new() -> Self {
        Self {
            frame: Arc::new(Mutex::new(Vec::new())),
            history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Lines of the current frame (written since the last clear).
    pub fn lines(&self) -> Vec<(u8, String)> {
        self.frame.lock().unwrap().clone()
    }

    pub fn rendered_text(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .map(|(_, text)| text)
            .filter(|text| !text.is_empty())
            .collect()
    }

    /// Every non-empty line ever written, across clears, in write order.
    pub fn all_writes(&self) -> Vec<String> {
        self.history.lock().unwrap().clone()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.frame.lock().unwrap().clear();
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.frame.lock().unwrap().push((line, text.to_string()));
        if !text.is_empty() {
            self.history.lock().unwrap().push(text.to_string());
        }
        Ok(())
    }
}

use crate::device_display::interface::DeviceDisplay;
use std::error::Error;

const NUM_LINES: usize = 4;

pub struct DeviceDisplayConsole {
    lines: Vec<String>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new(); NUM_LINES],
        }
    }

    fn render_display(&self) {
        println!("┌──────────────────────────────────────────────────┐");
        for line in &self.lines {
            println!("│ {:<48} │", line);
        }
        println!("└──────────────────────────────────────────────────┘");
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.lines = vec![String::new(); NUM_LINES];
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let index = line as usize;
        if index >= NUM_LINES {
            return Err("Invalid line number".into());
        }
        self.lines[index] = text.to_string();
        self.render_display();
        Ok(())
    }
}

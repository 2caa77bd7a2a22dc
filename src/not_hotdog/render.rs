use crate::not_hotdog::core::{Model, Status};
use crate::not_hotdog::main::NotHotdog;

pub const NO_ACCESS_MESSAGE: &str = "No access to Camera or Gallery!";
pub const AFFIRMATIVE_MESSAGE: &str = "🌭 HOTDOG ALERT 🌭";
pub const NEGATIVE_MESSAGE: &str = "❌ NOT HOTDOG ❌";

impl NotHotdog {
    pub fn render(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut display = self.device_display.lock().unwrap();

        display.clear()?;

        if model.no_access() {
            display.write_line(0, NO_ACCESS_MESSAGE)?;
            return Ok(());
        }

        display.write_line(0, "Hot Dog or Not Hot Dog?")?;

        match &model.image_remote_url {
            Some(url) => display.write_line(1, &format!("Image: {}", url))?,
            None => display.write_line(1, "Our state of the art AI will confirm if hot dog 🌭")?,
        }

        match model.verdict {
            Some(true) => display.write_line(2, AFFIRMATIVE_MESSAGE)?,
            Some(false) => display.write_line(2, NEGATIVE_MESSAGE)?,
            None => {}
        }

        match &model.status {
            Status::Uploading => display.write_line(3, "Uploading...")?,
            Status::Classifying => display.write_line(3, "Checking...")?,
            Status::Failed(message) => display.write_line(3, message)?,
            Status::Idle => {}
        }

        Ok(())
    }
}

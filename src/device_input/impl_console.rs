use crate::device_input::interface::{DeviceInput, UserIntent};
use crate::logger::interface::Logger;
use std::io::BufRead;

/// Stdin-driven input: "photo", "pick" and "check" stand in for the
/// header icons and the Check button.
pub struct DeviceInputConsole {
    logger: Box<dyn Logger>,
}

impl DeviceInputConsole {
    pub fn new(logger: Box<dyn Logger>) -> Self {
        Self {
            logger: logger.with_namespace("input").with_namespace("console"),
        }
    }
}

fn parse_intent(line: &str) -> Option<UserIntent> {
    match line.trim() {
        "photo" | "camera" => Some(UserIntent::TakePhoto),
        "pick" | "gallery" => Some(UserIntent::PickImage),
        "check" => Some(UserIntent::Check),
        _ => None,
    }
}

impl DeviceInput for DeviceInputConsole {
    fn events(&self) -> std::sync::mpsc::Receiver<UserIntent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let logger = self.logger.with_namespace("reader");
        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(_) => break,
                };
                match parse_intent(&line) {
                    Some(intent) => {
                        if tx.send(intent).is_err() {
                            break;
                        }
                    }
                    None => {
                        let _ = logger.info("Commands: photo | pick | check");
                    }
                }
            }
        });
        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_commands() {
        assert_eq!(parse_intent("photo"), Some(UserIntent::TakePhoto));
        assert_eq!(parse_intent(" gallery "), Some(UserIntent::PickImage));
        assert_eq!(parse_intent("check"), Some(UserIntent::Check));
        assert_eq!(parse_intent("nonsense"), None);
    }
}

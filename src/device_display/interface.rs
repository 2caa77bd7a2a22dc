use std::error::Error;

/// Line-oriented output surface the screen renders onto.
pub trait DeviceDisplay: Send + Sync {
    /// Clear all lines.
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Write text to a specific line (0-based index).
    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;
}

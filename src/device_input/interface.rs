/// The three things the user can do on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserIntent {
    TakePhoto,
    PickImage,
    Check,
}

pub trait DeviceInput: Send + Sync {
    fn events(&self) -> std::sync::mpsc::Receiver<UserIntent>;
}

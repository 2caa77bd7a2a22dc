use crate::config::Config;
use crate::device_input::interface::UserIntent;
use crate::device_picker::interface::{PickerError, PickerOutcome};
use crate::label_detector::interface::DetectError;
use crate::object_store::interface::StoreError;
use thiserror::Error;

pub const UPLOAD_FAILED_ALERT: &str = "Upload failed, sorry :(";

/// Session state for the screen. Lives in memory for the process lifetime;
/// nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Model {
    pub camera_granted: bool,
    pub gallery_granted: bool,
    pub image_local_uri: Option<String>,
    pub image_remote_url: Option<String>,
    pub status: Status,
    pub verdict: Option<bool>,
}

/// Pipeline status as a tagged variant rather than a busy flag, so a second
/// upload or check cannot start while one is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Uploading,
    Classifying,
    Failed(String),
}

impl Model {
    /// Both permissions denied is a terminal screen: nothing is actionable
    /// until the process restarts.
    pub fn no_access(&self) -> bool {
        !self.camera_granted && !self.gallery_granted
    }

    fn accepts_intents(&self) -> bool {
        matches!(self.status, Status::Idle | Status::Failed(_))
    }
}

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("failed to read image: {0}")]
    Read(#[from] PickerError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug)]
pub enum Event {
    PermissionsChecked { camera: bool, gallery: bool },
    Intent(UserIntent),
    PickDone(Result<PickerOutcome, PickerError>),
    UploadDone(Result<String, UploadError>),
    ClassifyDone(Result<Vec<String>, DetectError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RequestPermissions,
    SubscribeToIntents,
    LaunchCameraPicker,
    LaunchGalleryPicker,
    UploadImage { local_uri: String },
    DetectLabels { remote_url: String },
}

pub fn init() -> (Model, Vec<Effect>) {
    (
        Model::default(),
        vec![Effect::RequestPermissions, Effect::SubscribeToIntents],
    )
}

pub fn transition(config: &Config, model: Model, event: Event) -> (Model, Vec<Effect>) {
    match event {
        Event::PermissionsChecked { camera, gallery } => (
            Model {
                camera_granted: camera,
                gallery_granted: gallery,
                ..model
            },
            vec![],
        ),

        Event::Intent(_) if model.no_access() || !model.accepts_intents() => (model, vec![]),

        Event::Intent(UserIntent::TakePhoto) if model.camera_granted => (
            Model {
                status: Status::Idle,
                ..model
            },
            vec![Effect::LaunchCameraPicker],
        ),

        Event::Intent(UserIntent::PickImage) if model.gallery_granted => (
            Model {
                status: Status::Idle,
                ..model
            },
            vec![Effect::LaunchGalleryPicker],
        ),

        Event::Intent(UserIntent::Check) => match model.image_remote_url.clone() {
            // Check is disabled until an upload has produced a URL.
            None => (model, vec![]),
            Some(remote_url) => (
                Model {
                    status: Status::Classifying,
                    ..model
                },
                vec![Effect::DetectLabels { remote_url }],
            ),
        },

        Event::Intent(_) => (model, vec![]),

        // Upload starts automatically on acquisition. A prior verdict
        // deliberately stays up until the next check runs, even though it
        // can render stale against the new image.
        Event::PickDone(Ok(PickerOutcome::Picked { uri })) => (
            Model {
                image_local_uri: Some(uri.clone()),
                status: Status::Uploading,
                ..model
            },
            vec![Effect::UploadImage { local_uri: uri }],
        ),

        Event::PickDone(Ok(PickerOutcome::Cancelled)) => (model, vec![]),

        Event::PickDone(Err(_)) => (
            Model {
                status: Status::Failed(UPLOAD_FAILED_ALERT.to_string()),
                ..model
            },
            vec![],
        ),

        Event::UploadDone(Ok(remote_url)) => (
            Model {
                image_remote_url: Some(remote_url),
                status: Status::Idle,
                ..model
            },
            vec![],
        ),

        // One generic failure regardless of cause; the detail is logged
        // where the effect ran.
        Event::UploadDone(Err(_)) => (
            Model {
                status: Status::Failed(UPLOAD_FAILED_ALERT.to_string()),
                ..model
            },
            vec![],
        ),

        Event::ClassifyDone(Ok(labels)) => (
            Model {
                verdict: Some(is_hot_dog(config, &labels)),
                status: Status::Idle,
                ..model
            },
            vec![],
        ),

        // Swallowed: the user sees Check appear to do nothing.
        Event::ClassifyDone(Err(_)) => (
            Model {
                status: Status::Idle,
                ..model
            },
            vec![],
        ),
    }
}

/// Exact-string membership against the configured label list. Matching is
/// case-sensitive on purpose.
pub fn is_hot_dog(config: &Config, labels: &[String]) -> bool {
    labels
        .iter()
        .any(|label| config.hot_dog_labels.iter().any(|hot| hot == label))
}

use crate::device_input::interface::UserIntent;
use crate::device_picker::impl_fake::DevicePickerFake;
use crate::device_picker::interface::PickerOutcome;
use crate::label_detector::impl_fake::LabelDetectorFake;
use crate::not_hotdog::core::{init, Effect, Event, Status, UPLOAD_FAILED_ALERT};
use crate::not_hotdog::render::{AFFIRMATIVE_MESSAGE, NEGATIVE_MESSAGE, NO_ACCESS_MESSAGE};
use crate::not_hotdog::tests::fixture::{test_logger, Fixture};
use crate::object_store::impl_fake::ObjectStoreFake;

const PHOTO_URI: &str = "file:///gallery/photo.jpg";

fn picker_with_photo() -> DevicePickerFake {
    DevicePickerFake::new(test_logger()).with_image(PHOTO_URI, vec![7u8; 128])
}

#[test]
fn test_denied_permissions_render_terminal_screen() {
    let fixture = Fixture::build(
        DevicePickerFake::new(test_logger()).deny_all(),
        ObjectStoreFake::new(),
        LabelDetectorFake::new(),
        vec![UserIntent::PickImage, UserIntent::Check],
    );

    let (model, effects) = init();
    let model = fixture.drive(model, effects);

    assert!(model.no_access());
    assert_eq!(model.status, Status::Idle);
    // Only the no-access line renders; the scripted taps changed nothing.
    assert_eq!(fixture.display.rendered_text(), vec![NO_ACCESS_MESSAGE]);
    assert!(fixture.store.stored_keys().is_empty());
}

#[test]
fn test_cancelled_pick_attempts_no_upload() {
    let fixture = Fixture::build(
        DevicePickerFake::new(test_logger())
            .with_outcome(Ok(PickerOutcome::Cancelled)),
        ObjectStoreFake::new(),
        LabelDetectorFake::new(),
        vec![UserIntent::PickImage],
    );

    let (model, effects) = init();
    let model = fixture.drive(model, effects);

    assert_eq!(model.status, Status::Idle);
    assert_eq!(model.image_local_uri, None);
    assert_eq!(model.image_remote_url, None);
    assert!(fixture.store.stored_keys().is_empty());
}

#[test]
fn test_pick_upload_and_hot_dog_verdict() {
    let fixture = Fixture::build(
        picker_with_photo(),
        ObjectStoreFake::new(),
        LabelDetectorFake::with_labels(vec!["Hot dog", "Bun"]),
        vec![UserIntent::PickImage],
    );

    let (model, effects) = init();
    let model = fixture.drive(model, effects);

    // Upload ran automatically on acquisition.
    let keys = fixture.store.stored_keys();
    assert_eq!(keys.len(), 1);
    assert_eq!(fixture.store.object(&keys[0]), Some(vec![7u8; 128]));
    let remote_url = model.image_remote_url.clone().expect("upload url");

    // The check is user-triggered.
    let model = fixture.send(model, Event::Intent(UserIntent::Check));

    assert_eq!(model.verdict, Some(true));
    assert_eq!(model.status, Status::Idle);
    assert_eq!(fixture.detector.requested_urls(), vec![remote_url]);
    assert!(fixture
        .display
        .rendered_text()
        .contains(&AFFIRMATIVE_MESSAGE.to_string()));
}

#[test]
fn test_pick_upload_and_not_hot_dog_verdict() {
    let fixture = Fixture::build(
        picker_with_photo(),
        ObjectStoreFake::new(),
        LabelDetectorFake::with_labels(vec!["Pizza"]),
        vec![UserIntent::PickImage],
    );

    let (model, effects) = init();
    let model = fixture.drive(model, effects);
    let model = fixture.send(model, Event::Intent(UserIntent::Check));

    assert_eq!(model.verdict, Some(false));
    assert!(fixture
        .display
        .rendered_text()
        .contains(&NEGATIVE_MESSAGE.to_string()));
}

#[test]
fn test_upload_failure_shows_alert_and_resets() {
    let fixture = Fixture::build(
        picker_with_photo(),
        ObjectStoreFake::failing(),
        LabelDetectorFake::new(),
        vec![UserIntent::PickImage],
    );

    let (model, effects) = init();
    let model = fixture.drive(model, effects);

    assert_eq!(model.status, Status::Failed(UPLOAD_FAILED_ALERT.to_string()));
    assert_eq!(model.image_remote_url, None);
    assert!(fixture
        .display
        .rendered_text()
        .contains(&UPLOAD_FAILED_ALERT.to_string()));
}

#[test]
fn test_classification_failure_leaves_verdict_unset() {
    let fixture = Fixture::build(
        picker_with_photo(),
        ObjectStoreFake::new(),
        LabelDetectorFake::failing(),
        vec![UserIntent::PickImage],
    );

    let (model, effects) = init();
    let model = fixture.drive(model, effects);
    let model = fixture.send(model, Event::Intent(UserIntent::Check));

    assert_eq!(model.verdict, None);
    assert_eq!(model.status, Status::Idle);
}

#[test]
fn test_each_upload_uses_a_fresh_key() {
    let fixture = Fixture::build(
        picker_with_photo(),
        ObjectStoreFake::new(),
        LabelDetectorFake::new(),
        vec![],
    );

    for _ in 0..3 {
        fixture.app.run_effect(Effect::UploadImage {
            local_uri: PHOTO_URI.to_string(),
        });
    }

    let keys = fixture.store.stored_keys();
    assert_eq!(keys.len(), 3);
    for pair in keys.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
    let mut deduped = keys.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), keys.len());
}

#[test]
fn test_busy_status_spans_exactly_the_upload() {
    let fixture = Fixture::build(
        picker_with_photo(),
        ObjectStoreFake::new(),
        LabelDetectorFake::new(),
        vec![],
    );

    let (model, _) = init();
    let model = fixture.send(
        model,
        Event::PermissionsChecked {
            camera: true,
            gallery: true,
        },
    );
    assert_eq!(model.status, Status::Idle);

    // PickDone flips to Uploading and the driven upload settles back to
    // Idle before control returns; the overlay text was rendered between.
    let model = fixture.send(
        model,
        Event::PickDone(Ok(PickerOutcome::Picked {
            uri: PHOTO_URI.to_string(),
        })),
    );

    assert_eq!(model.status, Status::Idle);
    assert!(model.image_remote_url.is_some());
    assert!(fixture
        .display
        .all_writes()
        .iter()
        .any(|text| text == "Uploading..."));
}

use crate::classification_flow::core::{NOTHING_RECOGNIZED_TEXT, PROMPT_TEXT};
use crate::classification_flow::tests::fixture::{png_image, Fixture};
use crate::config::Config;
use crate::device_camera::impl_fake::CaptureOutcome;
use crate::device_camera::interface::CapturedImage;
use crate::device_display::impl_fake::DeviceDisplayFake;
use crate::error::InferenceError;
use crate::image_classifier::test_images::jpeg_with_orientation;
use crate::image_classifier::interface::{Classification, ClassificationResult};

fn pizza_bread() -> ClassificationResult {
    ClassificationResult::new(vec![
        Classification::new("pizza", 0.92),
        Classification::new("bread", 0.05),
    ])
}

#[test]
fn test_photo_to_results_to_search() {
    let mut f = Fixture::new(
        Config::default(),
        CaptureOutcome::Captured(png_image()),
        Ok(pizza_bread()),
        true,
    );
    f.start();
    f.wait_for_text(PROMPT_TEXT);

    f.take_photo();

    f.wait_for_text("(0.92) pizza |(0.05) bread");
    f.wait_until("browser to open", |f| !f.device_browser.opened().is_empty());
    assert_eq!(
        f.device_dialog.questions(),
        vec!["Search for \"how to make pizza\"?".to_string()]
    );
    assert_eq!(
        f.device_browser.opened(),
        vec!["https://www.google.com/search?q=how%20to%20make%20pizza".to_string()]
    );
    assert!(f
        .device_display
        .history()
        .contains(&"Classifying...".to_string()));

    f.stop();
}

#[test]
fn test_declined_search_opens_nothing() {
    let mut f = Fixture::new(
        Config::default(),
        CaptureOutcome::Captured(png_image()),
        Ok(ClassificationResult::new(vec![Classification::new(
            "apple_pie",
            0.7,
        )])),
        false,
    );
    f.start();

    f.take_photo();

    f.wait_until("search question", |f| !f.device_dialog.questions().is_empty());
    assert_eq!(
        f.device_dialog.questions(),
        vec!["Search for \"how to make apple pie\"?".to_string()]
    );
    f.wait_for_text("(0.70) apple_pie");
    assert!(f.device_browser.opened().is_empty());

    f.stop();
}

#[test]
fn test_undecodable_photo_shows_the_failure() {
    let mut f = Fixture::new(
        Config::default(),
        CaptureOutcome::Captured(CapturedImage::new(b"not a photo".to_vec(), "bad.jpg")),
        Ok(pizza_bread()),
        true,
    );
    f.start();

    f.take_photo();

    f.wait_until("decode error", |f| {
        f.device_display
            .current_text()
            .is_some_and(|text| text.starts_with("Unable to classify image.\nunable to decode image:"))
    });
    assert!(f.device_dialog.questions().is_empty());

    f.stop();
}

#[test]
fn test_inference_failure_then_retry() {
    let mut f = Fixture::new(
        Config::default(),
        CaptureOutcome::Captured(png_image()),
        Err(InferenceError::Execution("out of memory".to_string())),
        true,
    );
    f.start();

    f.take_photo();
    f.wait_for_text("Unable to classify image.\ninference failed: out of memory");

    f.take_photo();
    f.wait_until("second attempt", |f| {
        f.device_display
            .history()
            .iter()
            .filter(|text| text.as_str() == "Classifying...")
            .count()
            == 2
    });
    f.wait_for_text("Unable to classify image.\ninference failed: out of memory");

    f.stop();
}

#[test]
fn test_nothing_recognized() {
    let mut f = Fixture::new(
        Config::default(),
        CaptureOutcome::Captured(png_image()),
        Ok(ClassificationResult::default()),
        true,
    );
    f.start();

    f.take_photo();

    f.wait_for_text(NOTHING_RECOGNIZED_TEXT);
    assert!(f.device_dialog.questions().is_empty());

    f.stop();
}

#[test]
fn test_cancelled_capture_leaves_display_alone() {
    let mut f = Fixture::new(
        Config::default(),
        CaptureOutcome::Cancelled,
        Ok(pizza_bread()),
        true,
    );
    f.start();
    f.wait_for_text(PROMPT_TEXT);

    f.take_photo();
    // A second press is rejected until the cancellation comes back.
    f.take_photo();

    std::thread::sleep(std::time::Duration::from_millis(200));
    assert_eq!(f.device_display.history(), vec![PROMPT_TEXT.to_string()]);

    f.stop();
}

#[test]
fn test_capture_failure_is_shown() {
    let mut f = Fixture::new(
        Config::default(),
        CaptureOutcome::Failed("camera unavailable".to_string()),
        Ok(pizza_bread()),
        true,
    );
    f.start();

    f.take_photo();

    f.wait_for_text("Unable to take photo.\ncamera unavailable");

    f.stop();
}

#[test]
fn test_unsupported_orientation_is_shown() {
    let mut f = Fixture::new(
        Config::default(),
        CaptureOutcome::Captured(CapturedImage::new(
            jpeg_with_orientation(4, 2, 9),
            "odd.jpg",
        )),
        Ok(pizza_bread()),
        true,
    );
    f.start();

    f.take_photo();

    f.wait_for_text("Unable to classify image.\nunsupported image orientation value 9");
    assert!(f.device_dialog.questions().is_empty());

    f.stop();
}

#[test]
fn test_display_failure_does_not_stop_the_flow() {
    let config = Config::default();
    let device_display = DeviceDisplayFake::failing_first(Fixture::logger(&config), 1);
    let mut f = Fixture::with_display(
        config,
        CaptureOutcome::Captured(png_image()),
        Ok(pizza_bread()),
        false,
        device_display,
    );
    f.start();

    f.take_photo();

    f.wait_for_text("(0.92) pizza |(0.05) bread");
    assert!(!f.device_display.history().contains(&PROMPT_TEXT.to_string()));

    f.stop();
}

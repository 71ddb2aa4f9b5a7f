use sign_gesture::app::App;
use sign_gesture::config::{Config, DisplayKind};
use sign_gesture::device_camera::impl_fake::DeviceCameraFake;
use sign_gesture::device_display::impl_console::DeviceDisplayConsole;
use sign_gesture::device_display::impl_gui::DeviceDisplayGui;
use sign_gesture::gesture_classifier::interface::GestureClassifier;
use sign_gesture::hand_detector::impl_fake::HandDetectorFake;
use sign_gesture::library::logger::impl_console::LoggerConsole;
use sign_gesture::library::logger::interface::Logger;
use std::sync::atomic::Ordering;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env()?;

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_camera = Arc::new(DeviceCameraFake::new(logger.clone()));

    let hand_detector = Arc::new(HandDetectorFake::synthetic(logger.clone()));

    let gesture_classifier = build_classifier(&config, logger.clone());

    match config.display {
        DisplayKind::Console => {
            let mut app = App::new(
                config,
                logger,
                device_camera,
                hand_detector,
                Box::new(DeviceDisplayConsole::new()),
                gesture_classifier,
            );
            app.start()?;
        }
        DisplayKind::Gui => {
            let device_display = DeviceDisplayGui::new();
            let window = device_display.window();
            let mut app = App::new(
                config,
                logger,
                device_camera,
                hand_detector,
                Box::new(device_display),
                gesture_classifier,
            );
            let running = app.running_flag();

            let pipeline_thread = std::thread::spawn(move || app.start());
            let window_result = window.run();

            running.store(false, Ordering::SeqCst);
            pipeline_thread
                .join()
                .map_err(|_| "Pipeline thread panicked")??;
            window_result?;
        }
    }

    Ok(())
}

#[cfg(feature = "onnx")]
fn build_classifier(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Arc<dyn GestureClassifier + Send + Sync> {
    use sign_gesture::gesture_classifier::impl_tract_onnx::GestureClassifierTractOnnx;

    match GestureClassifierTractOnnx::load(&config.model(), logger.clone()) {
        Ok(classifier) => Arc::new(classifier),
        Err(e) => {
            let _ = logger.warn(&format!(
                "Gesture recognition unavailable, every frame will be undecided: {}",
                e
            ));
            Arc::new(GestureClassifierTractOnnx::unavailable())
        }
    }
}

#[cfg(not(feature = "onnx"))]
fn build_classifier(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Arc<dyn GestureClassifier + Send + Sync> {
    use sign_gesture::gesture_classifier::impl_fake::GestureClassifierFake;
    use sign_gesture::gesture_classifier::labels::LabelSet;

    let labels = match LabelSet::load(&config.labels_path) {
        Ok(labels) => labels,
        Err(e) => {
            let _ = logger.warn(&format!("{}, using demo labels", e));
            LabelSet::parse("hello\nthanks\nyes\nno\nplease")
        }
    };
    let _ = logger.info("Built without the onnx feature, using the random classifier");

    Arc::new(GestureClassifierFake::random(labels, logger))
}

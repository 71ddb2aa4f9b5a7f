use crate::config::Config;
use crate::device_camera::interface::{DeviceCamera, Frame};
use crate::device_display::interface::DeviceDisplay;
use crate::feature_encoder::FeatureEncoder;
use crate::gesture_classifier::interface::GestureClassifier;
use crate::hand_detector::interface::HandDetector;
use crate::library::latest_slot::LatestSlot;
use crate::library::logger::interface::Logger;
use crate::prediction_pipeline::PredictionPipeline;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

pub struct App {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    hand_detector: Arc<dyn HandDetector + Send + Sync>,
    device_display: Box<dyn DeviceDisplay>,
    pipeline: PredictionPipeline,
    frame_slot: LatestSlot<Frame>,
    label_slot: LatestSlot<String>,
    running: Arc<AtomicBool>,
}

impl App {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        hand_detector: Arc<dyn HandDetector + Send + Sync>,
        device_display: Box<dyn DeviceDisplay>,
        gesture_classifier: Arc<dyn GestureClassifier + Send + Sync>,
    ) -> Self {
        let pipeline = PredictionPipeline::new(
            FeatureEncoder::new(config.hand_order),
            gesture_classifier,
            config.voter(),
            logger.clone(),
        );

        Self {
            logger: logger.with_namespace("app"),
            config,
            device_camera,
            hand_detector,
            device_display,
            pipeline,
            frame_slot: LatestSlot::new(),
            label_slot: LatestSlot::new(),
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Latest resolved label, readable from any thread.
    pub fn label_slot(&self) -> LatestSlot<String> {
        self.label_slot.clone()
    }

    /// Clearing the flag stops a running `start`. Cleared before `start`, it
    /// makes `start` return without touching the devices.
    pub fn running_flag(&self) -> Arc<AtomicBool> {
        self.running.clone()
    }

    /// Runs until stopped or `max_frames` frames were processed. Returns the
    /// number of processed frames.
    pub fn start(&mut self) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
        if !self.running.load(Ordering::SeqCst) {
            let _ = self.logger.info("Stop requested before start");
            return Ok(0);
        }

        self.device_display.init()?;
        self.device_camera.start()?;

        let capture = self.spawn_capture();
        let wait = self.config.frame_interval.max(Duration::from_millis(10));
        let mut processed = 0;

        let result = loop {
            if !self.running.load(Ordering::SeqCst) {
                break Ok(processed);
            }
            if self.config.max_frames.is_some_and(|max| processed >= max) {
                break Ok(processed);
            }

            let Some(frame) = self.frame_slot.take_timeout(wait) else {
                continue;
            };

            if let Err(e) = self.process_captured(&frame) {
                break Err(e);
            }
            processed += 1;
        };

        self.running.store(false, Ordering::SeqCst);
        if capture.join().is_err() {
            let _ = self.logger.warn("Capture thread panicked");
        }
        self.device_camera.stop()?;
        let _ = self.logger.info(&format!("Stopped after {} frames", processed));

        result
    }

    /// Detect, classify and render one frame.
    pub fn process_captured(
        &mut self,
        frame: &Frame,
    ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        let detection = self.hand_detector.detect(frame);
        let hands = detection.clone().unwrap_or_default();

        let label = self.pipeline.process_detection(detection);

        let current = self.pipeline.current_label().map(str::to_string);
        if let Some(current) = &current {
            self.label_slot.put(current.clone());
        }
        self.device_display.render(&hands, current.as_deref())?;

        Ok(label)
    }

    /// Grabs frames, keeping at most one per `frame_interval`. A frame the
    /// pipeline has not picked up yet is replaced by the newer one.
    fn spawn_capture(&self) -> JoinHandle<()> {
        let camera = self.device_camera.clone();
        let slot = self.frame_slot.clone();
        let running = self.running.clone();
        let logger = self.logger.with_namespace("capture");
        let interval = self.config.frame_interval;
        let poll = (interval / 4).max(Duration::from_millis(1));

        std::thread::spawn(move || {
            let mut last_accepted: Option<Instant> = None;

            while running.load(Ordering::SeqCst) {
                match camera.capture_frame() {
                    Ok(frame) => {
                        let now = Instant::now();
                        let due = last_accepted
                            .map_or(true, |last| now.duration_since(last) >= interval);
                        if due {
                            last_accepted = Some(now);
                            slot.put(frame);
                        }
                        std::thread::sleep(poll);
                    }
                    Err(e) => {
                        let _ = logger.warn(&format!("Frame capture failed: {}", e));
                        std::thread::sleep(interval.max(Duration::from_millis(10)));
                    }
                }
            }
        })
    }
}

use crate::device_camera::interface::Frame;
use crate::hand_detector::interface::{DetectorError, HandDetector};
use crate::landmark::{Hand, HandSet, LandmarkPoint, HAND_LANDMARK_COUNT};
use crate::library::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

enum Mode {
    Scripted(Mutex<VecDeque<Result<HandSet, DetectorError>>>),
    Synthetic,
}

pub struct HandDetectorFake {
    mode: Mode,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl HandDetectorFake {
    /// Returns the scripted results in order, then no hands.
    pub fn scripted(
        results: Vec<Result<HandSet, DetectorError>>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            mode: Mode::Scripted(Mutex::new(results.into())),
            logger: logger.with_namespace("detector").with_namespace("fake"),
        }
    }

    /// Jittered open-hand poses, zero to two hands per frame.
    pub fn synthetic(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            mode: Mode::Synthetic,
            logger: logger.with_namespace("detector").with_namespace("fake"),
        }
    }

    fn synthesize(&self) -> Result<HandSet, DetectorError> {
        let mut rng = rand::rng();
        let hand_count = Uniform::new_inclusive(0usize, 2)
            .map_err(|e| DetectorError::DetectorFailure(e.to_string()))?
            .sample(&mut rng);
        let jitter = Uniform::new(-0.01f32, 0.01)
            .map_err(|e| DetectorError::DetectorFailure(e.to_string()))?;

        let hands = (0..hand_count)
            .map(|h| {
                let offset_x = 0.3 + 0.4 * h as f32;
                let points = open_hand(offset_x, 0.6)
                    .into_iter()
                    .map(|p| {
                        LandmarkPoint::new(
                            p.x + jitter.sample(&mut rng),
                            p.y + jitter.sample(&mut rng),
                            p.z + jitter.sample(&mut rng),
                        )
                    })
                    .collect();
                Hand::new(points)
            })
            .collect();

        Ok(HandSet::new(hands))
    }
}

impl HandDetector for HandDetectorFake {
    fn detect(&self, frame: &Frame) -> Result<HandSet, DetectorError> {
        let result = match &self.mode {
            Mode::Scripted(results) => results
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .pop_front()
                .unwrap_or_else(|| Ok(HandSet::empty())),
            Mode::Synthetic => self.synthesize(),
        };

        if let Ok(hands) = &result {
            let _ = self.logger.info(&format!(
                "Detected {} hand(s) in {}x{} frame",
                hands.len(),
                frame.width,
                frame.height
            ));
        }

        result
    }
}

/// A flat, fingers-up hand with the wrist at (`wrist_x`, `wrist_y`).
pub fn open_hand(wrist_x: f32, wrist_y: f32) -> Vec<LandmarkPoint> {
    let mut points = Vec::with_capacity(HAND_LANDMARK_COUNT);
    points.push(LandmarkPoint::new(wrist_x, wrist_y, 0.0));

    for finger in 0..5 {
        let base_x = wrist_x - 0.08 + 0.04 * finger as f32;
        for joint in 1..=4 {
            points.push(LandmarkPoint::new(
                base_x,
                wrist_y - 0.05 * joint as f32,
                -0.01 * joint as f32,
            ));
        }
    }

    points
}

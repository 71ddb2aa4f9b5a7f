//! Per-frame gesture pipeline: encode, classify, gate, vote.
//!
//! Not meant to be shared between threads. Every per-frame failure ends in
//! "no decision" for that frame and leaves the voting history as it was.

use crate::feature_encoder::FeatureEncoder;
use crate::gesture_classifier::error::ClassifierError;
use crate::gesture_classifier::interface::GestureClassifier;
use crate::hand_detector::interface::DetectorError;
use crate::landmark::HandSet;
use crate::library::logger::interface::Logger;
use crate::temporal_voter::{TemporalVoter, VoterConfig, VotingOutcome};
use std::sync::Arc;

/// What happened to a single frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// Nothing to classify, the classifier was not called.
    NoHands,
    ClassifierFailed(ClassifierError),
    /// The classifier returned no usable score.
    EmptyPrediction,
    Voted {
        top_index: usize,
        confidence: f32,
        outcome: VotingOutcome,
    },
}

impl FrameOutcome {
    pub fn resolved_index(&self) -> Option<usize> {
        match self {
            FrameOutcome::Voted { outcome, .. } => outcome.resolved(),
            _ => None,
        }
    }
}

pub struct PredictionPipeline {
    encoder: FeatureEncoder,
    classifier: Arc<dyn GestureClassifier + Send + Sync>,
    voter: TemporalVoter,
    current_label: Option<String>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PredictionPipeline {
    pub fn new(
        encoder: FeatureEncoder,
        classifier: Arc<dyn GestureClassifier + Send + Sync>,
        voter_config: VoterConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        let logger = logger.with_namespace("pipeline");
        let voter = TemporalVoter::new(voter_config, classifier.labels().len(), logger.clone());

        Self {
            encoder,
            classifier,
            voter,
            current_label: None,
            logger,
        }
    }

    /// The resolved label for this frame, if any.
    pub fn process_frame(&mut self, hands: &HandSet) -> Option<String> {
        let outcome = self.process_frame_outcome(hands);
        outcome
            .resolved_index()
            .and_then(|index| self.classifier.labels().get(index))
            .map(str::to_string)
    }

    /// Detector failures count as a frame without hands.
    pub fn process_detection(
        &mut self,
        detection: Result<HandSet, DetectorError>,
    ) -> Option<String> {
        match detection {
            Ok(hands) => self.process_frame(&hands),
            Err(e) => {
                let _ = self.logger.warn(&format!("{}", e));
                None
            }
        }
    }

    pub fn process_frame_outcome(&mut self, hands: &HandSet) -> FrameOutcome {
        if hands.is_empty() {
            return FrameOutcome::NoHands;
        }

        let features = self.encoder.encode(hands);

        let result = match self.classifier.classify(&features) {
            Ok(result) => result,
            Err(e) => {
                if let ClassifierError::InvalidInputSize { .. } = e {
                    let _ = self
                        .logger
                        .warn(&format!("Encoder and classifier disagree: {}", e));
                } else {
                    let _ = self.logger.warn(&format!("Classification failed: {}", e));
                }
                return FrameOutcome::ClassifierFailed(e);
            }
        };

        let Some((top_index, confidence)) = result.top() else {
            let _ = self.logger.warn("Classifier returned no scores");
            return FrameOutcome::EmptyPrediction;
        };

        self.voter.set_label_count(self.classifier.labels().len());
        let outcome = self.voter.record_and_vote(top_index, confidence);

        if let VotingOutcome::Resolved(index) = outcome {
            if let Some(label) = self.classifier.labels().get(index) {
                if self.current_label.as_deref() != Some(label) {
                    let _ = self.logger.info(&format!("Gesture: {}", label));
                }
                self.current_label = Some(label.to_string());
            }
        }

        FrameOutcome::Voted {
            top_index,
            confidence,
            outcome,
        }
    }

    /// Most recent resolved label. Frames without a decision keep it.
    pub fn current_label(&self) -> Option<&str> {
        self.current_label.as_deref()
    }

    pub fn window(&self) -> Vec<usize> {
        self.voter.window()
    }
}

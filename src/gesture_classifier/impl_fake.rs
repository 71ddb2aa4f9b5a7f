use crate::feature_encoder::FeatureVector;
use crate::gesture_classifier::error::ClassifierError;
use crate::gesture_classifier::interface::{ClassificationResult, GestureClassifier};
use crate::gesture_classifier::labels::LabelSet;
use crate::library::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

enum Mode {
    Unavailable,
    /// Replays responses in order, then keeps repeating the last one.
    Scripted {
        responses: Mutex<VecDeque<Result<ClassificationResult, ClassifierError>>>,
        last: Mutex<Option<Result<ClassificationResult, ClassifierError>>>,
    },
    /// Mostly sticks to one gesture, with the occasional noisy frame.
    Random { current: Mutex<usize> },
}

pub struct GestureClassifierFake {
    labels: LabelSet,
    mode: Mode,
    calls: Mutex<usize>,
    logger: Option<Arc<dyn Logger + Send + Sync>>,
}

impl GestureClassifierFake {
    pub fn unavailable() -> Self {
        Self {
            labels: LabelSet::empty(),
            mode: Mode::Unavailable,
            calls: Mutex::new(0),
            logger: None,
        }
    }

    pub fn scripted(
        labels: LabelSet,
        responses: Vec<Result<ClassificationResult, ClassifierError>>,
    ) -> Self {
        Self {
            labels,
            mode: Mode::Scripted {
                responses: Mutex::new(responses.into()),
                last: Mutex::new(None),
            },
            calls: Mutex::new(0),
            logger: None,
        }
    }

    /// Every call answers `index` with the given confidence, the rest of the
    /// probability mass spread over the other labels.
    pub fn constant(labels: LabelSet, index: usize, confidence: f32) -> Self {
        let response = Ok(one_hot(labels.len(), index, confidence));
        Self::scripted(labels, vec![response])
    }

    pub fn random(labels: LabelSet, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            labels,
            mode: Mode::Random {
                current: Mutex::new(0),
            },
            calls: Mutex::new(0),
            logger: Some(logger.with_namespace("classifier").with_namespace("fake")),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn classify_random(
        &self,
        current: &Mutex<usize>,
    ) -> Result<ClassificationResult, ClassifierError> {
        let count = self.labels.len();
        let mut current = current.lock().unwrap_or_else(|e| e.into_inner());
        let mut rng = rand::rng();

        let roll = Uniform::new(0.0f32, 1.0)
            .map_err(|e| ClassifierError::Inference(e.to_string()))?
            .sample(&mut rng);

        // Switch gesture now and then, otherwise emit a noisy frame sometimes.
        let index = if roll < 0.05 {
            *current = Uniform::new(0, count)
                .map_err(|e| ClassifierError::Inference(e.to_string()))?
                .sample(&mut rng);
            *current
        } else if roll < 0.25 {
            Uniform::new(0, count)
                .map_err(|e| ClassifierError::Inference(e.to_string()))?
                .sample(&mut rng)
        } else {
            *current
        };

        let confidence = Uniform::new(0.5f32, 1.0)
            .map_err(|e| ClassifierError::Inference(e.to_string()))?
            .sample(&mut rng);

        if let Some(logger) = &self.logger {
            let _ = logger.info(&format!(
                "Classified as {} ({:.2})",
                self.labels.get(index).unwrap_or("?"),
                confidence
            ));
        }

        Ok(one_hot(count, index, confidence))
    }
}

impl GestureClassifier for GestureClassifierFake {
    fn labels(&self) -> &LabelSet {
        &self.labels
    }

    fn is_available(&self) -> bool {
        !matches!(self.mode, Mode::Unavailable) && !self.labels.is_empty()
    }

    fn classify(&self, _features: &FeatureVector) -> Result<ClassificationResult, ClassifierError> {
        *self.calls.lock().unwrap_or_else(|e| e.into_inner()) += 1;

        if !self.is_available() {
            return Err(ClassifierError::ModelUnavailable);
        }

        match &self.mode {
            Mode::Unavailable => Err(ClassifierError::ModelUnavailable),
            Mode::Scripted { responses, last } => {
                let mut last = last.lock().unwrap_or_else(|e| e.into_inner());
                let next = responses
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .pop_front();
                if let Some(next) = next {
                    *last = Some(next);
                }
                last.clone().unwrap_or(Err(ClassifierError::ModelUnavailable))
            }
            Mode::Random { current } => self.classify_random(current),
        }
    }
}

/// `confidence` on `index`, the remainder split evenly across the others.
pub fn one_hot(len: usize, index: usize, confidence: f32) -> ClassificationResult {
    let rest = if len > 1 {
        (1.0 - confidence).max(0.0) / (len - 1) as f32
    } else {
        0.0
    };

    ClassificationResult::new(
        (0..len)
            .map(|i| if i == index { confidence } else { rest })
            .collect(),
    )
}

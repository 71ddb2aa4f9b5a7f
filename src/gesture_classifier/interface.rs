use crate::feature_encoder::FeatureVector;
use crate::gesture_classifier::error::ClassifierError;
use crate::gesture_classifier::labels::LabelSet;

/// One probability per label, in label order.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub probabilities: Vec<f32>,
}

impl ClassificationResult {
    pub fn new(probabilities: Vec<f32>) -> Self {
        Self { probabilities }
    }

    /// Index and probability of the best label. Ties go to the lowest index
    /// and NaN scores never win.
    pub fn top(&self) -> Option<(usize, f32)> {
        let mut best: Option<(usize, f32)> = None;
        for (index, &probability) in self.probabilities.iter().enumerate() {
            if probability.is_nan() {
                continue;
            }
            match best {
                Some((_, best_probability)) if probability <= best_probability => {}
                _ => best = Some((index, probability)),
            }
        }
        best
    }

    pub fn top_index(&self) -> Option<usize> {
        self.top().map(|(index, _)| index)
    }

    pub fn confidence(&self) -> Option<f32> {
        self.top().map(|(_, probability)| probability)
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }
}

pub trait GestureClassifier {
    /// Labels the classifier scores, empty when nothing is loaded.
    fn labels(&self) -> &LabelSet;

    fn is_available(&self) -> bool;

    fn classify(&self, features: &FeatureVector) -> Result<ClassificationResult, ClassifierError>;
}

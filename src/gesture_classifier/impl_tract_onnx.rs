use crate::feature_encoder::{FeatureVector, FEATURE_VECTOR_LEN};
use crate::gesture_classifier::error::ClassifierError;
use crate::gesture_classifier::interface::{ClassificationResult, GestureClassifier};
use crate::gesture_classifier::labels::LabelSet;
use crate::gesture_classifier::model_config::ModelConfig;
use crate::library::logger::interface::Logger;
use std::sync::Arc;
use tract_onnx::prelude::*;

type Plan = SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>;

pub struct GestureClassifierTractOnnx {
    model: Option<Plan>,
    labels: LabelSet,
    input_shape: Vec<usize>,
}

impl GestureClassifierTractOnnx {
    /// Loads the model and its labels. Either one missing or malformed is an
    /// error the caller should report.
    pub fn load(
        config: &ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ClassifierError> {
        let logger = logger.with_namespace("classifier").with_namespace("tract");

        let volume: usize = config.input_shape.iter().product();
        if volume != FEATURE_VECTOR_LEN {
            return Err(ClassifierError::InvalidInputSize {
                expected: FEATURE_VECTOR_LEN,
                actual: volume,
            });
        }

        let labels = LabelSet::load(&config.labels_path)?;
        let _ = logger.info(&format!(
            "Loaded {} labels from {}",
            labels.len(),
            config.labels_path.display()
        ));

        let model = tract_onnx::onnx()
            .model_for_path(&config.model_path)
            .and_then(|model| {
                model.with_input_fact(0, f32::fact(config.input_shape.clone()).into())
            })
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| {
                ClassifierError::ModelLoad(format!("{}: {}", config.model_path.display(), e))
            })?;
        let _ = logger.info(&format!("Loaded model {}", config.model_path.display()));

        Ok(Self {
            model: Some(model),
            labels,
            input_shape: config.input_shape.clone(),
        })
    }

    /// A classifier that fails every call with `ModelUnavailable`.
    pub fn unavailable() -> Self {
        Self {
            model: None,
            labels: LabelSet::empty(),
            input_shape: Vec::new(),
        }
    }
}

impl GestureClassifier for GestureClassifierTractOnnx {
    fn labels(&self) -> &LabelSet {
        &self.labels
    }

    fn is_available(&self) -> bool {
        self.model.is_some() && !self.labels.is_empty()
    }

    fn classify(&self, features: &FeatureVector) -> Result<ClassificationResult, ClassifierError> {
        let model = match &self.model {
            Some(model) if !self.labels.is_empty() => model,
            _ => return Err(ClassifierError::ModelUnavailable),
        };

        let input = Tensor::from_shape(&self.input_shape, features.as_slice()).map_err(|_| {
            ClassifierError::InvalidInputSize {
                expected: self.input_shape.iter().product(),
                actual: features.len(),
            }
        })?;

        let outputs = model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or_else(|| ClassifierError::Inference("model produced no output".to_string()))?
            .to_array_view::<f32>()
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let probabilities: Vec<f32> = output.iter().copied().collect();
        if probabilities.len() != self.labels.len() {
            return Err(ClassifierError::OutputSizeMismatch {
                expected: self.labels.len(),
                actual: probabilities.len(),
            });
        }

        Ok(ClassificationResult::new(probabilities))
    }
}

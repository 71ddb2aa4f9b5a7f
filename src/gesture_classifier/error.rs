#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    /// No model or no labels are loaded.
    #[error("Gesture model unavailable")]
    ModelUnavailable,

    /// The encoder and the classifier disagree on the vector size.
    #[error("Invalid input size: expected {expected} values, got {actual}")]
    InvalidInputSize { expected: usize, actual: usize },

    #[error("Failed to load gesture model: {0}")]
    ModelLoad(String),

    #[error("Failed to load labels: {0}")]
    LabelsLoad(String),

    #[error("Inference failed: {0}")]
    Inference(String),

    /// The model produced a different number of scores than there are labels.
    #[error("Model output size mismatch: expected {expected} scores, got {actual}")]
    OutputSizeMismatch { expected: usize, actual: usize },
}

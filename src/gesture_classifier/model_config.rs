use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub model_path: PathBuf,
    pub labels_path: PathBuf,
    /// Shape the 126 features are reshaped to before inference.
    pub input_shape: Vec<usize>,
}

use crate::gesture_classifier::error::ClassifierError;
use std::path::Path;

/// Ordered gesture labels. Index `i` names the classifier's score `i`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// One label per non-blank line, trimmed, in file order. Blank lines do
    /// not take an index. Duplicates keep their own index.
    pub fn parse(text: &str) -> Self {
        let labels = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Self { labels }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ClassifierError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ClassifierError::LabelsLoad(format!("{}: {}", path.display(), e)))?;

        let labels = Self::parse(&text);
        if labels.is_empty() {
            return Err(ClassifierError::LabelsLoad(format!(
                "{}: no labels found",
                path.display()
            )));
        }

        Ok(labels)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

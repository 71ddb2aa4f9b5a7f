use crate::device_camera::interface::Frame;
use crate::landmark::HandSet;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DetectorError {
    #[error("Hand detection failed: {0}")]
    DetectorFailure(String),
}

/// Finds hands in a camera frame. Zero hands is a valid result.
pub trait HandDetector {
    fn detect(&self, frame: &Frame) -> Result<HandSet, DetectorError>;
}

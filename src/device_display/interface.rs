use crate::landmark::HandSet;
use std::error::Error;

/// Shows the current gesture and the hands it was read from.
pub trait DeviceDisplay: Send + Sync {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// `label` is the most recent resolved gesture, if there has been one.
    fn render(&mut self, hands: &HandSet, label: Option<&str>)
        -> Result<(), Box<dyn Error + Send + Sync>>;
}

use crate::device_display::interface::DeviceDisplay;
use crate::landmark::HandSet;
use std::error::Error;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFrame {
    pub hand_count: usize,
    pub label: Option<String>,
}

/// Remembers every render. Clones share the same history.
#[derive(Clone, Default)]
pub struct DeviceDisplayFake {
    frames: Arc<Mutex<Vec<RenderedFrame>>>,
}

impl DeviceDisplayFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<RenderedFrame> {
        self.frames.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn render(
        &mut self,
        hands: &HandSet,
        label: Option<&str>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.frames
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(RenderedFrame {
                hand_count: hands.len(),
                label: label.map(str::to_string),
            });
        Ok(())
    }
}

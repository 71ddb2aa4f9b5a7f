use crate::feature_encoder::HandOrder;
use crate::gesture_classifier::model_config::ModelConfig;
use crate::temporal_voter::VoterConfig;
use chrono::Offset;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Upper bound for `SIGN_GESTURE_WINDOW_SIZE`.
pub const MAX_WINDOW_SIZE: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayKind {
    Console,
    Gui,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Minimum time between two frames entering the pipeline.
    pub frame_interval: Duration,
    pub window_size: usize,
    pub confidence_threshold: f32,
    pub hand_order: HandOrder,
    pub model_path: PathBuf,
    pub labels_path: PathBuf,
    pub model_input_shape: Vec<usize>,
    pub display: DisplayKind,
    pub logger_timezone: chrono::FixedOffset,
    /// Stop after this many processed frames. Runs forever when unset.
    pub max_frames: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(100),
            window_size: 7,
            confidence_threshold: 0.70,
            hand_order: HandOrder::DetectorOrder,
            model_path: PathBuf::from("assets/sign_model.onnx"),
            labels_path: PathBuf::from("assets/labels.txt"),
            model_input_shape: vec![1, 1, 126],
            display: DisplayKind::Console,
            logger_timezone: utc(),
            max_frames: None,
        }
    }
}

impl Config {
    /// Defaults overridden by `SIGN_GESTURE_*` environment variables.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let mut config = Self::default();

        if let Some(value) = lookup("SIGN_GESTURE_FRAME_INTERVAL_MS") {
            let millis = value
                .parse::<u64>()
                .map_err(|e| format!("Invalid SIGN_GESTURE_FRAME_INTERVAL_MS: {e}"))?;
            config.frame_interval = Duration::from_millis(millis);
        }

        if let Some(value) = lookup("SIGN_GESTURE_WINDOW_SIZE") {
            config.window_size = value
                .parse::<usize>()
                .map_err(|e| format!("Invalid SIGN_GESTURE_WINDOW_SIZE: {e}"))?;
            if !(1..=MAX_WINDOW_SIZE).contains(&config.window_size) {
                return Err(format!(
                    "SIGN_GESTURE_WINDOW_SIZE must be within [1, {MAX_WINDOW_SIZE}], got {}",
                    config.window_size
                )
                .into());
            }
        }

        if let Some(value) = lookup("SIGN_GESTURE_CONFIDENCE_THRESHOLD") {
            let threshold = value
                .parse::<f32>()
                .map_err(|e| format!("Invalid SIGN_GESTURE_CONFIDENCE_THRESHOLD: {e}"))?;
            if !(0.0..=1.0).contains(&threshold) {
                return Err(format!(
                    "SIGN_GESTURE_CONFIDENCE_THRESHOLD must be within [0, 1], got {threshold}"
                )
                .into());
            }
            config.confidence_threshold = threshold;
        }

        if let Some(value) = lookup("SIGN_GESTURE_HAND_ORDER") {
            config.hand_order = match value.trim().to_lowercase().as_str() {
                "detector" => HandOrder::DetectorOrder,
                "left_to_right" => HandOrder::LeftToRight,
                other => return Err(format!("Invalid SIGN_GESTURE_HAND_ORDER: {other}").into()),
            };
        }

        if let Some(value) = lookup("SIGN_GESTURE_MODEL") {
            config.model_path = PathBuf::from(value);
        }

        if let Some(value) = lookup("SIGN_GESTURE_LABELS") {
            config.labels_path = PathBuf::from(value);
        }

        if let Some(value) = lookup("SIGN_GESTURE_MODEL_INPUT_SHAPE") {
            config.model_input_shape = value
                .split(',')
                .map(|dim| dim.trim().parse::<usize>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| format!("Invalid SIGN_GESTURE_MODEL_INPUT_SHAPE: {e}"))?;
        }

        if let Some(value) = lookup("SIGN_GESTURE_DISPLAY") {
            config.display = match value.trim().to_lowercase().as_str() {
                "console" => DisplayKind::Console,
                "gui" => DisplayKind::Gui,
                other => return Err(format!("Invalid SIGN_GESTURE_DISPLAY: {other}").into()),
            };
        }

        if let Some(value) = lookup("SIGN_GESTURE_UTC_OFFSET_HOURS") {
            let hours = value
                .parse::<i32>()
                .map_err(|e| format!("Invalid SIGN_GESTURE_UTC_OFFSET_HOURS: {e}"))?;
            config.logger_timezone = chrono::FixedOffset::east_opt(hours * 3600)
                .ok_or_else(|| format!("UTC offset out of range: {hours}"))?;
        }

        if let Some(value) = lookup("SIGN_GESTURE_MAX_FRAMES") {
            config.max_frames = Some(
                value
                    .parse::<usize>()
                    .map_err(|e| format!("Invalid SIGN_GESTURE_MAX_FRAMES: {e}"))?,
            );
        }

        Ok(config)
    }

    pub fn model(&self) -> ModelConfig {
        ModelConfig {
            model_path: self.model_path.clone(),
            labels_path: self.labels_path.clone(),
            input_shape: self.model_input_shape.clone(),
        }
    }

    pub fn voter(&self) -> VoterConfig {
        VoterConfig {
            window_size: self.window_size,
            confidence_threshold: self.confidence_threshold,
        }
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::Utc.fix()
}

pub mod app;
pub mod config;
#[cfg(test)]
mod config_test;
pub mod device_camera;
pub mod device_display;
pub mod feature_encoder;
pub mod gesture_classifier;
pub mod hand_detector;
pub mod landmark;
pub mod library;
pub mod prediction_pipeline;
#[cfg(test)]
mod prediction_pipeline_test;
pub mod temporal_voter;

pub mod error;
pub mod impl_fake;
#[cfg(feature = "onnx")]
pub mod impl_tract_onnx;
pub mod interface;
pub mod labels;
pub mod model_config;

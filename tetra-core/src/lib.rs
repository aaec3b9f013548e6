//! Tetra Core Library - Matrix math, rotation, and animation logic
//!
//! This library holds everything needed to animate and draw the wireframe
//! independently of any windowing toolkit: checked matrix operations, rotation
//! builders, per-axis spin state, projection, and the frame renderer.

pub mod animation;
pub mod config;
pub mod error;
pub mod geometry;
pub mod matrix;
pub mod projection;
pub mod render;
pub mod rotation;

// Re-export commonly used types
pub use animation::{AnimationState, Spin, WrapPolicy};
pub use config::{AnimationConfig, ViewerConfig, WindowConfig};
pub use error::{ConfigError, MatrixError};
pub use geometry::PointSet;
pub use matrix::Matrix;
pub use projection::{OrthoProjection, Viewport};
pub use render::{FrameRenderer, LineSink, Segment};
pub use rotation::{Axis, RotationAngles};

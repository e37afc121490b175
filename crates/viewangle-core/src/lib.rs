//! Core types for viewangle.
//!
//! This crate provides the value types and pure logic behind the view-angle widget:
//! - [`Pose`] for six-degree-of-freedom camera placements
//! - [`ViewDirection`] for the discrete view-angle presets
//! - [`ViewAnglePose`] for turning a view direction into a camera pose
//! - [`ViewAngleConfig`] for endpoint names and placement settings

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Poses are addressed as x/y/z and roll/pitch/yaw throughout
#![allow(clippy::many_single_char_names)]

pub mod config;
pub mod direction;
pub mod error;
pub mod pose;
pub mod view_angle_pose;

pub use config::ViewAngleConfig;
pub use direction::ViewDirection;
pub use error::{Result, ViewAngleError};
pub use pose::Pose;
pub use view_angle_pose::ViewAnglePose;

// Re-export glam types for convenience
pub use glam::{DQuat, DVec3};

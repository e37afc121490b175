//! Configuration for the view-angle widget.

use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewAngleError};
use crate::pose::Pose;

/// Default service receiving view-angle direction requests.
pub const DEFAULT_SERVICE: &str = "/gui/view_angle";
/// Default service receiving explicit move-to-pose requests.
pub const DEFAULT_MOVE_TO_POSE_SERVICE: &str = "/gui/move_to/pose";
/// Default topic publishing the GUI camera pose.
pub const DEFAULT_CAMERA_POSE_TOPIC: &str = "/gui/camera/pose";

/// Settings read once when the widget is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewAngleConfig {
    /// Service that receives view-angle requests.
    pub service: String,

    /// Service that receives explicit camera pose requests.
    pub move_to_pose_service: String,

    /// Topic the host subscribes to for camera pose updates.
    pub camera_pose_topic: String,

    /// Pose held at construction and returned for the home direction.
    pub home_pose: Pose,

    /// Point preset views look at.
    pub focal_point: DVec3,

    /// Camera distance from the focal point for preset views.
    pub standard_distance: f64,

    /// Keep the current camera distance instead of `standard_distance`.
    pub preserve_distance: bool,
}

impl Default for ViewAngleConfig {
    fn default() -> Self {
        Self {
            service: DEFAULT_SERVICE.to_string(),
            move_to_pose_service: DEFAULT_MOVE_TO_POSE_SERVICE.to_string(),
            camera_pose_topic: DEFAULT_CAMERA_POSE_TOPIC.to_string(),
            home_pose: Pose::IDENTITY,
            focal_point: DVec3::ZERO,
            standard_distance: 10.0,
            preserve_distance: false,
        }
    }
}

impl ViewAngleConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the view-angle service.
    #[must_use]
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    /// Sets the move-to-pose service.
    #[must_use]
    pub fn with_move_to_pose_service(mut self, service: impl Into<String>) -> Self {
        self.move_to_pose_service = service.into();
        self
    }

    /// Sets the camera pose topic.
    #[must_use]
    pub fn with_camera_pose_topic(mut self, topic: impl Into<String>) -> Self {
        self.camera_pose_topic = topic.into();
        self
    }

    /// Sets the home pose.
    #[must_use]
    pub fn with_home_pose(mut self, pose: Pose) -> Self {
        self.home_pose = pose;
        self
    }

    /// Sets the focal point.
    #[must_use]
    pub fn with_focal_point(mut self, point: DVec3) -> Self {
        self.focal_point = point;
        self
    }

    /// Sets the standard distance.
    #[must_use]
    pub fn with_standard_distance(mut self, distance: f64) -> Self {
        self.standard_distance = distance;
        self
    }

    /// Sets whether preset views keep the current camera distance.
    #[must_use]
    pub fn with_preserve_distance(mut self, preserve: bool) -> Self {
        self.preserve_distance = preserve;
        self
    }

    /// Parses and validates a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading view angle config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Checks endpoint names and placement values.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("service", &self.service),
            ("move_to_pose_service", &self.move_to_pose_service),
            ("camera_pose_topic", &self.camera_pose_topic),
        ] {
            if value.trim().is_empty() {
                log::debug!("rejecting config: {field} is empty");
                return Err(ViewAngleError::InvalidConfig(format!("{field} is empty")));
            }
        }

        if !self.home_pose.is_finite() {
            return Err(ViewAngleError::NonFinitePose);
        }

        if !self.focal_point.is_finite() {
            return Err(ViewAngleError::InvalidConfig(
                "focal_point is not finite".to_string(),
            ));
        }

        if !(self.standard_distance.is_finite() && self.standard_distance > 0.0) {
            return Err(ViewAngleError::InvalidConfig(format!(
                "standard_distance must be positive, got {}",
                self.standard_distance
            )));
        }

        Ok(())
    }
}

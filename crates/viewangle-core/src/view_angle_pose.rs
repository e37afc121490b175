//! Mapping from view directions to camera poses.

use glam::DVec3;

use crate::config::ViewAngleConfig;
use crate::direction::ViewDirection;
use crate::error::Result;
use crate::pose::Pose;

/// Computes the camera pose for a requested view direction.
///
/// A non-home direction `d` places the camera at `focal_point - normalize(d) * distance`
/// looking along `d`. Corner views use the normalized combined vector.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewAnglePose {
    /// Pose returned for the home direction.
    pub home: Pose,
    /// Point the camera looks at.
    pub focal_point: DVec3,
    /// Camera distance from the focal point.
    pub standard_distance: f64,
    /// Use the current camera distance when it is usable.
    pub preserve_distance: bool,
}

impl Default for ViewAnglePose {
    fn default() -> Self {
        Self::from_config(&ViewAngleConfig::default())
    }
}

impl ViewAnglePose {
    /// Creates the mapping from the placement settings of a configuration.
    #[must_use]
    pub fn from_config(config: &ViewAngleConfig) -> Self {
        Self {
            home: config.home_pose,
            focal_point: config.focal_point,
            standard_distance: config.standard_distance,
            preserve_distance: config.preserve_distance,
        }
    }

    /// Returns the pose for the direction `(x, y, z)`.
    ///
    /// Each component must be in {-1, 0, 1}; anything else is rejected with
    /// [`ViewAngleError::InvalidDirection`](crate::ViewAngleError::InvalidDirection).
    /// `(0, 0, 0)` returns the home pose.
    pub fn compute_pose_for_direction(&self, x: i32, y: i32, z: i32) -> Result<Pose> {
        let direction = ViewDirection::new(x, y, z)?;
        Ok(self.pose_for_direction(direction, &self.home))
    }

    /// Returns the pose for `direction`, given the camera's `current` pose.
    ///
    /// `current` only matters when `preserve_distance` is set.
    #[must_use]
    pub fn pose_for_direction(&self, direction: ViewDirection, current: &Pose) -> Pose {
        let distance = self.distance_from(current);
        let d = direction.to_dvec3();
        // Home has zero length and falls through to the home pose.
        Pose::looking_along(self.focal_point - d.normalize_or_zero() * distance, d)
            .unwrap_or(self.home)
    }

    /// Returns `candidate` if it is finite, otherwise `last_good`.
    #[must_use]
    pub fn sanitize(candidate: Pose, last_good: &Pose) -> Pose {
        if candidate.is_finite() {
            candidate
        } else {
            *last_good
        }
    }

    fn distance_from(&self, current: &Pose) -> f64 {
        if self.preserve_distance {
            let distance = current.position().distance(self.focal_point);
            if distance.is_finite() && distance > 0.0 {
                return distance;
            }
        }
        self.standard_distance
    }
}

//! Camera pose value type.

use glam::{DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

/// A camera placement: position plus roll/pitch/yaw orientation in radians.
///
/// Orientation follows the simulation convention `R = Rz(yaw) * Ry(pitch) * Rx(roll)`,
/// with the camera looking along its body +X axis and +Z up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl Pose {
    /// The identity pose, at the origin with no rotation.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        roll: 0.0,
        pitch: 0.0,
        yaw: 0.0,
    };

    /// Creates a pose from its six components.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64, roll: f64, pitch: f64, yaw: f64) -> Self {
        Self {
            x,
            y,
            z,
            roll,
            pitch,
            yaw,
        }
    }

    /// Creates a pose from `[x, y, z, roll, pitch, yaw]`.
    #[must_use]
    pub fn from_array(values: [f64; 6]) -> Self {
        let [x, y, z, roll, pitch, yaw] = values;
        Self::new(x, y, z, roll, pitch, yaw)
    }

    /// Returns `[x, y, z, roll, pitch, yaw]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; 6] {
        [self.x, self.y, self.z, self.roll, self.pitch, self.yaw]
    }

    /// Creates a pose at `position` whose forward axis points along `direction`.
    ///
    /// Roll is always zero. A straight up or down direction yields zero yaw.
    /// Returns `None` if `direction` has zero length.
    #[must_use]
    pub fn looking_along(position: DVec3, direction: DVec3) -> Option<Self> {
        let d = direction.try_normalize()?;
        let horizontal = d.x.hypot(d.y);
        let yaw = if horizontal > 0.0 { d.y.atan2(d.x) } else { 0.0 };
        let pitch = (-d.z).atan2(horizontal);
        Some(Self::new(position.x, position.y, position.z, 0.0, pitch, yaw))
    }

    /// Returns the position component.
    #[must_use]
    pub fn position(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Returns the orientation as a quaternion.
    #[must_use]
    pub fn rotation(&self) -> DQuat {
        DQuat::from_euler(EulerRot::ZYX, self.yaw, self.pitch, self.roll)
    }

    /// Returns the unit look direction of a camera at this pose.
    #[must_use]
    pub fn forward(&self) -> DVec3 {
        self.rotation() * DVec3::X
    }

    /// Returns whether all six components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

impl From<[f64; 6]> for Pose {
    fn from(values: [f64; 6]) -> Self {
        Self::from_array(values)
    }
}

impl From<Pose> for [f64; 6] {
    fn from(pose: Pose) -> Self {
        pose.to_array()
    }
}

//! Discrete view-angle directions.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewAngleError};

/// A camera look direction with each axis component in {-1, 0, 1}.
///
/// The all-zero direction is the "home" sentinel: it asks for the initial
/// camera pose rather than a placement along some axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "[i32; 3]", into = "[i32; 3]")]
pub struct ViewDirection {
    x: i8,
    y: i8,
    z: i8,
}

impl ViewDirection {
    /// Looking down from above.
    pub const TOP: Self = Self { x: 0, y: 0, z: -1 };
    /// Looking up from below.
    pub const BOTTOM: Self = Self { x: 0, y: 0, z: 1 };
    /// Looking along -X.
    pub const FRONT: Self = Self { x: -1, y: 0, z: 0 };
    /// Looking along +X.
    pub const BACK: Self = Self { x: 1, y: 0, z: 0 };
    /// Looking along +Y.
    pub const LEFT: Self = Self { x: 0, y: 1, z: 0 };
    /// Looking along -Y.
    pub const RIGHT: Self = Self { x: 0, y: -1, z: 0 };
    /// Reset to the home pose.
    pub const HOME: Self = Self { x: 0, y: 0, z: 0 };

    /// Creates a direction, rejecting any component outside {-1, 0, 1}.
    pub fn new(x: i32, y: i32, z: i32) -> Result<Self> {
        match (component(x), component(y), component(z)) {
            (Some(x), Some(y), Some(z)) => Ok(Self { x, y, z }),
            _ => Err(ViewAngleError::InvalidDirection { x, y, z }),
        }
    }

    /// Returns whether this is the home sentinel.
    #[must_use]
    pub fn is_home(self) -> bool {
        self == Self::HOME
    }

    /// Returns the components as `[x, y, z]`.
    #[must_use]
    pub fn components(self) -> [i32; 3] {
        [i32::from(self.x), i32::from(self.y), i32::from(self.z)]
    }

    /// Returns the (unnormalized) direction vector.
    #[must_use]
    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }

    /// Returns the display name for the named presets.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        match self.components() {
            [0, 0, -1] => Some("Top"),
            [0, 0, 1] => Some("Bottom"),
            [-1, 0, 0] => Some("Front"),
            [1, 0, 0] => Some("Back"),
            [0, 1, 0] => Some("Left"),
            [0, -1, 0] => Some("Right"),
            [0, 0, 0] => Some("Home"),
            _ => None,
        }
    }

    /// Returns the named presets in button order.
    #[must_use]
    pub fn presets() -> [Self; 7] {
        [
            Self::TOP,
            Self::BOTTOM,
            Self::FRONT,
            Self::BACK,
            Self::LEFT,
            Self::RIGHT,
            Self::HOME,
        ]
    }

    /// Iterates over all 27 valid directions, home included.
    pub fn all() -> impl Iterator<Item = Self> {
        (-1i8..=1).flat_map(|x| {
            (-1i8..=1).flat_map(move |y| (-1i8..=1).map(move |z| Self { x, y, z }))
        })
    }
}

fn component(value: i32) -> Option<i8> {
    match value {
        -1 => Some(-1),
        0 => Some(0),
        1 => Some(1),
        _ => None,
    }
}

impl TryFrom<[i32; 3]> for ViewDirection {
    type Error = ViewAngleError;

    fn try_from(value: [i32; 3]) -> Result<Self> {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<ViewDirection> for [i32; 3] {
    fn from(direction: ViewDirection) -> Self {
        direction.components()
    }
}

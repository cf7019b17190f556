use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A 3-component float vector (X, Y, Z).
///
/// The spatial anchor type of the Tether data model, used for positions,
/// velocities, and directions in simulation state. Components are plain
/// `f32` values; no range validation is performed.
///
/// # Example
/// ```
/// use tether_structures::Vector3;
///
/// let position = Vector3::new(1.0, 2.0, 3.0);
/// assert_eq!(position.x, 1.0);
/// assert_eq!(position.y, 2.0);
/// assert_eq!(position.z, 3.0);
/// println!("{}", position); // Vector3(1, 2, 3)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The zero vector (0, 0, 0).
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl From<Vector3> for (f32, f32, f32) {
    fn from(value: Vector3) -> Self {
        (value.x, value.y, value.z)
    }
}

impl From<(f32, f32, f32)> for Vector3 {
    fn from(value: (f32, f32, f32)) -> Self {
        Vector3::new(value.0, value.1, value.2)
    }
}

impl Display for Vector3 {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Vector3({}, {}, {})", self.x, self.y, self.z)
    }
}

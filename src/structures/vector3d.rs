// Released under MIT License.
// Copyright (c) 2023-2024 Ladislav Bartos

//! Implementation of methods for three-dimensional vector.

use std::ops::{Add, AddAssign, Deref, DerefMut, Div};

use nalgebra::base::Vector3;

/// Value marking an undetermined coordinate in raw structure data.
pub const NULL_COORDINATE: f32 = 9999.0;

/// Describes length and orientation of a vector in space or a position of a point in space.
/// Implemented using `nalgebra`'s Vector3.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Vector3D(pub(crate) Vector3<f32>);

impl From<[f32; 3]> for Vector3D {
    #[inline]
    fn from(arr: [f32; 3]) -> Self {
        Vector3D(Vector3::new(arr[0], arr[1], arr[2]))
    }
}

impl From<Vector3D> for [f32; 3] {
    #[inline]
    fn from(vec: Vector3D) -> Self {
        [vec.0.x, vec.0.y, vec.0.z]
    }
}

/// Allows accessing fields of `Vector3D` as `.x`, `.y`, and `.z`.
impl Deref for Vector3D {
    type Target = Vector3<f32>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Vector3D {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Vector3D {
    /// Create a new `Vector3D` structure.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3D(Vector3::new(x, y, z))
    }

    /// Returns `true` if the raw coordinates mark an undetermined position,
    /// i.e. if none of them is below `NULL_COORDINATE`.
    /// Coordinates which are `NaN` are never below the threshold.
    ///
    /// ## Example
    /// ```
    /// # use atomlist_rs::prelude::*;
    /// #
    /// assert!(Vector3D::new(9999.0, 9999.0, 9999.0).is_null_sentinel());
    /// // a single known axis makes the position known
    /// assert!(!Vector3D::new(9999.0, 1.5, 9999.0).is_null_sentinel());
    /// ```
    #[inline]
    pub fn is_null_sentinel(&self) -> bool {
        !(self.0.x < NULL_COORDINATE || self.0.y < NULL_COORDINATE || self.0.z < NULL_COORDINATE)
    }

    /// Get a vector with all coordinates set to `NULL_COORDINATE`.
    #[inline]
    pub fn null_sentinel() -> Self {
        Vector3D::new(NULL_COORDINATE, NULL_COORDINATE, NULL_COORDINATE)
    }
}

impl Default for Vector3D {
    /// Create a zero vector.
    fn default() -> Self {
        Vector3D(Vector3::new(0.0, 0.0, 0.0))
    }
}

impl Add for Vector3D {
    type Output = Vector3D;

    #[inline]
    fn add(self, rhs: Vector3D) -> Self::Output {
        Vector3D(self.0 + rhs.0)
    }
}

impl AddAssign<&Vector3D> for Vector3D {
    #[inline]
    fn add_assign(&mut self, rhs: &Vector3D) {
        self.0 += rhs.0;
    }
}

impl Div<f32> for Vector3D {
    type Output = Vector3D;

    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        Vector3D(self.0 / rhs)
    }
}

/*

    Ray and the result of casting it against a box.

    Unlike a camera ray, the direction here is not required to
    be unit length: t is measured in multiples of `direction`.

    @date: 9 Nov, 2025
*/

use serde::{Deserialize, Serialize};

use crate::aabb::Aabb;
use crate::json_parser::deser_vec3;
use crate::numeric::{AsVector3, Float, Vector3};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Ray {
    #[serde(rename = "Origin", deserialize_with = "deser_vec3")]
    pub origin: Vector3,
    #[serde(rename = "Direction", deserialize_with = "deser_vec3")]
    pub direction: Vector3,
}

impl Ray {

    pub fn new(origin: impl AsVector3, direction: impl AsVector3) -> Self {
        Self {
            origin: origin.as_vector3(),
            direction: direction.as_vector3(),
        }
    }

    #[inline]
    pub fn at(&self, t: Float) -> Vector3 {
        self.origin + self.direction * t // r(t) = o + dt
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.direction == Vector3::ZERO
    }

    /// Shorthand for `aabb.intersects_ray(self.origin, self.direction)`.
    #[inline]
    pub fn cast(&self, aabb: &Aabb) -> Option<RayHit> {
        aabb.intersects_ray(self.origin, self.direction)
    }
}


/// Where a ray meets a box and the outward normal of the face(s) there.
/// A ray through an edge or corner gets the normalized sum of the
/// faces' normals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RayHit {
    pub point: Vector3,
    pub normal: Vector3,
}

impl RayHit {
    pub fn new(point: Vector3, normal: Vector3) -> Self {
        Self { point, normal }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    #[inline]
    pub fn of(self, v: Vector3) -> Float {
        v[self.index()]
    }

    pub fn unit(self) -> Vector3 {
        match self {
            Axis::X => Vector3::X,
            Axis::Y => Vector3::Y,
            Axis::Z => Vector3::Z,
        }
    }
}

/// Which of the two planes of a slab a ray crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Min,
    Max,
}

impl Face {
    /// Sign of the outward normal along the slab's axis.
    #[inline]
    pub fn sign(self) -> Float {
        match self {
            Face::Min => -1.0,
            Face::Max => 1.0,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::IVector3;

    #[test]
    fn at_scales_unnormalized_direction() {
        let ray = Ray::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(ray.at(1.0), Vector3::ZERO);
        assert_eq!(ray.at(3.0), Vector3::splat(2.0));
    }

    #[test]
    fn integer_ray_and_degenerate_direction() {
        let ray = Ray::new(IVector3::new(1, 2, 3), IVector3::ZERO);
        assert_eq!(ray.origin, Vector3::new(1.0, 2.0, 3.0));
        assert!(ray.is_degenerate());
    }

    #[test]
    fn axis_unit_and_face_sign() {
        for axis in Axis::ALL {
            assert_eq!(axis.of(axis.unit()), 1.0);
        }
        assert_eq!(Axis::Y.unit() * Face::Min.sign(), Vector3::new(0.0, -1.0, 0.0));
    }
}

/*

    Declare numeric types used throughout this repo.

    Boxes and rays are always double precision. Integer and
    single precision points are accepted at the query boundary
    through AsVector3 and widened to Vector3 there.

    @date: 2 Oct, 2025
*/

use bevy_math::{DVec3, IVec3, Vec3};
pub type Int = i32;
pub type Float = f64;
pub type Vector3 = DVec3;
pub type IVector3 = IVec3;

/// Anything that can stand in for a point or a delta in box queries.
pub trait AsVector3: Copy {
    fn as_vector3(self) -> Vector3;
}

impl AsVector3 for Vector3 {
    #[inline]
    fn as_vector3(self) -> Vector3 {
        self
    }
}

impl AsVector3 for IVector3 {
    #[inline]
    fn as_vector3(self) -> Vector3 {
        self.as_dvec3()
    }
}

impl AsVector3 for Vec3 {
    #[inline]
    fn as_vector3(self) -> Vector3 {
        self.as_dvec3()
    }
}

impl AsVector3 for [Float; 3] {
    #[inline]
    fn as_vector3(self) -> Vector3 {
        Vector3::from_array(self)
    }
}

impl AsVector3 for [Int; 3] {
    #[inline]
    fn as_vector3(self) -> Vector3 {
        Vector3::new(self[0] as Float, self[1] as Float, self[2] as Float)
    }
}

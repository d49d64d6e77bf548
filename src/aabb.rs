/*

    Axis Aligned Bounding Box

    An immutable box [min, max] with strictly positive extent on
    every axis. Corners may be given in any order; they are sorted
    per axis on construction. offset and expand hand back new boxes.

    Ray intersection uses the slab method (each axis is a pair of
    parallel planes), remembering which face produced the entry and
    exit distances so the normal can be built at the end.

    @date: 9 Nov, 2025
*/

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GeomError, GeomResult};
use crate::interval::{FloatConst, Interval};
use crate::json_parser::deser_vec3;
use crate::numeric::{AsVector3, Float, Vector3};
use crate::ray::{Axis, Face, Ray, RayHit};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AabbCorners")]
pub struct Aabb {
    #[serde(rename = "Min")]
    min: Vector3,
    #[serde(rename = "Max")]
    max: Vector3,
}

impl Aabb {

    /// Box spanning two opposite corners, given in any order.
    pub fn new(a: impl AsVector3, b: impl AsVector3) -> GeomResult<Self> {
        let (a, b) = (a.as_vector3(), b.as_vector3());
        Self::from_sorted(a.min(b), a.max(b))
    }

    pub fn from_coords(x1: Float, y1: Float, z1: Float, x2: Float, y2: Float, z2: Float) -> GeomResult<Self> {
        Self::new(Vector3::new(x1, y1, z1), Vector3::new(x2, y2, z2))
    }

    // Corners are taken as-is; any axis with min >= max is rejected
    fn from_sorted(min: Vector3, max: Vector3) -> GeomResult<Self> {
        let valid = Axis::ALL
            .iter()
            .all(|&axis| Interval::new(axis.of(min), axis.of(max)).validate());

        if valid {
            Ok(Self { min, max })
        } else {
            Err(GeomError::InvalidExtent { min, max })
        }
    }

    #[inline]
    pub fn min(&self) -> Vector3 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Vector3 {
        self.max
    }

    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vector3 {
        (self.min + self.max) * 0.5
    }

    /// The [min, max] range of the box along `axis`.
    #[inline]
    pub fn slab(&self, axis: Axis) -> Interval {
        Interval::new(axis.of(self.min), axis.of(self.max))
    }

    #[inline]
    fn face_coord(&self, axis: Axis, face: Face) -> Float {
        match face {
            Face::Min => axis.of(self.min),
            Face::Max => axis.of(self.max),
        }
    }

    // ============================================================================================
    // Containment
    // ============================================================================================

    /// Inclusive on every face.
    pub fn contains(&self, point: impl AsVector3) -> bool {
        let point = point.as_vector3();
        Axis::ALL.iter().all(|&axis| self.slab(axis).contains(axis.of(point)))
    }

    pub fn contains_xyz(&self, x: Float, y: Float, z: Float) -> bool {
        self.contains(Vector3::new(x, y, z))
    }

    // ============================================================================================
    // Intersection
    // ============================================================================================

    /// True when the boxes overlap on all three axes. Touching faces count.
    pub fn intersects(&self, other: &Aabb) -> bool {
        Axis::ALL.iter().all(|&axis| self.slab(axis).overlaps(&other.slab(axis)))
    }

    /// Cast a ray from `origin` along `direction`.
    ///
    /// Returns the first point where the ray meets the box surface at
    /// t >= 0 together with the outward normal there. When the origin is
    /// inside the box that is the exit point. `direction` need not be
    /// normalized; a zero direction never hits.
    pub fn intersects_ray(&self, origin: impl AsVector3, direction: impl AsVector3) -> Option<RayHit> {
        let ray = Ray::new(origin, direction);
        if ray.is_degenerate() || !ray.origin.is_finite() || !ray.direction.is_finite() {
            return None;
        }
        let (origin, direction) = (ray.origin, ray.direction);

        let mut near = Crossing::at(FloatConst::NEG_INF);
        let mut far = Crossing::at(FloatConst::INF);

        for axis in Axis::ALL {
            let slab = self.slab(axis);
            let o = axis.of(origin);
            let d = axis.of(direction);

            if d == 0.0 {
                // Parallel to both planes of this slab
                if !slab.contains(o) {
                    return None;
                }
                continue;
            }

            let t_min_plane = (slab.min - o) / d;
            let t_max_plane = (slab.max - o) / d;
            let (enter, exit) = if d > 0.0 {
                ((t_min_plane, Face::Min), (t_max_plane, Face::Max))
            } else {
                ((t_max_plane, Face::Max), (t_min_plane, Face::Min))
            };

            near.keep_latest(axis, enter);
            far.keep_earliest(axis, exit);

            if near.t > far.t {
                return None;
            }
        }

        // Both crossings behind the origin
        if far.t < 0.0 {
            return None;
        }

        let crossing = if near.t < 0.0 { far } else { near };
        crossing.resolve(self, &ray)
    }

    pub fn cast(&self, ray: &Ray) -> Option<RayHit> {
        self.intersects_ray(ray.origin, ray.direction)
    }

    // ============================================================================================
    // Derived boxes
    // ============================================================================================

    /// Translate both corners by `delta`. Fails with `InvalidExtent` when
    /// rounding collapses an axis or the delta is not a number.
    pub fn offset(&self, delta: impl AsVector3) -> GeomResult<Self> {
        let delta = delta.as_vector3();
        Self::from_sorted(self.min + delta, self.max + delta)
    }

    pub fn offset_xyz(&self, dx: Float, dy: Float, dz: Float) -> GeomResult<Self> {
        self.offset(Vector3::new(dx, dy, dz))
    }

    /// Grow by `delta` in total per axis, half on each side, keeping the
    /// center. Negative components shrink; shrinking to zero or past it
    /// fails with `InvalidExtent`.
    pub fn expand(&self, delta: impl AsVector3) -> GeomResult<Self> {
        let half = delta.as_vector3() * 0.5;
        Self::from_sorted(self.min - half, self.max + half)
    }

    pub fn expand_xyz(&self, dx: Float, dy: Float, dz: Float) -> GeomResult<Self> {
        self.expand(Vector3::new(dx, dy, dz))
    }
}

impl fmt::Display for Aabb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AABB({} to {})", self.min, self.max)
    }
}


// Raw corners as they appear in JSON, validated through Aabb::new
#[derive(Deserialize)]
struct AabbCorners {
    #[serde(rename = "Min", deserialize_with = "deser_vec3")]
    min: Vector3,
    #[serde(rename = "Max", deserialize_with = "deser_vec3")]
    max: Vector3,
}

impl TryFrom<AabbCorners> for Aabb {
    type Error = GeomError;

    fn try_from(corners: AabbCorners) -> Result<Self, Self::Error> {
        Aabb::new(corners.min, corners.max)
    }
}


// Running entry or exit distance of the slab loop and the faces that
// produced it. Several faces share one t when the ray passes an edge
// or a corner.
#[derive(Debug, Clone, Copy)]
struct Crossing {
    t: Float,
    faces: [Option<Face>; 3],
}

impl Crossing {
    fn at(t: Float) -> Self {
        Self { t, faces: [None; 3] }
    }

    fn keep_latest(&mut self, axis: Axis, (t, face): (Float, Face)) {
        if t > self.t {
            *self = Self::at(t);
        }
        if t == self.t {
            self.faces[axis.index()] = Some(face);
        }
    }

    fn keep_earliest(&mut self, axis: Axis, (t, face): (Float, Face)) {
        if t < self.t {
            *self = Self::at(t);
        }
        if t == self.t {
            self.faces[axis.index()] = Some(face);
        }
    }

    // None when no face bounded the crossing
    fn resolve(&self, aabb: &Aabb, ray: &Ray) -> Option<RayHit> {
        if self.faces.iter().all(Option::is_none) {
            return None;
        }

        let mut point = ray.at(self.t);
        let mut normal = Vector3::ZERO;

        for axis in Axis::ALL {
            if let Some(face) = self.faces[axis.index()] {
                // Snap onto the plane, o + d*t may land just off it
                point[axis.index()] = aabb.face_coord(axis, face);
                normal += axis.unit() * face.sign();
            }
        }

        Some(RayHit::new(point, normal.normalize()))
    }
}

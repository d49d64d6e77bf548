

pub mod aabb;
pub mod error;
pub mod interval;
pub mod json_parser;
pub mod json_structs;
pub mod numeric;
pub mod probe;
pub mod ray;

pub mod prelude;

pub use aabb::Aabb;
pub use error::{GeomError, GeomResult};
pub use numeric::{AsVector3, Float, IVector3, Vector3};
pub use ray::{Axis, Face, Ray, RayHit};

/*

    Errors raised by this crate.

    Geometry queries never fail: a ray or box that misses is
    reported as None / false. The only geometric error is a box
    that would have no volume.

    @date: 9 Nov, 2025
*/

use thiserror::Error;

use crate::numeric::Vector3;

#[derive(Debug, Error)]
pub enum GeomError {
    /// Some axis ended up with `min >= max` (or a NaN bound).
    #[error("invalid AABB extent: min {min} is not strictly below max {max} on every axis")]
    InvalidExtent { min: Vector3, max: Vector3 },

    #[error("failed to read probe file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse probe file: {0}")]
    Json(#[from] serde_json::Error),
}

pub type GeomResult<T> = Result<T, GeomError>;

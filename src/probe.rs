/*

    Cast a batch of rays against a list of boxes and keep,
    for every ray, the hit closest to its origin.

    Boxes are tested one by one (no acceleration structure),
    rays are spread over the rayon pool when requested.

    @date: Oct 11, 2025
*/

use rayon::prelude::*;
use std::time::Instant;

use crate::aabb::Aabb;
use crate::json_structs::ProbeFile;
use crate::numeric::{Float, Vector3};
use crate::ray::{Ray, RayHit};
use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProbeHit {
    #[serde(rename = "Box")]
    pub box_index: usize,
    #[serde(rename = "Point")]
    pub point: Vector3,
    #[serde(rename = "Normal")]
    pub normal: Vector3,
    /// Euclidean distance from the ray origin to the hit point.
    #[serde(rename = "Distance")]
    pub distance: Float,
}

impl ProbeHit {
    fn new(box_index: usize, ray: &Ray, hit: RayHit) -> Self {
        Self {
            box_index,
            point: hit.point,
            normal: hit.normal,
            distance: hit.point.distance(ray.origin),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeRecord {
    #[serde(rename = "Ray")]
    pub ray_index: usize,
    #[serde(rename = "Hit")]
    pub hit: Option<ProbeHit>,
}

/// Iterate over all boxes to find the closest hit
pub fn closest_hit(ray: &Ray, boxes: &[Aabb]) -> Option<ProbeHit> {
    let mut closest: Option<ProbeHit> = None;
    for (i, aabb) in boxes.iter().enumerate() {
        if let Some(hit) = ray.cast(aabb) {
            let candidate = ProbeHit::new(i, ray, hit);
            // Ties keep the earlier box
            if closest.is_none_or(|c| candidate.distance < c.distance) {
                closest = Some(candidate);
            }
        }
    }
    closest
}

pub fn cast_all(probe: &ProbeFile) -> Vec<ProbeRecord> {
    let span = tracing::span!(tracing::Level::INFO, "cast_all");
    let _enter = span.enter();
    let start = Instant::now();

    let cast_one = |(i, ray): (usize, &Ray)| {
        if ray.is_degenerate() {
            warn!("Ray {} has a zero direction, it can not hit anything", i);
        }
        ProbeRecord {
            ray_index: i,
            hit: closest_hit(ray, &probe.boxes),
        }
    };

    let records: Vec<ProbeRecord> = if probe.settings.parallel {
        probe.rays.par_iter().enumerate().map(cast_one).collect()
    } else {
        probe.rays.iter().enumerate().map(cast_one).collect()
    };

    let hits = records.iter().filter(|r| r.hit.is_some()).count();
    info!(
        "Cast {} rays against {} boxes: {} hits ({:.2?})",
        probe.rays.len(),
        probe.boxes.len(),
        hits,
        start.elapsed()
    );

    if probe.settings.report_misses {
        records
    } else {
        records.into_iter().filter(|r| r.hit.is_some()).collect()
    }
}

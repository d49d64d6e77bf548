/*

    Declare data structs needed to parse probe JSON.

    - ProbeSettings: run options, every field optional
    - ProbeFile: settings + boxes + rays

    e.g.
    {
        "Settings": { "Parallel": "true", "ReportMisses": false },
        "Boxes": [ { "Min": "0 0 0", "Max": [2, 2, 2] } ],
        "Rays":  [ { "Origin": "-1 1 1", "Direction": "1 0 0" } ]
    }

    @date: 13 Oct, 2025
*/

use crate::aabb::Aabb;
use crate::json_parser::deser_bool;
use crate::ray::Ray;
use crate::prelude::*;

#[derive(Debug, Clone, Deserialize, SmartDefault)]
#[serde(default)]
pub struct ProbeSettings {
    /// Cast rays on the rayon thread pool.
    #[serde(rename = "Parallel", deserialize_with = "deser_bool")]
    #[default = true]
    pub parallel: bool,

    /// Keep a record for rays that hit nothing.
    #[serde(rename = "ReportMisses", deserialize_with = "deser_bool")]
    #[default = true]
    pub report_misses: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeFile {
    #[serde(rename = "Settings", default)]
    pub settings: ProbeSettings,
    #[serde(rename = "Boxes", default)]
    pub boxes: Vec<Aabb>,
    #[serde(rename = "Rays", default)]
    pub rays: Vec<Ray>,
}

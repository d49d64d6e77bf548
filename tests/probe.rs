use std::io::Write;

use aabb_geom::json_parser::{load_probe_file, parse_probe_str};
use aabb_geom::probe::{cast_all, closest_hit};
use aabb_geom::{Aabb, Ray, Vector3};

const PROBE: &str = r#"{
    "Settings": { "Parallel": "true", "ReportMisses": "true" },
    "Boxes": [
        { "Min": "0 0 0", "Max": "2 2 2" },
        { "Min": [5, 0, 0], "Max": [7, 2, 2] }
    ],
    "Rays": [
        { "Origin": "1 1 1",    "Direction": "1 0 0" },
        { "Origin": "-1 -1 -1", "Direction": "1 1 1" },
        { "Origin": "-1 -1 -1", "Direction": "0 1 0" },
        { "Origin": "10 1 1",   "Direction": "-1 0 0" }
    ]
}"#;

#[test]
fn probe_file_end_to_end() {
    let probe = parse_probe_str(PROBE).unwrap();
    let records = cast_all(&probe);
    assert_eq!(records.len(), 4);

    let inside = records[0].hit.unwrap();
    assert_eq!(inside.box_index, 0);
    assert_eq!(inside.point, Vector3::new(2.0, 1.0, 1.0));
    assert_eq!(inside.normal, Vector3::X);

    let corner = records[1].hit.unwrap();
    assert_eq!(corner.point, Vector3::ZERO);
    assert_eq!(corner.normal, Vector3::new(-1.0, -1.0, -1.0).normalize());

    assert!(records[2].hit.is_none());

    let far = records[3].hit.unwrap();
    assert_eq!(far.box_index, 1);
    assert_eq!(far.point, Vector3::new(7.0, 1.0, 1.0));
    assert_eq!(far.distance, 3.0);
}

#[test]
fn records_serialize_with_nulls_for_misses() {
    let probe = parse_probe_str(PROBE).unwrap();
    let json = serde_json::to_value(cast_all(&probe)).unwrap();
    assert!(json[2]["Hit"].is_null());
    assert_eq!(json[3]["Hit"]["Box"], 1);
}

#[test]
fn load_from_disk() {
    let path = std::env::temp_dir().join(format!("aabb-probe-{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(PROBE.as_bytes()).unwrap();
    drop(file);

    let probe = load_probe_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(probe.boxes.len(), 2);
    assert_eq!(probe.rays.len(), 4);
}

#[test]
fn library_api_without_json() {
    let boxes = [
        Aabb::new(Vector3::ZERO, Vector3::splat(2.0)).unwrap(),
        Aabb::new(Vector3::new(0.0, 0.0, -5.0), Vector3::new(2.0, 2.0, -3.0)).unwrap(),
    ];
    let ray = Ray::new(Vector3::new(1.0, 1.0, 10.0), Vector3::new(0.0, 0.0, -1.0));
    let hit = closest_hit(&ray, &boxes).unwrap();
    assert_eq!(hit.box_index, 0);
    assert_eq!(hit.point, Vector3::new(1.0, 1.0, 2.0));
    assert_eq!(hit.normal, Vector3::Z);
}

/*

    Provide utilities to parse probe files (boxes + rays) from JSON.

    The parser is somewhat forgiving: a vector may be given as an
    array [x, y, z] or as a string "x y z", and booleans may be
    given as true/false, "true"/"false" or 0/1.

    e.g. both
    "Origin": "1 1 1" and "Origin": [1, 1, 1]
    work as origin: Vector3 in source code

    @date: 2 Oct, 2025
*/

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserializer;
use serde::de::{self, SeqAccess, Visitor};

use crate::error::GeomResult;
use crate::json_structs::ProbeFile;
use crate::numeric::{Float, Vector3};
use crate::prelude::*;

pub fn load_probe_file(path: impl AsRef<Path>) -> GeomResult<ProbeFile> {
    let path = path.as_ref();
    let span = tracing::span!(tracing::Level::INFO, "load_probe_file");
    let _enter = span.enter();

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    debug!("Reading file from {}", path.display());

    let probe: ProbeFile = serde_json::from_reader(reader)?;
    info!("Loaded {} boxes and {} rays", probe.boxes.len(), probe.rays.len());
    Ok(probe)
}

pub fn parse_probe_str(json: &str) -> GeomResult<ProbeFile> {
    Ok(serde_json::from_str(json)?)
}


pub(crate) fn deser_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct BoolVisitor;

    impl<'de> Visitor<'de> for BoolVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "a boolean or a string containing true/false")
        }

        fn visit_bool<E>(self, v: bool) -> Result<bool, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_str<E>(self, v: &str) -> Result<bool, E>
        where
            E: de::Error,
        {
            match v.to_lowercase().as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(E::custom(format!("invalid bool '{}'", v))),
            }
        }

        fn visit_u64<E>(self, v: u64) -> Result<bool, E>
        where
            E: de::Error,
        {
            Ok(v != 0)
        }
    }

    deserializer.deserialize_any(BoolVisitor)
}


pub(crate) fn deser_vec3<'de, D>(deserializer: D) -> Result<Vector3, D::Error>
where
    D: Deserializer<'de>,
{
    struct Vec3Visitor;

    impl<'de> Visitor<'de> for Vec3Visitor {
        type Value = Vector3;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a Vec3 as a string 'x y z' or an array [x, y, z]")
        }

        // Given "X Y Z"
        fn visit_str<E>(self, value: &str) -> Result<Vector3, E>
        where
            E: de::Error,
        {
            parse_vec3_str(value).map_err(de::Error::custom)
        }

        // Given [X, Y, Z]
        fn visit_seq<A>(self, mut seq: A) -> Result<Vector3, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut next = || -> Result<Float, A::Error> {
                seq.next_element::<Float>()?
                    .ok_or_else(|| de::Error::custom("Expected 3 elements in Vec3 array"))
            };
            let (x, y, z) = (next()?, next()?, next()?);
            if seq.next_element::<Float>()?.is_some() {
                return Err(de::Error::custom("Expected only 3 elements in Vec3 array"));
            }
            Ok(Vector3::new(x, y, z))
        }
    }

    deserializer.deserialize_any(Vec3Visitor)
}

fn parse_vec3_str(s: &str) -> Result<Vector3, String> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(format!("Expected 3 values, got {}", parts.len()));
    }
    let x = parts[0].parse::<Float>().map_err(|e| e.to_string())?;
    let y = parts[1].parse::<Float>().map_err(|e| e.to_string())?;
    let z = parts[2].parse::<Float>().map_err(|e| e.to_string())?;
    Ok(Vector3::new(x, y, z))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeomError;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "deser_vec3")]
        v: Vector3,
        #[serde(deserialize_with = "deser_bool", default)]
        flag: bool,
    }

    #[test]
    fn vec3_from_string_or_array() {
        let a: Holder = serde_json::from_str(r#"{"v": "1 2.5 -3"}"#).unwrap();
        let b: Holder = serde_json::from_str(r#"{"v": [1, 2.5, -3]}"#).unwrap();
        assert_eq!(a.v, Vector3::new(1.0, 2.5, -3.0));
        assert_eq!(a.v, b.v);
    }

    #[test]
    fn vec3_wrong_arity_is_an_error() {
        assert!(serde_json::from_str::<Holder>(r#"{"v": "1 2"}"#).is_err());
        assert!(serde_json::from_str::<Holder>(r#"{"v": [1, 2, 3, 4]}"#).is_err());
        assert!(serde_json::from_str::<Holder>(r#"{"v": "1 two 3"}"#).is_err());
    }

    #[test]
    fn bool_accepts_strings_and_numbers() {
        let h: Holder = serde_json::from_str(r#"{"v": [0, 0, 0], "flag": "True"}"#).unwrap();
        assert!(h.flag);
        let h: Holder = serde_json::from_str(r#"{"v": [0, 0, 0], "flag": 0}"#).unwrap();
        assert!(!h.flag);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_probe_file("./definitely/not/here.json").unwrap_err();
        assert!(matches!(err, GeomError::Io(_)));
    }

    #[test]
    fn malformed_json_is_json_error() {
        assert!(matches!(parse_probe_str("{ not json"), Err(GeomError::Json(_))));
    }
}

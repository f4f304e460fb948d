//! Protocol time points.
//!
//! A `time_point_sec` is whole seconds since the Unix epoch. Binary mode
//! writes it as a little-endian `u32`. Textual mode writes a UTC timestamp
//! without zone suffix, e.g. `"2020-09-13T12:26:40"`.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{CodecError, Result};
use crate::payload::Payload;
use crate::reader::BinaryReader;
use crate::shape::{PrimitiveShape, Shape};

const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimePointSec(pub u32);

impl fmt::Display for TimePointSec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Every u32 second count is within chrono's range.
        let time = DateTime::from_timestamp(i64::from(self.0), 0).unwrap_or_default();
        write!(f, "{}", time.format(FORMAT))
    }
}

impl FromStr for TimePointSec {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.strip_suffix('Z').unwrap_or(s);
        let secs = NaiveDateTime::parse_from_str(trimmed, FORMAT)
            .map_err(|_| CodecError::InvalidTimePoint(s.to_string()))?
            .and_utc()
            .timestamp();
        u32::try_from(secs)
            .map(Self)
            .map_err(|_| CodecError::IntegerOverflow {
                value: i128::from(secs),
                target: "time_point_sec",
            })
    }
}

impl Serialize for TimePointSec {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimePointSec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Payload for TimePointSec {
    fn shape() -> Shape {
        Shape::Primitive(PrimitiveShape::TimePointSec)
    }

    fn to_text(&self) -> Result<Value> {
        Ok(Value::String(self.to_string()))
    }

    fn from_text(value: &Value) -> Result<Self> {
        value
            .as_str()
            .ok_or_else(|| CodecError::invalid_text("time point string", value))?
            .parse()
    }

    fn write_binary(&self, buf: &mut Vec<u8>) -> Result<()> {
        self.0.write_binary(buf)
    }

    fn read_binary(reader: &mut BinaryReader<'_>) -> Result<Self> {
        reader.read_u32_le().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{Encoded, Mode};
    use crate::payload::{decode, encode};
    use serde_json::json;

    #[test]
    fn test_textual_form() {
        let t = TimePointSec(1_600_000_000);
        assert_eq!(t.to_text().unwrap(), json!("2020-09-13T12:26:40"));
        assert_eq!(TimePointSec(0).to_string(), "1970-01-01T00:00:00");
        assert_eq!(
            TimePointSec(u32::MAX).to_string(),
            "2106-02-07T06:28:15"
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "2020-09-13T12:26:40".parse::<TimePointSec>().unwrap(),
            TimePointSec(1_600_000_000)
        );
        assert_eq!(
            "2020-09-13T12:26:40Z".parse::<TimePointSec>().unwrap(),
            TimePointSec(1_600_000_000)
        );
        assert_eq!(
            "yesterday".parse::<TimePointSec>(),
            Err(CodecError::InvalidTimePoint("yesterday".into()))
        );
        assert!(matches!(
            "1969-12-31T23:59:59".parse::<TimePointSec>(),
            Err(CodecError::IntegerOverflow { value: -1, .. })
        ));
    }

    #[test]
    fn test_rejects_numeric_text() {
        let result: Result<TimePointSec> = decode(&Encoded::from(json!(1_600_000_000)));
        assert!(matches!(result, Err(CodecError::InvalidText { .. })));
    }

    #[test]
    fn test_binary_is_little_endian_u32() {
        let encoded = encode(&TimePointSec(1_600_000_000), Mode::Binary).unwrap();
        assert_eq!(encoded.as_binary().unwrap(), &[0x00, 0x10, 0x5e, 0x5f]);
        assert_eq!(
            decode::<TimePointSec>(&encoded).unwrap(),
            TimePointSec(1_600_000_000)
        );
    }

    #[test]
    fn test_serde_matches_textual_mode() {
        let t = TimePointSec(86_400);
        assert_eq!(serde_json::to_value(t).unwrap(), t.to_text().unwrap());
        let back: TimePointSec = serde_json::from_value(json!("1970-01-02T00:00:00")).unwrap();
        assert_eq!(back, t);
    }
}

//! Textual mode for records through their serde derives.
//!
//! A record's binary half is written field by field, in declaration order,
//! by its `Payload` impl. Its textual half is the JSON object serde produces,
//! with field names taken from the derive (and any `#[serde(rename)]`).

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{CodecError, Result};

/// Serialize a record to its textual form.
pub fn to_text<T: Serialize>(record: &T) -> Result<Value> {
    serde_json::to_value(record).map_err(|e| CodecError::InvalidRecord(e.to_string()))
}

/// Deserialize a record from its textual form.
pub fn from_text<T: DeserializeOwned>(value: &Value) -> Result<T> {
    T::deserialize(value).map_err(|e| CodecError::InvalidRecord(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::TimePointSec;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Claim {
        start_claim: TimePointSec,
        #[serde(rename = "vesting_seconds")]
        seconds: u32,
    }

    #[test]
    fn test_round_trip() {
        let claim = Claim {
            start_claim: TimePointSec(86_400),
            seconds: 30,
        };
        let text = to_text(&claim).unwrap();
        assert_eq!(
            text,
            json!({ "start_claim": "1970-01-02T00:00:00", "vesting_seconds": 30 })
        );
        assert_eq!(from_text::<Claim>(&text).unwrap(), claim);
    }

    #[test]
    fn test_missing_field() {
        let err = from_text::<Claim>(&json!({ "start_claim": "1970-01-01T00:00:00" }))
            .unwrap_err();
        match err {
            CodecError::InvalidRecord(message) => assert!(message.contains("vesting_seconds")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_not_an_object() {
        assert!(matches!(
            from_text::<Claim>(&json!([1, 2])),
            Err(CodecError::InvalidRecord(_))
        ));
    }
}

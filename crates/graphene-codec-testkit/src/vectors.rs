//! Golden wire vectors.
//!
//! Each vector pins both encodings of one value. The binary form is
//! byte-for-byte what the Graphene protocol expects on the wire.

use graphene_codec_core::TimePointSec;

use crate::fixtures::{
    CddVestingPolicyInitializer, InstantVestingPolicyInitializer, LinearVestingPolicyInitializer,
    Sample, VestingPolicyInitializer,
};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector<T> {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// The decoded value.
    pub value: T,
    /// Expected binary encoding (hex).
    pub binary_hex: &'static str,
    /// Expected textual encoding (JSON).
    pub text: &'static str,
}

impl<T> GoldenVector<T> {
    /// The expected binary encoding.
    pub fn binary(&self) -> Vec<u8> {
        hex::decode(self.binary_hex).expect("golden vector hex is valid")
    }

    /// The expected textual encoding.
    pub fn text_value(&self) -> serde_json::Value {
        serde_json::from_str(self.text).expect("golden vector JSON is valid")
    }
}

/// Vectors for the vesting policy initializer union.
pub fn vesting_policy_vectors() -> Vec<GoldenVector<VestingPolicyInitializer>> {
    vec![
        GoldenVector {
            name: "linear vesting over one year",
            value: VestingPolicyInitializer::Linear(LinearVestingPolicyInitializer {
                begin_timestamp: TimePointSec(1_600_000_000),
                vesting_cliff_seconds: 86_400,
                vesting_duration_seconds: 31_536_000,
            }),
            binary_hex: "0000105e5f805101008033e101",
            text: r#"[0,{"begin_timestamp":"2020-09-13T12:26:40","vesting_cliff_seconds":86400,"vesting_duration_seconds":31536000}]"#,
        },
        GoldenVector {
            name: "cdd vesting from genesis",
            value: VestingPolicyInitializer::Cdd(CddVestingPolicyInitializer {
                start_claim: TimePointSec(0),
                vesting_seconds: 86_400,
            }),
            binary_hex: "010000000080510100",
            text: r#"[1,{"start_claim":"1970-01-01T00:00:00","vesting_seconds":86400}]"#,
        },
        GoldenVector {
            name: "instant vesting",
            value: VestingPolicyInitializer::Instant(InstantVestingPolicyInitializer),
            binary_hex: "02",
            text: r#"[2,{}]"#,
        },
    ]
}

/// Vectors for the `[A(i32), B(String)]` sample union.
pub fn sample_vectors() -> Vec<GoldenVector<Sample>> {
    vec![
        GoldenVector {
            name: "first alternative, single byte payload",
            value: Sample::A(5),
            binary_hex: "0005",
            text: "[0,5]",
        },
        GoldenVector {
            name: "first alternative, two byte varint",
            value: Sample::A(300),
            binary_hex: "00ac02",
            text: "[0,300]",
        },
        GoldenVector {
            name: "first alternative, negative payload",
            value: Sample::A(-1),
            binary_hex: "00ffffffffffffffffff01",
            text: "[0,-1]",
        },
        GoldenVector {
            name: "second alternative, string payload",
            value: Sample::B("hello".to_string()),
            binary_hex: "010568656c6c6f",
            text: r#"[1,"hello"]"#,
        },
        GoldenVector {
            name: "second alternative, empty string",
            value: Sample::B(String::new()),
            binary_hex: "0100",
            text: r#"[1,""]"#,
        },
    ]
}

//! Proptest generators for property-based testing.

use proptest::prelude::*;

use graphene_codec_core::{Mode, TimePointSec};

use crate::fixtures::{
    CddVestingPolicyInitializer, InstantVestingPolicyInitializer, LinearVestingPolicyInitializer,
    Sample, VestingPolicyInitializer,
};

/// Generate a wire mode.
pub fn mode() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Textual), Just(Mode::Binary)]
}

/// Generate any protocol time point.
pub fn time_point() -> impl Strategy<Value = TimePointSec> {
    any::<u32>().prop_map(TimePointSec)
}

/// Generate a linear vesting initializer.
pub fn linear_initializer() -> impl Strategy<Value = LinearVestingPolicyInitializer> {
    (time_point(), any::<u32>(), any::<u32>()).prop_map(|(begin, cliff, duration)| {
        LinearVestingPolicyInitializer {
            begin_timestamp: begin,
            vesting_cliff_seconds: cliff,
            vesting_duration_seconds: duration,
        }
    })
}

/// Generate a cdd vesting initializer.
pub fn cdd_initializer() -> impl Strategy<Value = CddVestingPolicyInitializer> {
    (time_point(), any::<u32>()).prop_map(|(start_claim, vesting_seconds)| {
        CddVestingPolicyInitializer {
            start_claim,
            vesting_seconds,
        }
    })
}

/// Generate any vesting policy initializer.
pub fn vesting_policy_initializer() -> impl Strategy<Value = VestingPolicyInitializer> {
    prop_oneof![
        linear_initializer().prop_map(VestingPolicyInitializer::Linear),
        cdd_initializer().prop_map(VestingPolicyInitializer::Cdd),
        Just(VestingPolicyInitializer::Instant(
            InstantVestingPolicyInitializer
        )),
    ]
}

/// Generate a sample union value.
pub fn sample() -> impl Strategy<Value = Sample> {
    prop_oneof![
        any::<i32>().prop_map(Sample::A),
        ".{0,64}".prop_map(Sample::B),
    ]
}

impl Arbitrary for VestingPolicyInitializer {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        vesting_policy_initializer().boxed()
    }
}

impl Arbitrary for Sample {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        sample().boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{sample_codec, vesting_policy_codec};
    use graphene_codec::StaticVariant;
    use graphene_codec_core::{varint, BinaryReader, CodecConfig, Encoded};

    proptest! {
        #[test]
        fn test_vesting_round_trip(value: VestingPolicyInitializer, mode in mode()) {
            let codec = vesting_policy_codec();
            let encoded = codec.encode(&value, mode).unwrap();
            prop_assert_eq!(encoded.mode(), mode);
            prop_assert_eq!(codec.decode(&encoded).unwrap(), value);
        }

        #[test]
        fn test_sample_round_trip(value: Sample, mode in mode()) {
            let codec = sample_codec().unwrap();
            let encoded = codec.encode(&value, mode).unwrap();
            prop_assert_eq!(codec.decode(&encoded).unwrap(), value);
        }

        #[test]
        fn test_binary_starts_with_position(value: VestingPolicyInitializer) {
            let codec = vesting_policy_codec();
            let tag = codec.tag_of(&value).unwrap();

            let mut buf = Vec::new();
            codec.encode_binary(&value, &mut buf).unwrap();
            let mut head = buf.as_slice();
            prop_assert_eq!(varint::read(&mut head).unwrap(), tag as u64);
        }

        #[test]
        fn test_text_first_element_is_position(value: VestingPolicyInitializer) {
            let codec = vesting_policy_codec();
            let tag = codec.tag_of(&value).unwrap();
            let text = codec.encode_text(&value).unwrap();
            prop_assert_eq!(text[0].as_u64(), Some(tag as u64));
        }

        #[test]
        fn test_concatenated_values_decode_in_sequence(
            values in prop::collection::vec(vesting_policy_initializer(), 0..16)
        ) {
            let codec = vesting_policy_codec();
            let mut buf = Vec::new();
            for value in &values {
                codec.encode_binary(value, &mut buf).unwrap();
            }

            let config = CodecConfig::default();
            let mut reader = BinaryReader::new(&buf, &config);
            for value in &values {
                prop_assert_eq!(&codec.decode_binary(&mut reader).unwrap(), value);
            }
            prop_assert!(reader.is_empty());
        }

        #[test]
        fn test_sort_groups_by_position(
            mut values in prop::collection::vec(vesting_policy_initializer(), 0..32)
        ) {
            let codec = vesting_policy_codec();
            let before = values.clone();
            codec.sort_by_kind(&mut values).unwrap();
            prop_assert!(codec.is_sorted_by_kind(&values).unwrap());

            // Stable: each kind's subsequence is unchanged.
            for kind in codec.kinds() {
                let of_kind = |v: &&VestingPolicyInitializer| v.kind() == kind;
                let expected: Vec<_> = before.iter().filter(of_kind).collect();
                let actual: Vec<_> = values.iter().filter(of_kind).collect();
                prop_assert_eq!(expected, actual);
            }
        }

        #[test]
        fn test_arbitrary_tags_never_panic(tag in any::<i64>(), tail in prop::collection::vec(any::<u8>(), 0..16)) {
            let codec = vesting_policy_codec();
            let mut bytes = Vec::new();
            varint::write_signed(tag, &mut bytes);
            bytes.extend_from_slice(&tail);
            let result = codec.decode(&Encoded::from(bytes));
            if !(0..3).contains(&tag) {
                prop_assert!(result.is_err());
            }
        }
    }
}

//! Golden wire vectors.
//!
//! Every implementation of the Graphene static variant layout must produce
//! these exact bytes and JSON, and decode them back to the same values.

use graphene_codec::{CodecConfig, CodecError, Encoded, Mode, StaticVariant, StaticVariantCodec};
use graphene_codec_testkit::fixtures::{sample_codec, vesting_policy_codec};
use graphene_codec_testkit::vectors::{sample_vectors, vesting_policy_vectors, GoldenVector};
use serde_json::json;
use std::fmt::Debug;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn check<V>(codec: &StaticVariantCodec<V>, vector: &GoldenVector<V>)
where
    V: StaticVariant + Debug + PartialEq,
{
    let binary = codec.encode(&vector.value, Mode::Binary).unwrap();
    assert_eq!(
        hex::encode(binary.as_binary().unwrap()),
        vector.binary_hex,
        "binary encoding of {}",
        vector.name
    );

    let text = codec.encode(&vector.value, Mode::Textual).unwrap();
    assert_eq!(
        text.as_textual().unwrap(),
        &vector.text_value(),
        "textual encoding of {}",
        vector.name
    );

    let from_binary = codec.decode(&Encoded::from(vector.binary())).unwrap();
    assert_eq!(from_binary, vector.value, "binary decoding of {}", vector.name);

    let from_text = codec.decode(&Encoded::from(vector.text_value())).unwrap();
    assert_eq!(from_text, vector.value, "textual decoding of {}", vector.name);
}

#[test]
fn test_vesting_policy_vectors() {
    init_tracing();
    let codec = vesting_policy_codec();
    for vector in vesting_policy_vectors() {
        check(codec, &vector);
    }
}

#[test]
fn test_sample_vectors() {
    init_tracing();
    let codec = sample_codec().unwrap();
    for vector in sample_vectors() {
        check(&codec, &vector);
    }
}

#[test]
fn test_decode_second_alternative_from_bytes() {
    let codec = sample_codec().unwrap();
    let bytes = vec![0x01, 0x05, b'h', b'e', b'l', b'l', b'o'];
    let value = codec.decode(&Encoded::from(bytes)).unwrap();
    assert_eq!(value, graphene_codec_testkit::Sample::B("hello".into()));
}

#[test]
fn test_object_form_decodes() {
    let codec = vesting_policy_codec();
    let from_object = codec
        .decode(&Encoded::from(json!({ "0": 2, "1": {} })))
        .unwrap();
    let from_array = codec.decode(&Encoded::from(json!([2, {}]))).unwrap();
    assert_eq!(from_object, from_array);
}

#[test]
fn test_out_of_range_tags() {
    let codec = vesting_policy_codec();
    assert_eq!(
        codec.decode(&Encoded::from(vec![0x03])),
        Err(CodecError::OutOfRangeTag { tag: 3, len: 3 })
    );
    assert_eq!(
        codec.decode(&Encoded::from(json!([7, {}]))),
        Err(CodecError::OutOfRangeTag { tag: 7, len: 3 })
    );
}

#[test]
fn test_trailing_bytes() {
    let codec = vesting_policy_codec();
    let encoded = Encoded::from(vec![0x02, 0xff]);
    assert_eq!(codec.decode(&encoded), Err(CodecError::TrailingBytes(1)));

    let lenient = CodecConfig::default().with_trailing_bytes(true);
    assert!(codec.decode_with(&encoded, &lenient).is_ok());
}

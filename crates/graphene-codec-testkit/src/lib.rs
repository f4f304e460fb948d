//! # Graphene Codec Testkit
//!
//! Testing utilities for the Graphene codec.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known values with their exact binary and textual encodings
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Sample unions, including the vesting policy initializer
//!
//! ## Golden Vectors
//!
//! ```rust
//! use graphene_codec::Mode;
//! use graphene_codec_testkit::fixtures::vesting_policy_codec;
//! use graphene_codec_testkit::vectors::vesting_policy_vectors;
//!
//! for vector in vesting_policy_vectors() {
//!     let encoded = vesting_policy_codec().encode(&vector.value, Mode::Binary).unwrap();
//!     assert_eq!(hex::encode(encoded.as_binary().unwrap()), vector.binary_hex);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use graphene_codec_testkit::fixtures::{vesting_policy_codec, VestingPolicyInitializer};
//! use graphene_codec_testkit::generators::mode;
//!
//! proptest! {
//!     #[test]
//!     fn round_trip(value: VestingPolicyInitializer, mode in mode()) {
//!         let codec = vesting_policy_codec();
//!         let encoded = codec.encode(&value, mode).unwrap();
//!         prop_assert_eq!(codec.decode(&encoded).unwrap(), value);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{sample_codec, vesting_policy_codec, Sample, VestingPolicyInitializer};

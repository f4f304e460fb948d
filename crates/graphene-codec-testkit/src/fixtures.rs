//! Test fixtures: sample unions and the records they carry.
//!
//! [`VestingPolicyInitializer`] mirrors the Graphene protocol's vesting policy
//! initializer, a three-member static variant of plain records. It also
//! implements [`Payload`] itself by delegating to its codec, so it can be
//! nested inside other payloads (lists, options, records).

use std::sync::OnceLock;

use graphene_codec::{Alternative, StaticVariant, StaticVariantCodec};
use graphene_codec_core::{record, BinaryReader, Payload, Result, Shape, TimePointSec};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Linear vesting: nothing before the cliff, then a straight line until the
/// duration ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearVestingPolicyInitializer {
    pub begin_timestamp: TimePointSec,
    pub vesting_cliff_seconds: u32,
    pub vesting_duration_seconds: u32,
}

impl Payload for LinearVestingPolicyInitializer {
    fn shape() -> Shape {
        Shape::record(
            "LinearVestingPolicyInitializer",
            [
                ("begin_timestamp", TimePointSec::shape()),
                ("vesting_cliff_seconds", u32::shape()),
                ("vesting_duration_seconds", u32::shape()),
            ],
        )
    }

    fn to_text(&self) -> Result<Value> {
        record::to_text(self)
    }

    fn from_text(value: &Value) -> Result<Self> {
        record::from_text(value)
    }

    fn write_binary(&self, buf: &mut Vec<u8>) -> Result<()> {
        self.begin_timestamp.write_binary(buf)?;
        self.vesting_cliff_seconds.write_binary(buf)?;
        self.vesting_duration_seconds.write_binary(buf)
    }

    fn read_binary(reader: &mut BinaryReader<'_>) -> Result<Self> {
        Ok(Self {
            begin_timestamp: TimePointSec::read_binary(reader)?,
            vesting_cliff_seconds: u32::read_binary(reader)?,
            vesting_duration_seconds: u32::read_binary(reader)?,
        })
    }
}

/// Coin-days-destroyed vesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CddVestingPolicyInitializer {
    pub start_claim: TimePointSec,
    pub vesting_seconds: u32,
}

impl Payload for CddVestingPolicyInitializer {
    fn shape() -> Shape {
        Shape::record(
            "CddVestingPolicyInitializer",
            [
                ("start_claim", TimePointSec::shape()),
                ("vesting_seconds", u32::shape()),
            ],
        )
    }

    fn to_text(&self) -> Result<Value> {
        record::to_text(self)
    }

    fn from_text(value: &Value) -> Result<Self> {
        record::from_text(value)
    }

    fn write_binary(&self, buf: &mut Vec<u8>) -> Result<()> {
        self.start_claim.write_binary(buf)?;
        self.vesting_seconds.write_binary(buf)
    }

    fn read_binary(reader: &mut BinaryReader<'_>) -> Result<Self> {
        Ok(Self {
            start_claim: TimePointSec::read_binary(reader)?,
            vesting_seconds: u32::read_binary(reader)?,
        })
    }
}

/// Instant vesting. Carries no fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstantVestingPolicyInitializer;

impl Payload for InstantVestingPolicyInitializer {
    fn shape() -> Shape {
        Shape::record("InstantVestingPolicyInitializer", [])
    }

    fn to_text(&self) -> Result<Value> {
        ().to_text()
    }

    fn from_text(value: &Value) -> Result<Self> {
        <()>::from_text(value).map(|()| Self)
    }

    fn write_binary(&self, _buf: &mut Vec<u8>) -> Result<()> {
        Ok(())
    }

    fn read_binary(_reader: &mut BinaryReader<'_>) -> Result<Self> {
        Ok(Self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VestingPolicyInitializer {
    Linear(LinearVestingPolicyInitializer),
    Cdd(CddVestingPolicyInitializer),
    Instant(InstantVestingPolicyInitializer),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VestingPolicyKind {
    Linear,
    Cdd,
    Instant,
}

impl StaticVariant for VestingPolicyInitializer {
    type Kind = VestingPolicyKind;

    fn kind(&self) -> VestingPolicyKind {
        match self {
            VestingPolicyInitializer::Linear(_) => VestingPolicyKind::Linear,
            VestingPolicyInitializer::Cdd(_) => VestingPolicyKind::Cdd,
            VestingPolicyInitializer::Instant(_) => VestingPolicyKind::Instant,
        }
    }
}

fn as_linear(v: &VestingPolicyInitializer) -> Option<&LinearVestingPolicyInitializer> {
    match v {
        VestingPolicyInitializer::Linear(p) => Some(p),
        _ => None,
    }
}

fn as_cdd(v: &VestingPolicyInitializer) -> Option<&CddVestingPolicyInitializer> {
    match v {
        VestingPolicyInitializer::Cdd(p) => Some(p),
        _ => None,
    }
}

fn as_instant(v: &VestingPolicyInitializer) -> Option<&InstantVestingPolicyInitializer> {
    match v {
        VestingPolicyInitializer::Instant(p) => Some(p),
        _ => None,
    }
}

/// The alternatives in protocol order: linear = 0, cdd = 1, instant = 2.
pub fn vesting_policy_alternatives() -> Vec<Alternative<VestingPolicyInitializer>> {
    vec![
        Alternative::new(
            VestingPolicyKind::Linear,
            VestingPolicyInitializer::Linear,
            as_linear,
        ),
        Alternative::new(
            VestingPolicyKind::Cdd,
            VestingPolicyInitializer::Cdd,
            as_cdd,
        ),
        Alternative::new(
            VestingPolicyKind::Instant,
            VestingPolicyInitializer::Instant,
            as_instant,
        ),
    ]
}

/// The shared vesting policy codec.
pub fn vesting_policy_codec() -> &'static StaticVariantCodec<VestingPolicyInitializer> {
    static CODEC: OnceLock<StaticVariantCodec<VestingPolicyInitializer>> = OnceLock::new();
    CODEC.get_or_init(|| {
        StaticVariantCodec::new(vesting_policy_alternatives())
            .expect("vesting policy alternatives are non-empty and distinct")
    })
}

impl Payload for VestingPolicyInitializer {
    fn shape() -> Shape {
        vesting_policy_codec().descriptor().clone().into()
    }

    fn to_text(&self) -> Result<Value> {
        vesting_policy_codec().encode_text(self)
    }

    fn from_text(value: &Value) -> Result<Self> {
        vesting_policy_codec().decode_text(value)
    }

    fn write_binary(&self, buf: &mut Vec<u8>) -> Result<()> {
        vesting_policy_codec().encode_binary(self, buf)
    }

    fn read_binary(reader: &mut BinaryReader<'_>) -> Result<Self> {
        vesting_policy_codec().decode_binary(reader)
    }
}

/// A minimal two-member union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sample {
    A(i32),
    B(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleKind {
    A,
    B,
}

impl StaticVariant for Sample {
    type Kind = SampleKind;

    fn kind(&self) -> SampleKind {
        match self {
            Sample::A(_) => SampleKind::A,
            Sample::B(_) => SampleKind::B,
        }
    }
}

fn as_a(v: &Sample) -> Option<&i32> {
    match v {
        Sample::A(x) => Some(x),
        _ => None,
    }
}

fn as_b(v: &Sample) -> Option<&String> {
    match v {
        Sample::B(x) => Some(x),
        _ => None,
    }
}

/// A fresh codec over `[A, B]`.
pub fn sample_codec() -> Result<StaticVariantCodec<Sample>> {
    StaticVariantCodec::builder()
        .alternative(Alternative::new(SampleKind::A, Sample::A, as_a))
        .alternative(Alternative::new(SampleKind::B, Sample::B, as_b))
        .build()
}

//! Ordering of variant values by kind.
//!
//! Values are ordered by the position of their alternative only. Two values
//! of the same alternative compare equal whatever their payloads hold, so
//! sorting groups values by kind and keeps their relative order within a
//! group.

use graphene_codec_core::Result;
use std::cmp::Ordering;

use crate::alternative::StaticVariant;
use crate::static_variant::StaticVariantCodec;

impl<V: StaticVariant> StaticVariantCodec<V> {
    /// Compare two values by the position of their alternatives.
    pub fn compare(&self, a: &V, b: &V) -> Result<Ordering> {
        Ok(self.tag_of(a)?.cmp(&self.tag_of(b)?))
    }

    /// Stable sort by kind.
    ///
    /// Every value is checked first: if any kind is unknown the slice is
    /// left untouched.
    pub fn sort_by_kind(&self, values: &mut [V]) -> Result<()> {
        for value in values.iter() {
            self.tag_of(value)?;
        }
        values.sort_by_key(|value| self.tag_of_kind(value.kind()).unwrap_or(usize::MAX));
        Ok(())
    }

    pub fn is_sorted_by_kind(&self, values: &[V]) -> Result<bool> {
        for pair in values.windows(2) {
            if self.compare(&pair[0], &pair[1])? == Ordering::Greater {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

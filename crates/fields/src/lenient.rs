//! Serde adapter for record structs that keep list fields as `Vec<String>`
//! instead of adopting [`CapabilityList`](crate::CapabilityList).
//!
//! `#[serde(with = "fields::lenient", default)]` accepts every wire shape on
//! the way in and re-runs the pre-save cleanup on the way out.

use serde::{Deserialize, Deserializer, Serializer};

use crate::{RawFieldValue, normalize};

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    RawFieldValue::deserialize(deserializer).map(|raw| normalize(raw).into_wire_array())
}

pub fn serialize<S>(items: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(normalize(items.to_vec()).as_slice())
}

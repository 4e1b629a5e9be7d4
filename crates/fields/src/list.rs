use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ts_rs::TS;

use crate::{RawFieldValue, normalize};

/// Canonical in-memory form of a list-valued field: ordered, trimmed,
/// non-empty plain-text items. Duplicates are allowed and order is the order
/// items were entered.
///
/// Serializes as a plain JSON array of strings (the save-payload shape) and
/// deserializes from any shape [`normalize`] accepts, so record structs can
/// embed the type directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, TS)]
#[ts(export)]
pub struct CapabilityList(pub(crate) Vec<String>);

impl CapabilityList {
    /// Builds a list from individual items, trimming each and dropping
    /// blanks. Items are taken verbatim, never parsed as JSON.
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            items
                .into_iter()
                .map(|item| item.into().trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
        )
    }

    /// Rebuilds a list from an edited text-control value: one item per line,
    /// trimmed, blank lines dropped. Lines that look like JSON stay literal;
    /// only [`normalize`] ever parses.
    pub fn from_editable_text(text: &str) -> Self {
        Self::from_items(text.lines())
    }

    /// The save-payload projection: the canonical items, unchanged.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consumes the list into the save-payload array.
    pub fn into_wire_array(self) -> Vec<String> {
        self.0
    }

    /// Joins the items for display in a multi-line text control.
    pub fn to_editable_text(&self) -> String {
        self.0.join("\n")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for CapabilityList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<RawFieldValue> for CapabilityList {
    fn from(value: RawFieldValue) -> Self {
        normalize(value)
    }
}

impl From<CapabilityList> for Vec<String> {
    fn from(list: CapabilityList) -> Self {
        list.0
    }
}

impl IntoIterator for CapabilityList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CapabilityList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for CapabilityList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CapabilityList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawFieldValue::deserialize(deserializer).map(|raw| normalize(raw))
    }
}

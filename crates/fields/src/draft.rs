use serde::{Deserialize, Serialize};

use crate::{CapabilityList, RawFieldValue, normalize};

/// Form-session holder for one list-valued field.
///
/// The raw wire value is normalized once on load and never kept around.
/// Editing goes through the text-control projection, the save payload reads
/// back out of canonical form, and the draft tracks whether the working copy
/// has drifted from the last committed state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CapabilityDraft {
    committed: CapabilityList,
    current: CapabilityList,
}

impl CapabilityDraft {
    /// Opens a draft from whatever the backend returned for the field.
    pub fn load(raw: impl Into<RawFieldValue>) -> Self {
        let committed = normalize(raw);
        Self {
            current: committed.clone(),
            committed,
        }
    }

    /// The working list in canonical form.
    pub fn list(&self) -> &CapabilityList {
        &self.current
    }

    /// The working list as a text-control value.
    pub fn editable_text(&self) -> String {
        self.current.to_editable_text()
    }

    /// Replaces the working list with the current text-control value.
    pub fn edit_text(&mut self, text: &str) {
        self.current = CapabilityList::from_editable_text(text);
    }

    /// True when the working list differs from the last committed state.
    pub fn is_dirty(&self) -> bool {
        self.current != self.committed
    }

    /// The save-payload projection of the working list.
    pub fn wire_payload(&self) -> &[String] {
        self.current.as_slice()
    }

    /// Marks the working list as saved.
    pub fn commit(&mut self) {
        self.committed = self.current.clone();
    }
}

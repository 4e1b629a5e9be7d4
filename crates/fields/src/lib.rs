//! Shared normalization layer for list-valued content fields.
//!
//! Capability, skill and topic fields reach the app in several wire shapes:
//! a real JSON array, a JSON-encoded string containing an array (sometimes
//! encoded twice by older save paths), or newline-delimited plain text from
//! an admin textarea. Everything funnels through [`normalize`] into a
//! [`CapabilityList`] before other code touches it, and the list converts
//! back to the two shapes consumers expect: a plain JSON array for save
//! payloads and newline-joined text for editing.

mod draft;
pub mod lenient;
mod list;
mod normalize;
mod raw;

pub use draft::CapabilityDraft;
pub use list::CapabilityList;
pub use normalize::normalize;
pub use raw::RawFieldValue;

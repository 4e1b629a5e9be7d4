//! Display-string localization for the public site.
//!
//! The translation backend lives behind the [`Translator`] seam; this crate
//! owns the locale vocabulary and the per-render memo that sends each source
//! string to the backend at most once.

mod locale;
mod memo;

pub use locale::Locale;
pub use memo::{TranslationError, TranslationMemo, Translator};

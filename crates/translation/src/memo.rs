use std::collections::HashMap;

use async_trait::async_trait;
use fields::CapabilityList;
use thiserror::Error;
use tracing::warn;

use crate::Locale;

#[derive(Debug, Clone, Error)]
pub enum TranslationError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("translation request timed out")]
    Timeout,
    #[error("translation backend returned {status}: {body}")]
    Http { status: u16, body: String },
}

/// Seam for the backend translation API. Implementations wrap whatever HTTP
/// client the consuming service uses; this crate never talks to the network.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate one display string from the authoring locale into `target`.
    async fn translate(&self, text: &str, target: Locale) -> Result<String, TranslationError>;
}

/// Per-render memo of translated display strings, keyed by source string.
///
/// Each source string goes to the backend at most once. Failures serve the
/// source string unchanged and are not memoized, so a later render may retry.
#[derive(Debug, Clone, Default)]
pub struct TranslationMemo {
    target: Locale,
    entries: HashMap<String, String>,
}

impl TranslationMemo {
    pub fn new(target: Locale) -> Self {
        Self {
            target,
            entries: HashMap::new(),
        }
    }

    pub fn target(&self) -> Locale {
        self.target
    }

    /// Number of memoized strings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The memoized translation, if this string was already resolved.
    pub fn cached(&self, source: &str) -> Option<&str> {
        self.entries.get(source).map(String::as_str)
    }

    /// Resolve one display string, calling the backend only on a memo miss.
    ///
    /// The authoring locale and empty strings are served without a call.
    pub async fn resolve(&mut self, translator: &dyn Translator, source: &str) -> String {
        if self.target.is_source() || source.is_empty() {
            return source.to_string();
        }
        if let Some(hit) = self.entries.get(source) {
            return hit.clone();
        }
        match translator.translate(source, self.target).await {
            Ok(translated) => {
                self.entries.insert(source.to_string(), translated.clone());
                translated
            }
            Err(error) => {
                warn!(
                    locale = %self.target,
                    source = %source,
                    error = %error,
                    "translation failed, serving source string"
                );
                source.to_string()
            }
        }
    }

    /// Resolve every item of a capability list, preserving canonical form.
    ///
    /// A translation that comes back blank falls back to its source item so
    /// list items stay non-empty.
    pub async fn localize_list(
        &mut self,
        translator: &dyn Translator,
        list: &CapabilityList,
    ) -> CapabilityList {
        let mut localized = Vec::with_capacity(list.len());
        for item in list.iter() {
            let resolved = self.resolve(translator, item).await;
            if resolved.trim().is_empty() {
                localized.push(item.clone());
            } else {
                localized.push(resolved);
            }
        }
        CapabilityList::from_items(localized)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use fields::normalize;

    use super::*;

    enum Reply {
        Prefixed,
        Padded,
        Blank,
        Refuse,
    }

    struct StaticTranslator {
        calls: AtomicUsize,
        reply: Reply,
    }

    impl StaticTranslator {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply: Reply::Prefixed,
            }
        }

        fn failing() -> Self {
            Self {
                reply: Reply::Refuse,
                ..Self::new()
            }
        }

        fn blank() -> Self {
            Self {
                reply: Reply::Blank,
                ..Self::new()
            }
        }

        fn padded() -> Self {
            Self {
                reply: Reply::Padded,
                ..Self::new()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Translator for StaticTranslator {
        async fn translate(&self, text: &str, target: Locale) -> Result<String, TranslationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Reply::Prefixed => Ok(format!("{target}:{text}")),
                Reply::Padded => Ok(format!("  {target}:{text}  ")),
                Reply::Blank => Ok("   ".to_string()),
                Reply::Refuse => Err(TranslationError::Transport(
                    "connection refused".to_string(),
                )),
            }
        }
    }

    #[tokio::test]
    async fn test_each_string_is_translated_once() {
        let translator = StaticTranslator::new();
        let mut memo = TranslationMemo::new(Locale::Fr);

        assert_eq!(memo.resolve(&translator, "Hello").await, "fr:Hello");
        assert_eq!(memo.resolve(&translator, "Hello").await, "fr:Hello");
        assert_eq!(translator.calls(), 1);
        assert_eq!(memo.cached("Hello"), Some("fr:Hello"));
        assert_eq!(memo.len(), 1);
    }

    #[tokio::test]
    async fn test_authoring_locale_and_blanks_skip_the_backend() {
        let translator = StaticTranslator::new();

        let mut memo = TranslationMemo::new(Locale::En);
        assert_eq!(memo.resolve(&translator, "Hello").await, "Hello");

        let mut memo = TranslationMemo::new(Locale::Ar);
        assert_eq!(memo.resolve(&translator, "").await, "");

        assert_eq!(translator.calls(), 0);
    }

    #[tokio::test]
    async fn test_failures_serve_source_and_are_retried() {
        let translator = StaticTranslator::failing();
        let mut memo = TranslationMemo::new(Locale::Fr);

        assert_eq!(memo.resolve(&translator, "Hello").await, "Hello");
        assert_eq!(memo.resolve(&translator, "Hello").await, "Hello");
        assert_eq!(translator.calls(), 2);
        assert!(memo.is_empty());
    }

    #[tokio::test]
    async fn test_capability_lists_localize_in_canonical_form() {
        let translator = StaticTranslator::new();
        let mut memo = TranslationMemo::new(Locale::Fr);

        let list = normalize(vec!["Solar basics", "Grid safety"]);
        let localized = memo.localize_list(&translator, &list).await;
        assert_eq!(
            localized.into_wire_array(),
            vec!["fr:Solar basics".to_string(), "fr:Grid safety".to_string()]
        );
        assert_eq!(translator.calls(), 2);
    }

    #[tokio::test]
    async fn test_blank_translations_fall_back_to_source_items() {
        let translator = StaticTranslator::blank();
        let mut memo = TranslationMemo::new(Locale::Fr);

        let list = normalize(vec!["Solar basics", "Grid safety"]);
        let localized = memo.localize_list(&translator, &list).await;
        assert_eq!(localized, list);
        assert_eq!(localized.len(), list.len());
        assert_eq!(translator.calls(), 2);
    }

    #[tokio::test]
    async fn test_padded_translations_are_trimmed_on_reform() {
        let translator = StaticTranslator::padded();
        let mut memo = TranslationMemo::new(Locale::Fr);

        let list = normalize(vec!["Solar basics"]);
        let localized = memo.localize_list(&translator, &list).await;
        assert_eq!(
            localized.into_wire_array(),
            vec!["fr:Solar basics".to_string()]
        );
    }

    #[tokio::test]
    async fn test_repeated_items_reuse_the_memo_across_lists() {
        let translator = StaticTranslator::new();
        let mut memo = TranslationMemo::new(Locale::Fr);

        let first = normalize(vec!["Solar basics", "Grid safety"]);
        let second = normalize(vec!["Grid safety", "Storage"]);
        memo.localize_list(&translator, &first).await;
        memo.localize_list(&translator, &second).await;

        assert_eq!(translator.calls(), 3);
        assert_eq!(memo.len(), 3);
    }
}

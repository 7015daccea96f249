//! Internationalization (i18n) support for fwportal
//!
//! User-facing fallback messages and error descriptions are translated.
//! Supported languages: English (en) and Spanish (es).
//!
//! # Environment Variables
//!
//! - `FWPORTAL_LANG`: Set the preferred language (en, es). Defaults to English.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fwportal::i18n::{t, set_locale};
//!
//! set_locale("es");
//! let msg = t!("views.topic.load_failed");
//! ```

// Note: rust_i18n::i18n! macro is declared in lib.rs (crate root)

/// Set the current locale for translations
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(&normalize_locale(locale));
}

/// Normalize locale code to supported format
///
/// - es-ES, es_AR, spanish, español -> es
/// - anything else -> en
fn normalize_locale(locale: &str) -> String {
    let lower = locale.to_lowercase();

    if lower.starts_with("es") || lower == "spanish" || lower == "español" {
        "es".to_string()
    } else {
        "en".to_string()
    }
}

/// Translate a key with optional parameters
///
/// This is a re-export of rust_i18n::t! for convenience.
#[doc(inline)]
pub use rust_i18n::t;

/// Translate `key` in the current locale.
///
/// For callers outside this crate, where `t!` cannot resolve the
/// translation tables.
pub fn message(key: &str) -> String {
    t!(key).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_locale() {
        assert_eq!(normalize_locale("es"), "es");
        assert_eq!(normalize_locale("es-AR"), "es");
        assert_eq!(normalize_locale("es_ES"), "es");
        assert_eq!(normalize_locale("Spanish"), "es");
        assert_eq!(normalize_locale("español"), "es");

        assert_eq!(normalize_locale("en"), "en");
        assert_eq!(normalize_locale("en-US"), "en");
        assert_eq!(normalize_locale("unknown"), "en");
    }

    #[test]
    fn test_message_resolves_key() {
        let text = message("views.vote.ready");
        assert!(!text.is_empty());
        assert_ne!(text, "views.vote.ready");
    }
}

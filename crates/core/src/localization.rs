//! Per-locale overrides for translatable fields.
//!
//! Entities keep their base (English) text in regular fields and any
//! translations in a flat map keyed `"<field>_<locale>"`.

use std::collections::BTreeMap;

use crate::types::Locale;

/// Translated field values keyed `"<field>_<locale>"`, e.g. `"slogan_zh"`.
pub type Translations = BTreeMap<String, String>;

/// Build the translation key for a field in a locale.
pub fn translation_key(field: &str, locale: Locale) -> String {
    format!("{field}_{}", locale.code())
}

/// Resolve a field for a locale, falling back to the base value.
///
/// Empty overrides are ignored so a blank translation never hides the
/// base text.
pub fn localized<'a>(
    translations: &'a Translations,
    field: &str,
    base: &'a str,
    locale: Locale,
) -> &'a str {
    translations
        .get(&translation_key(field, locale))
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(base)
}

/// Like [`localized`] for optional base values.
pub fn localized_opt<'a>(
    translations: &'a Translations,
    field: &str,
    base: Option<&'a str>,
    locale: Locale,
) -> Option<&'a str> {
    translations
        .get(&translation_key(field, locale))
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
        .or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Translations {
        let mut t = Translations::new();
        t.insert("name_zh".into(), "克劳德".into());
        t.insert("slogan_de".into(), "   ".into());
        t
    }

    #[test]
    fn uses_override_when_present() {
        assert_eq!(localized(&sample(), "name", "Claude", Locale::Zh), "克劳德");
    }

    #[test]
    fn falls_back_to_base_for_missing_locale() {
        assert_eq!(localized(&sample(), "name", "Claude", Locale::Ja), "Claude");
    }

    #[test]
    fn blank_override_is_ignored() {
        assert_eq!(localized(&sample(), "slogan", "Hi", Locale::De), "Hi");
    }

    #[test]
    fn optional_base_resolves_override_first() {
        let t = sample();
        assert_eq!(localized_opt(&t, "name", None, Locale::Zh), Some("克劳德"));
        assert_eq!(localized_opt(&t, "summary", None, Locale::Zh), None);
    }
}

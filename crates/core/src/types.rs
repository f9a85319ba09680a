use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Display locales the catalog carries translations for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
    Es,
    De,
    Ja,
}

impl Locale {
    pub const ALL: [Locale; 5] = [Locale::En, Locale::Zh, Locale::Es, Locale::De, Locale::Ja];

    /// The locale that `supports_secondary_locale` refers to.
    pub const SECONDARY: Locale = Locale::Zh;

    /// Suffix used for translated fields (`name_zh`, `slogan_de`, ...).
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
            Locale::Es => "es",
            Locale::De => "de",
            Locale::Ja => "ja",
        }
    }

    /// Parse a locale code, falling back to English for anything unknown.
    ///
    /// Accepts region-qualified tags such as `zh-CN` or `de_DE`.
    pub fn from_code_lossy(code: &str) -> Locale {
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        primary.parse().unwrap_or_default()
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|l| l.code() == s)
            .ok_or_else(|| format!("unsupported locale '{s}'"))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_codes() {
        assert_eq!("zh".parse::<Locale>(), Ok(Locale::Zh));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn lossy_parse_handles_regions_and_unknowns() {
        assert_eq!(Locale::from_code_lossy("zh-CN"), Locale::Zh);
        assert_eq!(Locale::from_code_lossy("DE_de"), Locale::De);
        assert_eq!(Locale::from_code_lossy("fr"), Locale::En);
        assert_eq!(Locale::from_code_lossy(""), Locale::En);
    }
}

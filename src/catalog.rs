use serde::{Deserialize, Serialize};

/// A selectable target language: the code sent to the service and the name
/// shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Ordered, immutable list of languages offered by the view.
///
/// Built once from configuration at startup and shared behind an `Arc`.
/// Codes are matched exactly; they are passed through to the service verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageCatalog {
    languages: Vec<Language>,
}

impl LanguageCatalog {
    pub fn new(languages: Vec<Language>) -> Self {
        Self { languages }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.languages.iter().any(|l| l.code == code)
    }

    pub fn display_name(&self, code: &str) -> Option<&str> {
        self.languages
            .iter()
            .find(|l| l.code == code)
            .map(|l| l.name.as_str())
    }

    /// Human-readable name for `code`, or the code itself when it is not in
    /// the catalog.
    pub fn label<'a>(&'a self, code: &'a str) -> &'a str {
        self.display_name(code).unwrap_or(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.languages.iter()
    }

    pub fn codes(&self) -> Vec<&str> {
        self.languages.iter().map(|l| l.code.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Whether `code` names English, given the service's English code.
///
/// Regional variants count: `EN-US` is English when the English code is `EN`
/// and the other way round.
pub fn is_english(code: &str, english_code: &str) -> bool {
    if code.eq_ignore_ascii_case(english_code) {
        return true;
    }
    primary_subtag(code).eq_ignore_ascii_case(primary_subtag(english_code))
}

fn primary_subtag(code: &str) -> &str {
    code.split('-').next().unwrap_or(code)
}

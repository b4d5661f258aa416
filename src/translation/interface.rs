use std::fmt;

use async_trait::async_trait;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::RequestError;

/// Request body for the translation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    #[serde(default)]
    pub target_langs: Vec<String>,
    /// `null` in multi-language mode
    #[serde(default)]
    pub single_language: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub analyze: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub question_response: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Response body of the translation endpoint, consumed as-is
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub translations: LanguageMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_source_lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_responses: Option<LanguageMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english_responses: Option<LanguageMap>,
}

/// `language code -> text` map that keeps the order entries arrived in.
///
/// A repeated key keeps its first position and takes the last value, the
/// same way a JSON object literal behaves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageMap(Vec<(String, String)>);

impl LanguageMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: impl Into<String>, text: impl Into<String>) {
        let code = code.into();
        let text = text.into();
        match self.0.iter_mut().find(|(c, _)| *c == code) {
            Some(entry) => entry.1 = text,
            None => self.0.push((code, text)),
        }
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, t)| t.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(c, t)| (c.as_str(), t.as_str()))
    }

    pub fn codes(&self) -> Vec<&str> {
        self.0.iter().map(|(c, _)| c.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LanguageMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = LanguageMap::new();
        for (code, text) in iter {
            map.insert(code, text);
        }
        map
    }
}

impl Serialize for LanguageMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (code, text) in &self.0 {
            map.serialize_entry(code, text)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LanguageMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LanguageMapVisitor;

        impl<'de> Visitor<'de> for LanguageMapVisitor {
            type Value = LanguageMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of language codes to strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<LanguageMap, A::Error> {
                let mut map = LanguageMap::new();
                while let Some((code, text)) = access.next_entry::<String, String>()? {
                    map.insert(code, text);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(LanguageMapVisitor)
    }
}

/// Remote translation/analysis/question-answering service
#[async_trait]
pub trait TranslationService: Send + Sync {
    /// Submit one request; the response is treated as a single atomic unit
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, RequestError>;

    /// Whether the service answers at all
    async fn health_check(&self) -> Result<bool, RequestError>;
}

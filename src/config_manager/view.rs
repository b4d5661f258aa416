use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::{Language, LanguageCatalog};
use crate::view::state::RequestMode;

/// Named bundles of catalog and feature flags, one per frontend flavour the
/// service has been paired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantPreset {
    /// EN/DE/FR/JA, analysis in multi-language mode, AI responses
    Classic,
    /// EN-US/AR/ZH/ES, AI responses, no analysis
    Americas,
    /// EN-US/FR/DE/ZH-HANS/RU, translations only
    Legacy,
}

const CLASSIC: &[(&str, &str)] = &[
    ("EN", "English"),
    ("DE", "German"),
    ("FR", "French"),
    ("JA", "Japanese"),
];

const AMERICAS: &[(&str, &str)] = &[
    ("EN-US", "English (American)"),
    ("AR", "Arabic"),
    ("ZH", "Chinese"),
    ("ES", "Spanish"),
];

const LEGACY: &[(&str, &str)] = &[
    ("EN-US", "English-US"),
    ("FR", "French"),
    ("DE", "German"),
    ("ZH-HANS", "Simplified Chinese"),
    ("RU", "Russian"),
];

/// When to ask the service for a translation analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyzePolicy {
    Never,
    Always,
    MultiLanguageOnly,
}

impl AnalyzePolicy {
    pub fn applies(&self, mode: RequestMode) -> bool {
        match self {
            AnalyzePolicy::Never => false,
            AnalyzePolicy::Always => true,
            AnalyzePolicy::MultiLanguageOnly => mode == RequestMode::MultiLanguage,
        }
    }
}

/// View configuration as written in the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub preset: Option<VariantPreset>,
    pub languages: Vec<Language>,
    pub target_langs: Vec<String>,
    pub english_code: String,
    pub analyze: AnalyzePolicy,
    pub question_response: bool,
    /// Show request failures in the view instead of only logging them
    pub surface_errors: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        let mut config = Self {
            preset: None,
            languages: Vec::new(),
            target_langs: Vec::new(),
            english_code: String::new(),
            analyze: AnalyzePolicy::Never,
            question_response: false,
            surface_errors: false,
        };
        config.apply_preset(VariantPreset::Classic);
        config
    }
}

impl ViewConfig {
    pub fn from_preset(preset: VariantPreset) -> Self {
        let mut config = Self::default();
        config.apply_preset(preset);
        config.preset = Some(preset);
        config
    }

    /// Copy with the preset, if any, applied over the language fields
    pub fn resolved(&self) -> ViewConfig {
        let mut config = self.clone();
        if let Some(preset) = self.preset {
            config.apply_preset(preset);
        }
        config
    }

    fn apply_preset(&mut self, preset: VariantPreset) {
        let (languages, english, analyze, question_response) = match preset {
            VariantPreset::Classic => (CLASSIC, "EN", AnalyzePolicy::MultiLanguageOnly, true),
            VariantPreset::Americas => (AMERICAS, "EN-US", AnalyzePolicy::Never, true),
            VariantPreset::Legacy => (LEGACY, "EN-US", AnalyzePolicy::Never, false),
        };

        self.languages = languages
            .iter()
            .map(|(code, name)| Language::new(*code, *name))
            .collect();
        self.target_langs = languages.iter().map(|(code, _)| code.to_string()).collect();
        self.english_code = english.to_string();
        self.analyze = analyze;
        self.question_response = question_response;
    }

    pub fn validate(&self) -> Result<(), String> {
        let config = self.resolved();
        if config.languages.is_empty() {
            return Err("view.languages must not be empty".to_string());
        }

        let mut seen = HashSet::new();
        for language in &config.languages {
            if language.code.trim().is_empty() {
                return Err("view.languages contains an empty code".to_string());
            }
            if !seen.insert(language.code.as_str()) {
                return Err(format!("view.languages lists {} twice", language.code));
            }
        }

        if config.target_langs.is_empty() {
            return Err("view.target_langs must not be empty".to_string());
        }
        if let Some(code) = config.target_langs.iter().find(|c| !seen.contains(c.as_str())) {
            return Err(format!("view.target_langs: {} is not in view.languages", code));
        }
        if config.english_code.trim().is_empty() {
            return Err("view.english_code must not be empty".to_string());
        }
        Ok(())
    }
}

/// Resolved, immutable settings the view runs with
#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub catalog: Arc<LanguageCatalog>,
    /// Ordered, without duplicates
    pub target_langs: Vec<String>,
    pub english_code: String,
    pub analyze: AnalyzePolicy,
    pub question_response: bool,
    pub surface_errors: bool,
}

impl ViewSettings {
    pub fn from_config(view_config: &ViewConfig) -> Self {
        let config = view_config.resolved();

        let mut seen = HashSet::new();
        let target_langs = config
            .target_langs
            .into_iter()
            .filter(|code| seen.insert(code.clone()))
            .collect();

        Self {
            catalog: Arc::new(LanguageCatalog::new(config.languages)),
            target_langs,
            english_code: config.english_code,
            analyze: config.analyze,
            question_response: config.question_response,
            surface_errors: config.surface_errors,
        }
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::from_config(&ViewConfig::default())
    }
}

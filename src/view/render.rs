use std::fmt;

use crate::catalog::{is_english, LanguageCatalog};
use crate::translation::TranslationResult;
use crate::view::state::{RequestMode, TranslationRequestView};

pub const TRANSLATIONS: &str = "Translations";
pub const ANALYSIS: &str = "Analysis";
pub const AI_RESPONSES: &str = "AI Responses";

/// One language entry of a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub code: String,
    /// Catalog name, or the raw code when unknown
    pub label: String,
    pub text: String,
    /// English back-reference for AI responses
    pub secondary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Cards(Vec<Card>),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub body: SectionBody,
}

impl Section {
    pub fn cards(&self) -> &[Card] {
        match &self.body {
            SectionBody::Cards(cards) => cards,
            SectionBody::Text(_) => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResult {
    pub detected_source: Option<String>,
    pub sections: Vec<Section>,
}

impl RenderedResult {
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    pub fn titles(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.title).collect()
    }
}

/// Lay out a result as sections. Pure: same input, same output.
pub fn render_result(
    result: &TranslationResult,
    catalog: &LanguageCatalog,
    english_code: &str,
) -> RenderedResult {
    let card = |code: &str, text: &str, secondary: Option<String>| Card {
        code: code.to_string(),
        label: catalog.label(code).to_string(),
        text: text.to_string(),
        secondary,
    };

    let mut sections = vec![Section {
        title: TRANSLATIONS,
        body: SectionBody::Cards(
            result
                .translations
                .iter()
                .map(|(code, text)| card(code, text, None))
                .collect(),
        ),
    }];

    if let Some(analysis) = result.analysis.as_deref().filter(|a| !a.is_empty()) {
        sections.push(Section {
            title: ANALYSIS,
            body: SectionBody::Text(analysis.to_string()),
        });
    }

    if let Some(responses) = &result.question_responses {
        let english = result.english_responses.as_ref();
        let cards = responses
            .iter()
            .map(|(code, text)| {
                let secondary = english
                    .filter(|_| !is_english(code, english_code))
                    .and_then(|map| map.get(code))
                    .map(str::to_string);
                card(code, text, secondary)
            })
            .collect();
        sections.push(Section {
            title: AI_RESPONSES,
            body: SectionBody::Cards(cards),
        });
    }

    RenderedResult {
        detected_source: result.detected_source_lang.clone(),
        sections,
    }
}

/// Full screen for the view: form status, optional failure line, result.
pub fn render_view(view: &TranslationRequestView) -> String {
    let settings = view.settings();
    let mut out = String::new();

    let mode = match view.mode() {
        RequestMode::MultiLanguage => format!("multi-language ({})", settings.target_langs.join(", ")),
        RequestMode::SingleLanguage => match view.selected_language() {
            Some(code) => format!("single-language: {}", settings.catalog.label(code)),
            None => "single-language: (select a language)".to_string(),
        },
    };
    out.push_str(&format!("Mode: {}\n", mode));
    out.push_str(&format!("Draft: {}\n", view.draft()));

    if view.is_busy() {
        out.push_str("Processing...\n");
    } else if !view.can_submit() {
        out.push_str("Select a language to enable Translate & Analyze\n");
    }

    if settings.surface_errors {
        if let Some(failure) = view.last_failure() {
            out.push_str(&format!("! {}\n", failure));
        }
    }

    if let Some(result) = view.result() {
        if let Some(at) = view.updated_at() {
            out.push_str(&format!("Updated {}\n", at.format("%H:%M:%S")));
        }
        out.push('\n');
        out.push_str(&render_result(result, &settings.catalog, &settings.english_code).to_string());
    }
    out
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.label == self.code {
            writeln!(f, "  {}", self.code)?;
        } else {
            writeln!(f, "  {} ({})", self.code, self.label)?;
        }
        if self.text.is_empty() {
            writeln!(f, "    ")?;
        }
        for line in self.text.lines() {
            writeln!(f, "    {}", line)?;
        }
        if let Some(english) = &self.secondary {
            writeln!(f, "    English: {}", english)?;
        }
        Ok(())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        match &self.body {
            SectionBody::Cards(cards) => {
                for card in cards {
                    write!(f, "{}", card)?;
                }
            }
            SectionBody::Text(text) => {
                for line in text.lines() {
                    writeln!(f, "  {}", line)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for RenderedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.detected_source {
            writeln!(f, "Detected source language: {}", source)?;
        }
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", section)?;
        }
        Ok(())
    }
}

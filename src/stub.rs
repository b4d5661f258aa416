//! Deterministic stand-in for the translation endpoint.
//!
//! Produces responses with the same shape as the real service so the console
//! can be exercised without DeepL or OpenAI credentials. Nothing is
//! translated: each entry is the input text tagged with its language code.

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::info;

use crate::catalog::is_english;
use crate::translation::{LanguageMap, TranslationRequest, TranslationResult};

const ENGLISH: &str = "EN";
/// Reported as the source language of every request
const DETECTED_SOURCE: &str = "EN";

pub fn router() -> Router {
    Router::new()
        .route("/api/translate/auto", post(translate_auto))
        .route("/health", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn translate_auto(
    Json(request): Json<TranslationRequest>,
) -> Result<Json<TranslationResult>, (StatusCode, Json<Value>)> {
    if request.text.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "text must not be empty" })),
        ));
    }

    info!(
        "Stub translation: targets={:?} single={:?}",
        request.target_langs, request.single_language
    );
    Ok(Json(respond(&request)))
}

/// Build the canned response for `request`
pub fn respond(request: &TranslationRequest) -> TranslationResult {
    let targets: Vec<&str> = match &request.single_language {
        Some(code) => vec![code.as_str()],
        None => request.target_langs.iter().map(String::as_str).collect(),
    };

    let translations: LanguageMap = targets
        .iter()
        .map(|code| (*code, format!("[{}] {}", code, request.text)))
        .collect();

    let analysis = request.analyze.then(|| {
        format!(
            "{} translations of {:?}: {}",
            translations.len(),
            request.text,
            translations.codes().join(", ")
        )
    });

    let (question_responses, english_responses) = if request.question_response {
        let answers: LanguageMap = targets
            .iter()
            .map(|code| (*code, format!("[{}] answer: {}", code, request.text)))
            .collect();
        let english: LanguageMap = targets
            .iter()
            .filter(|code| !is_english(code, ENGLISH))
            .map(|code| (*code, format!("[{}] answer: {}", ENGLISH, request.text)))
            .collect();
        (Some(answers), Some(english))
    } else {
        (None, None)
    };

    TranslationResult {
        translations,
        detected_source_lang: Some(DETECTED_SOURCE.to_string()),
        analysis,
        question_responses,
        english_responses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn request(single: Option<&str>, analyze: bool, question_response: bool) -> TranslationRequest {
        TranslationRequest {
            text: "Bonjour".to_string(),
            target_langs: vec!["EN".to_string(), "FR".to_string()],
            single_language: single.map(str::to_string),
            analyze,
            question_response,
        }
    }

    #[test]
    fn multi_language_covers_every_target() {
        let result = respond(&request(None, false, false));
        assert_eq!(result.translations.codes(), vec!["EN", "FR"]);
        assert_eq!(result.translations.get("FR"), Some("[FR] Bonjour"));
        assert!(result.analysis.is_none());
        assert!(result.question_responses.is_none());
        assert_eq!(result.detected_source_lang.as_deref(), Some("EN"));
    }

    #[test]
    fn single_language_narrows_targets() {
        let result = respond(&request(Some("JA"), false, true));
        assert_eq!(result.translations.codes(), vec!["JA"]);
        let english = result.english_responses.unwrap();
        assert_eq!(english.get("JA"), Some("[EN] answer: Bonjour"));
    }

    #[test]
    fn flags_add_optional_sections() {
        let result = respond(&request(None, true, true));
        assert!(result.analysis.unwrap().starts_with("2 translations"));
        let answers = result.question_responses.unwrap();
        assert_eq!(answers.codes(), vec!["EN", "FR"]);
        let english = result.english_responses.unwrap();
        assert!(english.get("EN").is_none());
        assert_eq!(english.codes(), vec!["FR"]);
        assert_eq!(english.get("FR"), Some("[EN] answer: Bonjour"));
    }

    #[test]
    fn regional_english_target_gets_no_back_translation() {
        let mut request = request(Some("EN-US"), false, true);
        request.target_langs = vec!["EN-US".to_string(), "ES".to_string()];
        let result = respond(&request);
        assert_eq!(result.question_responses.unwrap().codes(), vec!["EN-US"]);
        assert!(result.english_responses.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_text_is_rejected() {
        let response = router()
            .oneshot(
                Request::post("/api/translate/auto")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"text":"   ","target_langs":["EN"],"single_language":null}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn health_endpoint_answers() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

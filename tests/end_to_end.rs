use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};

use polyglot_console::config_manager::{ClientConfig, ViewConfig, ViewSettings, VariantPreset};
use polyglot_console::translation::TranslationServiceFactory;
use polyglot_console::view::render::{AI_RESPONSES, ANALYSIS, TRANSLATIONS};
use polyglot_console::view::{
    render_result, CompletionOutcome, TranslationRequestView, ViewController,
};
use polyglot_console::{stub, terminal};

type Captured = Arc<Mutex<Vec<Value>>>;

async fn spawn_server(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Endpoint that records each body and answers with a fixed status/body
async fn spawn_fixed(status: StatusCode, body: &'static str) -> (SocketAddr, Captured) {
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route(
            "/api/translate/auto",
            post(
                move |State(captured): State<Captured>, Json(request): Json<Value>| async move {
                    captured.lock().unwrap().push(request);
                    (status, [("content-type", "application/json")], body)
                },
            ),
        )
        .with_state(captured.clone());
    (spawn_server(app).await, captured)
}

fn controller_for(addr: SocketAddr, view_config: &ViewConfig) -> ViewController {
    let client = ClientConfig {
        base_url: format!("http://{}", addr),
        ..ClientConfig::default()
    };
    let service = TranslationServiceFactory::create(&client).unwrap();
    let view = TranslationRequestView::new(ViewSettings::from_config(view_config));
    ViewController::new(view, service)
}

#[tokio::test]
async fn bonjour_in_multi_language_mode_renders_one_card() {
    let (addr, captured) = spawn_fixed(StatusCode::OK, r#"{"translations":{"EN":"Hello"}}"#).await;
    let mut controller = controller_for(addr, &ViewConfig::default());

    controller.view_mut().edit_text("Bonjour");
    let outcome = controller.submit_and_wait().await;
    assert_eq!(outcome, Some(CompletionOutcome::Applied));
    assert!(!controller.is_busy());

    let view = controller.view();
    let settings = view.settings();
    let rendered = render_result(view.result().unwrap(), &settings.catalog, &settings.english_code);
    assert_eq!(rendered.titles(), vec![TRANSLATIONS]);
    let cards = rendered.section(TRANSLATIONS).unwrap().cards();
    assert_eq!(cards.len(), 1);
    assert_eq!((cards[0].code.as_str(), cards[0].text.as_str()), ("EN", "Hello"));
    assert!(rendered.section(ANALYSIS).is_none());
    assert!(rendered.section(AI_RESPONSES).is_none());

    let requests = captured.lock().unwrap();
    assert_eq!(
        requests[0],
        json!({
            "text": "Bonjour",
            "target_langs": ["EN", "DE", "FR", "JA"],
            "single_language": null,
            "analyze": true,
            "question_response": true
        })
    );
}

#[tokio::test]
async fn server_error_leaves_result_untouched() {
    let (addr, _) = spawn_fixed(
        StatusCode::BAD_REQUEST,
        r#"{"detail":"DeepL API key is not configured"}"#,
    )
    .await;
    let mut controller = controller_for(addr, &ViewConfig::default());
    controller.view_mut().edit_text("Bonjour");

    let outcome = controller.submit_and_wait().await.unwrap();
    match outcome {
        CompletionOutcome::Failed(message) => assert!(message.contains("400")),
        other => panic!("expected failure, got {:?}", other),
    }
    assert!(controller.view().result().is_none());
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn malformed_body_is_a_failure() {
    let (addr, _) = spawn_fixed(StatusCode::OK, r#"{"translations": "#).await;
    let mut controller = controller_for(addr, &ViewConfig::default());

    let outcome = controller.submit_and_wait().await.unwrap();
    assert!(matches!(outcome, CompletionOutcome::Failed(_)));
    assert!(controller.view().result().is_none());
}

#[tokio::test]
async fn stub_round_trip_in_single_language_mode() {
    let addr = spawn_server(stub::router()).await;
    let mut controller = controller_for(addr, &ViewConfig::from_preset(VariantPreset::Americas));

    controller.view_mut().edit_text("¿Dónde está la biblioteca?");
    controller.view_mut().toggle_mode();
    controller.view_mut().select_language("ES").unwrap();
    assert_eq!(controller.submit_and_wait().await, Some(CompletionOutcome::Applied));

    let result = controller.view().result().unwrap();
    assert_eq!(result.translations.codes(), vec!["ES"]);
    assert!(result.analysis.is_none());
    assert!(result.question_responses.is_some());
    assert_eq!(result.detected_source_lang.as_deref(), Some("EN"));
    assert!(controller.health_check().await.unwrap());
}

#[tokio::test]
async fn terminal_session_prints_rendered_result() {
    let addr = spawn_server(stub::router()).await;
    let mut controller = controller_for(addr, &ViewConfig::default());

    let script = "Bonjour\n/send\n";
    let mut output = Vec::new();
    terminal::run(&mut controller, script.as_bytes(), &mut output)
        .await
        .unwrap();

    let screen = String::from_utf8(output).unwrap();
    assert!(screen.contains("Detected source language: EN\n== Translations =="));
    assert!(screen.contains("[FR] Bonjour"));
    assert!(screen.contains("== Analysis =="));
    assert!(screen.contains("== AI Responses =="));
    assert!(screen.contains("English: [EN] answer: Bonjour"));
    assert_eq!(controller.view().draft(), "Bonjour");
}

#[tokio::test]
async fn terminal_ignores_send_without_selection() {
    let (addr, captured) = spawn_fixed(StatusCode::OK, r#"{"translations":{}}"#).await;
    let mut controller = controller_for(addr, &ViewConfig::default());

    let script = "Hallo\n/mode\n/send\n/lang KO\n/quit\n";
    let mut output = Vec::new();
    terminal::run(&mut controller, script.as_bytes(), &mut output)
        .await
        .unwrap();

    let screen = String::from_utf8(output).unwrap();
    assert!(screen.contains("unknown language code: \"KO\""));
    assert!(captured.lock().unwrap().is_empty());
    assert!(!controller.is_busy());
}

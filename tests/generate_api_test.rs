mod common;

use std::path::PathBuf;

use axum::http::StatusCode;
use common::{offline_app, send, temp_file};
use serde_json::json;

#[tokio::test]
async fn generates_choice_questions_without_saving_them() {
    let app = offline_app(PathBuf::from("README.md"));

    let (status, body) = send(
        &app,
        "POST",
        "/api/ai/generate",
        Some(json!({ "type": "multiple", "count": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["message"], "Questions generated");

    let questions = body["data"].as_array().unwrap();
    assert_eq!(questions.len(), 4);
    for (i, question) in questions.iter().enumerate() {
        assert_eq!(question["type"], "multiple");
        assert_eq!(
            question["title"],
            format!("Sample multiple-choice question {}", i + 1)
        );
        assert_eq!(question["optionA"], "Option A content");
        assert_eq!(question["answer"], "A,B");
        assert_eq!(question["language"], json!(null));
        assert!(["easy", "medium", "hard"].contains(&question["difficulty"].as_str().unwrap()));
        assert!(question["id"].as_str().unwrap().len() == 36);
    }
}

#[tokio::test]
async fn generates_programming_questions_in_the_requested_language() {
    let app = offline_app(PathBuf::from("README.md"));

    let (status, body) = send(
        &app,
        "POST",
        "/api/ai/generate",
        Some(json!({ "type": "programming", "count": 2, "language": "java" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let questions = body["data"].as_array().unwrap();
    assert_eq!(questions.len(), 2);
    assert_ne!(questions[0]["id"], questions[1]["id"]);
    for question in questions {
        assert_eq!(question["language"], "java");
        assert_eq!(question["optionA"], json!(null));
        assert!(question["answer"].as_str().unwrap().contains("System.out.println"));
    }
}

#[tokio::test]
async fn rejects_bad_generation_requests() {
    let app = offline_app(PathBuf::from("README.md"));

    let cases = [
        json!({ "type": "programming", "count": 2 }),
        json!({ "type": "single", "count": 0 }),
        json!({ "type": "single", "count": 11 }),
        json!({ "type": "essay", "count": 1 }),
        json!({ "type": "programming", "count": 1, "language": "cobol" }),
    ];
    for case in cases {
        let (status, body) = send(&app, "POST", "/api/ai/generate", Some(case.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "request {}", case);
        assert_eq!(body["ok"], false);
        assert_eq!(body["code"], 1);
    }
}

#[tokio::test]
async fn readme_returns_the_raw_markdown() {
    let path = temp_file("# Notes\n\n`let` is block scoped.\n");
    let app = offline_app(path.clone());

    let (status, body) = send(&app, "GET", "/api/readme", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["data"]["content"], "# Notes\n\n`let` is block scoped.\n");

    std::fs::remove_file(path).unwrap();
}

#[tokio::test]
async fn missing_readme_is_a_server_error() {
    let app = offline_app(PathBuf::from("/nonexistent/notes/README.md"));

    let (status, body) = send(&app, "GET", "/api/readme", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["ok"], false);
    assert_eq!(body["kind"], "internal");
    assert_eq!(body["message"], "Failed to read notes document");
}

#[tokio::test]
async fn health_and_openapi_are_served() {
    let app = offline_app(PathBuf::from("README.md"));

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");

    let (status, body) = send(&app, "GET", "/api/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/questions"].is_object());
    assert!(body["paths"]["/api/ai/generate"].is_object());
}

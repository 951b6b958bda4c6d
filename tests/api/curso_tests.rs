//! Curso API Tests
//!
//! End-to-end tests of the course CRUD contract, run against the real
//! router with in-memory persistence.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::TestApp;

#[tokio::test]
async fn list_on_empty_store_returns_empty_array() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/cursos").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn created_course_is_returned_with_assigned_id() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/cursos")
        .json(&json!({"nome": "Math", "descricao": "Intro"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({"id": 1, "nome": "Math", "descricao": "Intro"})
    );
}

#[tokio::test]
async fn get_returns_record_equivalent_to_the_created_one() {
    let app = TestApp::new().await;

    let created = app
        .server
        .post("/api/cursos")
        .json(&json!({"nome": "Math", "descricao": "Intro"}))
        .await
        .json::<Value>();

    let id = created["id"].as_i64().unwrap();
    let response = app.server.get(&format!("/api/cursos/{}", id)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), created);
}

#[tokio::test]
async fn list_contains_all_created_courses() {
    let app = TestApp::new().await;

    app.server
        .post("/api/cursos")
        .json(&json!({"nome": "Math", "descricao": "Intro"}))
        .await;
    app.server
        .post("/api/cursos")
        .json(&json!({"nome": "Physics", "descricao": "Mechanics"}))
        .await;

    let response = app.server.get("/api/cursos").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!([
            {"id": 1, "nome": "Math", "descricao": "Intro"},
            {"id": 2, "nome": "Physics", "descricao": "Mechanics"}
        ])
    );
}

#[tokio::test]
async fn get_on_nonexistent_id_returns_404() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/cursos/42").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn client_sent_id_is_ignored_on_create() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/cursos")
        .json(&json!({"id": 99, "nome": "Math", "descricao": "Intro"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["id"], json!(1));
}

#[tokio::test]
async fn put_updates_nome_and_descricao_and_keeps_the_id() {
    let app = TestApp::new().await;

    app.server
        .post("/api/cursos")
        .json(&json!({"nome": "Math", "descricao": "Intro"}))
        .await;

    let response = app
        .server
        .put("/api/cursos/1")
        .json(&json!({"nome": "Math II", "descricao": "Advanced"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({"id": 1, "nome": "Math II", "descricao": "Advanced"})
    );

    // The update is persisted
    let stored = app.server.get("/api/cursos/1").await.json::<Value>();
    assert_eq!(
        stored,
        json!({"id": 1, "nome": "Math II", "descricao": "Advanced"})
    );
}

#[tokio::test]
async fn client_sent_id_is_ignored_on_update() {
    let app = TestApp::new().await;

    app.server
        .post("/api/cursos")
        .json(&json!({"nome": "Math", "descricao": "Intro"}))
        .await;

    let response = app
        .server
        .put("/api/cursos/1")
        .json(&json!({"id": 555, "nome": "Math II", "descricao": "Advanced"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["id"], json!(1));
}

#[tokio::test]
async fn put_on_nonexistent_id_returns_404_and_performs_no_mutation() {
    let app = TestApp::new().await;

    let response = app
        .server
        .put("/api/cursos/42")
        .json(&json!({"nome": "Math", "descricao": "Intro"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let list = app.server.get("/api/cursos").await;
    assert_eq!(list.json::<Value>(), json!([]));
}

#[tokio::test]
async fn delete_removes_the_course() {
    let app = TestApp::new().await;

    app.server
        .post("/api/cursos")
        .json(&json!({"nome": "Math", "descricao": "Intro"}))
        .await;

    let response = app.server.delete("/api/cursos/1").await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    assert_eq!(response.text(), "");

    let get = app.server.get("/api/cursos/1").await;
    assert_eq!(get.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_twice_yields_204_then_404() {
    let app = TestApp::new().await;

    app.server
        .post("/api/cursos")
        .json(&json!({"nome": "Math", "descricao": "Intro"}))
        .await;

    let first = app.server.delete("/api/cursos/1").await;
    assert_eq!(first.status_code(), StatusCode::NO_CONTENT);

    let second = app.server.delete("/api/cursos/1").await;
    assert_eq!(second.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_on_nonexistent_id_returns_404() {
    let app = TestApp::new().await;

    let response = app.server.delete("/api/cursos/42").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_returns_400() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/cursos/abc").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_update_delete_scenario() {
    let app = TestApp::new().await;

    // POST {nome:"Math", descricao:"Intro"} assigns an identifier
    let created = app
        .server
        .post("/api/cursos")
        .json(&json!({"nome": "Math", "descricao": "Intro"}))
        .await;
    assert_eq!(created.status_code(), StatusCode::OK);
    let created = created.json::<Value>();
    assert_eq!(created["nome"], json!("Math"));
    assert_eq!(created["descricao"], json!("Intro"));
    let id = created["id"].as_i64().unwrap();

    // PUT updates the mutable fields in place
    let updated = app
        .server
        .put(&format!("/api/cursos/{}", id))
        .json(&json!({"nome": "Math II", "descricao": "Advanced"}))
        .await;
    assert_eq!(updated.status_code(), StatusCode::OK);
    assert_eq!(
        updated.json::<Value>(),
        json!({"id": id, "nome": "Math II", "descricao": "Advanced"})
    );

    // DELETE removes the record
    let deleted = app.server.delete(&format!("/api/cursos/{}", id)).await;
    assert_eq!(deleted.status_code(), StatusCode::NO_CONTENT);

    // A subsequent GET no longer finds it
    let get = app.server.get(&format!("/api/cursos/{}", id)).await;
    assert_eq!(get.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn not_found_body_carries_code_and_message() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/cursos/42").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body = response.json::<Value>();
    assert_eq!(body["code"], json!(10001));
    assert!(body["message"].as_str().unwrap().contains("42"));
}

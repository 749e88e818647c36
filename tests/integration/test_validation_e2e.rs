use crate::common::*;

use actix_web::http::StatusCode;
use serde_json::json;

/// The same title rule applies to create, replace and partial update.
#[tokio::test]
async fn test_empty_title_rejected_everywhere() {
    let state = setup_test_app().await;
    let app = test_service!(state);

    let created = create_task_ok(&app, task_json("valid")).await;

    for payload in [json!({"title": ""}), json!({"title": "   "})] {
        let req = actix_web::test::TestRequest::post()
            .uri("/api/tasks")
            .set_json(payload.clone())
            .to_request();
        let message = expect_error(&app, req, StatusCode::BAD_REQUEST).await;
        assert_eq!(message, "title is required");

        let req = actix_web::test::TestRequest::put()
            .uri(&format!("/api/tasks/{}", created.id))
            .set_json(json!({
                "title": payload["title"],
                "description": "",
                "status": "todo"
            }))
            .to_request();
        let message = expect_error(&app, req, StatusCode::BAD_REQUEST).await;
        assert!(message.contains("title is required"), "got: {message}");

        let req = actix_web::test::TestRequest::patch()
            .uri(&format!("/api/tasks/{}", created.id))
            .set_json(payload)
            .to_request();
        let message = expect_error(&app, req, StatusCode::BAD_REQUEST).await;
        assert_eq!(message, "title is required");
    }
}

#[tokio::test]
async fn test_overlong_title_rejected_everywhere() {
    let state = setup_test_app().await;
    let app = test_service!(state);

    let created = create_task_ok(&app, task_json("valid")).await;
    let long_title = "x".repeat(101);

    let req = actix_web::test::TestRequest::post()
        .uri("/api/tasks")
        .set_json(json!({"title": long_title}))
        .to_request();
    let message = expect_error(&app, req, StatusCode::BAD_REQUEST).await;
    assert_eq!(message, "title must be between 1 and 100 characters");

    let req = actix_web::test::TestRequest::put()
        .uri(&format!("/api/tasks/{}", created.id))
        .set_json(json!({"title": long_title, "description": "", "status": "todo"}))
        .to_request();
    expect_error(&app, req, StatusCode::BAD_REQUEST).await;

    let req = actix_web::test::TestRequest::patch()
        .uri(&format!("/api/tasks/{}", created.id))
        .set_json(json!({"title": long_title}))
        .to_request();
    expect_error(&app, req, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn test_title_trimmed_to_limit_accepted() {
    let state = setup_test_app().await;
    let app = test_service!(state);

    // 100 significant characters surrounded by whitespace is valid.
    let padded = format!("  {}  ", "x".repeat(100));
    let task = create_task_ok(&app, task_json(&padded)).await;
    assert_eq!(task.title.len(), 100);
}

#[tokio::test]
async fn test_overlong_description_rejected_everywhere() {
    let state = setup_test_app().await;
    let app = test_service!(state);

    let created = create_task_ok(&app, task_json("valid")).await;
    let long_description = "d".repeat(501);

    let req = actix_web::test::TestRequest::post()
        .uri("/api/tasks")
        .set_json(json!({"title": "t", "description": long_description}))
        .to_request();
    let message = expect_error(&app, req, StatusCode::BAD_REQUEST).await;
    assert_eq!(message, "description must be at most 500 characters");

    let req = actix_web::test::TestRequest::put()
        .uri(&format!("/api/tasks/{}", created.id))
        .set_json(json!({"title": "t", "description": long_description, "status": "todo"}))
        .to_request();
    expect_error(&app, req, StatusCode::BAD_REQUEST).await;

    let req = actix_web::test::TestRequest::patch()
        .uri(&format!("/api/tasks/{}", created.id))
        .set_json(json!({"description": long_description}))
        .to_request();
    expect_error(&app, req, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn test_patch_empty_field_set_rejected() {
    let state = setup_test_app().await;
    let app = test_service!(state);

    let created = create_task_ok(&app, task_json("valid")).await;

    let req = actix_web::test::TestRequest::patch()
        .uri(&format!("/api/tasks/{}", created.id))
        .set_json(json!({}))
        .to_request();
    let message = expect_error(&app, req, StatusCode::BAD_REQUEST).await;
    assert_eq!(message, "at least one field is required");
}

#[tokio::test]
async fn test_patch_unknown_field_rejected_naming_it() {
    let state = setup_test_app().await;
    let app = test_service!(state);

    let created = create_task_ok(&app, task_json("valid")).await;

    let req = actix_web::test::TestRequest::patch()
        .uri(&format!("/api/tasks/{}", created.id))
        .set_json(json!({"priority": "high"}))
        .to_request();
    let message = expect_error(&app, req, StatusCode::BAD_REQUEST).await;
    assert!(message.contains("priority"), "got: {message}");
}

#[tokio::test]
async fn test_patch_invalid_status_rejected() {
    let state = setup_test_app().await;
    let app = test_service!(state);

    let created = create_task_ok(&app, task_json("valid")).await;

    let req = actix_web::test::TestRequest::patch()
        .uri(&format!("/api/tasks/{}", created.id))
        .set_json(json!({"status": "archived"}))
        .to_request();
    let message = expect_error(&app, req, StatusCode::BAD_REQUEST).await;
    assert_eq!(message, "status must be either \"todo\" or \"done\"");
}

#[tokio::test]
async fn test_put_requires_all_fields() {
    let state = setup_test_app().await;
    let app = test_service!(state);

    let created = create_task_ok(&app, task_json("valid")).await;

    // status omitted
    let req = actix_web::test::TestRequest::put()
        .uri(&format!("/api/tasks/{}", created.id))
        .set_json(json!({"title": "t", "description": "d"}))
        .to_request();
    let message = expect_error(&app, req, StatusCode::BAD_REQUEST).await;
    assert!(message.contains("status"), "got: {message}");

    // description omitted
    let req = actix_web::test::TestRequest::put()
        .uri(&format!("/api/tasks/{}", created.id))
        .set_json(json!({"title": "t", "status": "todo"}))
        .to_request();
    let message = expect_error(&app, req, StatusCode::BAD_REQUEST).await;
    assert!(message.contains("description"), "got: {message}");
}

#[tokio::test]
async fn test_malformed_json_body() {
    let state = setup_test_app().await;
    let app = test_service!(state);

    let req = actix_web::test::TestRequest::post()
        .uri("/api/tasks")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let message = expect_error(&app, req, StatusCode::BAD_REQUEST).await;
    assert_eq!(message, "invalid JSON body");
}

#[tokio::test]
async fn test_unknown_api_route_returns_404() {
    let state = setup_test_app().await;
    let app = test_service!(state);

    let req = actix_web::test::TestRequest::get()
        .uri("/api/nope")
        .to_request();
    let message = expect_error(&app, req, StatusCode::NOT_FOUND).await;
    assert_eq!(message, "not found");
}

#[tokio::test]
async fn test_non_numeric_id_returns_404() {
    let state = setup_test_app().await;
    let app = test_service!(state);

    let req = actix_web::test::TestRequest::get()
        .uri("/api/tasks/abc")
        .to_request();
    let message = expect_error(&app, req, StatusCode::NOT_FOUND).await;
    assert_eq!(message, "task not found");
}

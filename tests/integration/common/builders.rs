use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use serde_json::json;
use taskboard::models::{Task, TaskStatus};

/// Helper to create a minimal create payload.
pub fn task_json(title: &str) -> serde_json::Value {
    json!({ "title": title })
}

/// Helper to create a create payload with a description.
pub fn task_json_with_description(title: &str, description: &str) -> serde_json::Value {
    json!({ "title": title, "description": description })
}

/// POST /api/tasks with the given body, assert 201, return the created Task.
pub async fn create_task_ok<S, B>(app: &S, body: serde_json::Value) -> Task
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = actix_web::test::TestRequest::post()
        .uri("/api/tasks")
        .set_json(body)
        .to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert_eq!(
        resp.status(),
        actix_web::http::StatusCode::CREATED,
        "POST /api/tasks should return 201 Created"
    );
    actix_web::test::read_body_json(resp).await
}

/// GET /api/tasks/{id}, assert 200, return the deserialized Task.
pub async fn get_task_ok<S, B>(app: &S, task_id: i32) -> Task
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = actix_web::test::TestRequest::get()
        .uri(&format!("/api/tasks/{}", task_id))
        .to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert!(
        resp.status().is_success(),
        "GET /api/tasks/{} returned {}",
        task_id,
        resp.status()
    );
    actix_web::test::read_body_json(resp).await
}

/// GET /api/tasks (optionally with a status filter), assert 200, return the list.
pub async fn list_tasks_ok<S, B>(app: &S, status: Option<&str>) -> Vec<Task>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let uri = match status {
        Some(s) => format!("/api/tasks?status={}", s),
        None => "/api/tasks".to_string(),
    };
    let req = actix_web::test::TestRequest::get().uri(&uri).to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert!(
        resp.status().is_success(),
        "GET {} returned {}",
        uri,
        resp.status()
    );
    actix_web::test::read_body_json(resp).await
}

/// PATCH /api/tasks/{id} with the given body, assert 200, return the updated Task.
pub async fn patch_task_ok<S, B>(app: &S, task_id: i32, body: serde_json::Value) -> Task
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = actix_web::test::TestRequest::patch()
        .uri(&format!("/api/tasks/{}", task_id))
        .set_json(body)
        .to_request();
    let resp = actix_web::test::call_service(app, req).await;
    assert_eq!(
        resp.status(),
        actix_web::http::StatusCode::OK,
        "PATCH /api/tasks/{} should return 200",
        task_id
    );
    actix_web::test::read_body_json(resp).await
}

/// Send a request expected to fail, assert the status code, and return the
/// `error` message from the response body.
pub async fn expect_error<S, B>(
    app: &S,
    req: actix_http::Request,
    expected_status: actix_web::http::StatusCode,
) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = actix_web::test::call_service(app, req).await;
    assert_eq!(resp.status(), expected_status, "unexpected status");
    let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
    body.get("error")
        .and_then(|e| e.as_str())
        .unwrap_or_else(|| panic!("response body has no error field: {}", body))
        .to_string()
}

/// Assert a task currently has the expected status.
pub async fn assert_task_status<S, B>(app: &S, task_id: i32, expected: TaskStatus, msg: &str)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let task = get_task_ok(app, task_id).await;
    assert_eq!(task.status, expected, "{}", msg);
}

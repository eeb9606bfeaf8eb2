// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process mock of the fitness REST backend.
//!
//! Each test spawns its own server on an ephemeral port, programs the
//! responses it needs, and asserts on the captured traffic afterwards.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex, MutexGuard};

/// One request as the backend saw it.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

/// Forced failure: HTTP status plus an optional `{"detail": ...}` body.
pub type Failure = (u16, Option<String>);

/// Programmable responses and captured traffic.
#[derive(Debug, Default)]
pub struct MockState {
    pub requests: Vec<RecordedRequest>,
    /// Records served by `GET /activities/` (and mutated by writes)
    pub activities: Vec<Value>,
    pub access_token: String,
    pub refresh_token: String,
    pub fail_register: Option<Failure>,
    pub fail_login: Option<Failure>,
    pub fail_list: Option<u16>,
    pub fail_create: Option<Failure>,
    pub fail_update: Option<Failure>,
    pub fail_delete: Option<u16>,
    next_id: i64,
}

impl MockState {
    fn record(&mut self, method: &str, path: String, headers: &HeaderMap, body: Option<Value>) {
        let authorization = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        self.requests.push(RecordedRequest {
            method: method.to_string(),
            path,
            authorization,
            body,
        });
    }
}

type Shared = Arc<Mutex<MockState>>;

/// Handle to a running mock backend.
pub struct MockServer {
    pub base_url: String,
    state: Shared,
}

impl MockServer {
    /// Spawn a mock backend on an ephemeral port.
    pub async fn spawn() -> Self {
        let state: Shared = Arc::new(Mutex::new(MockState {
            access_token: "test-access".to_string(),
            refresh_token: "test-refresh".to_string(),
            next_id: 1,
            ..MockState::default()
        }));

        let app = Router::new()
            .route("/auth/register/", post(register))
            .route("/auth/login/", post(login))
            .route("/activities/", get(list).post(create))
            .route("/activities/{id}/", put(update).delete(delete_activity))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve mock backend");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Program responses or seed activities.
    pub fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().expect("mock state lock")
    }

    /// Captured requests in arrival order.
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state().requests.clone()
    }
}

/// A backend-shaped activity record.
#[allow(dead_code)]
pub fn sample_activity(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "activity_type": "workout",
        "title": format!("Activity {}", id),
        "description": "Recorded by the mock backend",
        "date": "2025-05-01",
        "duration_minutes": 30,
        "steps": null,
        "status": status,
        "created_at": "2025-05-01T09:00:00Z",
        "updated_at": "2025-05-01T09:00:00Z",
        "user": 1
    })
}

fn failure(status: u16, detail: Option<String>) -> Response {
    let status = StatusCode::from_u16(status).expect("valid status");
    match detail {
        Some(d) => (status, Json(json!({ "detail": d }))).into_response(),
        // Non-JSON body exercises the client's hardcoded fallbacks
        None => (status, "server exploded").into_response(),
    }
}

async fn register(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut s = state.lock().unwrap();
    s.record("POST", "/auth/register/".to_string(), &headers, Some(body));
    if let Some((status, detail)) = s.fail_register.clone() {
        return failure(status, detail);
    }
    (
        StatusCode::CREATED,
        Json(json!({ "detail": "User registered successfully" })),
    )
        .into_response()
}

async fn login(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut s = state.lock().unwrap();
    s.record("POST", "/auth/login/".to_string(), &headers, Some(body));
    if let Some((status, detail)) = s.fail_login.clone() {
        return failure(status, detail);
    }
    Json(json!({ "access": s.access_token, "refresh": s.refresh_token })).into_response()
}

async fn list(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut s = state.lock().unwrap();
    s.record("GET", "/activities/".to_string(), &headers, None);
    if let Some(status) = s.fail_list {
        return failure(status, None);
    }
    Json(s.activities.clone()).into_response()
}

async fn create(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut s = state.lock().unwrap();
    s.record(
        "POST",
        "/activities/".to_string(),
        &headers,
        Some(body.clone()),
    );
    if let Some((status, detail)) = s.fail_create.clone() {
        return failure(status, detail);
    }

    let id = s.next_id;
    s.next_id += 1;

    let mut record = body.as_object().cloned().unwrap_or_default();
    record.insert("id".to_string(), json!(id));
    record.insert("created_at".to_string(), json!("2025-05-01T09:00:00Z"));
    record.insert("updated_at".to_string(), json!("2025-05-01T09:00:00Z"));
    record.insert("user".to_string(), json!(1));
    let record = Value::Object(record);

    s.activities.push(record.clone());
    (StatusCode::CREATED, Json(record)).into_response()
}

async fn update(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut s = state.lock().unwrap();
    s.record(
        "PUT",
        format!("/activities/{}/", id),
        &headers,
        Some(body.clone()),
    );
    if let Some((status, detail)) = s.fail_update.clone() {
        return failure(status, detail);
    }

    if let Some(existing) = s
        .activities
        .iter_mut()
        .find(|a| a.get("id").and_then(Value::as_i64) == Some(id))
    {
        if let (Some(target), Some(source)) = (existing.as_object_mut(), body.as_object()) {
            for (k, v) in source {
                target.insert(k.clone(), v.clone());
            }
        }
    }

    Json(json!({ "detail": "Activity updated successfully" })).into_response()
}

async fn delete_activity(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let mut s = state.lock().unwrap();
    s.record("DELETE", format!("/activities/{}/", id), &headers, None);
    if let Some(status) = s.fail_delete {
        return failure(status, None);
    }

    s.activities
        .retain(|a| a.get("id").and_then(Value::as_i64) != Some(id));
    StatusCode::NO_CONTENT.into_response()
}

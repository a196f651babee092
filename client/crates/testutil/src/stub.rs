//! Stub Portal Services
//!
//! Minimal axum renditions of the user-directory and knowledge-base
//! services, faithful to the wire contracts the client targets: the
//! session-cookie gate, the refresh endpoint that renews it, the ack
//! shapes of the knowledge mutations, and 204 deletes. Fixtures are
//! canned; nothing persists between requests.

use axum::extract::{Path, Query, Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::collections::HashMap;

use crate::log::CallLog;

/// Session cookie the stubs gate on; the client side never reads it
pub const ACCESS_COOKIE: &str = "access_token";

/// Cookie value issued by the stub refresh endpoint
pub const RENEWED_ACCESS: &str = "renewed";

/// How a stub treats the session cookie on incoming requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthBehavior {
    /// Every request is accepted
    Valid,
    /// Requests are rejected until the refresh endpoint has issued a
    /// renewed cookie
    ExpiredUntilRefresh,
    /// Requests and refresh attempts are all rejected
    Broken,
}

#[derive(Clone)]
struct StubState {
    log: CallLog,
    auth: AuthBehavior,
}

// ============================================================================
// Routers
// ============================================================================

/// Stub user-directory service: `/api/users` plus the session refresh
/// endpoint
pub fn directory_router(log: CallLog, auth: AuthBehavior) -> Router {
    let state = StubState { log, auth };
    Router::new()
        .route("/api/auth/refresh", post(refresh_session))
        .route("/api/users/", get(list_users).post(create_user))
        .route("/api/users/me", get(get_me).patch(patch_me))
        .route(
            "/api/users/{user_id}",
            get(get_user).patch(patch_user).delete(delete_user),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ))
        .layer(middleware::from_fn_with_state(state.clone(), record_call))
        .with_state(state)
}

/// Stub knowledge-base service: `/api/knowlege`
pub fn knowledge_router(log: CallLog, auth: AuthBehavior) -> Router {
    let state = StubState { log, auth };
    Router::new()
        .route("/api/knowlege", get(list_articles).post(create_article))
        .route(
            "/api/knowlege/{article_id}",
            get(get_article).delete(delete_article),
        )
        .route("/api/knowlege/{article_id}/info", patch(patch_article_info))
        .route("/api/knowlege/{article_id}/blocks", put(replace_blocks))
        .route(
            "/api/knowlege/blocks/{block_id}",
            put(update_block).delete(delete_block),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ))
        .layer(middleware::from_fn_with_state(state, record_call))
}

// ============================================================================
// Middleware
// ============================================================================

/// Record `"METHOD path?query"` for every request, accepted or not
async fn record_call(State(state): State<StubState>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let target = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    state.log.record(format!("{method} {target}"));
    next.run(request).await
}

/// Session gate over every route except the refresh endpoint itself
async fn require_session(State(state): State<StubState>, request: Request, next: Next) -> Response {
    if request.uri().path() == "/api/auth/refresh"
        || session_ok(request.headers(), state.auth)
    {
        next.run(request).await
    } else {
        unauthorized()
    }
}

fn session_ok(headers: &HeaderMap, auth: AuthBehavior) -> bool {
    match auth {
        AuthBehavior::Valid => true,
        AuthBehavior::Broken => false,
        AuthBehavior::ExpiredUntilRefresh => {
            extract_cookie(headers, ACCESS_COOKIE).as_deref() == Some(RENEWED_ACCESS)
        }
    }
}

fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            if key == name { Some(value.to_string()) } else { None }
        })
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"detail": "Not authenticated"})),
    )
        .into_response()
}

// ============================================================================
// Session handlers
// ============================================================================

async fn refresh_session(State(state): State<StubState>) -> Response {
    if state.auth == AuthBehavior::Broken {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Invalid or expired refresh token"})),
        )
            .into_response();
    }
    let cookie = format!("{ACCESS_COOKIE}={RENEWED_ACCESS}; Path=/");
    (
        [(header::SET_COOKIE, cookie)],
        Json(json!({"message": "refreshed"})),
    )
        .into_response()
}

// ============================================================================
// Directory handlers
// ============================================================================

/// Canned directory record
pub fn employee_json(id: i64) -> Value {
    json!({
        "id": id,
        "name": "Anna",
        "surname": "Orlova",
        "patronymic": "Sergeevna",
        "email": "anna.orlova@portal.dev",
        "phone": "+7 900 000-00-01",
        "telegram_link": "https://t.me/anna_orlova",
        "post": "Backend engineer",
        "team": "Core services",
        "role": "editor",
        "status": "active"
    })
}

async fn get_me() -> Json<Value> {
    Json(employee_json(1))
}

async fn patch_me(Json(update): Json<Value>) -> Json<Value> {
    Json(overlay(employee_json(1), &update))
}

async fn list_users() -> Json<Value> {
    Json(json!([employee_json(1), employee_json(2)]))
}

async fn create_user(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    (StatusCode::CREATED, Json(overlay(employee_json(101), &body)))
}

async fn get_user(Path(user_id): Path<i64>) -> Json<Value> {
    Json(employee_json(user_id))
}

async fn patch_user(Path(user_id): Path<i64>, Json(update): Json<Value>) -> Json<Value> {
    Json(overlay(employee_json(user_id), &update))
}

async fn delete_user(Path(_user_id): Path<i64>) -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Overlay non-null fields of `patch` onto `base`, the way the
/// services apply partial updates
fn overlay(mut base: Value, patch: &Value) -> Value {
    if let (Some(base_map), Some(patch_map)) = (base.as_object_mut(), patch.as_object()) {
        for (key, value) in patch_map {
            if !value.is_null() {
                base_map.insert(key.clone(), value.clone());
            }
        }
    }
    base
}

// ============================================================================
// Knowledge handlers
// ============================================================================

/// Canned knowledge article with two blocks
pub fn article_json(id: i64) -> Value {
    json!({
        "id": id,
        "title": "Release checklist",
        "description": "Steps for shipping a portal release",
        "category": "processes",
        "blocks_data": [
            {"id": 1, "block_type": "text", "content": "Freeze the branch", "position": 0},
            {"id": 2, "block_type": "text", "content": "Run the smoke suite", "position": 1},
        ]
    })
}

async fn list_articles(Query(params): Query<HashMap<String, String>>) -> Response {
    // The real service rejects a missing category outright
    if !params.contains_key("category") {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"detail": "category is required"})),
        )
            .into_response();
    }
    Json(json!([
        {"id": 1, "title": "Release checklist", "description": "Steps for shipping a portal release"},
        {"id": 2, "title": "Onboarding", "description": "First-week guide for new engineers"},
    ]))
    .into_response()
}

async fn get_article(Path(article_id): Path<i64>) -> Json<Value> {
    Json(article_json(article_id))
}

async fn create_article(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let article = json!({
        "id": 7,
        "title": body.get("title").cloned().unwrap_or(Value::Null),
        "description": body.get("description").cloned().unwrap_or(Value::Null),
        "category": body.get("category").cloned().unwrap_or(Value::Null),
    });
    (
        StatusCode::CREATED,
        Json(json!({"ok": true, "article": article})),
    )
}

async fn patch_article_info(
    Path(article_id): Path<i64>,
    Json(_update): Json<Value>,
) -> Json<Value> {
    Json(json!({"ok": true, "article_id": article_id}))
}

async fn replace_blocks(Path(article_id): Path<i64>, Json(_blocks): Json<Value>) -> Json<Value> {
    Json(json!({"ok": true, "article_id": article_id}))
}

async fn update_block(Path(block_id): Path<i64>, Json(body): Json<Value>) -> Json<Value> {
    let block = json!({
        "id": block_id,
        "block_type": body.get("block_type").cloned().unwrap_or(Value::Null),
        "content": body.get("content").cloned().unwrap_or(Value::Null),
        "position": body.get("position").cloned().unwrap_or(Value::Null),
    });
    Json(json!({"ok": true, "block": block}))
}

async fn delete_article(Path(_article_id): Path<i64>) -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn delete_block(Path(_block_id): Path<i64>) -> StatusCode {
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("foo=bar; access_token=renewed; other=xyz"),
        );

        assert_eq!(
            extract_cookie(&headers, "access_token"),
            Some("renewed".to_string())
        );
        assert_eq!(extract_cookie(&headers, "foo"), Some("bar".to_string()));
        assert_eq!(extract_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_session_gate_per_behavior() {
        let mut renewed = HeaderMap::new();
        renewed.insert(
            header::COOKIE,
            HeaderValue::from_static("access_token=renewed"),
        );
        let mut stale = HeaderMap::new();
        stale.insert(
            header::COOKIE,
            HeaderValue::from_static("access_token=stale"),
        );
        let bare = HeaderMap::new();

        assert!(session_ok(&bare, AuthBehavior::Valid));
        assert!(!session_ok(&renewed, AuthBehavior::Broken));
        assert!(session_ok(&renewed, AuthBehavior::ExpiredUntilRefresh));
        assert!(!session_ok(&stale, AuthBehavior::ExpiredUntilRefresh));
        assert!(!session_ok(&bare, AuthBehavior::ExpiredUntilRefresh));
    }

    #[test]
    fn test_overlay_skips_null_fields() {
        let merged = overlay(
            employee_json(5),
            &json!({"post": "Team lead", "team": null}),
        );
        assert_eq!(merged["id"], 5);
        assert_eq!(merged["post"], "Team lead");
        assert_eq!(merged["team"], "Core services");
    }
}

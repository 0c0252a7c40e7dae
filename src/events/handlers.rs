use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    error::ApiError,
    events::{dto::EventBody, repo::Event, validate::validate},
    state::AppState,
};

pub fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/events/:id", put(update_event).delete(delete_event))
}

#[instrument(skip(state))]
pub async fn list_events(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Event>>, ApiError> {
    let events = Event::list_by_owner(&state.db, user_id).await.map_err(|e| {
        error!(error = %e, %user_id, "list_by_owner failed");
        ApiError::Store("Error fetching events.")
    })?;
    Ok(Json(events))
}

#[instrument(skip(state, body))]
pub async fn create_event(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<EventBody>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let new = validate(body)?;
    let event = Event::create(&state.db, user_id, new).await.map_err(|e| {
        error!(error = %e, %user_id, "create event failed");
        ApiError::Store("Error creating event.")
    })?;
    info!(event_id = %event.id, %user_id, "event created");
    Ok((StatusCode::CREATED, Json(event)))
}

#[instrument(skip(state, body))]
pub async fn update_event(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<EventBody>,
) -> Result<Json<Event>, ApiError> {
    let new = validate(body)?;
    match Event::update_by_owner(&state.db, user_id, id, new).await {
        Ok(Some(event)) => {
            info!(event_id = %event.id, %user_id, "event updated");
            Ok(Json(event))
        }
        Ok(None) => Err(ApiError::NotFound("Event not found.")),
        Err(e) => {
            error!(error = %e, %user_id, %id, "update event failed");
            Err(ApiError::Store("Error updating event."))
        }
    }
}

#[instrument(skip(state))]
pub async fn delete_event(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    match Event::delete_by_owner(&state.db, user_id, id).await {
        Ok(true) => {
            info!(event_id = %id, %user_id, "event deleted");
            Ok(Json(json!({ "message": "Event deleted successfully." })))
        }
        Ok(false) => Err(ApiError::NotFound("Event not found.")),
        Err(e) => {
            error!(error = %e, %user_id, %id, "delete event failed");
            Err(ApiError::Store("Error deleting event."))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::build_app;
    use crate::auth::jwt::JwtKeys;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::extract::FromRef;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;
    use uuid::Uuid;

    async fn body_json(res: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn missing_token_is_unauthenticated() {
        let app = build_app(AppState::fake());
        let res = app
            .oneshot(
                Request::builder()
                    .uri("/api/events")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(res).await["error"],
            "Access denied. No token provided."
        );
    }

    #[tokio::test]
    async fn non_bearer_header_is_unauthenticated() {
        let app = build_app(AppState::fake());
        let res = app
            .oneshot(
                Request::builder()
                    .uri("/api/events")
                    .header(header::AUTHORIZATION, "Basic dXNlcjpwdw==")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn garbage_token_is_forbidden() {
        let app = build_app(AppState::fake());
        let res = app
            .oneshot(
                Request::builder()
                    .uri("/api/events")
                    .header(header::AUTHORIZATION, "Bearer not-a-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(res).await["error"], "Invalid token.");
    }

    #[tokio::test]
    async fn create_rejects_end_before_start_before_touching_the_store() {
        let state = AppState::fake();
        let token = JwtKeys::from_ref(&state).sign(Uuid::new_v4()).unwrap();
        let app = build_app(state);
        let res = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/events")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"title":"Meet","startTime":"2024-03-01T11:00","endTime":"2024-03-01T10:00"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(res).await["error"],
            "End time must be after start time."
        );
    }

    #[tokio::test]
    async fn update_applies_the_same_validation_as_create() {
        let state = AppState::fake();
        let token = JwtKeys::from_ref(&state).sign(Uuid::new_v4()).unwrap();
        let app = build_app(state);
        let res = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/api/events/{}", Uuid::new_v4()))
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"title":"","startTime":"2024-03-01T10:00","endTime":"2024-03-01T11:00"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(res).await["error"], "Title is required.");
    }
}

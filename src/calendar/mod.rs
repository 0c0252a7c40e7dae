use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use time::Month;
use tracing::{error, instrument};

pub mod grid;

use crate::{
    auth::jwt::AuthUser,
    error::ApiError,
    events::repo::Event,
    state::AppState,
};
use grid::{month_grid, GridCell};

pub fn router() -> Router<AppState> {
    Router::new().route("/calendar", get(month_view))
}

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: i32,
    pub month: u8,
}

#[derive(Debug, Serialize)]
pub struct MonthGridResponse {
    pub year: i32,
    pub month: u8,
    pub cells: Vec<GridCell>,
}

/// One month of the caller's events, pre-bucketed into grid cells.
#[instrument(skip(state))]
pub async fn month_view(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(q): Query<MonthQuery>,
) -> Result<Json<MonthGridResponse>, ApiError> {
    let month =
        Month::try_from(q.month).map_err(|_| ApiError::invalid("Invalid year or month."))?;
    let events = Event::list_by_owner(&state.db, user_id).await.map_err(|e| {
        error!(error = %e, %user_id, "list_by_owner failed");
        ApiError::Store("Error fetching events.")
    })?;
    let cells = month_grid(q.year, month, &events)?;
    Ok(Json(MonthGridResponse {
        year: q.year,
        month: q.month,
        cells,
    }))
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

    #[tokio::test]
    async fn month_out_of_range_is_rejected_before_the_store() {
        let state = AppState::fake();
        let token = JwtKeys::from_ref(&state).sign(Uuid::new_v4()).unwrap();
        let app = build_app(state);
        let res = app
            .oneshot(
                Request::builder()
                    .uri("/api/calendar?year=2024&month=13")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn calendar_requires_a_token() {
        let app = build_app(AppState::fake());
        let res = app
            .oneshot(
                Request::builder()
                    .uri("/api/calendar?year=2024&month=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}

use crate::state::AppState;
use axum::Router;

pub mod datetime;
pub mod dto;
pub mod handlers;
pub mod repo;
pub mod validate;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::event_routes())
}

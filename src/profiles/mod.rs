pub mod calculator;
mod dto;
mod handlers;
pub mod model;
pub mod services;

pub use dto::ProfileEdit;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::profile_routes()
}

pub mod aggregate;
mod dto;
mod handlers;
pub mod services;

pub use dto::{Dashboard, DashboardQuery};
pub(crate) use dto::offset_from_minutes;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::dashboard_routes()
}

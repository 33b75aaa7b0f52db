mod dto;
mod handlers;
pub mod history;
pub mod model;
pub mod services;

pub use dto::{AcceptEntryRequest, HistoryPage, HistoryQuery};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::read_routes())
        .merge(handlers::write_routes())
}

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod cache;
pub mod controller;
pub mod handlers;
pub mod render;
pub mod site;
pub mod state;

pub use controller::{Freshness, Page, PageController};
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::breaking_news))
        .route("/categories/:category", get(handlers::category_news))
        .route("/categories/:category/", get(handlers::category_news))
        .route("/api/categories", get(handlers::list_categories))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use ng_core::{Article, Category, Config, Error, Result};
    pub use crate::{AppState, Freshness, Page, PageController};
}

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use ng_core::Category;
use std::sync::Arc;
use tracing::error;

use crate::controller::Page;
use crate::render;
use crate::AppState;

/// Upstream failure while rendering a page. Rendered as a 502 with no
/// partial content.
pub struct PageError {
    page: Page,
    error: ng_core::Error,
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!(path = %self.page.path(), error = %self.error, "Failed to render page");
        (StatusCode::BAD_GATEWAY, Html(render::error_page())).into_response()
    }
}

async fn serve(state: &AppState, page: Page) -> Result<Html<String>, PageError> {
    state
        .controller
        .render_page(&page)
        .await
        .map(Html)
        .map_err(|error| PageError { page, error })
}

pub async fn breaking_news(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    serve(&state, Page::Breaking).await
}

pub async fn category_news(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
    uri: Uri,
) -> Response {
    match category.parse::<Category>() {
        Ok(category) => serve(&state, Page::Category(category)).await.into_response(),
        Err(_) => not_found(uri).await.into_response(),
    }
}

pub async fn list_categories() -> Json<Vec<Category>> {
    Json(Category::ALL.to_vec())
}

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(render::not_found_page(uri.path())))
}

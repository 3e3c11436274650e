use std::path::Path;
use std::sync::Arc;

use axum::extract::{Path as UrlPath, State};
use axum::handler::HandlerWithoutStateExt;
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use portfolio_common::content::Portfolio;
use portfolio_common::section::Section;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::cache::PageCache;
use crate::error::AppError;
use crate::views;

#[derive(Clone)]
pub struct AppState {
    portfolio: &'static Portfolio,
    page: Arc<PageCache>,
}

impl AppState {
    pub fn new(portfolio: &'static Portfolio, page: PageCache) -> Self {
        Self {
            portfolio,
            page: Arc::new(page),
        }
    }
}

/// Page, fragment and JSON routes; everything else is served from `public_dir`.
pub fn router(state: AppState, public_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/sections/{id}", get(section_fragment))
        .route("/api/portfolio", get(portfolio_json))
        .route("/healthz", get(healthz))
        .fallback_service(ServeDir::new(public_dir).not_found_service(missing_asset.into_service()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let etag = state.page.etag().to_string();
    let fresh = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| state.page.matches(v));
    if fresh {
        return (StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response();
    }
    (
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "no-cache".to_string()),
        ],
        Html(state.page.html()),
    )
        .into_response()
}

async fn section_fragment(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<String>,
) -> Result<Html<String>, AppError> {
    let section: Section = id.parse()?;
    let markup = views::render_section(section, state.portfolio, state.page.hero_particles());
    Ok(Html(markup.into_string()))
}

async fn portfolio_json(State(state): State<AppState>) -> Json<&'static Portfolio> {
    Json(state.portfolio)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn missing_asset(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

//! Serves the single static page.

use axum::response::Html;

/// Serves the embedded front-end page.
///
/// `GET /`
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

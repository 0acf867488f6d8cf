//! Static pages

use axum::response::Html;

use super::views;

/// The landing page
pub async fn index() -> Html<String> {
    Html(views::index())
}

/// The about page
pub async fn about() -> Html<String> {
    Html(views::about())
}

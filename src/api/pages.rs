use axum::response::Html;

use crate::templates;

/// `GET /`
pub async fn home() -> Html<String> {
    Html(templates::home_page())
}

/// `GET /schedule`: a form that submits to `POST /schedule`.
pub async fn schedule_form() -> Html<String> {
    Html(templates::schedule_page())
}

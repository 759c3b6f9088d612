use crate::errors::AppError;
use crate::state::AppState;
use crate::ui::{render_about, render_home};
use axum::{Json, extract::State, http::Uri, response::Html};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(render_home(&state.config))
}

pub async fn about(State(state): State<AppState>) -> Html<String> {
    Html(render_about(&state.config))
}

pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "blicker",
    })
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("no page at {}", uri.path()))
}

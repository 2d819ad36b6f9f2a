//! Demo routes

use axum::{
    extract::Path,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use quill_core::{OutcomeLogExt, SemanticLogger};
use quill_http::HttpError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Widget {
    pub id: u32,
    pub name: String,
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(|| async { "quill demo" }))
        .route("/widgets/{id}", get(get_widget))
        .route("/widgets", post(create_widget))
        .route("/boom", get(boom))
}

async fn get_widget(Path(id): Path<u32>) -> Result<Json<Widget>, HttpError> {
    if id == 0 {
        return Err(HttpError::new(
            StatusCode::BAD_REQUEST,
            anyhow::anyhow!("widget id must be positive"),
        ));
    }
    Ok(Json(Widget {
        id,
        name: format!("widget-{}", id),
    }))
}

async fn create_widget(Json(widget): Json<Widget>) -> Result<(StatusCode, Json<Widget>), HttpError> {
    let name = widget.name.clone();
    let widget = store(widget)
        .log(SemanticLogger::Create, format!("widget {}", name))
        .log_error(SemanticLogger::Error, "could not store widget")
        .await?;
    Ok((StatusCode::CREATED, Json(widget)))
}

async fn store(widget: Widget) -> anyhow::Result<Widget> {
    if widget.name.trim().is_empty() {
        anyhow::bail!("widget name is empty");
    }
    Ok(widget)
}

async fn boom() -> Result<&'static str, HttpError> {
    let parsed: u32 = "not a number".parse()?;
    Ok(if parsed > 0 { "unreachable" } else { "zero" })
}

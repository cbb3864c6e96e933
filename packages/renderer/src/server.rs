//! Local web server for the rendered page.
//!
//! The document is parsed and rendered exactly once before the listener
//! binds; request handlers only hand out the precomputed artifacts. The
//! render tree is additionally exposed as JSON under `/layout.json`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::Result;
use crate::html::write_page;
use crate::page::Page;

/// Shared immutable state behind the request handlers.
#[derive(Clone)]
struct AppState {
    html: Arc<String>,
    layout: Arc<serde_json::Value>,
}

/// Build the router serving a prerendered page.
fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/layout.json", get(layout_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Render the page once and serve it until the process is stopped.
///
/// # Errors
/// Returns an error if the layout cannot be serialized or the port
/// cannot be bound; both are fatal at startup.
pub async fn serve(page: &Page, port: u16) -> Result<()> {
    let state = AppState {
        html: Arc::new(write_page(page)),
        layout: Arc::new(serde_json::to_value(&page.body)?),
    };

    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "serving rendered page");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn page_handler(State(state): State<AppState>) -> Html<String> {
    Html(state.html.as_ref().clone())
}

async fn layout_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(state.layout.as_ref().clone())
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderNode;

    fn test_state() -> AppState {
        let page = Page {
            body: vec![RenderNode::text("hello")],
        };
        AppState {
            html: Arc::new(write_page(&page)),
            layout: Arc::new(serde_json::to_value(&page.body).unwrap()),
        }
    }

    #[tokio::test]
    async fn test_page_handler_returns_html() {
        let Html(body) = page_handler(State(test_state())).await;
        assert!(body.contains("<p>hello</p>"));
    }

    #[tokio::test]
    async fn test_layout_handler_returns_tree() {
        let Json(layout) = layout_handler(State(test_state())).await;
        assert!(layout.is_array());
        assert_eq!(layout[0]["type"], "text");
    }

    #[tokio::test]
    async fn test_health_handler() {
        let Json(health) = health_handler().await;
        assert_eq!(health["status"], "ok");
    }
}

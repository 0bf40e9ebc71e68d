use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use revcat_fetch::{FetchCoordinator, ReqwestClient};

use crate::Config;

/// Documents served by `GET /getUrlContents`, in input order.
pub const DEFAULT_LOCATORS: [&str; 2] = [
    "raw.githubusercontent.com/GoogleContainerTools/distroless/main/java/README.md",
    "raw.githubusercontent.com/golang/go/master/README.md",
];

pub const CONTENTS_ROUTE: &str = "/getUrlContents";

#[derive(Clone)]
pub struct AppState {
    coordinator: Arc<FetchCoordinator<ReqwestClient>>,
    locators:    Arc<[String]>,
}

/// Build the service router around a shared coordinator.
pub fn router<I, S>(coordinator: Arc<FetchCoordinator<ReqwestClient>>, locators: I) -> Router
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let state = AppState {
        coordinator,
        locators: locators.into_iter().map(Into::<String>::into).collect(),
    };
    Router::new()
        .route(CONTENTS_ROUTE, get(get_url_contents))
        .with_state(state)
}

async fn get_url_contents(State(state): State<AppState>) -> Response {
    match state.coordinator.fetch_and_combine(&state.locators[..]).await {
        Ok(content) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain")],
            content,
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to combine url contents");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("{err}\n")).into_response()
        }
    }
}

/// Bind the configured address and serve [`DEFAULT_LOCATORS`] until Ctrl-C.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let client = ReqwestClient::new().context("failed to build HTTP client")?;
    let app = router(Arc::new(FetchCoordinator::new(client)), DEFAULT_LOCATORS);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Server started at http://localhost:{}", config.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server stopped unexpectedly")?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

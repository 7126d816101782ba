use crate::catalog;
use crate::config::Config;
use crate::models::ShowList;
use crate::render::{self, IndicatorStyle, Page};
use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::{future::Future, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub shows: Arc<ShowList>,
    pub style: IndicatorStyle,
    pub heading: Arc<str>,
}

impl AppState {
    pub fn new(shows: ShowList, config: &Config) -> Self {
        Self {
            shows: Arc::new(shows),
            style: config.style,
            heading: Arc::from(config.heading.as_str()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub style: Option<IndicatorStyle>,
}

pub async fn run_server(config: Config) -> Result<()> {
    let shows = catalog::shows().context("Built-in show list is invalid")?;
    info!(
        "Loaded {} shows, default indicator style '{}'",
        shows.len(),
        config.style
    );

    let addr = config.addr;
    let app = build_router(AppState::new(shows, &config));

    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_page))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn show_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, StatusCode> {
    let style = query.style.unwrap_or(state.style);
    debug!(style = %style, shows = state.shows.len(), "Rendering page");
    let page = Page {
        heading: &state.heading,
        shows: &state.shows,
    };
    render::render_page(page, style).map(Html).map_err(|e| {
        error!("Failed to render page: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    Interrupt,
    Terminate,
}

/// Resolves with whichever signal arrives first.
pub async fn wait_for_shutdown<I, T>(interrupt: I, terminate: T) -> ShutdownReason
where
    I: Future<Output = ()>,
    T: Future<Output = ()>,
{
    tokio::select! {
        _ = interrupt => ShutdownReason::Interrupt,
        _ = terminate => ShutdownReason::Terminate,
    }
}

async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Ctrl+C handler unavailable: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                warn!("SIGTERM handler unavailable: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let reason = wait_for_shutdown(interrupt, terminate).await;
    info!("Shutdown requested ({:?}), draining connections", reason);
}

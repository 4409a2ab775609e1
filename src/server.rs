use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::Html,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::AppState;
use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::gate::{ApiKeyGate, ConfiguredKeyGate};
use crate::session::ShellStore;
use crate::shell::{NavItem, ShellState};
use crate::ui::{render_document, render_shell};

/// Build the application router.
pub fn router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/healthz", get(healthz))
        .route("/shell/{id}", get(shell_page))
        .route("/shell/{id}/state", get(shell_state))
        .route("/shell/{id}/sidebar/toggle", post(toggle_sidebar))
        .route("/shell/{id}/nav/{item}", post(navigate))
        .route("/shell/{id}/gate/continue", post(gate_continue))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let gate = ConfiguredKeyGate::from_config(&config.gate);

    info!(
        name: "gate.config.loaded",
        enabled = config.gate.enabled,
        showing = gate.must_show(),
        "API key gate configured"
    );

    let shells = ShellStore::with_limits(config.session.ttl(), config.session.max_sessions);
    info!(
        name: "session.config.loaded",
        ttl_secs = config.session.ttl_secs,
        max_sessions = config.session.max_sessions,
        "Session limits configured"
    );
    spawn_session_sweeper(shells.clone());

    let state = AppState {
        shells,
        gate: Arc::new(gate),
    };

    let utilities = std::path::Path::new(&config.server.static_dir).join("tailwind.css");
    if !utilities.is_file() {
        warn!(
            name: "static.tailwind.missing",
            path = %utilities.display(),
            "Tailwind output not found; run the Tailwind CLI build"
        );
    }

    let app = router(state, &config.server.static_dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Periodically drop idle sessions that no request has swept yet.
fn spawn_session_sweeper(shells: ShellStore) {
    let period = shells.ttl().clamp(Duration::from_secs(1), Duration::from_secs(60));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            let removed = shells.cleanup_expired();
            if removed > 0 {
                debug!(
                    name: "session.expired",
                    removed,
                    live = shells.len(),
                    "Expired idle sessions"
                );
            }
        }
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Start a session and render the full page.
async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let id = state.shells.create();
    info!(
        name: "shell.session.created",
        session_id = %id,
        live = state.shells.len(),
        "Shell session created"
    );

    let shell = render_shell(ShellState::default(), state.gate.must_show(), &id);
    Html(render_document("Dashboard", &shell))
}

/// GET /shell/:id - Render the full page for an existing session.
async fn shell_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let shell = state.shells.get(&id).ok_or_else(|| AppError::SessionNotFound(id.clone()))?;
    let shell = render_shell(shell, state.gate.must_show(), &id);
    Ok(Html(render_document("Dashboard", &shell)))
}

/// GET /healthz - Liveness check.
async fn healthz() -> &'static str {
    "ok"
}

// ─────────────────────────────────────────────────────────────────────────────
// HTMX Fragment Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /shell/:id/state - Current view state as JSON.
async fn shell_state(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ShellState>> {
    state
        .shells
        .get(&id)
        .map(Json)
        .ok_or(AppError::SessionNotFound(id))
}

/// POST /shell/:id/sidebar/toggle - Collapse or expand the sidebar.
async fn toggle_sidebar(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let shell = state
        .shells
        .update(&id, ShellState::toggle_sidebar)
        .ok_or_else(|| AppError::SessionNotFound(id.clone()))?;

    debug!(
        name: "shell.sidebar.toggled",
        session_id = %id,
        collapsed = shell.sidebar_collapsed,
        "Sidebar toggled"
    );

    Ok(fragment(&state, shell, &id))
}

/// POST /shell/:id/nav/:item - Apply a sidebar click.
async fn navigate(
    State(state): State<AppState>,
    Path((id, item)): Path<(String, String)>,
) -> Result<Html<String>> {
    let item: NavItem = item.parse()?;

    let mut changed = false;
    let shell = state
        .shells
        .update(&id, |s| changed = s.navigate(item))
        .ok_or_else(|| AppError::SessionNotFound(id.clone()))?;

    debug!(
        name: "shell.nav.clicked",
        session_id = %id,
        item = %item,
        changed,
        view = shell.view.as_str(),
        "Navigation item clicked"
    );

    Ok(fragment(&state, shell, &id))
}

/// POST /shell/:id/gate/continue - Confirm the API key dialog.
///
/// The gate runs its continuation at most once, so a repeated or concurrent
/// confirmation just re-renders the shell.
async fn gate_continue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let shell = state.shells.get(&id).ok_or_else(|| AppError::SessionNotFound(id.clone()))?;

    if state.gate.try_continue() {
        info!(name: "gate.continue", session_id = %id, "Gate continuation invoked");
    }

    Ok(fragment(&state, shell, &id))
}

fn fragment(state: &AppState, shell: ShellState, id: &str) -> Html<String> {
    Html(render_shell(shell, state.gate.must_show(), id))
}

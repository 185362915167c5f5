//! Local host for the browser panel.
//!
//! The server keeps no per-user panel values: `GET /` mounts a fresh panel
//! from the configured initial snapshot, and `POST /edit` turns a snapshot
//! plus one edit into the replacement snapshot and its derived output.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::header;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use serde::Deserialize;
use tower_livereload::{LiveReloadLayer, Reloader};

use crate::panel::{Edit, Panel, PanelState};
use crate::EditResponse;

mod css;
mod inline_js;
mod page;
mod panels;
pub(crate) mod util;

pub const DEFAULT_PORT: u16 = 3340;

pub type ServerResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

struct HostState {
    initial: PanelState,
}

type SharedState = Arc<Mutex<HostState>>;

/// Start the panel host. With a config file, edits to it are picked up and
/// open pages reload.
pub async fn run_panel_server(
    initial: PanelState,
    config_path: Option<PathBuf>,
    port: u16,
) -> ServerResult<()> {
    let state = Arc::new(Mutex::new(HostState { initial }));

    let livereload = LiveReloadLayer::new();
    let reloader = livereload.reloader();

    let _watcher = match &config_path {
        Some(path) => Some(watch_config(path, state.clone(), reloader)?),
        None => None,
    };

    let app = router(state).layer(livereload);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    tracing::info!(url = %format!("http://localhost:{port}/"), "clamp studio panel");
    tracing::info!(url = %format!("http://localhost:{port}/export/css"), "css export");
    if let Some(path) = &config_path {
        tracing::info!(config = %path.display(), "watching config for changes");
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(serve_panel))
        .route("/state.json", get(serve_state))
        .route("/edit", post(serve_edit))
        .route("/export/css", get(serve_export_css).post(serve_export_snapshot_css))
        .with_state(state)
}

fn watch_config(
    path: &Path,
    state: SharedState,
    reloader: Reloader,
) -> ServerResult<RecommendedWatcher> {
    let config_path = path.to_path_buf();
    let file_name = path.file_name().map(|n| n.to_os_string());
    let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
        let event = match res {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(error = %e, "config watcher error");
                return;
            }
        };
        let touches_config = event
            .paths
            .iter()
            .any(|p| p.file_name().map(|n| n.to_os_string()) == file_name);
        if !(event.kind.is_modify() || event.kind.is_create()) || !touches_config {
            return;
        }
        if reload_config(&config_path, &state) {
            reloader.reload();
        }
    })?;
    // Editors often replace the file rather than writing in place, so watch the directory.
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    watcher.watch(dir, RecursiveMode::NonRecursive)?;
    Ok(watcher)
}

/// Swap in the config at `path`. An unreadable or invalid file keeps the
/// previous snapshot and returns false.
fn reload_config(path: &Path, state: &SharedState) -> bool {
    let initial = match crate::config::load_config(path) {
        Ok(initial) => initial,
        Err(e) => {
            tracing::warn!(error = %e, "keeping previous config");
            return false;
        }
    };
    match state.lock() {
        Ok(mut host) => {
            host.initial = initial;
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "host state poisoned; config not swapped");
            false
        }
    }
}

fn initial_state(state: &SharedState) -> PanelState {
    match state.lock() {
        Ok(host) => host.initial.clone(),
        Err(e) => {
            tracing::warn!(error = %e, "host state poisoned; using defaults");
            PanelState::default()
        }
    }
}

// ── Route handlers ────────────────────────────────────────────────────

/// Mount a fresh panel and render the whole page.
async fn serve_panel(State(state): State<SharedState>) -> Html<String> {
    let panel = Panel::new(initial_state(&state));
    match page::build_panel_page(&panel) {
        Ok(html) => Html(html),
        Err(e) => {
            tracing::error!(error = %e, "failed to render panel page");
            Html(page::build_error_page(&e.to_string()))
        }
    }
}

async fn serve_state(State(state): State<SharedState>) -> Json<PanelState> {
    Json(initial_state(&state))
}

#[derive(Debug, Deserialize)]
pub(crate) struct EditRequest {
    state: PanelState,
    edit: Edit,
}

async fn serve_edit(Json(req): Json<EditRequest>) -> Json<EditResponse> {
    tracing::debug!(edit = ?req.edit, "edit");
    Json(crate::apply_edit(req.state, req.edit))
}

type CssAttachment = ([(header::HeaderName, &'static str); 2], String);

fn css_attachment(css: String) -> CssAttachment {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"clamp.css\""),
        ],
        css,
    )
}

/// CSS for the configured initial snapshot.
async fn serve_export_css(State(state): State<SharedState>) -> CssAttachment {
    css_attachment(initial_state(&state).regenerate())
}

/// CSS for the snapshot the page currently holds.
async fn serve_export_snapshot_css(Json(state): Json<PanelState>) -> CssAttachment {
    css_attachment(state.regenerate())
}

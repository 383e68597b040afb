//! Preview router: static bundle under the package dir, shell everywhere else.

use std::{path::Path, sync::Arc};

use axum::{Router, extract::State, response::Html};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Shared router state.
#[derive(Clone)]
pub struct ServerState {
    /// Pre-rendered HTML shell.
    pub shell: Arc<str>,
}

/// Create the preview router.
pub fn create_router(site_root: &Path, pkg_dir: &str, shell: impl Into<Arc<str>>) -> Router {
    let pkg_dir = pkg_dir.trim_matches('/');
    let state = ServerState {
        shell: shell.into(),
    };

    Router::new()
        .nest_service(&format!("/{pkg_dir}"), ServeDir::new(site_root.join(pkg_dir)))
        .fallback(shell_handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Every non-asset path gets the shell; the app has a single page.
async fn shell_handler(State(state): State<ServerState>) -> Html<String> {
    Html(state.shell.to_string())
}

//! Static frontend bundle with client-side router fallback.
//!
//! Existing files are served from the bundle directory by `ServeDir`. Any miss,
//! dotted client routes like `/player/v1.2` included, gets `index.html` (200) so
//! the SPA router can take over. Only when the entry page itself is unreadable
//! does a file-like path (`/app.js`) get the bare `File not found` 404.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use tracing::warn;

pub const INDEX_FILE: &str = "index.html";

#[derive(Debug, Clone)]
pub struct FrontendBundle {
    root: PathBuf,
}

impl FrontendBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }
}

/// Fallback for anything `ServeDir` could not find.
pub async fn spa_fallback(State(bundle): State<Arc<FrontendBundle>>, uri: Uri) -> Response {
    match tokio::fs::read_to_string(bundle.index_path()).await {
        Ok(index) => Html(index).into_response(),
        Err(e) => {
            warn!(
                "Frontend entry page {} unavailable: {e}",
                bundle.index_path().display()
            );
            if looks_like_file(uri.path()) {
                file_not_found()
            } else {
                StatusCode::NOT_FOUND.into_response()
            }
        }
    }
}

fn looks_like_file(path: &str) -> bool {
    Path::new(path).extension().is_some()
}

fn file_not_found() -> Response {
    (StatusCode::NOT_FOUND, "File not found").into_response()
}

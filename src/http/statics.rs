//! Static asset serving with SPA fallback.
//!
//! # Responsibilities
//! - Resolve unmatched request paths against the frontend bundle
//! - Fall back to the index document so client-side routing works
//! - Reject paths that could escape the asset root
//!
//! # Design Decisions
//! - Unsafe paths are treated like missing assets: they fall through to
//!   the SPA fallback and are logged at warn
//! - 404 only when the index document itself is absent

use std::path::{Component, Path, PathBuf};

use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use tokio::fs;

use crate::config::StaticFilesConfig;

/// Read-only view of the frontend bundle directory.
pub struct StaticFiles {
    root: PathBuf,
    index_file: String,
}

impl StaticFiles {
    pub fn new(config: &StaticFilesConfig) -> Self {
        Self {
            root: config.root.clone(),
            index_file: config.index_file.clone(),
        }
    }

    /// Serve the asset for a request path: exact file, else index
    /// document, else 404.
    pub async fn serve(&self, uri: &Uri) -> Response {
        match sanitize_path(uri.path()) {
            Some(relative) => {
                let mut candidate = self.root.join(relative);
                let is_dir = fs::metadata(&candidate)
                    .await
                    .map(|m| m.is_dir())
                    .unwrap_or(false);
                if is_dir {
                    candidate = candidate.join(&self.index_file);
                }
                match fs::read(&candidate).await {
                    Ok(content) => {
                        let mime = mime_guess::from_path(&candidate).first_or_octet_stream();
                        ([(header::CONTENT_TYPE, mime.to_string())], content).into_response()
                    }
                    Err(_) => self.serve_index().await,
                }
            }
            None => {
                tracing::warn!(path = %uri.path(), "Rejected unsafe asset path");
                self.serve_index().await
            }
        }
    }

    async fn serve_index(&self) -> Response {
        let index = self.root.join(&self.index_file);
        match fs::read(&index).await {
            Ok(content) => (
                [(header::CONTENT_TYPE, "text/html; charset=utf-8".to_string())],
                content,
            )
                .into_response(),
            Err(e) => {
                tracing::error!(index = %index.display(), error = %e, "Index document unavailable");
                (
                    StatusCode::NOT_FOUND,
                    "no matching asset and no index document",
                )
                    .into_response()
            }
        }
    }
}

/// Strip the leading slash, percent-decode, and normalize. Returns
/// `None` for anything that could traverse out of the asset root.
fn sanitize_path(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim_start_matches('/');
    let decoded = percent_encoding::percent_decode_str(trimmed)
        .decode_utf8()
        .ok()?;

    let mut clean = PathBuf::new();
    for component in Path::new(decoded.as_ref()).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            // ParentDir, RootDir, Prefix
            _ => return None,
        }
    }
    Some(clean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_nested_paths() {
        assert_eq!(
            sanitize_path("/assets/app.js"),
            Some(PathBuf::from("assets/app.js"))
        );
    }

    #[test]
    fn sanitize_maps_root_to_empty() {
        assert_eq!(sanitize_path("/"), Some(PathBuf::new()));
    }

    #[test]
    fn sanitize_rejects_parent_components() {
        assert_eq!(sanitize_path("/../etc/passwd"), None);
        assert_eq!(sanitize_path("/assets/../../secret"), None);
    }

    #[test]
    fn sanitize_rejects_encoded_traversal() {
        assert_eq!(sanitize_path("/%2e%2e/secret"), None);
    }

    #[test]
    fn sanitize_drops_current_dir_components() {
        assert_eq!(
            sanitize_path("/./assets/./app.js"),
            Some(PathBuf::from("assets/app.js"))
        );
    }
}

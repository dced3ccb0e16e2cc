//! Note tree handler - every request outside the fixed routes.
//!
//! The core is synchronous, so each request resolves, lists and reads on
//! a blocking thread of its own.

use axum::extract::State;
use axum::http::{Method, Uri};
use axum::response::Html;
use mdnotes_core::{LogicalPath, NoteView};

use crate::error::HttpError;
use crate::markdown;
use crate::page;
use crate::state::AppState;

/// Decode the request path into a logical path.
fn logical_path(uri: &Uri) -> Result<LogicalPath, HttpError> {
    let decoded = urlencoding::decode(uri.path())
        .map_err(|e| HttpError::BadRequest(format!("path is not valid UTF-8: {e}")))?;
    Ok(LogicalPath::parse(&decoded)?)
}

/// Serve a note, a directory page, or 404.
pub async fn serve(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Html<String>, HttpError> {
    if method != Method::GET && method != Method::HEAD {
        return Err(HttpError::MethodNotAllowed(method.to_string()));
    }

    let logical = logical_path(&uri)?;
    let requested = uri.path().to_string();

    let view = tokio::task::spawn_blocking(move || state.tree.view(&logical))
        .await
        .map_err(|e| HttpError::Internal(format!("request task failed: {e}")))??;

    match view {
        NoteView::Missing => {
            tracing::debug!(path = %requested, "not found");
            Err(HttpError::NotFound(requested))
        }
        NoteView::Directory {
            breadcrumbs,
            listing,
        } => Ok(Html(page::directory_page(&breadcrumbs, listing))),
        NoteView::Note {
            breadcrumbs,
            name,
            content,
            listing,
        } => {
            let rendered = markdown::render(&content);
            Ok(Html(page::note_page(&breadcrumbs, &name, &rendered, listing)))
        }
    }
}

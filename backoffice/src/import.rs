//! Bulk menu import
//!
//! Reads a local menu file and uploads it for the backend to apply in the
//! chosen mode. Per-row failures come back in the report; HTTP-level
//! failures are categorized like every other call.

use std::path::Path;

use backoffice_client::{HttpClient, ImportMode, ImportReport};
use shared::error::{AppError, AppResult, ErrorCode};

/// Upload `path` for bulk import and return the backend's report.
pub async fn import_menu_file(
    client: &HttpClient,
    path: &Path,
    mode: ImportMode,
) -> AppResult<ImportReport> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::ImportFileInvalid, "import path has no file name")
        })?
        .to_string();

    let contents = tokio::fs::read(path).await.map_err(|e| {
        AppError::with_message(
            ErrorCode::ImportFileInvalid,
            format!("cannot read {}: {}", path.display(), e),
        )
    })?;

    let report = client
        .import_menu(&file_name, contents, mode)
        .await
        .map_err(|e| e.to_app_error())?;

    if report.errors.is_empty() {
        tracing::info!(
            created = report.created,
            updated = report.updated,
            skipped = report.skipped,
            "menu import finished"
        );
    } else {
        tracing::warn!(
            created = report.created,
            updated = report.updated,
            failed = report.errors.len(),
            "menu import finished with row errors"
        );
    }
    Ok(report)
}

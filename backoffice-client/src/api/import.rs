//! Bulk menu import (multipart file upload)

use crate::{ClientError, ClientResult, HttpClient};
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

/// How import rows are applied against existing menu data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// Only create; rows matching existing items fail
    Create,
    /// Only update; rows without a match fail
    Update,
    /// Update when matched, create otherwise
    Upsert,
}

impl ImportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Upsert => "upsert",
        }
    }
}

/// Per-row failure reported by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRowError {
    /// 1-based row number in the uploaded file
    pub row: u32,
    pub message: String,
}

/// Result summary of a bulk import
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    #[serde(default)]
    pub created: u32,
    #[serde(default)]
    pub updated: u32,
    #[serde(default)]
    pub skipped: u32,
    #[serde(default)]
    pub errors: Vec<ImportRowError>,
}

impl HttpClient {
    /// POST /api/menu/import - upload a menu file for bulk import
    ///
    /// The part content type is guessed from the file name; the backend
    /// accepts CSV and XLSX.
    pub async fn import_menu(
        &self,
        file_name: &str,
        contents: Vec<u8>,
        mode: ImportMode,
    ) -> ClientResult<ImportReport> {
        let mime = mime_guess::from_path(file_name).first_or_octet_stream();
        let part = Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str(mime.as_ref())
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        let form = Form::new()
            .part("file", part)
            .text("mode", mode.as_str());

        tracing::info!(file_name, mode = mode.as_str(), "uploading menu import");
        self.post_multipart("/api/menu/import", form).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_serialization() {
        assert_eq!(serde_json::to_string(&ImportMode::Upsert).unwrap(), "\"upsert\"");
        assert_eq!(ImportMode::Create.as_str(), "create");
    }

    #[test]
    fn test_report_defaults() {
        let report: ImportReport = serde_json::from_str(r#"{"created": 3}"#).unwrap();
        assert_eq!(report.created, 3);
        assert_eq!(report.updated, 0);
        assert!(report.errors.is_empty());
    }
}

//! QR code management
//!
//! QR images are rendered by the backend; this module fetches the blobs and
//! writes them to disk for the save dialog.

use std::path::{Path, PathBuf};

use backoffice_client::{HttpClient, QrAsset};
use shared::error::{AppError, AppResult};

/// Which QR artifact to download for a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneQrFormat {
    /// One PDF with every table's QR
    Pdf,
    /// A ZIP of per-table PNGs
    Zip,
}

/// Download a single table's QR code as PNG
pub async fn fetch_table_qr(client: &HttpClient, table_id: &str) -> AppResult<QrAsset> {
    client
        .download_table_qr_png(table_id)
        .await
        .map_err(|e| e.to_app_error())
}

/// Download a whole zone's QR codes in the requested format
pub async fn fetch_zone_qr(
    client: &HttpClient,
    zone_id: &str,
    format: ZoneQrFormat,
) -> AppResult<QrAsset> {
    let result = match format {
        ZoneQrFormat::Pdf => client.download_zone_qr_pdf(zone_id).await,
        ZoneQrFormat::Zip => client.download_zone_qr_zip(zone_id).await,
    };
    result.map_err(|e| e.to_app_error())
}

/// Write a downloaded asset into `dir` under its suggested file name
pub async fn save_asset(asset: &QrAsset, dir: &Path) -> AppResult<PathBuf> {
    let path = dir.join(&asset.file_name);
    tokio::fs::write(&path, &asset.bytes)
        .await
        .map_err(|e| AppError::internal(format!("failed to write {}: {}", path.display(), e)))?;
    tracing::info!(path = %path.display(), size = asset.bytes.len(), "QR asset saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[tokio::test]
    async fn save_asset_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let asset = QrAsset {
            file_name: "table-t1-qr.png".into(),
            content_type: "image/png".into(),
            bytes: Bytes::from_static(b"\x89PNG"),
        };

        let path = save_asset(&asset, dir.path()).await.unwrap();
        assert_eq!(path.file_name().unwrap(), "table-t1-qr.png");
        assert_eq!(std::fs::read(&path).unwrap(), b"\x89PNG");
    }
}

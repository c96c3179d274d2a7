//! QR code asset downloads
//!
//! The backend renders the QR images; the client only fetches blobs.

use crate::{ClientResult, HttpClient};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A downloaded QR blob, ready for a file-save dialog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrAsset {
    pub file_name: String,
    pub content_type: String,
    #[serde(skip)]
    pub bytes: Bytes,
}

impl HttpClient {
    /// GET /api/qr/tables/{id}.png - single table QR as PNG
    pub async fn download_table_qr_png(&self, table_id: &str) -> ClientResult<QrAsset> {
        let bytes = self
            .get_bytes(&format!("/api/qr/tables/{}.png", table_id))
            .await?;
        Ok(QrAsset {
            file_name: format!("table-{}-qr.png", table_id),
            content_type: "image/png".to_string(),
            bytes,
        })
    }

    /// GET /api/qr/zones/{id}.pdf - all table QRs of a zone as one PDF
    pub async fn download_zone_qr_pdf(&self, zone_id: &str) -> ClientResult<QrAsset> {
        let bytes = self
            .get_bytes(&format!("/api/qr/zones/{}.pdf", zone_id))
            .await?;
        Ok(QrAsset {
            file_name: format!("zone-{}-qr.pdf", zone_id),
            content_type: "application/pdf".to_string(),
            bytes,
        })
    }

    /// GET /api/qr/zones/{id}.zip - per-table QR PNGs of a zone as a ZIP
    pub async fn download_zone_qr_zip(&self, zone_id: &str) -> ClientResult<QrAsset> {
        let bytes = self
            .get_bytes(&format!("/api/qr/zones/{}.zip", zone_id))
            .await?;
        Ok(QrAsset {
            file_name: format!("zone-{}-qr.zip", zone_id),
            content_type: "application/zip".to_string(),
            bytes,
        })
    }
}

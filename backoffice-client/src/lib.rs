//! Back-office client - HTTP client for the restaurant backend
//!
//! Typed, async access to the REST API the back-office screens consume:
//! zones and floor-plan layout, table CRUD and batch position upserts,
//! menu items and categories, QR asset downloads, bulk menu import, and
//! tenant info.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

pub use api::import::{ImportMode, ImportReport, ImportRowError};
pub use api::qr::QrAsset;

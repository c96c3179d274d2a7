//! Typed per-resource API surface
//!
//! Each module extends [`HttpClient`](crate::HttpClient) with the calls
//! one back-office screen consumes.

pub mod import;
pub mod menu;
pub mod qr;
pub mod tables;
pub mod tenant;
pub mod zones;

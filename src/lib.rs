//! Crop advisory gateway.
//!
//! A thin HTTP relay that forwards farmer queries (text or images) to a
//! hosted multimodal model and returns its text response. Uploaded images
//! are spooled to a scratch directory, base64-encoded into the upstream
//! payload, and best-effort deleted afterwards.

pub mod app_context;
pub mod config;
pub mod core;
pub mod middleware;
pub mod routers;
pub mod server;

pub mod client;
pub mod error;
pub mod prompts;
pub mod spool;

pub use client::GeminiClient;
pub use error::{GatewayError, GatewayResult};
pub use spool::{ImageSpool, SpooledImage};

pub mod advisory;
pub mod disease;
pub mod error;
pub mod evaluation;
pub(crate) mod upload;

//! Protocol definitions for the crop advisory gateway.
//!
//! `generate` holds the subset of the Gemini `generateContent` wire format the
//! gateway speaks; `advisory` and `evaluation` hold the gateway's own
//! request parameters and response bodies.

pub mod advisory;
pub mod evaluation;
pub mod generate;

pub use advisory::{AdvisoryResponse, DiseaseParams, DiseaseReport, TextAdvisoryParams};
pub use evaluation::{BatchEvaluationResponse, EvaluationResponse, EvaluationResult};
pub use generate::{
    Blob, Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    Part, PromptFeedback,
};

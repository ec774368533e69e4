//! Answer-sheet evaluation response types.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Response body for `POST /evaluate-answer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResponse {
    pub evaluation: String,
}

/// Outcome for one sheet in a batch. Exactly one of `evaluation` and
/// `error` is present.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// The uploaded part's filename, or `sheet-N` when the client sent none.
    pub filename: String,
    pub evaluation: Option<String>,
    pub error: Option<String>,
}

impl EvaluationResult {
    pub fn success(filename: impl Into<String>, evaluation: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            evaluation: Some(evaluation.into()),
            error: None,
        }
    }

    pub fn failure(filename: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            evaluation: None,
            error: Some(error.into()),
        }
    }
}

/// Response body for `POST /evaluate-batch`. `results` preserves upload
/// arrival order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEvaluationResponse {
    pub results: Vec<EvaluationResult>,
    pub evaluated: usize,
    pub failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_result_omits_error_field() {
        let result = EvaluationResult::success("sheet1.jpg", "7/10. Mostly correct.");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["filename"], "sheet1.jpg");
        assert_eq!(value["evaluation"], "7/10. Mostly correct.");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_failure_result_omits_evaluation_field() {
        let result = EvaluationResult::failure("sheet2.jpg", "Upstream returned 503");
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("evaluation").is_none());
        assert_eq!(value["error"], "Upstream returned 503");
    }
}

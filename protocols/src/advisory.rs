//! Advisory and disease-detection request/response types.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for `GET /text-advisory`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TextAdvisoryParams {
    /// The farmer's crop-related query.
    #[validate(length(min = 1))]
    pub user_query: String,
}

/// Response body shared by the text and image advisory routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryResponse {
    pub advisory: String,
}

/// Query parameters for `POST /detect-disease`.
#[derive(Debug, Clone, Deserialize)]
pub struct DiseaseParams {
    /// Language for the diagnosis (e.g. "Hindi", "Marathi", "Telugu").
    #[serde(default = "default_language")]
    pub lang: String,
}

fn default_language() -> String {
    "English".to_string()
}

impl Default for DiseaseParams {
    fn default() -> Self {
        Self {
            lang: default_language(),
        }
    }
}

/// Response body for `POST /detect-disease`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseReport {
    pub diagnosis: String,
    pub language: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_fails_validation() {
        let params = TextAdvisoryParams {
            user_query: String::new(),
        };
        assert!(params.validate().is_err());

        let params = TextAdvisoryParams {
            user_query: "when should I sow wheat".to_string(),
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_disease_params_language_defaults_to_english() {
        let params: DiseaseParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.lang, "English");

        let params: DiseaseParams = serde_json::from_str(r#"{"lang":"Telugu"}"#).unwrap();
        assert_eq!(params.lang, "Telugu");
    }
}

//! Machine-readable solve output

use crate::commands::SolveResult;
use serde::Serialize;

/// One solution as `{"words": [...], "score": n}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionJson {
    pub words: Vec<String>,
    pub score: f64,
}

/// Top-level response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solutions: Option<Vec<SolutionJson>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SolveResponse {
    #[must_use]
    pub fn from_result(result: &SolveResult) -> Self {
        Self {
            success: true,
            solutions: Some(
                result
                    .solutions
                    .iter()
                    .map(|s| SolutionJson {
                        words: s.words.clone(),
                        score: s.score,
                    })
                    .collect(),
            ),
            error: None,
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            solutions: None,
            error: Some(message.into()),
        }
    }
}

/// Serialize a solve result
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(result: &SolveResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&SolveResponse::from_result(result))
}

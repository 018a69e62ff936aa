use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_analysis_type() -> String {
    "comprehensive".to_string()
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    pub content: Option<String>,
    pub url: Option<String>,
    /// Accepted for forward compatibility; only comprehensive analysis runs.
    #[serde(default = "default_analysis_type")]
    pub analysis_type: String,
}

impl AnalyzeRequest {
    pub fn validate(&self) -> Result<(), String> {
        let has_content = self.content.as_deref().is_some_and(|c| !c.trim().is_empty());
        let has_url = self.url.as_deref().is_some_and(|u| !u.trim().is_empty());
        if !has_content && !has_url {
            return Err("Either content or URL must be provided".to_string());
        }
        Ok(())
    }
}

fn default_limit() -> i64 {
    20
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct HistoryQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

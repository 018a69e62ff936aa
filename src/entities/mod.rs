use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Closed set of verdict labels the analyst may assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Classification {
    #[serde(rename = "Real News")]
    RealNews,
    #[serde(rename = "Fake News")]
    FakeNews,
    Misleading,
    Satirical,
    Opinion,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FakeNewsVerdict {
    pub is_fake: bool,
    /// 0-100 scale.
    pub confidence_score: f64,
    pub classification: Classification,
    #[serde(default)]
    pub reasoning: Vec<String>,
    #[serde(default)]
    pub evidence: Vec<String>,
    #[serde(default)]
    pub red_flags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BiasAssessment {
    /// 0-10 scale, 0 being neutral, 10 being extremely biased.
    pub bias_score: f64,
    /// Primary kind of bias detected: political, commercial, emotional, etc.
    pub bias_type: String,
    #[serde(default)]
    pub bias_indicators: Vec<String>,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SourceCredibility {
    /// 0-10 scale.
    pub credibility_score: f64,
    #[serde(default)]
    pub credibility_factors: Vec<String>,
    #[serde(default)]
    pub reputation_indicators: Vec<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
}

/// One completed analysis, exactly as persisted and as returned to callers.
///
/// Created once per successful request, never updated in place. `content`
/// holds the storage-truncated text (see the analyzer); `created_at` is set
/// at assembly and serialized as an RFC 3339 string.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub content: String,
    pub source_url: Option<String>,
    pub fake_news_analysis: FakeNewsVerdict,
    pub bias_analysis: BiasAssessment,
    pub source_credibility: Option<SourceCredibility>,
    pub overall_assessment: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_serializes_with_spaces() {
        let json = serde_json::to_string(&Classification::RealNews).unwrap();
        assert_eq!(json, "\"Real News\"");
        let back: Classification = serde_json::from_str("\"Fake News\"").unwrap();
        assert_eq!(back, Classification::FakeNews);
    }

    #[test]
    fn unknown_classification_is_rejected() {
        let result = serde_json::from_str::<Classification>("\"Propaganda\"");
        assert!(result.is_err());
    }

    #[test]
    fn list_fields_default_to_empty() {
        let verdict: FakeNewsVerdict = serde_json::from_str(
            r#"{"is_fake": false, "confidence_score": 90.0, "classification": "Real News"}"#,
        )
        .unwrap();
        assert!(verdict.reasoning.is_empty());
        assert!(verdict.evidence.is_empty());
        assert!(verdict.red_flags.is_empty());
    }
}

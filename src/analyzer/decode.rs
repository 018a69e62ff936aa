//! Defensive decoding of collaborator replies.
//!
//! Providers routinely wrap their JSON in prose or markdown fences. The
//! decoder first tries the reply verbatim, then falls back to the greedy
//! brace span (first `{` to last `}`). Anything that still fails to match
//! the required shape is an explicit error, never a silently partial record.

use crate::analyzer::AnalysisError;
use crate::entities::{BiasAssessment, FakeNewsVerdict, SourceCredibility};
use serde::Deserialize;

/// The shape the collaborator is asked to return. `source_credibility` may
/// legitimately be absent when there is no source context to assess.
#[derive(Debug, Deserialize)]
pub struct RawAnalysis {
    pub fake_news_analysis: FakeNewsVerdict,
    pub bias_analysis: BiasAssessment,
    #[serde(default)]
    pub source_credibility: Option<SourceCredibility>,
    pub overall_assessment: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

pub fn decode_reply(reply: &str) -> Result<RawAnalysis, AnalysisError> {
    if let Ok(parsed) = serde_json::from_str::<RawAnalysis>(reply) {
        return Ok(parsed);
    }

    let span = brace_span(reply).ok_or(AnalysisError::NoJsonInReply)?;
    serde_json::from_str::<RawAnalysis>(span).map_err(AnalysisError::InvalidShape)
}

fn brace_span(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    (end >= start).then(|| &reply[start..=end])
}

pub mod decode;
pub mod prompt;
pub mod provider;

pub use provider::{AnalysisProvider, OpenAiProvider, ProviderError};

use crate::entities::AnalysisRecord;
use chrono::Utc;
use thiserror::Error;
use tracing::instrument;
use uuid::Uuid;

/// Stored `content` is cut at this many characters, marker appended.
/// Analysis itself always runs on the untruncated text.
const STORAGE_CONTENT_CAP: usize = 2000;
const TRUNCATION_MARKER: &str = "...";

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("analysis provider call failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("failed to parse analysis response")]
    NoJsonInReply,

    #[error("analysis response did not match the expected shape: {0}")]
    InvalidShape(#[source] serde_json::Error),
}

/// Run one analysis round-trip: prompt, single collaborator call, decode,
/// assemble. No retries; a reply that cannot be repaired into the expected
/// shape fails the whole request.
#[instrument(skip_all, fields(content_len = text.chars().count(), has_url = source_url.is_some()))]
pub async fn analyze(
    provider: &dyn AnalysisProvider,
    text: &str,
    source_url: Option<&str>,
) -> Result<AnalysisRecord, AnalysisError> {
    let user_prompt = prompt::build_user_prompt(text, source_url);
    let reply = provider.complete(prompt::SYSTEM_PROMPT, &user_prompt).await?;

    let mut raw = decode::decode_reply(&reply)?;

    // Score invariants are enforced here rather than trusted from the reply.
    raw.fake_news_analysis.confidence_score =
        raw.fake_news_analysis.confidence_score.clamp(0.0, 100.0);
    raw.bias_analysis.bias_score = raw.bias_analysis.bias_score.clamp(0.0, 10.0);
    if let Some(credibility) = raw.source_credibility.as_mut() {
        credibility.credibility_score = credibility.credibility_score.clamp(0.0, 10.0);
    }

    Ok(AnalysisRecord {
        id: Uuid::new_v4(),
        content: truncate_for_storage(text),
        source_url: source_url.map(str::to_string),
        fake_news_analysis: raw.fake_news_analysis,
        bias_analysis: raw.bias_analysis,
        source_credibility: raw.source_credibility,
        overall_assessment: raw.overall_assessment,
        recommendations: raw.recommendations,
        created_at: Utc::now(),
    })
}

fn truncate_for_storage(text: &str) -> String {
    let mut stored: String = text.chars().take(STORAGE_CONTENT_CAP).collect();
    if text.chars().count() > STORAGE_CONTENT_CAP {
        stored.push_str(TRUNCATION_MARKER);
    }
    stored
}

#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use axum::Router;
use sqlx::{Pool, Postgres};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use veracity::{
    analyzer::{AnalysisProvider, OpenAiProvider},
    api,
    app_state::AppState,
    entities::AnalysisRecord,
    repositories::AnalysisStore,
};

/// Store fake for integration tests: same contract as the Postgres store,
/// held in a mutex-guarded vec.
#[derive(Default)]
pub struct InMemoryStore {
    records: Mutex<Vec<AnalysisRecord>>,
}

#[async_trait]
impl AnalysisStore for InMemoryStore {
    async fn insert(&self, record: &AnalysisRecord) -> Result<()> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn recent(&self, limit: i64) -> Result<Vec<AnalysisRecord>> {
        let mut records = self.records.lock().unwrap().clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(limit.max(0) as usize);
        Ok(records)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() < before)
    }
}

fn dummy_pool() -> Pool<Postgres> {
    Pool::<Postgres>::connect_lazy("postgresql://dummy").expect("Failed to create test pool")
}

/// Full application router wired to the given store and a provider pointed
/// at a mock collaborator endpoint.
pub fn test_app(store: Arc<dyn AnalysisStore>, collaborator_url: &str) -> Router {
    let provider = OpenAiProvider::new("sk-test", "gpt-4o").with_base_url(collaborator_url);
    test_app_with_provider(store, Arc::new(provider))
}

pub fn test_app_with_provider(
    store: Arc<dyn AnalysisStore>,
    analyst: Arc<dyn AnalysisProvider>,
) -> Router {
    let state = AppState {
        store,
        analyst,
        db_pool: dummy_pool(),
    };
    api::router(state, "*")
}

/// A well-formed collaborator verdict, as the raw JSON string the provider
/// is expected to return.
pub fn verdict_json() -> String {
    serde_json::json!({
        "fake_news_analysis": {
            "is_fake": false,
            "confidence_score": 87.5,
            "classification": "Real News",
            "reasoning": ["Attributed quotes from named officials"],
            "evidence": ["Consistent with wire service reporting"],
            "red_flags": []
        },
        "bias_analysis": {
            "bias_score": 2.5,
            "bias_type": "political",
            "bias_indicators": ["selective framing"],
            "explanation": "Mild framing bias in headline choice."
        },
        "source_credibility": {
            "credibility_score": 7.0,
            "credibility_factors": ["Established outlet"],
            "reputation_indicators": ["Corrections policy"],
            "concerns": []
        },
        "overall_assessment": "Credible reporting with minor framing bias.",
        "recommendations": ["Compare with other outlets' coverage"]
    })
    .to_string()
}

/// Wrap reply text in the provider's chat-completions response envelope.
pub fn chat_completion_body(reply: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [
            { "message": { "role": "assistant", "content": reply } }
        ]
    })
}

/// A ~600 character well-formed news paragraph.
pub fn sample_article_text() -> String {
    "The regional transit authority announced on Tuesday that it will expand \
     late-night service on three of its busiest lines beginning next month, \
     following a six-month pilot program that officials described as broadly \
     successful. Ridership on the pilot routes rose fourteen percent compared \
     with the same period last year, according to figures released alongside \
     the announcement. The expansion will be funded through a combination of \
     existing fare revenue and a state mobility grant awarded in the spring. \
     Advocacy groups welcomed the decision while urging the agency to publish \
     a full evaluation of the pilot's safety and staffing data."
        .to_string()
}

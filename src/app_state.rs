use crate::analyzer::AnalysisProvider;
use crate::repositories::{AnalysisStore, PgAnalysisStore};
use sqlx::{Pool, Postgres};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AnalysisStore>,
    pub analyst: Arc<dyn AnalysisProvider>,
    pub db_pool: Pool<Postgres>,
}

impl AppState {
    pub fn new(pool: Pool<Postgres>, analyst: Arc<dyn AnalysisProvider>) -> Self {
        Self {
            store: Arc::new(PgAnalysisStore::new(pool.clone())),
            analyst,
            db_pool: pool,
        }
    }
}

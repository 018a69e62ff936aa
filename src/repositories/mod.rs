pub mod analysis;

pub use analysis::{AnalysisStore, PgAnalysisStore};

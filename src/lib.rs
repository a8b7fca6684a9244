pub mod config;
pub mod error;
pub mod models;
pub mod llm;
pub mod taxonomy;
pub mod classification;
pub mod storage;

pub use config::{Config, FallbackMode, PipelineConfig, ProviderKind};
pub use error::{Error, Result};
pub use llm::{ClassificationProvider, ClaudeProvider, OpenAIProvider, RateLimiter};
pub use classification::{ClassificationPipeline, FallbackClassifier, KeywordClassifier, RunSummary};
pub use models::{Category, Classification, SubjectRow, SubjectTable};
pub use taxonomy::SubjectTaxonomy;
pub use storage::Storage;

pub mod keyword;
pub mod fallback;
pub mod pipeline;
pub mod summary;

pub use keyword::KeywordClassifier;
pub use fallback::FallbackClassifier;
pub use pipeline::{ClassificationPipeline, PipelineOutcome};
pub use summary::RunSummary;

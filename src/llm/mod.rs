pub mod provider;
pub mod openai;
pub mod claude;
pub mod prompts;
pub mod parser;
pub mod rate_limiter;

pub use provider::ClassificationProvider;
pub use openai::OpenAIProvider;
pub use claude::ClaudeProvider;
pub use prompts::ClassificationRequest;
pub use rate_limiter::RateLimiter;

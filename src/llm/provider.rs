use async_trait::async_trait;
use crate::error::Result;

/// Remote text classifier: subject in, raw label text out.
#[async_trait]
pub trait ClassificationProvider: Send + Sync {
    async fn classify(&self, subject: &str) -> Result<String>;
    fn name(&self) -> &str;
}

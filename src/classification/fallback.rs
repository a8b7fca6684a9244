use std::sync::Arc;

use crate::error::{Error, Result};
use crate::llm::parser::parse_label;
use crate::llm::ClassificationProvider;
use crate::models::Category;

/// Remote classification for subjects the keyword table cannot place.
/// Any provider or parse failure surfaces as `ClassificationUnavailable`.
pub struct FallbackClassifier {
    provider: Arc<dyn ClassificationProvider>,
}

impl FallbackClassifier {
    pub fn new(provider: impl ClassificationProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    pub fn from_arc(provider: Arc<dyn ClassificationProvider>) -> Self {
        Self { provider }
    }

    pub async fn classify(&self, subject: &str) -> Result<String> {
        let raw = self
            .provider
            .classify(subject)
            .await
            .map_err(|e| self.unavailable(subject, e))?;

        let label = parse_label(&raw).map_err(|e| self.unavailable(subject, e))?;

        if label.parse::<Category>().map(|c| !c.is_coarse()).unwrap_or(true) {
            tracing::warn!(
                "{} returned label {:?} outside the published set for {:?}",
                self.provider.name(),
                label,
                subject
            );
        }

        Ok(label)
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    fn unavailable(&self, subject: &str, cause: Error) -> Error {
        Error::ClassificationUnavailable(format!(
            "{} could not classify {:?}: {}",
            self.provider.name(),
            subject,
            cause
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Scripted(std::result::Result<&'static str, u64>);

    #[async_trait]
    impl ClassificationProvider for Scripted {
        async fn classify(&self, _subject: &str) -> Result<String> {
            match self.0 {
                Ok(label) => Ok(label.to_string()),
                Err(secs) => Err(Error::RateLimited(secs)),
            }
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    #[tokio::test]
    async fn test_label_is_cleaned() {
        let classifier = FallbackClassifier::new(Scripted(Ok(" CTE\n")));
        assert_eq!(classifier.classify("Robotics").await.unwrap(), "CTE");
    }

    #[tokio::test]
    async fn test_off_taxonomy_label_is_trusted() {
        let classifier = FallbackClassifier::new(Scripted(Ok("Engineering")));
        assert_eq!(classifier.classify("Robotics").await.unwrap(), "Engineering");
    }

    #[tokio::test]
    async fn test_provider_failure_is_unavailable() {
        let classifier = FallbackClassifier::new(Scripted(Err(30)));
        let err = classifier.classify("Robotics").await.unwrap_err();
        assert!(matches!(err, Error::ClassificationUnavailable(msg) if msg.contains("30 seconds")));
    }

    #[tokio::test]
    async fn test_empty_reply_is_unavailable() {
        let classifier = FallbackClassifier::new(Scripted(Ok("   ")));
        assert!(matches!(
            classifier.classify("").await,
            Err(Error::ClassificationUnavailable(_))
        ));
    }
}

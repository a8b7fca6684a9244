use indicatif::{ProgressBar, ProgressStyle};

use crate::classification::fallback::FallbackClassifier;
use crate::classification::keyword::KeywordClassifier;
use crate::classification::summary::RunSummary;
use crate::config::{FallbackMode, PipelineConfig};
use crate::error::{Error, Result};
use crate::models::{Classification, SubjectTable};
use crate::taxonomy::SubjectTaxonomy;

pub struct PipelineOutcome {
    pub table: SubjectTable,
    pub summary: RunSummary,
}

pub struct ClassificationPipeline {
    keyword: KeywordClassifier,
    fallback: Option<FallbackClassifier>,
    config: PipelineConfig,
}

impl ClassificationPipeline {
    pub fn new(
        taxonomy: SubjectTaxonomy,
        fallback: Option<FallbackClassifier>,
        config: PipelineConfig,
    ) -> Result<Self> {
        if config.fallback_mode == FallbackMode::Enabled && fallback.is_none() {
            return Err(Error::Config(
                "Fallback mode is enabled but no classification provider was supplied".to_string(),
            ));
        }

        Ok(Self {
            keyword: KeywordClassifier::new(taxonomy),
            fallback,
            config,
        })
    }

    pub fn log_only(taxonomy: SubjectTaxonomy) -> Self {
        Self {
            keyword: KeywordClassifier::new(taxonomy),
            fallback: None,
            config: PipelineConfig::log_only(),
        }
    }

    pub fn mode(&self) -> FallbackMode {
        self.config.fallback_mode
    }

    /// Drops excluded rows and attaches `normalized_subject` to the rest, in order.
    /// A row that cannot be classified is emitted unlabelled; nothing here aborts the run.
    pub async fn run(&self, table: SubjectTable) -> PipelineOutcome {
        let SubjectTable { schema, rows } = table;
        let mut summary = RunSummary::new(self.mode());
        let mut output = Vec::with_capacity(rows.len());

        tracing::info!(
            "Classifying {} rows (fallback {})",
            rows.len(),
            self.mode()
        );

        let pb = self.progress_bar(rows.len());

        for mut row in rows {
            pb.inc(1);

            if self.config.is_excluded(schema.status(&row)) {
                tracing::debug!("Skipping line {}: status {:?}", row.line, schema.status(&row));
                summary.record_excluded();
                continue;
            }

            let subject = schema.subject(&row).to_string();
            row.normalized_subject = self.classify_row(row.line, &subject, &mut summary).await;
            summary.record_row(&subject, row.normalized_subject.as_ref());
            output.push(row);
        }

        pb.finish_and_clear();

        tracing::info!(
            "Classified {} of {} rows ({} keyword, {} fallback, {} excluded)",
            summary.resolved(),
            summary.output_rows,
            summary.keyword_matches,
            summary.fallback_matches,
            summary.excluded_rows
        );

        PipelineOutcome {
            table: SubjectTable::new(schema, output),
            summary,
        }
    }

    /// Keyword match first, then the remote classifier when enabled.
    pub async fn classify_subject(&self, subject: &str) -> Result<Option<Classification>> {
        if let Some(category) = self.keyword.classify(subject) {
            return Ok(Some(Classification::Keyword(category)));
        }

        match (self.mode(), &self.fallback) {
            (FallbackMode::Enabled, Some(fallback)) => {
                let label = fallback.classify(subject).await?;
                Ok(Some(Classification::Fallback(label)))
            }
            _ => Ok(None),
        }
    }

    async fn classify_row(
        &self,
        line: u64,
        subject: &str,
        summary: &mut RunSummary,
    ) -> Option<Classification> {
        match self.classify_subject(subject).await {
            Ok(Some(classification)) => {
                tracing::debug!("Line {}: {:?} -> {}", line, subject, classification);
                Some(classification)
            }
            Ok(None) => {
                tracing::info!("No category for subject: {}", subject);
                None
            }
            Err(e) => {
                tracing::warn!("Line {}: {}", line, e);
                summary.record_failure();
                None
            }
        }
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.config.show_progress || self.mode() == FallbackMode::Disabled {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} subjects")
            .map(|s| s.progress_chars("#>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        pb
    }
}

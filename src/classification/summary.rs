use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::FallbackMode;
use crate::models::Classification;

/// Counters for a single pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub fallback_mode: FallbackMode,
    pub input_rows: usize,
    pub excluded_rows: usize,
    pub output_rows: usize,
    pub keyword_matches: usize,
    pub fallback_matches: usize,
    pub unresolved: usize,
    pub fallback_failures: usize,
    /// Rows per emitted label.
    pub labels: BTreeMap<String, usize>,
    /// Subjects left without a label, in input order, for manual review.
    pub unmatched_subjects: Vec<String>,
    pub processed_at: DateTime<Utc>,
}

impl RunSummary {
    pub fn new(fallback_mode: FallbackMode) -> Self {
        Self {
            fallback_mode,
            input_rows: 0,
            excluded_rows: 0,
            output_rows: 0,
            keyword_matches: 0,
            fallback_matches: 0,
            unresolved: 0,
            fallback_failures: 0,
            labels: BTreeMap::new(),
            unmatched_subjects: Vec::new(),
            processed_at: Utc::now(),
        }
    }

    pub(crate) fn record_excluded(&mut self) {
        self.input_rows += 1;
        self.excluded_rows += 1;
    }

    pub(crate) fn record_failure(&mut self) {
        self.fallback_failures += 1;
    }

    pub(crate) fn record_row(&mut self, subject: &str, outcome: Option<&Classification>) {
        self.input_rows += 1;
        self.output_rows += 1;

        match outcome {
            Some(classification) => {
                match classification {
                    Classification::Keyword(_) => self.keyword_matches += 1,
                    Classification::Fallback(_) => self.fallback_matches += 1,
                }
                *self
                    .labels
                    .entry(classification.label().to_string())
                    .or_insert(0) += 1;
            }
            None => {
                self.unresolved += 1;
                self.unmatched_subjects.push(subject.to_string());
            }
        }
    }

    pub fn resolved(&self) -> usize {
        self.keyword_matches + self.fallback_matches
    }

    /// Share of emitted rows that received a label.
    pub fn coverage(&self) -> f32 {
        if self.output_rows == 0 {
            return 0.0;
        }
        self.resolved() as f32 / self.output_rows as f32
    }
}

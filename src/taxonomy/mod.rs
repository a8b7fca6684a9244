pub mod keywords;

use crate::models::Category;

pub use keywords::KEYWORD_TABLE;

#[derive(Debug, Clone, Copy)]
pub struct TaxonomyEntry {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

/// Ordered (category, triggers) list. Built once and handed to the classifier;
/// never mutated after construction.
#[derive(Debug, Clone)]
pub struct SubjectTaxonomy {
    entries: Vec<TaxonomyEntry>,
}

impl SubjectTaxonomy {
    pub fn new() -> Self {
        let entries = KEYWORD_TABLE
            .iter()
            .map(|(category, keywords)| TaxonomyEntry {
                category: *category,
                keywords: *keywords,
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[TaxonomyEntry] {
        &self.entries
    }

    pub fn keywords_for(&self, category: Category) -> &[&'static str] {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.keywords)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SubjectTaxonomy {
    fn default() -> Self {
        Self::new()
    }
}

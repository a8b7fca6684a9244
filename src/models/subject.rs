use crate::error::{Error, Result};
use crate::models::category::Classification;

pub const SUBJECT_COLUMN: &str = "subject";
pub const STATUS_COLUMN: &str = "status";
pub const NORMALIZED_COLUMN: &str = "normalized_subject";

/// Column layout of an input table, with the positions the pipeline needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    columns: Vec<String>,
    subject_idx: usize,
    status_idx: usize,
    // An input column already named `normalized_subject` is replaced, not passed through.
    replaced_idx: Option<usize>,
}

impl TableSchema {
    pub fn new(columns: Vec<String>) -> Result<Self> {
        let position = |name: &str| columns.iter().position(|c| c == name);

        let subject_idx =
            position(SUBJECT_COLUMN).ok_or_else(|| Error::MissingColumn(SUBJECT_COLUMN.to_string()))?;
        let status_idx =
            position(STATUS_COLUMN).ok_or_else(|| Error::MissingColumn(STATUS_COLUMN.to_string()))?;
        let replaced_idx = position(NORMALIZED_COLUMN);

        Ok(Self {
            columns,
            subject_idx,
            status_idx,
            replaced_idx,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Input columns in first-seen order, then `normalized_subject`.
    pub fn output_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != self.replaced_idx)
            .map(|(_, c)| c.as_str())
            .chain(std::iter::once(NORMALIZED_COLUMN))
            .collect()
    }

    pub fn subject<'a>(&self, row: &'a SubjectRow) -> &'a str {
        row.value(self.subject_idx)
    }

    pub fn status<'a>(&self, row: &'a SubjectRow) -> &'a str {
        row.value(self.status_idx)
    }

    /// Pass-through values followed by the classification (empty when unresolved).
    pub fn output_record<'a>(&self, row: &'a SubjectRow) -> Vec<&'a str> {
        row.values
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != self.replaced_idx)
            .map(|(_, v)| v.as_str())
            .chain(std::iter::once(
                row.normalized_subject.as_ref().map(|c| c.label()).unwrap_or(""),
            ))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRow {
    /// 1-based line in the source table, for log context.
    pub line: u64,
    pub values: Vec<String>,
    pub normalized_subject: Option<Classification>,
}

impl SubjectRow {
    pub fn new(line: u64, values: Vec<String>) -> Self {
        Self {
            line,
            values,
            normalized_subject: None,
        }
    }

    pub fn value(&self, idx: usize) -> &str {
        self.values.get(idx).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectTable {
    pub schema: TableSchema,
    pub rows: Vec<SubjectRow>,
}

impl SubjectTable {
    pub fn new(schema: TableSchema, rows: Vec<SubjectRow>) -> Self {
        Self { schema, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::Category;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_schema_requires_subject_and_status() {
        assert!(matches!(
            TableSchema::new(columns(&["id", "status"])),
            Err(Error::MissingColumn(c)) if c == "subject"
        ));
        assert!(matches!(
            TableSchema::new(columns(&["subject", "id"])),
            Err(Error::MissingColumn(c)) if c == "status"
        ));
    }

    #[test]
    fn test_output_columns_append_normalized() {
        let schema = TableSchema::new(columns(&["id", "subject", "status"])).unwrap();
        assert_eq!(
            schema.output_columns(),
            vec!["id", "subject", "status", "normalized_subject"]
        );
    }

    #[test]
    fn test_existing_normalized_column_is_replaced() {
        let schema =
            TableSchema::new(columns(&["subject", "normalized_subject", "status"])).unwrap();
        assert_eq!(
            schema.output_columns(),
            vec!["subject", "status", "normalized_subject"]
        );

        let mut row = SubjectRow::new(2, columns(&["Algebra", "stale", "Active"]));
        row.normalized_subject = Some(Classification::Keyword(Category::Math));
        assert_eq!(schema.output_record(&row), vec!["Algebra", "Active", "MATH"]);
    }

    #[test]
    fn test_unresolved_row_has_empty_label() {
        let schema = TableSchema::new(columns(&["subject", "status"])).unwrap();
        let row = SubjectRow::new(2, columns(&["Intro to Programming", "Active"]));
        assert_eq!(schema.subject(&row), "Intro to Programming");
        assert_eq!(schema.status(&row), "Active");
        assert_eq!(schema.output_record(&row), vec!["Intro to Programming", "Active", ""]);
    }
}

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use crate::error::{Error, Result};
use crate::models::{SubjectRow, SubjectTable, TableSchema};

/// Delimited-text reader/writer for subject tables.
#[derive(Debug, Clone, Copy)]
pub struct Storage {
    delimiter: u8,
}

impl Storage {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn read_table<P: AsRef<Path>>(&self, path: P) -> Result<SubjectTable> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::InputRead(format!("{}: {}", path.display(), e)))?;

        let table = self.read_from(file).map_err(|e| match e {
            Error::MissingColumn(_) => e,
            other => Error::InputRead(format!("{}: {}", path.display(), other)),
        })?;

        tracing::info!("Read {} rows from {}", table.len(), path.display());
        Ok(table)
    }

    /// Buffers the whole table; the schema must carry `subject` and `status`.
    pub fn read_from<R: Read>(&self, reader: R) -> Result<SubjectTable> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_reader(reader);

        let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let schema = TableSchema::new(columns)?;

        let mut rows = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record: StringRecord = record?;
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(idx as u64 + 2);
            rows.push(SubjectRow::new(line, record.iter().map(str::to_string).collect()));
        }

        Ok(SubjectTable::new(schema, rows))
    }

    pub fn write_table<P: AsRef<Path>>(&self, path: P, table: &SubjectTable) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| Error::OutputWrite(format!("{}: {}", path.display(), e)))?;

        self.write_to(file, table)
            .map_err(|e| Error::OutputWrite(format!("{}: {}", path.display(), e)))?;

        tracing::info!("Saved {} rows to {}", table.len(), path.display());
        Ok(())
    }

    /// Header row is always written, even when no rows survived.
    pub fn write_to<W: Write>(&self, writer: W, table: &SubjectTable) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(writer);

        writer.write_record(table.schema.output_columns())?;
        for row in &table.rows {
            writer.write_record(table.schema.output_record(row))?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new(b',')
    }
}

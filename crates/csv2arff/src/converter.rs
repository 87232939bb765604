//! Table converter and public conversion API.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{ConvertError, Result};
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};
use crate::normalize::{fill_empty_cells, normalize_rows};
use crate::output::{ArffWriter, write_destination};
use crate::schema::RelationSchema;

/// Configuration for conversion.
#[derive(Debug, Clone, Default)]
pub struct ConverterConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
}

/// Result of a successful conversion.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Destination that was written.
    pub destination: PathBuf,
    /// Inferred relation schema.
    pub schema: RelationSchema,
    /// Number of empty cells replaced with the placeholder.
    pub filled_cells: usize,
    /// Bytes written to the destination.
    pub bytes_written: usize,
}

impl ConversionReport {
    /// Human-readable success line.
    pub fn status_line(&self) -> String {
        format!(
            "'{}' was converted from '{}'",
            self.destination.display(),
            self.source.path.display()
        )
    }
}

/// Converts CSV tables into ARFF relations.
pub struct TableConverter {
    parser: Parser,
}

impl TableConverter {
    /// Create a converter with default configuration.
    pub fn new() -> Self {
        Self::with_config(ConverterConfig::default())
    }

    /// Create a converter with custom configuration.
    pub fn with_config(config: ConverterConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser),
        }
    }

    /// Convert `source` into an ARFF file at `destination`.
    ///
    /// The destination is only touched after the source has been read and
    /// the whole output rendered in memory. A destination that resolves to
    /// the source file is refused.
    pub fn convert(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
        relation: &str,
    ) -> Result<ConversionReport> {
        let source = source.as_ref();
        let destination = destination.as_ref();

        let (table, metadata) = self.parser.parse_file(source)?;
        if is_same_file(source, destination) {
            return Err(ConvertError::DestinationWrite {
                path: destination.to_path_buf(),
                source: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "destination is the source file",
                ),
            });
        }
        let (schema, rendered, filled_cells) = Self::convert_with_stats(table, relation);

        write_destination(destination, &rendered)?;
        info!(
            source = %source.display(),
            destination = %destination.display(),
            attributes = schema.attribute_count(),
            instances = schema.instance_count,
            "conversion complete"
        );

        Ok(ConversionReport {
            source: metadata,
            destination: destination.to_path_buf(),
            schema,
            filled_cells,
            bytes_written: rendered.len(),
        })
    }

    /// Run the in-memory phases on an already loaded table and return the
    /// inferred schema with the rendered document.
    pub fn convert_table(table: DataTable, relation: &str) -> (RelationSchema, String) {
        let (schema, rendered, _) = Self::convert_with_stats(table, relation);
        (schema, rendered)
    }

    fn convert_with_stats(mut table: DataTable, relation: &str) -> (RelationSchema, String, usize) {
        let filled = fill_empty_cells(&mut table);
        debug!(filled, "substituted empty cells");

        normalize_rows(&mut table);
        debug!(rows = table.row_count(), "normalized data cells");

        let schema = RelationSchema::infer(relation, &table);
        debug!(
            numeric = schema.numeric_count(),
            nominal = schema.nominal_count(),
            "inferred attribute types"
        );

        let rendered = ArffWriter::new(&schema, &table).render();
        (schema, rendered, filled)
    }
}

impl Default for TableConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// True if both paths resolve to the same existing file.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Convert `source` into an ARFF file at `destination` with default settings.
pub fn convert(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    relation: &str,
) -> Result<ConversionReport> {
    TableConverter::new().convert(source, destination, relation)
}

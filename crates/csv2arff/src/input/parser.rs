//! CSV reader that loads the whole source into memory.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use super::source::{DataTable, SourceMetadata};
use crate::error::{ConvertError, Result};

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
        }
    }
}

/// Parses delimited text files.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the data table and metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConvertError::SourceNotFound {
                path: path.to_path_buf(),
            },
            _ => ConvertError::SourceRead {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| ConvertError::SourceRead {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let table = self.parse_bytes(&contents, path)?;
        debug!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            "loaded source table"
        );

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    /// Parse bytes directly. `origin` is only used in error messages.
    pub fn parse_bytes(&self, bytes: &[u8], origin: &Path) -> Result<DataTable> {
        // The csv reader skips empty lines; each one is a row with no fields.
        if let Some(line) = find_blank_line(bytes, self.config.quote) {
            return Err(ConvertError::MalformedSource {
                path: origin.to_path_buf(),
                reason: format!("line {} is blank", line),
            });
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .quote(self.config.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);

        let csv_error = |e: csv::Error| ConvertError::Csv {
            path: origin.to_path_buf(),
            source: e,
        };

        let mut records = reader.records();

        let headers: Vec<String> = match records.next() {
            Some(record) => record
                .map_err(csv_error)?
                .iter()
                .map(|s| s.to_string())
                .collect(),
            None => {
                return Err(ConvertError::MalformedSource {
                    path: origin.to_path_buf(),
                    reason: "no header row".to_string(),
                });
            }
        };

        let expected_cols = headers.len();
        let mut rows = Vec::new();

        // Row indices in messages count the header as row 0.
        for (idx, result) in records.enumerate() {
            let record = result.map_err(csv_error)?;
            if record.len() != expected_cols {
                return Err(ConvertError::MalformedSource {
                    path: origin.to_path_buf(),
                    reason: format!(
                        "row {} has {} fields, expected {}",
                        idx + 1,
                        record.len(),
                        expected_cols
                    ),
                });
            }
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        Ok(DataTable::new(headers, rows))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the first empty line outside quoted fields, as a 1-based line number.
///
/// `\r\n`, `\n` and a lone `\r` each end one line. A line ending at the
/// very end of the input does not start another line.
fn find_blank_line(bytes: &[u8], quote: u8) -> Option<usize> {
    let mut in_quotes = false;
    let mut line = 1;
    let mut line_has_content = false;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b == quote {
            in_quotes = !in_quotes;
            line_has_content = true;
        } else if b == b'\n' || b == b'\r' {
            if b == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                i += 1;
            }
            if in_quotes {
                line_has_content = true;
            } else {
                if !line_has_content {
                    return Some(line);
                }
                line_has_content = false;
            }
            line += 1;
        } else {
            line_has_content = true;
        }
        i += 1;
    }

    None
}

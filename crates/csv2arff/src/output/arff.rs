//! ARFF rendering of a converted table.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::warn;

use crate::error::{ConvertError, Result};
use crate::input::DataTable;
use crate::schema::RelationSchema;

/// Renders a relation schema and its normalized rows as ARFF text.
pub struct ArffWriter<'a> {
    schema: &'a RelationSchema,
    table: &'a DataTable,
}

impl<'a> ArffWriter<'a> {
    pub fn new(schema: &'a RelationSchema, table: &'a DataTable) -> Self {
        Self { schema, table }
    }

    /// Render the complete document into memory.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_comments(&mut out);
        self.write_declarations(&mut out);
        self.write_data(&mut out);
        out
    }

    fn write_comments(&self, out: &mut String) {
        out.push_str("%\n% Comments go after a '%' sign.\n%\n");
        out.push_str(&format!("%\n% Relation: {}\n%\n%\n", self.schema.name));
        out.push_str(&format!(
            "% Attributes: {}     Instances: {}\n%\n%\n\n",
            self.schema.attribute_count(),
            self.schema.instance_count
        ));
    }

    /// The relation name is embedded as-is; a name containing `"` yields
    /// an invalid `@relation` line.
    fn write_declarations(&self, out: &mut String) {
        out.push_str(&format!("@relation \"{}\"\n\n", self.schema.name));
        for attribute in &self.schema.attributes {
            out.push_str(&format!(
                "@attribute '{}' {}\n",
                attribute.name,
                attribute.domain_text()
            ));
        }
    }

    fn write_data(&self, out: &mut String) {
        out.push_str("\n@data\n");
        for row in &self.table.rows {
            out.push_str(&row.join(","));
            out.push('\n');
        }
    }
}

/// Create or overwrite `path` with `contents`.
///
/// If writing fails after the file was created, the partial file is removed.
pub fn write_destination(path: &Path, contents: &str) -> Result<()> {
    write_with(path, |writer| writer.write_all(contents.as_bytes()))
}

fn write_with(
    path: &Path,
    write: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
) -> Result<()> {
    let write_error = |source: std::io::Error| ConvertError::DestinationWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);

    if let Err(source) = write(&mut writer).and_then(|_| writer.flush()) {
        drop(writer);
        remove_partial(path);
        return Err(write_error(source));
    }

    Ok(())
}

/// Remove a partially written destination. Device files are left alone.
fn remove_partial(path: &Path) {
    let is_file = fs::metadata(path).map(|m| m.is_file()).unwrap_or(false);
    if !is_file {
        return;
    }
    if let Err(e) = fs::remove_file(path) {
        warn!(path = %path.display(), error = %e, "could not remove partial output");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (RelationSchema, DataTable) {
        let table = DataTable::new(
            vec!["name".into(), "age".into()],
            vec![
                vec!["\"alice\"".into(), "30".into()],
                vec!["\"bob\"".into(), "0".into()],
            ],
        );
        let schema = RelationSchema::infer("People", &table);
        (schema, table)
    }

    #[test]
    fn test_render_full_document() {
        let (schema, table) = sample();
        let rendered = ArffWriter::new(&schema, &table).render();

        let expected = "%\n\
% Comments go after a '%' sign.\n\
%\n\
%\n\
% Relation: People\n\
%\n\
%\n\
% Attributes: 2     Instances: 2\n\
%\n\
%\n\
\n\
@relation \"People\"\n\
\n\
@attribute 'name' {\"alice\",\"bob\"}\n\
@attribute 'age' numeric\n\
\n\
@data\n\
\"alice\",30\n\
\"bob\",0\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_without_rows_ends_at_data_marker() {
        let table = DataTable::new(vec!["a".into()], vec![]);
        let schema = RelationSchema::infer("r", &table);
        let rendered = ArffWriter::new(&schema, &table).render();
        assert!(rendered.contains("% Attributes: 1     Instances: 0\n"));
        assert!(rendered.ends_with("@attribute 'a' numeric\n\n@data\n"));
    }

    #[test]
    fn test_write_destination_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.arff");
        std::fs::write(&path, "old contents that are longer").unwrap();

        write_destination(&path, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_destination_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.arff");

        let err = write_destination(&path, "x").unwrap_err();
        assert!(matches!(err, ConvertError::DestinationWrite { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn test_failed_write_removes_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.arff");

        let err = write_with(&path, |writer| {
            writer.write_all(b"%\n% Comments")?;
            writer.flush()?;
            Err(std::io::Error::other("disk full"))
        })
        .unwrap_err();

        assert!(matches!(err, ConvertError::DestinationWrite { .. }));
        assert!(err.to_string().contains("disk full"));
        assert!(!path.exists());
    }
}

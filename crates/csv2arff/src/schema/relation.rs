//! Relation-level schema.

use serde::Serialize;

use super::attribute::Attribute;
use crate::input::DataTable;

/// Schema for the whole relation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationSchema {
    /// Relation name, emitted verbatim.
    pub name: String,
    /// Attributes in header column order.
    pub attributes: Vec<Attribute>,
    /// Number of data rows.
    pub instance_count: usize,
}

impl RelationSchema {
    /// Infer the schema of a table whose data cells are already normalized.
    pub fn infer(name: impl Into<String>, table: &DataTable) -> Self {
        let attributes = table
            .headers
            .iter()
            .enumerate()
            .map(|(position, header)| {
                Attribute::from_column(header.as_str(), position, table.column_values(position))
            })
            .collect();

        Self {
            name: name.into(),
            attributes,
            instance_count: table.row_count(),
        }
    }

    /// Get the number of attributes.
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Get an attribute by name.
    pub fn get_attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn numeric_count(&self) -> usize {
        self.attributes
            .iter()
            .filter(|a| a.attribute_type.is_numeric())
            .count()
    }

    pub fn nominal_count(&self) -> usize {
        self.attribute_count() - self.numeric_count()
    }
}

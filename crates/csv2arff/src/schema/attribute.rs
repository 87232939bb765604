//! Attribute definition and per-column inference.

use indexmap::IndexSet;
use serde::Serialize;

use super::types::AttributeType;
use crate::normalize::parses_as_float;

/// Schema for a single attribute (column).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    /// Attribute name from the header row.
    pub name: String,
    /// Zero-based column position.
    pub position: usize,
    /// Inferred type.
    pub attribute_type: AttributeType,
    /// Distinct normalized values in first-occurrence order (nominal only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Vec<String>>,
}

impl Attribute {
    /// Infer an attribute from the normalized values of one column.
    ///
    /// The whole column is scanned before the type is decided.
    pub fn from_column<'a>(
        name: impl Into<String>,
        position: usize,
        values: impl Iterator<Item = &'a str> + Clone,
    ) -> Self {
        let distinct = distinct_values(values.clone());
        let attribute_type = infer_type(values);

        let domain = match attribute_type {
            AttributeType::Nominal => Some(distinct.into_iter().map(str::to_string).collect()),
            AttributeType::Numeric => None,
        };

        Self {
            name: name.into(),
            position,
            attribute_type,
            domain,
        }
    }

    /// Text declared after the attribute name: `numeric`, or the
    /// brace-enclosed distinct-value list for nominal attributes.
    pub fn domain_text(&self) -> String {
        match (&self.attribute_type, &self.domain) {
            (AttributeType::Nominal, Some(values)) => format!("{{{}}}", values.join(",")),
            (AttributeType::Nominal, None) => "{}".to_string(),
            (AttributeType::Numeric, _) => AttributeType::Numeric.to_string(),
        }
    }
}

/// Distinct values of a column, in first-occurrence order.
pub fn distinct_values<'a>(values: impl Iterator<Item = &'a str>) -> IndexSet<&'a str> {
    values.collect()
}

/// `Numeric` if every value reads as a float, otherwise `Nominal`.
pub fn infer_type<'a>(mut values: impl Iterator<Item = &'a str>) -> AttributeType {
    if values.all(parses_as_float) {
        AttributeType::Numeric
    } else {
        AttributeType::Nominal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_values_keep_first_occurrence_order() {
        let values = ["\"b\"", "\"a\"", "\"b\"", "\"c\"", "\"a\""];
        let distinct: Vec<_> = distinct_values(values.iter().copied()).into_iter().collect();
        assert_eq!(distinct, vec!["\"b\"", "\"a\"", "\"c\""]);
    }

    #[test]
    fn test_infer_numeric() {
        assert_eq!(infer_type(["1", "2.5", "0"].into_iter()), AttributeType::Numeric);
    }

    #[test]
    fn test_single_text_value_forces_nominal() {
        assert_eq!(
            infer_type(["1", "2", "\"x\"", "4"].into_iter()),
            AttributeType::Nominal
        );
    }

    #[test]
    fn test_empty_column_is_numeric() {
        assert_eq!(infer_type(std::iter::empty()), AttributeType::Numeric);
    }

    #[test]
    fn test_from_column_nominal() {
        let values = ["\"alice\"", "\"bob\"", "\"alice\""];
        let attr = Attribute::from_column("name", 0, values.iter().copied());
        assert_eq!(attr.attribute_type, AttributeType::Nominal);
        assert_eq!(attr.domain_text(), "{\"alice\",\"bob\"}");
    }

    #[test]
    fn test_from_column_mixed_values_lists_numbers_too() {
        let values = ["1", "\"n/a\"", "2", "1"];
        let attr = Attribute::from_column("score", 3, values.iter().copied());
        assert_eq!(attr.position, 3);
        assert_eq!(attr.domain_text(), "{1,\"n/a\",2}");
    }

    #[test]
    fn test_from_column_numeric_has_no_domain() {
        let values = ["30", "0"];
        let attr = Attribute::from_column("age", 1, values.iter().copied());
        assert_eq!(attr.attribute_type, AttributeType::Numeric);
        assert_eq!(attr.domain, None);
        assert_eq!(attr.domain_text(), "numeric");
    }
}

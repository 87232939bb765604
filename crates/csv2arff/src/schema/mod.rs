//! Schema types for representing the inferred relation.

mod attribute;
mod relation;
mod types;

pub use attribute::{Attribute, distinct_values, infer_type};
pub use relation::RelationSchema;
pub use types::AttributeType;

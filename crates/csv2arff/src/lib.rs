//! csv2arff: convert CSV tables into ARFF relations.
//!
//! The whole source is read into memory, empty cells are replaced with `0`,
//! data cells are normalized (lower-cased, quotes escaped, text quoted), and
//! every column is scanned in full to decide whether it is `numeric` or
//! `nominal`. Nominal attributes are declared with their distinct values in
//! first-occurrence order.
//!
//! # Example
//!
//! ```no_run
//! let report = csv2arff::convert("data.csv", "data.arff", "My Data").unwrap();
//!
//! println!("{}", report.status_line());
//! println!("Attributes: {}", report.schema.attribute_count());
//! ```

pub mod error;
pub mod input;
pub mod normalize;
pub mod output;
pub mod schema;

mod converter;

pub use converter::{ConversionReport, ConverterConfig, TableConverter, convert};
pub use error::{ConvertError, Result};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use schema::{Attribute, AttributeType, RelationSchema};

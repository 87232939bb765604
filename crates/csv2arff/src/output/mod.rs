//! Destination rendering.

mod arff;

pub use arff::{ArffWriter, write_destination};

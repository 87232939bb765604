//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// csv2arff: convert a CSV file into an ARFF relation
#[derive(Parser)]
#[command(name = "csv2arff")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the CSV file to convert
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Path of the ARFF file to create (default: <SOURCE> with .arff extension)
    #[arg(value_name = "DEST")]
    pub destination: Option<PathBuf>,

    /// Relation name (default: source file name without extension)
    #[arg(value_name = "RELATION")]
    pub relation: Option<String>,

    /// Print the conversion report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Destination path, derived from the source when not given.
    pub fn destination(&self) -> PathBuf {
        self.destination
            .clone()
            .unwrap_or_else(|| self.source.with_extension("arff"))
    }

    /// Relation name, derived from the source file stem when not given.
    pub fn relation(&self) -> String {
        self.relation.clone().unwrap_or_else(|| {
            self.source
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned()
        })
    }
}

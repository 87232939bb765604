//! Convert command - turn a CSV file into an ARFF relation.

use std::path::PathBuf;

use colored::Colorize;
use csv2arff::TableConverter;

pub fn run(
    source: PathBuf,
    destination: PathBuf,
    relation: String,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = TableConverter::new().convert(&source, &destination, &relation)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if verbose {
        println!("{}", "Attributes:".yellow().bold());
        for attr in &report.schema.attributes {
            let values = attr
                .domain
                .as_ref()
                .map(|d| format!("{} values", d.len()))
                .unwrap_or_default();
            println!("  {:20} {:8} {}", attr.name, attr.attribute_type.as_str(), values);
        }
        println!(
            "{} instances, {} empty cells filled",
            report.schema.instance_count.to_string().white().bold(),
            report.filled_cells.to_string().white().bold()
        );
        println!();
    }

    println!("{}", report.status_line().green());

    Ok(())
}

//! Inspect command: report on the inputs without emitting declarations

use super::InputArgs;
use crate::cli::progress::{LOOKING_GLASS, print_step};
use crate::formats::{read_metadata_table, read_program, read_string_table};
use crate::pipeline::checks::{duplicate_ids, unmatched_ids};

/// Read every configured input and print statistics.
pub fn execute(inputs: &InputArgs) -> anyhow::Result<()> {
    let config = inputs.resolve()?;
    let total = config.tables().len();
    let mut step = 1;

    print_step(step, total, &LOOKING_GLASS, "Reading string table...");
    let lines = read_string_table(&config.inputs.strings)?;
    let duplicates = duplicate_ids(lines.iter().map(|l| l.id.as_str()));
    let empty = lines.iter().filter(|l| l.text.is_empty()).count();

    println!("{}:", config.inputs.strings.display());
    println!("  Lines: {}", lines.len());
    if empty > 0 {
        println!("  Empty lines: {empty}");
    }
    print_ids("Duplicate ids", &duplicates);

    if let Some(path) = &config.inputs.metadata {
        step += 1;
        print_step(step, total, &LOOKING_GLASS, "Reading line metadata...");
        let metadata = read_metadata_table(path)?;
        let duplicates = duplicate_ids(metadata.iter().map(|m| m.id.as_str()));
        let unmatched = unmatched_ids(
            lines.iter().map(|l| l.id.as_str()),
            metadata.iter().map(|m| m.id.as_str()),
        );
        let missing = unmatched_ids(
            metadata.iter().map(|m| m.id.as_str()),
            lines.iter().map(|l| l.id.as_str()),
        );

        println!("{}:", path.display());
        println!("  Records: {}", metadata.len());
        print_ids("Duplicate ids", &duplicates);
        print_ids("Without a string entry", &unmatched);
        print_ids("Lines without metadata", &missing);
    }

    if let Some(path) = &config.inputs.program {
        step += 1;
        print_step(step, total, &LOOKING_GLASS, "Reading compiled program...");
        let bytes = read_program(path)?;

        println!("{}:", path.display());
        println!("  Bytes: {}", bytes.len());
    }

    Ok(())
}

/// Print a count and, for short lists, the ids themselves
fn print_ids(label: &str, ids: &[String]) {
    if ids.is_empty() {
        return;
    }
    println!("  {label}: {}", ids.len());
    for id in ids.iter().take(5) {
        println!("    - {id}");
    }
    if ids.len() > 5 {
        println!("    (showing first 5)");
    }
}

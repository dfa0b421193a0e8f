use anyhow::{Context, Result};
use aoc2020_day2::CliArgs;
use clap::Parser;

fn main() -> Result<()> {
    aoc_common::init_logging();
    let args = CliArgs::parse();
    let entries = aoc2020_day2::read_entries(&args.input.input_path).with_context(|| {
        format!(
            "Failed to read passwords from given input file({}).",
            args.input.input_path.display()
        )
    })?;
    tracing::info!("Read {} password entries.", entries.len());

    let valid_count = if args.use_position_policy() {
        aoc2020_day2::count_valid_by_position(&entries)?
    } else {
        aoc2020_day2::count_valid_by_count(&entries)
    };
    println!("{}", valid_count);

    Ok(())
}

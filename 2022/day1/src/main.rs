use anyhow::{Context, Result};
use aoc2022_day1::CliArgs;
use clap::Parser;

fn main() -> Result<()> {
    aoc_common::init_logging();
    let args = CliArgs::parse();
    let loads = aoc2022_day1::read_loads(&args.input.input_path).with_context(|| {
        format!(
            "Failed to read calories from given input file({}).",
            args.input.input_path.display()
        )
    })?;
    tracing::info!("Read loads of {} elves.", loads.len());

    let top_n = if args.input.part2 { 3 } else { 1 };
    let total = aoc2022_day1::top_loads_total(&loads, top_n)?;
    println!("{}", total);

    Ok(())
}

use anyhow::{Context, Result};
use aoc2020_day5::CliArgs;
use clap::Parser;

fn main() -> Result<()> {
    aoc_common::init_logging();
    let args = CliArgs::parse();
    let passes = aoc2020_day5::read_pass(&args.input.input_path).with_context(|| {
        format!(
            "Failed to read boarding pass from given input file({}).",
            args.input.input_path.display()
        )
    })?;
    tracing::info!("Read {} boarding passes.", passes.len());

    let id = if args.input.part2 {
        aoc2020_day5::missing_id(&passes)?
    } else {
        aoc2020_day5::max_id(&passes)?
    };
    println!("{}", id);

    Ok(())
}

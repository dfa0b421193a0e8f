use anyhow::{Context, Result};
use aoc2021_day1::CliArgs;
use clap::Parser;

fn main() -> Result<()> {
    aoc_common::init_logging();
    let args = CliArgs::parse();
    let depths = aoc2021_day1::read_depths(&args.input.input_path).with_context(|| {
        format!(
            "Failed to read depth measurements from given input file({}).",
            args.input.input_path.display()
        )
    })?;

    let win_len = if args.input.part2 { 3 } else { 1 };
    let count = aoc2021_day1::count_increases(&depths, win_len);
    tracing::info!(
        "{} of {} measurements increase with window length {}.",
        count,
        depths.len(),
        win_len
    );
    println!("{}", count);

    Ok(())
}

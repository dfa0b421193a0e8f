use anyhow::{Context, Result};
use aoc2020_day1::{CliArgs, EXPECT_SUM};
use clap::Parser;

fn main() -> Result<()> {
    aoc_common::init_logging();
    let args = CliArgs::parse();
    let ints = aoc2020_day1::read_ints(&args.input.input_path).with_context(|| {
        format!(
            "Failed to read integers from given input file({}).",
            args.input.input_path.display()
        )
    })?;

    let n = if args.input.part2 { 3 } else { 2 };
    let prod = aoc2020_day1::product_of_sum(&ints, EXPECT_SUM, n)?;
    println!("{}", prod);

    Ok(())
}

use anyhow::{Context, Result};
use aoc2020_day4::{CliArgs, PROP_VALIDATORS};
use clap::Parser;

fn main() -> Result<()> {
    aoc_common::init_logging();
    let args = CliArgs::parse();
    let passports = aoc2020_day4::read_pp(&args.input.input_path).with_context(|| {
        format!(
            "Failed to read passports from given input file({}).",
            args.input.input_path.display()
        )
    })?;

    let valid_count = if args.input.part2 {
        passports
            .iter()
            .filter(|pp| pp.is_valid(&PROP_VALIDATORS))
            .count()
    } else {
        passports.iter().filter(|pp| pp.has_required_props()).count()
    };
    tracing::info!(
        "There are {} valid passports in given {}.",
        valid_count,
        passports.len()
    );
    println!("{}", valid_count);

    Ok(())
}

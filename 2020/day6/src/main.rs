use anyhow::{Context, Result};
use aoc2020_day6::CliArgs;
use clap::Parser;

fn main() -> Result<()> {
    aoc_common::init_logging();
    let args = CliArgs::parse();
    let grp_answers = aoc2020_day6::read_ga(&args.input.input_path).with_context(|| {
        format!(
            "Failed to read group answers from given input file({}).",
            args.input.input_path.display()
        )
    })?;
    tracing::info!("Read answers of {} groups.", grp_answers.len());

    let sum = grp_answers
        .iter()
        .map(|ga| {
            if args.input.part2 {
                ga.all_app_n()
            } else {
                ga.any_app_n()
            }
        })
        .sum::<usize>();
    println!("{}", sum);

    Ok(())
}

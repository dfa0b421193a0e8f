use anyhow::{Context, Result};
use aoc2020_day3::{CliArgs, Slope, DEFAULT_SLOPES};
use clap::Parser;

fn main() -> Result<()> {
    aoc_common::init_logging();
    let args = CliArgs::parse();
    let map = aoc2020_day3::read_grid(&args.input.input_path).with_context(|| {
        format!(
            "Failed to read map from given input file({}).",
            args.input.input_path.display()
        )
    })?;
    tracing::info!("Read map of {} rows and {} columns.", map.row_n(), map.col_n());

    let tree_count = if args.input.part2 {
        map.trees_product(&DEFAULT_SLOPES)?
    } else {
        let slope = Slope::new(args.right, args.down)?;
        map.trees_on_slope(&slope)?
    };
    println!("{}", tree_count);

    Ok(())
}

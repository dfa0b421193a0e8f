use anyhow::{Context, Result};
use aoc2021_day2::{CliArgs, Submarine};
use clap::Parser;

fn main() -> Result<()> {
    aoc_common::init_logging();
    let args = CliArgs::parse();
    let cmds = aoc2021_day2::read_cmds(&args.input.input_path).with_context(|| {
        format!(
            "Failed to read commands from given input file({}).",
            args.input.input_path.display()
        )
    })?;

    let mut sub = Submarine::new();
    for cmd in &cmds {
        if args.input.part2 {
            sub.steer_with_aim(cmd);
        } else {
            sub.steer(cmd);
        }
    }
    tracing::info!("Submarine ends at {:?}.", sub);
    println!("{}", sub.position_product());

    Ok(())
}

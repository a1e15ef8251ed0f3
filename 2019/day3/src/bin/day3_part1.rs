use anyhow::{Context, Result};
use clap::Parser;
use day3::CLIArgs;

fn main() -> Result<()> {
    day3::init_tracing();
    let args = CLIArgs::parse();
    let (l_wire, r_wire) = day3::read_wires(&args.input_path).with_context(|| {
        format!(
            "Failed to read wires from given file({}).",
            args.input_path.display()
        )
    })?;

    let dist = l_wire.closest_cross_dist(&r_wire)?;
    println!(
        "The Manhattan distance from the central port to the closest cross point is {}.",
        dist
    );

    Ok(())
}

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

    let steps = l_wire.fewest_cross_steps(&r_wire)?;
    println!(
        "The fewest combined steps the wires must take to reach a cross point is {}.",
        steps
    );

    Ok(())
}

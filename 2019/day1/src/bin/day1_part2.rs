use anyhow::{Context, Result};
use clap::Parser;
use day1::{mass, CLIArgs};

fn main() -> Result<()> {
    day1::init_tracing();
    let args = CLIArgs::parse();
    let mass_list = mass::read_md_mass(&args.input_path).with_context(|| {
        format!(
            "Failed to read module masses from given file({}).",
            args.input_path.display()
        )
    })?;

    let fuel_sum: u64 = mass_list
        .iter()
        .map(|&m| u64::from(mass::calc_mass_fuel(m)))
        .sum();
    println!(
        "There are {} modules in total, and {} units of fuel are needed, counting the fuel for fuel.",
        mass_list.len(),
        fuel_sum
    );

    Ok(())
}

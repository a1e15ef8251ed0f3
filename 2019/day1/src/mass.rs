use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result};
use tracing::debug;

use crate::Error;

pub fn read_md_mass<P: AsRef<Path>>(path: P) -> Result<Vec<u32>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut masses = Vec::new();
    for (ind, l) in reader.lines().enumerate() {
        let s = l.with_context(|| {
            format!(
                "Failed to read line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        let s = s.trim();
        if s.is_empty() {
            continue;
        }

        let mass = s
            .parse::<u32>()
            .map_err(|_| Error::InvalidMass(s.to_string()))
            .with_context(|| format!("Failed to read module mass from line {}.", ind + 1))?;
        masses.push(mass);
    }

    debug!(mod_n = masses.len(), "read module masses");
    Ok(masses)
}

/// Fuel needed by given mass alone, masses lighter than 9 need none.
pub fn calc_fuel(mass: u32) -> u32 {
    (mass / 3).saturating_sub(2)
}

/// Fuel needed by given mass, including the fuel needed by the fuel itself.
pub fn calc_mass_fuel(mass: u32) -> u32 {
    let mut fuel_sum = 0;
    let mut fuel = calc_fuel(mass);
    while fuel > 0 {
        fuel_sum += fuel;
        fuel = calc_fuel(fuel);
    }

    fuel_sum
}

#[test]
fn test_calc_fuel() {
    assert_eq!(calc_fuel(0), 0);
    assert_eq!(calc_fuel(8), 0);
    assert_eq!(calc_fuel(9), 1);
    assert_eq!(calc_fuel(12), 2);
    assert_eq!(calc_fuel(14), 2);
    assert_eq!(calc_fuel(1969), 654);
    assert_eq!(calc_fuel(100756), 33583);
}

#[test]
fn test_calc_mass_fuel_zero_mass() {
    assert_eq!(calc_mass_fuel(0), 0)
}

#[test]
fn test_calc_mass_fuel_light_mass() {
    for mass in 1..=8 {
        assert_eq!(calc_mass_fuel(mass), 0);
    }
}

#[test]
fn test_calc_mass_fuel_sample_mass() {
    assert_eq!(calc_mass_fuel(12), 2);
    assert_eq!(calc_mass_fuel(14), 2);
    assert_eq!(calc_mass_fuel(1969), 966);
    assert_eq!(calc_mass_fuel(100756), 50346);
}

#[test]
fn test_read_md_mass() {
    assert_eq!(
        read_md_mass("tests/data/sample.txt").unwrap(),
        vec![12, 14, 1969, 100756]
    );

    let err = read_md_mass("tests/data/bad_mass.txt").unwrap_err();
    assert_eq!(
        err.downcast_ref::<Error>(),
        Some(&Error::InvalidMass("-5".to_string()))
    );
}

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod wire;

use wire::Wire;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Malformed path token({0:?}), expect a direction(U, D, L or R) followed by a distance")]
    MalformedToken(String),
    #[error("Unknown path direction({0})")]
    InvalidDirection(char),
    #[error("Given wire has no path at all")]
    EmptyWire,
    #[error("Given wires don't have any cross point")]
    NoIntersectionFound,
    #[error("Missing path data for wire {0}")]
    MissingWireData(usize),
}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

/// Installs a stderr logger, filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

const WIRE_COUNT: usize = 2;

pub fn read_wires<P: AsRef<Path>>(path: P) -> Result<(Wire, Wire)> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut wires = Vec::with_capacity(WIRE_COUNT);
    for (ind, l) in reader.lines().enumerate() {
        let line = l.with_context(|| {
            format!(
                "Failed to read line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if wires.len() == WIRE_COUNT {
            if !line.trim().is_empty() {
                warn!(line = ind + 1, "ignore extra line after {} wires", WIRE_COUNT);
            }
            continue;
        }

        // A blank line ends the wire data.
        if line.trim().is_empty() {
            break;
        }

        let wire = line
            .parse::<Wire>()
            .with_context(|| format!("Failed to read wire from line {}.", ind + 1))?;
        wires.push(wire);
    }

    let mut wires = wires.into_iter();
    match (wires.next(), wires.next()) {
        (Some(first), Some(second)) => Ok((first, second)),
        (None, _) => Err(Error::MissingWireData(1).into()),
        (Some(_), None) => Err(Error::MissingWireData(2).into()),
    }
}

#[test]
fn test_read_wires() {
    let (l_wire, r_wire) = read_wires("tests/data/sample1.txt").unwrap();
    assert_eq!(l_wire.segs().len(), 4);
    assert_eq!(r_wire.segs().len(), 4);
    assert_eq!(l_wire.total_len(), 21);

    let (_, r_wire) = read_wires("tests/data/extra_lines.txt").unwrap();
    assert_eq!(r_wire.total_len(), 21);
}

#[test]
fn test_read_wires_with_bad_data() {
    let err = read_wires("tests/data/one_wire.txt").unwrap_err();
    assert_eq!(err.downcast_ref::<Error>(), Some(&Error::MissingWireData(2)));

    let err = read_wires("tests/data/empty.txt").unwrap_err();
    assert_eq!(err.downcast_ref::<Error>(), Some(&Error::MissingWireData(1)));

    let err = read_wires("tests/data/blank_second_line.txt").unwrap_err();
    assert_eq!(err.downcast_ref::<Error>(), Some(&Error::MissingWireData(2)));

    let err = read_wires("tests/data/bad_token.txt").unwrap_err();
    assert_eq!(
        err.downcast_ref::<Error>(),
        Some(&Error::MalformedToken("X5".to_string()))
    );

    assert!(read_wires("tests/data/no_such_file.txt").is_err());
}

use std::{error, fmt::Display, path::Path};

use clap::Parser;

#[derive(Debug)]
pub enum Error {
    Input(aoc_common::Error),
    InvalidCalories(String),
    NoLoads,
    NotEnoughElves(usize, usize), // (count of elves, count needed)
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Input(e) => write!(f, "{}", e),
            Error::InvalidCalories(s) => write!(
                f,
                "Invalid calories({}) of food item, expect an unsigned integer.",
                s
            ),
            Error::NoLoads => write!(f, "Unable to find any loads."),
            Error::NotEnoughElves(n, expect_n) => write!(
                f,
                "Not enough elves({}), need minimum of {}.",
                n, expect_n
            ),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Input(e) => error::Error::source(e),
            _ => None,
        }
    }
}

impl From<aoc_common::Error> for Error {
    fn from(value: aoc_common::Error) -> Self {
        Error::Input(value)
    }
}

#[derive(Debug, Parser)]
pub struct CliArgs {
    #[command(flatten)]
    pub input: aoc_common::InputArgs,
}

/// Total calories carried by each elf, in input order.
pub fn parse_loads<S: AsRef<str>>(lines: &[S]) -> Result<Vec<u64>, Error> {
    let loads = aoc_common::split_groups(lines)
        .into_iter()
        .map(|group| {
            group
                .iter()
                .map(|s| {
                    s.trim()
                        .parse::<u64>()
                        .map_err(|_| Error::InvalidCalories(s.to_string()))
                })
                .sum::<Result<u64, Error>>()
        })
        .collect::<Result<Vec<_>, Error>>()?;

    if loads.is_empty() {
        Err(Error::NoLoads)
    } else {
        Ok(loads)
    }
}

pub fn read_loads<P: AsRef<Path>>(path: P) -> Result<Vec<u64>, Error> {
    let lines = aoc_common::read_lines(path)?;
    parse_loads(&lines)
}

/// Sum of the `n` heaviest loads.
pub fn top_loads_total(loads: &[u64], n: usize) -> Result<u64, Error> {
    if loads.len() < n {
        return Err(Error::NotEnoughElves(loads.len(), n));
    }

    let mut sorted = loads.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    Ok(sorted[..n].iter().sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [&str; 14] = [
        "1000", "2000", "3000", "", "4000", "", "5000", "6000", "", "7000", "8000", "9000", "",
        "10000",
    ];

    #[test]
    fn loads_per_elf() {
        assert_eq!(
            parse_loads(&SAMPLE).unwrap(),
            vec![6000, 4000, 11000, 24000, 10000]
        );
    }

    #[test]
    fn heaviest_loads() {
        let loads = parse_loads(&SAMPLE).unwrap();
        assert_eq!(top_loads_total(&loads, 1).unwrap(), 24000);
        assert_eq!(top_loads_total(&loads, 3).unwrap(), 45000);
    }

    #[test]
    fn too_few_elves() {
        assert!(matches!(
            top_loads_total(&[6, 600], 3),
            Err(Error::NotEnoughElves(2, 3))
        ));
    }

    #[test]
    fn bad_input_is_rejected() {
        assert!(matches!(
            parse_loads(&["A", "B"]),
            Err(Error::InvalidCalories(s)) if s == "A"
        ));
        assert!(matches!(parse_loads(&["", "", ""]), Err(Error::NoLoads)));
    }
}

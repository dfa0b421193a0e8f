use std::{error, fmt::Display, path::Path};

use clap::Parser;

pub const EXPECT_SUM: usize = 2020;

#[derive(Debug)]
pub enum Error {
    Input(aoc_common::Error),
    InvalidInputStr(String),
    NoSolution(usize, usize), // (count of numbers, expected sum)
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Input(e) => write!(f, "{}", e),
            Error::InvalidInputStr(s) => write!(
                f,
                "Invalid string({}) found in input, expect unsigned integers.",
                s
            ),
            Error::NoSolution(n, sum) => write!(
                f,
                "Can't find {} numbers whose sum is {} in given inputs.",
                n, sum
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

pub fn parse_ints<S: AsRef<str>>(lines: &[S]) -> Result<Vec<usize>, Error> {
    lines
        .iter()
        .map(|l| l.as_ref().trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .map_err(|_| Error::InvalidInputStr(s.to_string()))
        })
        .collect()
}

pub fn read_ints<P: AsRef<Path>>(path: P) -> Result<Vec<usize>, Error> {
    let lines = aoc_common::read_lines(path)?;
    parse_ints(&lines)
}

/// Finds `n` entries (at distinct positions) of ascending `ints` adding up to `sum`.
pub fn find_ints_of_sum(ints: &[usize], sum: usize, n: usize) -> Option<Vec<usize>> {
    match n {
        0 => (sum == 0).then(Vec::new),
        1 => ints.binary_search(&sum).ok().map(|ind| vec![ints[ind]]),
        _ => {
            for (ind, first) in ints.iter().enumerate() {
                // The rest are at least as large as this one.
                if *first > sum / n {
                    break;
                }

                if let Some(mut ns) = find_ints_of_sum(&ints[(ind + 1)..], sum - first, n - 1) {
                    ns.insert(0, *first);
                    return Some(ns);
                }
            }

            None
        }
    }
}

pub fn product_of_sum(ints: &[usize], sum: usize, n: usize) -> Result<usize, Error> {
    let mut sorted = ints.to_vec();
    sorted.sort_unstable();
    let ns = find_ints_of_sum(&sorted, sum, n).ok_or(Error::NoSolution(n, sum))?;
    tracing::debug!("The sum of {:?} is {}.", ns, sum);

    Ok(ns.iter().product())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPENSES: [usize; 6] = [1721, 979, 366, 299, 675, 1456];

    #[test]
    fn two_entries() {
        assert_eq!(product_of_sum(&EXPENSES, EXPECT_SUM, 2).unwrap(), 514579);
    }

    #[test]
    fn three_entries() {
        assert_eq!(product_of_sum(&EXPENSES, EXPECT_SUM, 3).unwrap(), 241861950);
    }

    #[test]
    fn same_entry_isnt_used_twice() {
        assert!(matches!(
            product_of_sum(&[1010, 3], EXPECT_SUM, 2),
            Err(Error::NoSolution(2, 2020))
        ));
        assert_eq!(product_of_sum(&[1010, 3, 1010], EXPECT_SUM, 2).unwrap(), 1010 * 1010);
    }

    #[test]
    fn invalid_entry_is_rejected() {
        assert!(matches!(
            parse_ints(&["12", "x1"]),
            Err(Error::InvalidInputStr(s)) if s == "x1"
        ));
    }
}

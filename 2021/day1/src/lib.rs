use std::{error, fmt::Display, path::Path};

use clap::Parser;

#[derive(Debug)]
pub enum Error {
    Input(aoc_common::Error),
    InvalidDepth(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Input(e) => write!(f, "{}", e),
            Error::InvalidDepth(s) => write!(
                f,
                "Invalid depth measurement({}), expect an unsigned integer.",
                s
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

pub fn parse_depths<S: AsRef<str>>(lines: &[S]) -> Result<Vec<u64>, Error> {
    lines
        .iter()
        .map(|l| l.as_ref().trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u64>().map_err(|_| Error::InvalidDepth(s.to_string())))
        .collect()
}

pub fn read_depths<P: AsRef<Path>>(path: P) -> Result<Vec<u64>, Error> {
    let lines = aoc_common::read_lines(path)?;
    parse_depths(&lines)
}

/// Counts sums of `win_len` consecutive depths larger than the sum just before.
pub fn count_increases(depths: &[u64], win_len: usize) -> usize {
    if win_len == 0 {
        return 0;
    }

    let sums = depths
        .windows(win_len)
        .map(|win| win.iter().sum::<u64>())
        .collect::<Vec<_>>();
    sums.windows(2).filter(|pair| pair[1] > pair[0]).count()
}

use std::{error, fmt::Display, path::Path};

use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    Input(aoc_common::Error),
    InvalidBoardPassStr(String),
    NoSeats,
    NoMissingSeat,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Input(e) => write!(f, "{}", e),
            Error::InvalidBoardPassStr(s) => write!(
                f,
                "Invalid board pass string({}), expect 7 of 'F'/'B' followed by 3 of 'L'/'R'.",
                s
            ),
            Error::NoSeats => write!(f, "Not given any board pass."),
            Error::NoMissingSeat => write!(f, "Can't find any missing seat between given ones."),
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardPass {
    row_ind: usize,
    col_ind: usize,
}

impl TryFrom<&str> for BoardPass {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([FB]{7})([LR]{3})$").unwrap());

        // Characters other than `c1` read as 0, the pattern has ruled them in.
        fn bin_from_str(s: &str, c1: char) -> usize {
            s.chars()
                .fold(0, |n, c| (n << 1) | usize::from(c == c1))
        }

        let caps = PATTERN
            .captures(value)
            .ok_or_else(|| Error::InvalidBoardPassStr(value.to_string()))?;
        Ok(BoardPass {
            row_ind: bin_from_str(&caps[1], 'B'),
            col_ind: bin_from_str(&caps[2], 'R'),
        })
    }
}

impl BoardPass {
    pub fn row(&self) -> usize {
        self.row_ind
    }

    pub fn col(&self) -> usize {
        self.col_ind
    }

    pub fn id(&self) -> usize {
        self.row_ind * 8 + self.col_ind
    }
}

pub fn parse_pass<S: AsRef<str>>(lines: &[S]) -> Result<Vec<BoardPass>, Error> {
    lines
        .iter()
        .map(|l| l.as_ref().trim())
        .filter(|s| !s.is_empty())
        .map(BoardPass::try_from)
        .collect()
}

pub fn read_pass<P: AsRef<Path>>(path: P) -> Result<Vec<BoardPass>, Error> {
    let lines = aoc_common::read_lines(path)?;
    parse_pass(&lines)
}

pub fn max_id(passes: &[BoardPass]) -> Result<usize, Error> {
    passes.iter().map(|p| p.id()).max().ok_or(Error::NoSeats)
}

/// The first id absent from the list while both its neighbours are on it.
pub fn missing_id(passes: &[BoardPass]) -> Result<usize, Error> {
    if passes.is_empty() {
        return Err(Error::NoSeats);
    }

    let mut ids = passes.iter().map(|p| p.id()).collect::<Vec<_>>();
    ids.sort_unstable();
    ids.windows(2)
        .find(|pair| pair[1] == pair[0] + 2)
        .map(|pair| pair[0] + 1)
        .ok_or(Error::NoMissingSeat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_pass() {
        let cases = [
            ("FBFBBFFRLR", 44, 5, 357),
            ("BFFFBBFRRR", 70, 7, 567),
            ("FFFBBBFRRR", 14, 7, 119),
            ("BBFFBBFRLL", 102, 4, 820),
        ];
        for (s, row, col, id) in cases {
            let pass = BoardPass::try_from(s).unwrap();
            assert_eq!((pass.row(), pass.col(), pass.id()), (row, col, id), "{}", s);
        }
    }

    #[test]
    fn invalid_pass_is_rejected() {
        for s in ["FBFBBFFRL", "FBFBBFFRLRR", "FBFBBFFLRX", "LBFBBFFRLR"] {
            assert!(matches!(
                BoardPass::try_from(s),
                Err(Error::InvalidBoardPassStr(_))
            ));
        }
    }

    #[test]
    fn highest_id() {
        let passes = parse_pass(&["BFFFBBFRRR", "FFFBBBFRRR", "BBFFBBFRLL"]).unwrap();
        assert_eq!(max_id(&passes).unwrap(), 820);
        assert!(matches!(max_id(&[]), Err(Error::NoSeats)));
    }

    #[test]
    fn find_missing_id() {
        // Ids 8, 9, 11, 12 (row 1, columns 0, 1, 3, 4).
        let passes = parse_pass(&["FFFFFFBLLL", "FFFFFFBLLR", "FFFFFFBLRR", "FFFFFFBRLL"]).unwrap();
        assert_eq!(missing_id(&passes).unwrap(), 10);

        let passes = parse_pass(&["FFFFFFBLLL", "FFFFFFBLLR"]).unwrap();
        assert!(matches!(missing_id(&passes), Err(Error::NoMissingSeat)));
    }
}

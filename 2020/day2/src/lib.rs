use std::{error, fmt::Display, ops::RangeInclusive, path::Path};

use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    Input(aoc_common::Error),
    InvalidLine(String),
    ZeroPosition(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Input(e) => write!(f, "{}", e),
            Error::InvalidLine(s) => write!(
                f,
                "Invalid password line({}), expect format like \"1-3 a: abcde\".",
                s
            ),
            Error::ZeroPosition(s) => write!(
                f,
                "Found zero position while parsing text({}) for position policy, positions start from 1.",
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
    // `-n` ("new policy") is kept as a spelling of the part 2 switch.
    #[command(flatten)]
    pub input: aoc_common::InputArgs,
    /// Use the position policy, same as -2
    #[arg(short = 'n', long = "new-policy")]
    pub new_policy: bool,
}

impl CliArgs {
    pub fn use_position_policy(&self) -> bool {
        self.input.part2 || self.new_policy
    }
}

pub trait Policy {
    fn check(&self, password: &str) -> bool;
}

/// Letter must appear a number of times within the range.
pub struct CountPolicy {
    c: char,
    range: RangeInclusive<usize>,
}

impl Policy for CountPolicy {
    fn check(&self, password: &str) -> bool {
        self.range
            .contains(&password.chars().filter(|c| *c == self.c).count())
    }
}

/// Letter must be at exactly one of two (0-based here) positions.
pub struct PositionPolicy {
    c: char,
    ind0: usize,
    ind1: usize,
}

impl Policy for PositionPolicy {
    fn check(&self, password: &str) -> bool {
        fn is_at(target_c: char, s: &str, ind: usize) -> bool {
            s.chars().nth(ind).is_some_and(|c| c == target_c)
        }

        is_at(self.c, password, self.ind0) ^ is_at(self.c, password, self.ind1)
    }
}

#[derive(Debug, Clone)]
pub struct PasswordEntry {
    n0: usize,
    n1: usize,
    c: char,
    text: String,
}

impl TryFrom<&str> for PasswordEntry {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"^(?P<n0>\d+)-(?P<n1>\d+) (?P<c>[a-zA-Z]): (?P<text>\w+)$").unwrap()
        });

        let caps = PATTERN
            .captures(value)
            .ok_or_else(|| Error::InvalidLine(value.to_string()))?;
        let parse_n = |name: &str| {
            caps[name]
                .parse::<usize>()
                .map_err(|_| Error::InvalidLine(value.to_string()))
        };
        Ok(PasswordEntry {
            n0: parse_n("n0")?,
            n1: parse_n("n1")?,
            // The pattern only matches a single ASCII letter here.
            c: caps["c"].chars().next().unwrap_or_default(),
            text: caps["text"].to_string(),
        })
    }
}

impl PasswordEntry {
    pub fn count_policy(&self) -> CountPolicy {
        CountPolicy {
            c: self.c,
            range: self.n0..=self.n1,
        }
    }

    pub fn position_policy(&self) -> Result<PositionPolicy, Error> {
        let to_ind = |n: usize| {
            n.checked_sub(1)
                .ok_or_else(|| Error::ZeroPosition(self.to_string()))
        };
        Ok(PositionPolicy {
            c: self.c,
            ind0: to_ind(self.n0)?,
            ind1: to_ind(self.n1)?,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Display for PasswordEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} {}: {}", self.n0, self.n1, self.c, self.text)
    }
}

pub fn parse_entries<S: AsRef<str>>(lines: &[S]) -> Result<Vec<PasswordEntry>, Error> {
    lines
        .iter()
        .map(|l| l.as_ref())
        .filter(|s| !s.trim().is_empty())
        .map(PasswordEntry::try_from)
        .collect()
}

pub fn read_entries<P: AsRef<Path>>(path: P) -> Result<Vec<PasswordEntry>, Error> {
    let lines = aoc_common::read_lines(path)?;
    parse_entries(&lines)
}

pub fn count_valid_by_count(entries: &[PasswordEntry]) -> usize {
    entries
        .iter()
        .filter(|e| e.count_policy().check(e.text()))
        .count()
}

pub fn count_valid_by_position(entries: &[PasswordEntry]) -> Result<usize, Error> {
    let mut valid_count = 0;
    for entry in entries {
        if entry.position_policy()?.check(entry.text()) {
            valid_count += 1;
        }
    }

    Ok(valid_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<PasswordEntry> {
        parse_entries(&["1-3 a: abcde", "1-3 b: cdefg", "2-9 c: ccccccccc"]).unwrap()
    }

    #[test]
    fn count_policy() {
        assert_eq!(count_valid_by_count(&entries()), 2);
    }

    #[test]
    fn position_policy() {
        assert_eq!(count_valid_by_position(&entries()).unwrap(), 1);
    }

    #[test]
    fn position_past_end_doesnt_hold() {
        let entries = parse_entries(&["1-10 a: abc", "2-10 a: abc"]).unwrap();
        assert_eq!(count_valid_by_position(&entries).unwrap(), 1);
    }

    #[test]
    fn zero_position_is_rejected() {
        let entries = parse_entries(&["0-2 a: abc"]).unwrap();
        assert_eq!(count_valid_by_count(&entries), 1);
        assert!(matches!(
            count_valid_by_position(&entries),
            Err(Error::ZeroPosition(_))
        ));
    }

    #[test]
    fn malformed_line_is_rejected() {
        for line in ["1-3 a abcde", "1-3 ab: abcde", "a-3 a: abcde", "1-3 a: "] {
            assert!(
                matches!(PasswordEntry::try_from(line), Err(Error::InvalidLine(_))),
                "line {:?}",
                line
            );
        }
    }
}

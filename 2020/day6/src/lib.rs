use std::{collections::HashMap, error, fmt::Display, path::Path};

use clap::Parser;

#[derive(Debug)]
pub enum Error {
    Input(aoc_common::Error),
    InvalidQuestionChar(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Input(e) => write!(f, "{}", e),
            Error::InvalidQuestionChar(c) => write!(
                f,
                "Invalid character for question code: {}, expect lowercase of ascii letters",
                c
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

#[derive(Debug, Default)]
pub struct GroupAnswer {
    que_app_counts: HashMap<char, usize>,
    mem_count: usize,
}

impl GroupAnswer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Questions answered by anyone in the group.
    pub fn any_app_n(&self) -> usize {
        self.que_app_counts.len()
    }

    /// Questions answered by everyone in the group.
    pub fn all_app_n(&self) -> usize {
        self.que_app_counts
            .values()
            .filter(|n| **n == self.mem_count)
            .count()
    }

    pub fn member_n(&self) -> usize {
        self.mem_count
    }

    fn add_answer(&mut self, text: &str) -> Result<(), Error> {
        for q in text.chars() {
            if q.is_ascii_lowercase() {
                *self.que_app_counts.entry(q).or_insert(0) += 1;
            } else {
                return Err(Error::InvalidQuestionChar(q));
            }
        }

        self.mem_count += 1;
        Ok(())
    }
}

pub fn parse_ga<S: AsRef<str>>(lines: &[S]) -> Result<Vec<GroupAnswer>, Error> {
    aoc_common::split_groups(lines)
        .into_iter()
        .map(|group| {
            let mut ga = GroupAnswer::new();
            for line in group {
                ga.add_answer(line.trim())?;
            }

            Ok(ga)
        })
        .collect()
}

pub fn read_ga<P: AsRef<Path>>(path: P) -> Result<Vec<GroupAnswer>, Error> {
    let lines = aoc_common::read_lines(path)?;
    parse_ga(&lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [&str; 15] = [
        "abc", "", "a", "b", "c", "", "ab", "ac", "", "a", "a", "a", "a", "", "b",
    ];

    #[test]
    fn anyone_answered() {
        let groups = parse_ga(&SAMPLE).unwrap();
        let counts = groups.iter().map(|g| g.any_app_n()).collect::<Vec<_>>();
        assert_eq!(counts, vec![3, 3, 3, 1, 1]);
    }

    #[test]
    fn everyone_answered() {
        let groups = parse_ga(&SAMPLE).unwrap();
        let counts = groups.iter().map(|g| g.all_app_n()).collect::<Vec<_>>();
        assert_eq!(counts, vec![3, 0, 1, 1, 1]);
        assert_eq!(groups[3].member_n(), 4);
    }

    #[test]
    fn invalid_answer_is_rejected() {
        assert!(matches!(
            parse_ga(&["ab", "aB"]),
            Err(Error::InvalidQuestionChar('B'))
        ));
    }
}

use std::{error, fmt::Display, path::Path};

use clap::Parser;

#[derive(Debug)]
pub enum Error {
    Input(aoc_common::Error),
    InvalidCommand(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Input(e) => write!(f, "{}", e),
            Error::InvalidCommand(s) => write!(
                f,
                "Invalid command({}), expect \"forward\", \"down\" or \"up\" followed by a distance.",
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

impl TryFrom<&str> for Command {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let invalid = || Error::InvalidCommand(value.to_string());
        let (dir, dist_str) = value.trim().split_once(' ').ok_or_else(invalid)?;
        let dist = dist_str
            .trim()
            .parse::<u32>()
            .map(i64::from)
            .map_err(|_| invalid())?;
        match dir {
            "forward" => Ok(Command::Forward(dist)),
            "down" => Ok(Command::Down(dist)),
            "up" => Ok(Command::Up(dist)),
            _ => Err(invalid()),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Submarine {
    horizontal: i64,
    depth: i64,
    aim: i64,
}

impl Submarine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Up and down change the depth directly.
    pub fn steer(&mut self, cmd: &Command) {
        match cmd {
            Command::Forward(n) => self.horizontal += n,
            Command::Down(n) => self.depth += n,
            Command::Up(n) => self.depth -= n,
        }
    }

    /// Up and down change the aim, forward dives along it.
    pub fn steer_with_aim(&mut self, cmd: &Command) {
        match cmd {
            Command::Forward(n) => {
                self.horizontal += n;
                self.depth += self.aim * n;
            }
            Command::Down(n) => self.aim += n,
            Command::Up(n) => self.aim -= n,
        }
    }

    pub fn horizontal(&self) -> i64 {
        self.horizontal
    }

    pub fn depth(&self) -> i64 {
        self.depth
    }

    pub fn position_product(&self) -> i64 {
        self.horizontal * self.depth
    }
}

pub fn parse_cmds<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Command>, Error> {
    lines
        .iter()
        .map(|l| l.as_ref())
        .filter(|s| !s.trim().is_empty())
        .map(Command::try_from)
        .collect()
}

pub fn read_cmds<P: AsRef<Path>>(path: P) -> Result<Vec<Command>, Error> {
    let lines = aoc_common::read_lines(path)?;
    parse_cmds(&lines)
}

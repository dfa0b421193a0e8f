use std::{
    error,
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use clap::Args;
use tracing_subscriber::{prelude::*, EnvFilter};

#[derive(Debug)]
pub enum Error {
    FileRead(PathBuf, io::Error),
    EmptyInput(PathBuf),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::FileRead(path, _) => write!(f, "Failed to read input file({}).", path.display()),
            Error::EmptyInput(path) => write!(
                f,
                "Input file({}) is empty, expect at least one non-blank line.",
                path.display()
            ),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::FileRead(_, ioe) => Some(ioe),
            Error::EmptyInput(_) => None,
        }
    }
}

/// Arguments every puzzle binary accepts.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Input file
    #[arg(short = 'f', long = "file", default_value = "input")]
    pub input_path: PathBuf,
    /// Compute part 2 of the exercise
    #[arg(short = '2', long = "part2")]
    pub part2: bool,
}

/// Installs the stderr log subscriber, filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::FileRead(path.to_path_buf(), e))?;
    let lines = collect_lines(BufReader::new(file), path)?;
    tracing::debug!("Read {} lines from {}.", lines.len(), path.display());

    Ok(lines)
}

/// Collects all lines of `reader`, dropping trailing blank lines.
pub fn collect_lines<R: BufRead>(reader: R, path: &Path) -> Result<Vec<String>, Error> {
    let mut lines = reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| Error::FileRead(path.to_path_buf(), e))?;
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }

    if lines.is_empty() {
        Err(Error::EmptyInput(path.to_path_buf()))
    } else {
        Ok(lines)
    }
}

/// Splits lines into runs of non-blank lines separated by blank ones.
/// Consecutive blank lines never produce an empty group.
pub fn split_groups<S: AsRef<str>>(lines: &[S]) -> Vec<Vec<&str>> {
    let mut groups = Vec::new();
    let mut cur_group: Option<Vec<&str>> = None;
    for line in lines {
        let s = line.as_ref();
        if s.trim().is_empty() {
            if let Some(group) = cur_group.take() {
                groups.push(group);
            }
        } else {
            cur_group.get_or_insert_with(Vec::new).push(s);
        }
    }

    // Don't lose the last group.
    if let Some(group) = cur_group.take() {
        groups.push(group);
    }

    groups
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn trailing_blank_lines_are_dropped() {
        let lines = collect_lines(Cursor::new("a\n\nb\n\n\n"), Path::new("test")).unwrap();
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn blank_input_is_empty() {
        for text in ["", "\n", "  \n\n"] {
            let res = collect_lines(Cursor::new(text), Path::new("test"));
            assert!(matches!(res, Err(Error::EmptyInput(_))), "input {:?}", text);
        }
    }

    #[test]
    fn missing_file_fails_to_read() {
        let res = read_lines("this-file-does-not-exist.txt");
        assert!(matches!(res, Err(Error::FileRead(_, _))));
    }

    #[test]
    fn groups_split_on_blank_lines() {
        let lines = ["1", "2", "", "", "3", "", "4", "5"];
        let groups = split_groups(&lines);
        assert_eq!(groups, vec![vec!["1", "2"], vec!["3"], vec!["4", "5"]]);
    }
}

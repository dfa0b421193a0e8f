use std::{error, fmt::Display, ops::AddAssign, path::Path};

use clap::Parser;

#[derive(Debug)]
pub enum Error {
    Input(aoc_common::Error),
    InconsistentRow(usize, usize, usize), // (column number of the current row, column number of earlier rows, row index)
    InvalidTileCharacter(char, usize),    // (character, row index)
    EmptyRow(usize),
    EmptyGrid,
    ZeroDownStep,
    ProductOverflow(Vec<usize>), // Tree counts whose product doesn't fit.
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Input(e) => write!(f, "{}", e),
            Error::InconsistentRow(this_col_n, expect_col_n, row_ind) => write!(
                f,
                "Inconsistent column number({}) found in row {}, expect {} as earlier rows did.",
                this_col_n, row_ind, expect_col_n
            ),
            Error::InvalidTileCharacter(c, row_ind) => write!(
                f,
                "Found invalid character({}) for tile in row {} of map, expect '.' or '#'.",
                c, row_ind
            ),
            Error::EmptyRow(row_ind) => write!(f, "Row {} of map is empty.", row_ind),
            Error::EmptyGrid => write!(f, "Can't walk through a map without any row."),
            Error::ZeroDownStep => write!(f, "The down step of a slope must be at least 1."),
            Error::ProductOverflow(counts) => write!(
                f,
                "The product of tree counts {:?} is too large to compute.",
                counts
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
    /// Points to travel right
    #[arg(short = 'r', long = "right", default_value_t = 3)]
    pub right: usize,
    /// Points to travel down
    #[arg(short = 'd', long = "down", default_value_t = 1)]
    pub down: usize,
}

/// Step taken after each visited row, only ever right and down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slope {
    right: usize,
    down: usize,
}

pub const DEFAULT_SLOPES: [Slope; 5] = [
    Slope { right: 1, down: 1 },
    Slope { right: 3, down: 1 },
    Slope { right: 5, down: 1 },
    Slope { right: 7, down: 1 },
    Slope { right: 1, down: 2 },
];

impl Slope {
    pub fn new(right: usize, down: usize) -> Result<Self, Error> {
        if down == 0 {
            Err(Error::ZeroDownStep)
        } else {
            Ok(Self { right, down })
        }
    }

    pub fn right(&self) -> usize {
        self.right
    }

    pub fn down(&self) -> usize {
        self.down
    }
}

// Column isn't wrapped, lookups reduce it by the map width instead.
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    r: usize,
    c: usize,
}

impl AddAssign<&Slope> for Cursor {
    fn add_assign(&mut self, rhs: &Slope) {
        self.r = self.r.saturating_add(rhs.down);
        self.c = self.c.saturating_add(rhs.right);
    }
}

impl AddAssign<Slope> for Cursor {
    fn add_assign(&mut self, rhs: Slope) {
        *self += &rhs;
    }
}

impl Cursor {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }
}

/// Tree map whose rows repeat infinitely to the right.
///
/// Each row only keeps the (ascending) column offsets of its trees.
#[derive(Debug)]
pub struct Grid {
    rows: Vec<Vec<usize>>,
    col_n: usize,
}

impl Grid {
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, Error> {
        let mut builder = GridBuilder::new();
        for line in lines {
            builder.push_row(line.as_ref())?;
        }

        Ok(builder.build())
    }

    pub fn row_n(&self) -> usize {
        self.rows.len()
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn trees_in_row(&self, r: usize) -> Option<&[usize]> {
        self.rows.get(r).map(|row| row.as_slice())
    }

    /// Whether the cursor is on a tree, `None` once it's below the last row.
    pub fn is_tree(&self, cursor: &Cursor) -> Option<bool> {
        self.rows
            .get(cursor.r)
            .map(|trees| trees.binary_search(&(cursor.c % self.col_n)).is_ok())
    }

    /// Visits every `slope.down()`th row starting from the top left corner.
    pub fn path(&self, slope: &Slope) -> Result<Walk<'_>, Error> {
        if self.is_empty() {
            return Err(Error::EmptyGrid);
        }

        // Only the step within one period matters to the walk.
        Ok(Walk {
            grid: self,
            slope: Slope {
                right: slope.right % self.col_n,
                down: slope.down,
            },
            cursor: Cursor::default(),
        })
    }

    pub fn trees_on_slope(&self, slope: &Slope) -> Result<usize, Error> {
        let count = self.path(slope)?.filter(|is_tree| *is_tree).count();
        tracing::debug!("Found {} trees following {:?}.", count, slope);

        Ok(count)
    }

    pub fn trees_product(&self, slopes: &[Slope]) -> Result<usize, Error> {
        if self.is_empty() {
            return Err(Error::EmptyGrid);
        }

        let counts = slopes
            .iter()
            .map(|slope| self.trees_on_slope(slope))
            .collect::<Result<Vec<_>, _>>()?;
        let product = counts
            .iter()
            .try_fold(1usize, |prod, n| prod.checked_mul(*n));
        product.ok_or(Error::ProductOverflow(counts))
    }
}

pub struct Walk<'a> {
    grid: &'a Grid,
    slope: Slope,
    cursor: Cursor,
}

impl Iterator for Walk<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let is_tree = self.grid.is_tree(&self.cursor)?;
        self.cursor += &self.slope;
        self.cursor.c %= self.grid.col_n;
        Some(is_tree)
    }
}

struct GridBuilder {
    rows: Vec<Vec<usize>>,
    col_n: Option<usize>,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            col_n: None,
        }
    }

    pub fn push_row(&mut self, row_str: &str) -> Result<(), Error> {
        let row_ind = self.rows.len();
        let this_col_n = row_str.chars().count();
        if this_col_n == 0 {
            return Err(Error::EmptyRow(row_ind));
        }

        let expect_col_n = *self.col_n.get_or_insert(this_col_n);
        if expect_col_n != this_col_n {
            return Err(Error::InconsistentRow(this_col_n, expect_col_n, row_ind));
        }

        let mut trees = Vec::new();
        for (c_ind, c) in row_str.chars().enumerate() {
            match c {
                '.' => (),
                '#' => trees.push(c_ind),
                other => return Err(Error::InvalidTileCharacter(other, row_ind)),
            }
        }
        self.rows.push(trees);

        Ok(())
    }

    pub fn build(self) -> Grid {
        Grid {
            rows: self.rows,
            col_n: self.col_n.unwrap_or(0),
        }
    }
}

pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Grid, Error> {
    let lines = aoc_common::read_lines(path)?;
    Grid::from_lines(&lines)
}

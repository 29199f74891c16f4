use std::{
    collections::{HashSet, hash_set},
    fmt::{Display, Write},
    ops::RangeInclusive,
    str::FromStr,
};

use itertools::{Itertools, MinMaxResult};

use crate::{Coord, SparseGrid};

/// A set of alive cells, without any frontier.
///
/// The text form has one row per line, `o` for alive cells and ` ` or `.` for
/// dead ones; y grows downwards.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub cells: HashSet<Coord>,
}

impl Pattern {
    pub fn set_bit(&mut self, c: Coord) {
        self.cells.insert(c);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.cells.contains(&c)
    }

    /// Moves the pattern so its bounding box is centred on the origin.
    pub fn normalize(mut self) -> Self {
        let Span::Covers { xs, ys } = self.span() else {
            return self;
        };
        let centre = |r: &RangeInclusive<isize>| {
            let w = r.end().abs_diff(*r.start());
            r.start().saturating_add_unsigned(w / 2 + w % 2)
        };
        let (dx, dy) = (centre(&xs), centre(&ys));
        // The centre lies inside the span, so each offset fits in an isize.
        if (dx, dy) != (0, 0) {
            for c in std::mem::take(&mut self.cells) {
                self.set_bit(Coord::new(c.x - dx, c.y - dy));
            }
        }
        self
    }

    /// Column and row ranges covered by the pattern.
    pub fn bounds(&self) -> Option<(RangeInclusive<isize>, RangeInclusive<isize>)> {
        match self.span() {
            Span::Empty => None,
            Span::Covers { xs, ys } => Some((xs, ys)),
        }
    }
}

enum Span {
    Empty,
    Covers {
        xs: RangeInclusive<isize>,
        ys: RangeInclusive<isize>,
    },
}

impl Pattern {
    fn span(&self) -> Span {
        use Span::*;
        let xs = match self.cells.iter().map(|c| c.x).minmax() {
            MinMaxResult::NoElements => return Empty,
            MinMaxResult::OneElement(x) => x..=x,
            MinMaxResult::MinMax(x1, x2) => x1..=x2,
        };
        let ys = match self.cells.iter().map(|c| c.y).minmax() {
            MinMaxResult::NoElements => return Empty,
            MinMaxResult::OneElement(y) => y..=y,
            MinMaxResult::MinMax(y1, y2) => y1..=y2,
        };
        Covers { xs, ys }
    }
}

impl From<&SparseGrid> for Pattern {
    fn from(grid: &SparseGrid) -> Self {
        grid.alive_cells().collect()
    }
}

impl IntoIterator for Pattern {
    type Item = Coord;

    type IntoIter = hash_set::IntoIter<Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl FromIterator<Coord> for Pattern {
    fn from_iter<T: IntoIterator<Item = Coord>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pattern = Pattern::default();
        for (y, line) in s.lines().enumerate() {
            for (x, c) in line.chars().enumerate() {
                match c {
                    ' ' | '.' => (),
                    'o' => pattern.set_bit(Coord::new(x as isize, y as isize)),
                    _ => return Err(format!("Unexpected character {c:?} at line {}", y + 1)),
                }
            }
        }
        Ok(pattern.normalize())
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Span::Covers { xs, ys } = self.span() else {
            return Ok(());
        };
        // `next_x` is `None` only after a cell in the last column of the plane.
        let (mut next_x, mut current_y) = (Some(*xs.start()), *ys.start());
        for c in self.cells.iter().sorted_by_key(|c| (c.y, c.x)) {
            while current_y < c.y {
                f.write_char('\n')?;
                next_x = Some(*xs.start());
                current_y += 1;
            }
            if let Some(x) = next_x {
                f.write_str(&" ".repeat(c.x.abs_diff(x)))?;
            }
            f.write_char('o')?;
            next_x = c.x.checked_add(1);
        }
        Ok(())
    }
}

/// A well-known shape, placed around the origin.
#[derive(Clone, Copy, Debug)]
pub struct Named {
    pub name: &'static str,
    pub cells: &'static [(isize, isize)],
}

impl Named {
    pub fn pattern(&self) -> Pattern {
        self.cells.iter().copied().map(Coord::from).collect()
    }
}

pub const GLIDER: Named = Named {
    name: "Glider",
    cells: &[(-2, -1), (-1, 0), (0, -2), (0, -1), (0, 0)],
};

pub const BLINKER: Named = Named {
    name: "Blinker",
    cells: &[(0, -1), (0, 0), (0, 1)],
};

pub const BLOCK: Named = Named {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const R_PENTOMINO: Named = Named {
    name: "R-pentomino",
    cells: &[(0, -1), (1, -1), (-1, 0), (0, 0), (0, 1)],
};

pub const LWSS: Named = Named {
    name: "Lightweight spaceship",
    cells: &[
        (1, 0),
        (4, 0),
        (0, 1),
        (0, 2),
        (4, 2),
        (0, 3),
        (1, 3),
        (2, 3),
        (3, 3),
    ],
};

pub const NAMED: &[Named] = &[GLIDER, BLINKER, BLOCK, R_PENTOMINO, LWSS];

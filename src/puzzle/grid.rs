//! Letter grid, cell positions, and straight-line directions

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell position on the grid (row-major, zero-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A straight-line step `(Δrow, Δcol)` with each component in {-1, 0, 1}
/// and never both zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub dr: i8,
    pub dc: i8,
}

impl Direction {
    pub const fn new(dr: i8, dc: i8) -> Self {
        Self { dr, dc }
    }

    /// The opposite direction (same line, reversed traversal).
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            dr: -self.dr,
            dc: -self.dc,
        }
    }

    /// One step from `from`, or `None` if the step leaves an
    /// `size` x `size` grid.
    pub fn step(self, from: Position, size: usize) -> Option<Position> {
        self.offset(from, 1, size)
    }

    /// `steps` steps from `from`, or `None` if the target leaves the grid.
    pub fn offset(self, from: Position, steps: usize, size: usize) -> Option<Position> {
        let row = from.row as isize + self.dr as isize * steps as isize;
        let col = from.col as isize + self.dc as isize * steps as isize;
        if row < 0 || col < 0 || row as usize >= size || col as usize >= size {
            return None;
        }
        Some(Position::new(row as usize, col as usize))
    }

    /// The unit step leading from `from` to `to`, if they are exactly one
    /// straight-line step apart.
    pub fn between(from: Position, to: Position) -> Option<Direction> {
        let dr = to.row as isize - from.row as isize;
        let dc = to.col as isize - from.col as isize;
        if dr == 0 && dc == 0 {
            return None;
        }
        if dr.abs() > 1 || dc.abs() > 1 {
            return None;
        }
        Some(Direction::new(dr as i8, dc as i8))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {:+})", self.dr, self.dc)
    }
}

/// An N x N grid of uppercase ASCII letters.
///
/// Immutable once constructed; a round owns exactly one grid. Rows are
/// stored in row-major order as bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Construct from pre-filled row-major cells. Callers guarantee
    /// `cells.len() == size * size` and uppercase ASCII content.
    pub(crate) fn from_cells(size: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Parse a grid from one string per row.
    ///
    /// The grid must be square (as many rows as columns) and every cell an
    /// ASCII letter; lowercase input is normalized to uppercase.
    ///
    /// # Errors
    ///
    /// Returns an error if a row's length differs from the row count or a
    /// cell is not an ASCII letter.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> crate::Result<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let got = line.chars().count();
            if got != size {
                return Err(crate::Error::InvalidGridShape {
                    row,
                    got,
                    expected: size,
                });
            }
            for (column, c) in line.chars().enumerate() {
                if !c.is_ascii_alphabetic() {
                    return Err(crate::Error::InvalidGridCharacter {
                        character: c,
                        row,
                        column,
                    });
                }
                cells.push(c.to_ascii_uppercase() as u8);
            }
        }
        Ok(Self { size, cells })
    }

    /// Encode the grid as one string per row (inverse of [`Grid::from_rows`]).
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|&b| b as char).collect())
            .collect()
    }

    /// Grid side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `pos` lies on the grid.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// The letter at `pos`. `pos` must be in bounds.
    pub fn letter(&self, pos: Position) -> char {
        self.cells[pos.row * self.size + pos.col] as char
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &b) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", b as char)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_round_trips() {
        let rows = ["CAT", "DOG", "FOX"];
        let grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.letter(Position::new(0, 0)), 'C');
        assert_eq!(grid.letter(Position::new(1, 2)), 'G');
        assert_eq!(grid.rows(), vec!["CAT", "DOG", "FOX"]);
    }

    #[test]
    fn from_rows_normalizes_case() {
        let grid = Grid::from_rows(&["ab", "cd"]).unwrap();
        assert_eq!(grid.rows(), vec!["AB", "CD"]);
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = Grid::from_rows(&["ABC", "AB", "ABC"]).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidGridShape {
                row: 1,
                got: 2,
                expected: 3,
            }
        ));
    }

    #[test]
    fn from_rows_rejects_non_letters() {
        let err = Grid::from_rows(&["A1", "BC"]).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidGridCharacter {
                character: '1',
                row: 0,
                column: 1,
            }
        ));
    }

    #[test]
    fn step_stops_at_edges() {
        let up_left = Direction::new(-1, -1);
        assert_eq!(up_left.step(Position::new(0, 0), 8), None);
        assert_eq!(
            up_left.step(Position::new(1, 1), 8),
            Some(Position::new(0, 0))
        );

        let right = Direction::new(0, 1);
        assert_eq!(right.step(Position::new(3, 7), 8), None);
    }

    #[test]
    fn offset_walks_multiple_steps() {
        let down_right = Direction::new(1, 1);
        assert_eq!(
            down_right.offset(Position::new(0, 0), 3, 8),
            Some(Position::new(3, 3))
        );
        assert_eq!(down_right.offset(Position::new(6, 6), 2, 8), None);
    }

    #[test]
    fn between_recovers_unit_steps() {
        let a = Position::new(2, 2);
        assert_eq!(
            Direction::between(a, Position::new(1, 3)),
            Some(Direction::new(-1, 1))
        );
        assert_eq!(Direction::between(a, a), None);
        assert_eq!(Direction::between(a, Position::new(2, 5)), None);
    }

    #[test]
    fn display_renders_rows() {
        let grid = Grid::from_rows(&["AB", "CD"]).unwrap();
        assert_eq!(grid.to_string(), "A B\nC D");
    }
}

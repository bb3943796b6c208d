use crate::error::{BoardError, FormatError};
use core::fmt;
use grid_util::point::Point;
use itertools::Itertools;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::{smallvec, SmallVec};
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

/// A single marker on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Open,
    Blocked,
    Start,
    End,
}

impl Cell {
    pub fn from_char(symbol: char) -> Option<Cell> {
        match symbol {
            '1' => Some(Cell::Open),
            '0' => Some(Cell::Blocked),
            'S' => Some(Cell::Start),
            'E' => Some(Cell::End),
            _ => None,
        }
    }
    pub fn to_char(self) -> char {
        match self {
            Cell::Open => '1',
            Cell::Blocked => '0',
            Cell::Start => 'S',
            Cell::End => 'E',
        }
    }
    /// Whether a trace may occupy this cell at all.
    pub fn passable(self) -> bool {
        self != Cell::Blocked
    }
}

/// The four orthogonal neighbours of a point in expansion order: up, down, left, right.
/// Points outside the board are included; callers filter them.
pub fn neumann_neighbourhood(point: Point) -> SmallVec<[Point; 4]> {
    smallvec![
        Point::new(point.x, point.y - 1),
        Point::new(point.x, point.y + 1),
        Point::new(point.x - 1, point.y),
        Point::new(point.x + 1, point.y),
    ]
}

/// [CircuitBoard] is an immutable grid of [Cell] markers with exactly one start and one end.
/// Positions are [Point]s with `x` as the column and `y` as the row. Connected components of
/// passable cells are kept in a [UnionFind] structure so that boards on which the end can never
/// be reached are recognised without searching.
#[derive(Clone, Debug)]
pub struct CircuitBoard {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
    start: Point,
    end: Point,
    components: UnionFind<usize>,
}

impl CircuitBoard {
    /// Reads and parses a board file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<CircuitBoard, BoardError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => BoardError::NotFound {
                path: path.to_path_buf(),
            },
            _ => BoardError::Io(e),
        })?;
        let board = text.parse::<CircuitBoard>()?;
        debug!(
            "Loaded {}x{} board from {}",
            board.rows,
            board.cols,
            path.display()
        );
        Ok(board)
    }

    fn from_cells(cells: Vec<Cell>, rows: usize, cols: usize) -> Result<Self, FormatError> {
        let locate = |marker: Cell| {
            cells
                .iter()
                .positions(|&c| c == marker)
                .map(|ix| Point::new((ix % cols) as i32, (ix / cols) as i32))
                .collect::<Vec<Point>>()
        };
        let starts = locate(Cell::Start);
        if starts.len() != 1 {
            return Err(FormatError::StartCount(starts.len()));
        }
        let ends = locate(Cell::End);
        if ends.len() != 1 {
            return Err(FormatError::EndCount(ends.len()));
        }
        let mut board = CircuitBoard {
            cells,
            rows,
            cols,
            start: starts[0],
            end: ends[0],
            components: UnionFind::new(rows * cols),
        };
        board.generate_components();
        Ok(board)
    }

    /// Links up orthogonally adjacent passable cells into the same component.
    fn generate_components(&mut self) {
        for row in 0..self.rows as i32 {
            for col in 0..self.cols as i32 {
                if !self.passable(row, col) {
                    continue;
                }
                let ix = self.get_ix(row, col);
                for (r, c) in [(row + 1, col), (row, col + 1)] {
                    if self.passable(r, c) {
                        let neighbour_ix = self.get_ix(r, c);
                        self.components.union(ix, neighbour_ix);
                    }
                }
            }
        }
    }

    fn get_ix(&self, row: i32, col: i32) -> usize {
        row as usize * self.cols + col as usize
    }

    fn passable(&self, row: i32, col: i32) -> bool {
        self.cell(row, col).is_some_and(Cell::passable)
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        if self.in_bounds(row, col) {
            Some(self.cells[self.get_ix(row, col)])
        } else {
            None
        }
    }

    /// Whether a trace may be extended onto this cell. The start cell is not open, so a trace
    /// can never loop back onto it.
    pub fn is_open(&self, row: i32, col: i32) -> bool {
        matches!(self.cell(row, col), Some(Cell::Open | Cell::End))
    }

    pub fn cell_char(&self, row: i32, col: i32) -> Option<char> {
        self.cell(row, col).map(Cell::to_char)
    }

    pub fn starting_point(&self) -> Point {
        self.start
    }

    pub fn ending_point(&self) -> Point {
        self.end
    }

    /// Checks if start and end are on the same connected component.
    pub fn reachable(&self) -> bool {
        let start_ix = self.get_ix(self.start.y, self.start.x);
        let end_ix = self.get_ix(self.end.y, self.end.x);
        self.components.equiv(start_ix, end_ix)
    }
}

fn parse_header(header: &str) -> Result<(usize, usize), FormatError> {
    let invalid = || FormatError::InvalidHeader(header.to_owned());
    let dims = header
        .split_whitespace()
        .map(|token| token.parse::<usize>().map_err(|_| invalid()))
        .collect::<Result<Vec<usize>, FormatError>>()?;
    match dims[..] {
        [rows, cols] if rows.checked_mul(cols).is_some() => Ok((rows, cols)),
        _ => Err(invalid()),
    }
}

impl FromStr for CircuitBoard {
    type Err = FormatError;

    /// Parses a header line `rows cols` followed by one line per row. Whitespace between
    /// markers is optional and blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().map(str::trim).filter(|line| !line.is_empty());
        let (rows, cols) = parse_header(lines.next().unwrap_or_default())?;
        // The header is not trusted until the rows are counted.
        let mut cells = Vec::with_capacity((rows * cols).min(s.len()));
        let mut found = 0;
        for (row, line) in lines.enumerate() {
            found += 1;
            if row >= rows {
                continue;
            }
            let row_cells = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .enumerate()
                .map(|(col, symbol)| {
                    Cell::from_char(symbol).ok_or(FormatError::UnknownSymbol { row, col, symbol })
                })
                .collect::<Result<Vec<Cell>, FormatError>>()?;
            if row_cells.len() != cols {
                return Err(FormatError::ColumnCount {
                    row,
                    expected: cols,
                    found: row_cells.len(),
                });
            }
            cells.extend(row_cells);
        }
        if found != rows {
            return Err(FormatError::RowCount {
                expected: rows,
                found,
            });
        }
        CircuitBoard::from_cells(cells, rows, cols)
    }
}

impl fmt::Display for CircuitBoard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            writeln!(f, "{}", row.iter().map(|c| c.to_char()).join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETOUR: &str = "3 3\n1 1 1\nS 0 E\n1 1 1\n";

    #[test]
    fn parses_markers_and_dimensions() {
        let board: CircuitBoard = DETOUR.parse().unwrap();
        assert_eq!(board.num_rows(), 3);
        assert_eq!(board.num_cols(), 3);
        assert_eq!(board.starting_point(), Point::new(0, 1));
        assert_eq!(board.ending_point(), Point::new(2, 1));
        assert_eq!(board.cell(1, 1), Some(Cell::Blocked));
        assert_eq!(board.cell_char(1, 0), Some('S'));
        assert_eq!(board.cell_char(3, 0), None);
    }

    #[test]
    fn separators_are_optional() {
        let spaced: CircuitBoard = DETOUR.parse().unwrap();
        let packed: CircuitBoard = "3 3\n111\nS0E\n\n111".parse().unwrap();
        assert_eq!(spaced.to_string(), packed.to_string());
    }

    #[test]
    fn start_and_blocked_cells_are_not_open() {
        let board: CircuitBoard = DETOUR.parse().unwrap();
        assert!(!board.is_open(1, 0));
        assert!(!board.is_open(1, 1));
        assert!(board.is_open(1, 2));
        assert!(board.is_open(0, 0));
        assert!(!board.is_open(-1, 0));
        assert!(!board.is_open(0, 3));
    }

    #[test]
    fn rejects_malformed_boards() {
        let cases = [
            ("", FormatError::InvalidHeader(String::new())),
            ("3\nS E", FormatError::InvalidHeader("3".to_owned())),
            ("1 x\nSE", FormatError::InvalidHeader("1 x".to_owned())),
            (
                "2 2\nSE",
                FormatError::RowCount {
                    expected: 2,
                    found: 1,
                },
            ),
            (
                "1 2\nSE\n11",
                FormatError::RowCount {
                    expected: 1,
                    found: 2,
                },
            ),
            (
                "2 2\nSE\n1",
                FormatError::ColumnCount {
                    row: 1,
                    expected: 2,
                    found: 1,
                },
            ),
            (
                "1 3\nS#E",
                FormatError::UnknownSymbol {
                    row: 0,
                    col: 1,
                    symbol: '#',
                },
            ),
            ("2 2\nSS\nE1", FormatError::StartCount(2)),
            ("1 2\n1E", FormatError::StartCount(0)),
            ("1 3\nSEE", FormatError::EndCount(2)),
        ];
        for (text, expected) in cases {
            assert_eq!(text.parse::<CircuitBoard>().unwrap_err(), expected, "{text:?}");
        }
    }

    #[test]
    fn overflowing_header_is_invalid() {
        let header = "4294967296 4294967296";
        assert_eq!(
            format!("{header}\nSE").parse::<CircuitBoard>().unwrap_err(),
            FormatError::InvalidHeader(header.to_owned())
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn oversized_header_reports_missing_rows() {
        assert_eq!(
            "100000000000 1000\nSE".parse::<CircuitBoard>().unwrap_err(),
            FormatError::RowCount {
                expected: 100_000_000_000,
                found: 1,
            }
        );
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = CircuitBoard::load("no/such/board.dat").unwrap_err();
        assert!(matches!(err, BoardError::NotFound { .. }));
    }

    /// Corresponds to a board split in two by a wall:
    // S 0 1
    // 1 0 E
    #[test]
    fn components_separate_walled_regions() {
        let walled: CircuitBoard = "2 3\nS01\n10E".parse().unwrap();
        assert!(!walled.reachable());
        let open: CircuitBoard = "2 3\nS11\n10E".parse().unwrap();
        assert!(open.reachable());
    }

    #[test]
    fn neighbourhood_order_is_up_down_left_right() {
        let around = neumann_neighbourhood(Point::new(1, 1));
        assert_eq!(
            around.as_slice(),
            &[
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(0, 1),
                Point::new(2, 1)
            ]
        );
    }
}

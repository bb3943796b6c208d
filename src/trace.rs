use crate::board::{Cell, CircuitBoard};
use crate::error::InvalidMove;
use core::fmt;
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexSet;
use itertools::Itertools;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// A trace from the start cell of a [CircuitBoard] to some cell on it. The path is kept as an
/// insertion-ordered set, so it doubles as the traversal order and the visited check. A trace is
/// never changed after creation: [extend](Trace::extend) produces an independent copy.
#[derive(Clone, Debug)]
pub struct Trace<'a> {
    board: &'a CircuitBoard,
    path: FxIndexSet<Point>,
}

impl<'a> Trace<'a> {
    /// The root trace, consisting of only the start cell.
    pub fn new(board: &'a CircuitBoard) -> Trace<'a> {
        let mut path = FxIndexSet::default();
        path.insert(board.starting_point());
        Trace { board, path }
    }

    /// Attempts to continue the trace onto `(row, col)`, which must be an open cell next to the
    /// current position that the trace has not visited yet.
    pub fn extend(&self, row: i32, col: i32) -> Result<Trace<'a>, InvalidMove> {
        let current = self.position();
        if !self.board.in_bounds(row, col) {
            return Err(InvalidMove::OutOfBounds { row, col });
        }
        if (current.y - row).abs() + (current.x - col).abs() != 1 {
            return Err(InvalidMove::NotAdjacent { row, col });
        }
        let next = Point::new(col, row);
        if self.path.contains(&next) {
            return Err(InvalidMove::Revisit { row, col });
        }
        if !self.board.is_open(row, col) {
            return Err(InvalidMove::Blocked { row, col });
        }
        let mut path = self.path.clone();
        path.insert(next);
        Ok(Trace {
            board: self.board,
            path,
        })
    }

    /// The cell the trace currently ends on.
    pub fn position(&self) -> Point {
        // The path always holds at least the start cell.
        self.path[self.path.len() - 1]
    }

    pub fn row(&self) -> i32 {
        self.position().y
    }

    pub fn col(&self) -> i32 {
        self.position().x
    }

    /// Number of cells in the trace, counting both the start and the current cell.
    pub fn path_length(&self) -> usize {
        self.path.len()
    }

    pub fn is_solution(&self) -> bool {
        self.position() == self.board.ending_point()
    }

    /// Like [CircuitBoard::is_open], but also rejects cells this trace already passes through.
    pub fn is_open(&self, row: i32, col: i32) -> bool {
        self.board.is_open(row, col) && !self.path.contains(&Point::new(col, row))
    }

    pub fn contains(&self, row: i32, col: i32) -> bool {
        self.path.contains(&Point::new(col, row))
    }

    pub fn points(&self) -> Vec<Point> {
        self.path.iter().copied().collect()
    }

    /// A view of the board with this trace drawn onto it.
    pub fn overlay(&self) -> TraceOverlay<'_, 'a> {
        TraceOverlay { trace: self }
    }
}

/// Lists the visited cells in order as `(row, col)` pairs.
impl fmt::Display for Trace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{}]",
            self.path
                .iter()
                .map(|p| format!("({}, {})", p.y, p.x))
                .join(", ")
        )
    }
}

/// Renders the board of a [Trace] with every cell between start and end marked `T`.
pub struct TraceOverlay<'t, 'a> {
    trace: &'t Trace<'a>,
}

impl TraceOverlay<'_, '_> {
    pub const TRACE_CHAR: char = 'T';

    pub fn cell_char(&self, row: i32, col: i32) -> Option<char> {
        let board = self.trace.board;
        match board.cell(row, col)? {
            Cell::Open if self.trace.contains(row, col) => Some(Self::TRACE_CHAR),
            cell => Some(cell.to_char()),
        }
    }
}

impl fmt::Display for TraceOverlay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let board = self.trace.board;
        for row in 0..board.num_rows() as i32 {
            let line = (0..board.num_cols() as i32)
                .filter_map(|col| self.cell_char(row, col))
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

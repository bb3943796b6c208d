use crate::board::{neumann_neighbourhood, CircuitBoard};
use crate::storage::{Storage, StorageMode};
use crate::trace::Trace;
use log::{debug, info, trace};
use std::cmp::Ordering;

/// Accumulates the shortest solutions seen so far. All held traces share the same path length.
#[derive(Clone, Debug, Default)]
pub struct BestPaths<'a> {
    paths: Vec<Trace<'a>>,
}

impl<'a> BestPaths<'a> {
    /// Compares a solution in: a strictly shorter one replaces all held paths, one of equal
    /// length is appended and a longer one is dropped.
    pub fn offer(&mut self, solution: Trace<'a>) {
        match self.best_length() {
            Some(best) => match solution.path_length().cmp(&best) {
                Ordering::Less => {
                    self.paths.clear();
                    self.paths.push(solution);
                }
                Ordering::Equal => self.paths.push(solution),
                Ordering::Greater => {}
            },
            None => self.paths.push(solution),
        }
    }

    pub fn best_length(&self) -> Option<usize> {
        self.paths.first().map(Trace::path_length)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn into_paths(self) -> Vec<Trace<'a>> {
        self.paths
    }
}

/// Finds every shortest trace from the start to the end of a [CircuitBoard]. The [StorageMode]
/// decides whether the board is explored depth-first or breadth-first; both yield the same set
/// of traces, only their order differs.
#[derive(Clone, Debug)]
pub struct CircuitTracer {
    pub mode: StorageMode,
    /// Return no traces right away if start and end lie on different components.
    pub skip_unreachable: bool,
    /// Do not expand traces that are already as long as the best solution found.
    pub bound_by_best: bool,
}

impl CircuitTracer {
    pub fn new(mode: StorageMode) -> CircuitTracer {
        CircuitTracer {
            mode,
            skip_unreachable: true,
            bound_by_best: true,
        }
    }

    /// Runs the search and returns the shortest traces in the order they were found.
    pub fn trace<'a>(&self, board: &'a CircuitBoard) -> Vec<Trace<'a>> {
        self.trace_best(board).into_paths()
    }

    pub fn trace_best<'a>(&self, board: &'a CircuitBoard) -> BestPaths<'a> {
        let mut best = BestPaths::default();
        if self.skip_unreachable && !board.reachable() {
            info!(
                "End {:?} is not reachable from start {:?}",
                board.ending_point(),
                board.starting_point()
            );
            return best;
        }
        let mut storage = Storage::new(self.mode);
        expand(&Trace::new(board), &mut storage);
        let mut retrieved = 0usize;
        while !storage.is_empty() {
            let current = storage.retrieve();
            retrieved += 1;
            if current.is_solution() {
                best.offer(current);
            } else if !self.bound_by_best
                || best
                    .best_length()
                    .map_or(true, |length| current.path_length() < length)
            {
                expand(&current, &mut storage);
            }
        }
        debug!(
            "Searched {} traces using a {}, found {} of length {:?}",
            retrieved,
            storage.mode(),
            best.len(),
            best.best_length()
        );
        best
    }
}

/// Stores every extension of `current` onto a neighbouring open cell it has not visited.
fn expand<'a>(current: &Trace<'a>, storage: &mut Storage<Trace<'a>>) {
    for next in neumann_neighbourhood(current.position()) {
        match current.extend(next.y, next.x) {
            Ok(extended) => storage.store(extended),
            Err(reason) => trace!("Skipping move: {}", reason),
        }
    }
}

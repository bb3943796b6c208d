//! # circuit_tracer
//!
//! Finds every shortest trace between the start and end markers of a circuit board grid.
//! A trace moves orthogonally through open cells and never crosses itself. The search keeps its
//! frontier in a [Storage] that behaves as a stack or a queue, so the same loop runs as a
//! depth-first or a breadth-first search; all traces tied for the shortest length are reported
//! either way. Boards on which the end lies in a different
//! [connected component](https://en.wikipedia.org/wiki/Component_(graph_theory)) than the start
//! are answered without searching.
pub mod board;
pub mod error;
pub mod storage;
pub mod trace;
pub mod tracer;

pub use board::{Cell, CircuitBoard};
pub use error::{BoardError, FormatError, InvalidMove};
pub use storage::{Storage, StorageMode};
pub use trace::{Trace, TraceOverlay};
pub use tracer::{BestPaths, CircuitTracer};

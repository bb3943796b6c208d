use circuit_tracer::{CircuitBoard, Trace};
use std::io::{self, Write};

/// Prints each trace's coordinate list on its own line, in discovery order.
pub fn console<W: Write>(out: &mut W, traces: &[Trace]) -> io::Result<()> {
    for trace in traces {
        writeln!(out, "{}", trace)?;
    }
    Ok(())
}

/// Prints the board once per trace, headed by the trace number and its length.
pub fn board_view<W: Write>(out: &mut W, board: &CircuitBoard, traces: &[Trace]) -> io::Result<()> {
    if traces.is_empty() {
        write!(out, "{}", board)?;
        writeln!(out, "No trace connects start and end.")?;
        return Ok(());
    }
    for (i, trace) in traces.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "Path #{} (Length: {})", i + 1, trace.path_length())?;
        write!(out, "{}", trace.overlay())?;
    }
    Ok(())
}

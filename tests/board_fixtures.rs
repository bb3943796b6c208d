use circuit_boards::{board_path, get_board_names, get_expectations, get_valid_boards, Outcome};
use circuit_tracer::{BoardError, CircuitBoard, CircuitTracer, StorageMode, Trace};
use std::collections::HashSet;

#[test]
fn every_fixture_has_an_expectation() {
    let names = get_board_names().into_iter().collect::<HashSet<_>>();
    let expected = get_expectations()
        .into_iter()
        .map(|e| e.name)
        .collect::<HashSet<_>>();
    assert_eq!(names, expected);
}

#[test]
fn fixtures_load_as_expected() {
    for expectation in get_expectations() {
        let result = CircuitBoard::load(board_path(&expectation.name));
        match expectation.outcome {
            Outcome::Ok => assert!(result.is_ok(), "{}: {:?}", expectation.name, result.err()),
            Outcome::Format => assert!(
                matches!(result, Err(BoardError::Format(_))),
                "{} should be rejected",
                expectation.name
            ),
        }
    }
}

#[test]
fn fixtures_trace_as_expected() {
    for (text, expectation) in get_valid_boards() {
        let board: CircuitBoard = text.parse().unwrap();
        let mut sets = Vec::new();
        for mode in [StorageMode::Stack, StorageMode::Queue] {
            let traces = CircuitTracer::new(mode).trace(&board);
            println!("{} ({mode}): {} traces", expectation.name, traces.len());
            assert_eq!(traces.len(), expectation.solutions, "{}", expectation.name);
            for trace in &traces {
                assert_eq!(Some(trace.path_length()), expectation.shortest);
                assert!(trace.is_solution());
            }
            sets.push(traces.iter().map(Trace::points).collect::<HashSet<_>>());
        }
        assert_eq!(sets[0], sets[1], "{}", expectation.name);
    }
}

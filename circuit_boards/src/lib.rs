use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const BOARD_ROOT: &str = "boards/";
const BOARD_EXTENSION: &str = "dat";

/// What loading and tracing a fixture board should produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The board parses and is searched.
    Ok,
    /// The board is rejected with a format error.
    Format,
}

/// One record of `boards/expected.csv`.
#[derive(Clone, Debug, Deserialize)]
pub struct Expectation {
    pub name: String,
    pub outcome: Outcome,
    /// Length of the shortest traces, empty if there are none.
    pub shortest: Option<usize>,
    pub solutions: usize,
}

pub fn board_path(name: &str) -> PathBuf {
    Path::new(BOARD_ROOT).join(format!("{}.{}", name, BOARD_EXTENSION))
}

/// Names of all board fixtures, relative to the board root and without extension, e.g.
/// `valid/detour`.
pub fn get_board_names() -> Vec<String> {
    let root = Path::new(BOARD_ROOT)
        .canonicalize()
        .expect("Failed to canonicalize board root");
    let mut names = Vec::new();
    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = entry.expect("Could not get dir entry");
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(BOARD_EXTENSION) {
            continue;
        }
        let rel_path = path
            .strip_prefix(&root)
            .expect("Board outside of board root")
            .with_extension("");
        let name = rel_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<String>>()
            .join("/");
        names.push(name);
    }
    names
}

pub fn get_board(name: &str) -> String {
    fs::read_to_string(board_path(name)).expect("Could not read board file")
}

pub fn get_expectations() -> Vec<Expectation> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(Path::new(BOARD_ROOT).join("expected.csv"))
        .expect("Could not open expectations file");
    csv_reader
        .deserialize::<Expectation>()
        .map(|result| result.expect("Could not parse expectation record"))
        .collect()
}

/// Fixtures that are expected to parse, paired with their expectations.
pub fn get_valid_boards() -> Vec<(String, Expectation)> {
    get_expectations()
        .into_iter()
        .filter(|e| e.outcome == Outcome::Ok)
        .map(|e| (get_board(&e.name), e))
        .collect()
}

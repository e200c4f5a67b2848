use thiserror::Error;

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("Illegal move: {0}")]
    IllegalMove(String),
    #[error("Board is in an unsolvable configuration {0}")]
    UnsolvableBoard(String),
    #[error("Malformed board: {0}")]
    Parse(String),
    #[error("no state with id {0} in the arena")]
    UnknownState(usize),
    /// A child was evaluated before its parent's base value was recorded.
    #[error("parent state has no cached base value for heuristic '{heuristic}'")]
    MissingParentValue { heuristic: &'static str },
    #[error("parent's cached base value for heuristic '{heuristic}' does not match its board")]
    InconsistentParentValue { heuristic: &'static str },
    #[error("search gave up after expanding {0} states")]
    SearchLimit(usize),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

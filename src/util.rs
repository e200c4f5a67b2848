use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::warn;
use crate::board::Board;
use crate::error::PuzzleError;
use crate::report::PuzzleReport;

/// Reads one puzzle per line, skipping the header line and blank lines.
/// Lines that fail to parse are logged and skipped.
pub fn read_puzzles(path: impl AsRef<Path>) -> Result<Vec<Board>, PuzzleError> {
    let file = fs::File::open(path)?;
    let reader = BufReader::new(file);

    let mut result: Vec<Board> = vec![];

    for (line_idx, line) in reader.lines().enumerate().skip(1) {
        let puzzle_str = line?;
        if puzzle_str.trim().is_empty() {
            continue;
        }

        match puzzle_str.parse::<Board>() {
            Ok(puzzle) => result.push(puzzle),
            Err(e) => warn!(line = line_idx + 1, "skipping puzzle: {}", e),
        }
    }

    Ok(result)
}

/// One line per puzzle: the move string, empty when it was not solved.
pub fn write_answers(path: impl AsRef<Path>, reports: &[PuzzleReport]) -> Result<(), PuzzleError> {
    let mut writer = BufWriter::new(fs::File::create(path)?);

    for report in reports {
        writeln!(writer, "{}", report.moves.as_deref().unwrap_or(""))?;
    }

    writer.flush()?;
    Ok(())
}

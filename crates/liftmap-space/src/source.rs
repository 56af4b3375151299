//! Reader for `X,Y` elevator coordinate lists.
//!
//! ```text
//! X,Y
//! 0,0
//! 3,2
//! ```
//!
//! The header is matched case-insensitively. Blank lines are skipped;
//! every other line must hold exactly two integers. Reading stops at the
//! first bad record, so a source is either loaded whole or rejected.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use smallvec::SmallVec;
use tracing::debug;

use crate::elevators::ElevatorSet;
use crate::error::SourceError;
use crate::grid::TorusGrid;

/// Load an elevator list from a file.
pub fn load_elevator_source(
    path: impl AsRef<Path>,
    grid: TorusGrid,
) -> Result<ElevatorSet, SourceError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let set = read_elevator_source(BufReader::new(file), grid)?;
    debug!(path = %path.display(), elevators = set.len(), "loaded elevator source");
    Ok(set)
}

/// Parse an elevator list held in memory.
pub fn parse_elevator_source(text: &str, grid: TorusGrid) -> Result<ElevatorSet, SourceError> {
    read_elevator_source(text.as_bytes(), grid)
}

/// Read an elevator list from any buffered reader.
pub fn read_elevator_source<R: BufRead>(
    reader: R,
    grid: TorusGrid,
) -> Result<ElevatorSet, SourceError> {
    let mut lines = reader.lines();

    let header = lines
        .next()
        .transpose()
        .map_err(|e| line_error(e, 1))?
        .unwrap_or_default();
    if !is_header(&header) {
        return Err(SourceError::MissingHeader {
            found: header.trim().to_string(),
        });
    }

    let mut set = ElevatorSet::empty(grid);
    for (i, line) in lines.enumerate() {
        let line_no = i + 2;
        let line = line.map_err(|e| line_error(e, line_no))?;
        if line.trim().is_empty() {
            continue;
        }
        let (x, y) = parse_record(&line, line_no)?;
        let cell = grid
            .checked_cell(x, y)
            .map_err(|source| SourceError::InvalidElevator {
                line: line_no,
                source,
            })?;
        set.insert(cell).map_err(|source| SourceError::InvalidElevator {
            line: line_no,
            source,
        })?;
    }
    Ok(set)
}

fn line_error(e: io::Error, line: usize) -> SourceError {
    if e.kind() == io::ErrorKind::InvalidData {
        SourceError::MalformedRecord {
            line,
            detail: "not valid UTF-8".to_string(),
        }
    } else {
        SourceError::Io(e)
    }
}

fn is_header(line: &str) -> bool {
    let fields: SmallVec<[&str; 2]> = line.split(',').map(str::trim).collect();
    fields.len() == 2
        && fields[0].eq_ignore_ascii_case("x")
        && fields[1].eq_ignore_ascii_case("y")
}

fn parse_record(line: &str, line_no: usize) -> Result<(i64, i64), SourceError> {
    let fields: SmallVec<[&str; 2]> = line.split(',').map(str::trim).collect();
    if fields.len() != 2 {
        return Err(SourceError::MalformedRecord {
            line: line_no,
            detail: format!("expected 2 fields, found {}", fields.len()),
        });
    }
    let parse = |token: &str, axis: &str| {
        token
            .parse::<i64>()
            .map_err(|_| SourceError::MalformedRecord {
                line: line_no,
                detail: format!("invalid integer {token:?} for {axis}"),
            })
    };
    Ok((parse(fields[0], "X")?, parse(fields[1], "Y")?))
}

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading the input log.
///
/// All three abort the run before any aggregation happens; this is a
/// single-shot batch tool, so nothing is retried.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("input file '{path}' not found")]
    NotFound { path: String },

    #[error("unable to read input file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("input file '{path}' contains no log data")]
    Empty { path: String },
}

/// Read the log file into an ordered sequence of lines.
///
/// A missing file, an unreadable file, and a file with zero lines are
/// reported as distinct errors so the operator sees the actual cause.
pub fn read_lines(path: &Path) -> Result<Vec<String>, SourceError> {
    let text = fs::read_to_string(path).map_err(|e| {
        let path = path.display().to_string();
        if e.kind() == io::ErrorKind::NotFound {
            SourceError::NotFound { path }
        } else {
            SourceError::Read { path, source: e }
        }
    })?;

    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    if lines.is_empty() {
        return Err(SourceError::Empty {
            path: path.display().to_string(),
        });
    }
    Ok(lines)
}

use protocol::{Cost, EdgeRecord, Weight};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error("read failed at line {line}: {source}")]
    Io {
        line: usize,
        source: std::io::Error,
    },
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("the edge list is empty")]
    Empty,
}

/// Parsed edge list plus the infinity sentinel derived from it.
pub struct EdgeList {
    pub records: Vec<EdgeRecord>,
    /// 1 + sum of all weights, so it exceeds every possible path cost.
    pub infinity: Cost,
}

/// Reads `SRC,DST,WEIGHT` lines from `path`.
///
/// Blank and whitespace-only lines are skipped; the trailing newline on the
/// final line is optional. Every line counts toward the sentinel, duplicate
/// edges included.
pub fn read_edge_list(path: &Path) -> Result<EdgeList, ReadError> {
    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.display().to_string(),
        source,
    })?;

    let mut records = Vec::new();
    let mut infinity: Cost = 1;

    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let number = idx + 1;
        let line = line.map_err(|source| ReadError::Io { line: number, source })?;
        if line.trim().is_empty() {
            continue;
        }

        let record = parse_line(&line).map_err(|reason| ReadError::Malformed {
            line: number,
            reason,
        })?;
        debug!("line {}: {},{},{}", number, record.src, record.dst, record.weight);

        infinity += Cost::from(record.weight);
        records.push(record);
    }

    if records.is_empty() {
        return Err(ReadError::Empty);
    }

    info!("Read {} edge records, sentinel {}", records.len(), infinity);
    Ok(EdgeList { records, infinity })
}

fn parse_line(line: &str) -> Result<EdgeRecord, String> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 3 {
        return Err(format!("expected SRC,DST,WEIGHT, got {} fields", fields.len()));
    }

    let src = single_char(fields[0])
        .ok_or_else(|| format!("vertex name '{}' is not a single character", fields[0].trim()))?;
    let dst = single_char(fields[1])
        .ok_or_else(|| format!("vertex name '{}' is not a single character", fields[1].trim()))?;
    let weight: Weight = fields[2]
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a non-negative integer weight", fields[2].trim()))?;

    Ok(EdgeRecord { src, dst, weight })
}

fn single_char(field: &str) -> Option<char> {
    let mut chars = field.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

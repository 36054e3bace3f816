use log::debug;
use std::fs;
use std::fs::File;
use std::io::Write;
use std::num::ParseFloatError;
use std::path::Path;

/// One parsed line of a results file: a strategy name together with the
/// mean and standard deviation of its tournament scores.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyRecord {
    pub name: String,
    pub mean: f64,
    pub stddev: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed record on line {line}: expected 'name:mean:stddev', got '{content}'")]
    MalformedRecord { line: usize, content: String },

    #[error("invalid {field} on line {line}: {source}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        source: ParseFloatError,
    },

    #[error("the results file contains no records")]
    NoRecords,
}

/// # Record parser
///
/// Splits the raw text into `name:mean:stddev` records, one per non-empty
/// line. Empty lines are skipped explicitly, so the synthetic empty
/// element behind a trailing newline is discarded while a file without
/// the trailing newline still keeps its final record.
pub fn parse_records(text: &str) -> Result<Vec<StrategyRecord>, ReadError> {
    let mut records = Vec::new();
    for (index, line) in text.split('\n').enumerate() {
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(':').collect();
        if fields.len() != 3 {
            return Err(ReadError::MalformedRecord {
                line: index + 1,
                content: line.to_string(),
            });
        }
        let mean = fields[1]
            .parse::<f64>()
            .map_err(|source| ReadError::InvalidNumber {
                line: index + 1,
                field: "mean",
                source,
            })?;
        let stddev = fields[2]
            .parse::<f64>()
            .map_err(|source| ReadError::InvalidNumber {
                line: index + 1,
                field: "stddev",
                source,
            })?;
        records.push(StrategyRecord {
            name: fields[0].to_string(),
            mean,
            stddev,
        });
    }
    if records.is_empty() {
        return Err(ReadError::NoRecords);
    }
    debug!("parsed {} strategy records", records.len());
    Ok(records)
}

/// # File reader
/// * `path` - The location of the results file
pub fn read(path: &Path) -> Result<Vec<StrategyRecord>, ReadError> {
    let text = fs::read_to_string(path)?;
    parse_records(&text)
}

/// # Results saver
/// Formats the records back into the results file format, one
/// `name:mean:stddev` line per record, two decimal places.
#[allow(dead_code)]
pub fn save(records: &[StrategyRecord], path: &Path) -> Result<(), std::io::Error> {
    let mut file = File::create(path)?;
    for record in records {
        writeln!(file, "{}:{:.2}:{:.2}", record.name, record.mean, record.stddev)?;
    }
    Ok(())
}

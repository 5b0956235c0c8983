use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::model::{ResultsTable, Row, Value, REQUIRED_COLUMNS};

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// A results file could not be turned into a [`ResultsTable`].
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("opening {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("reading CSV header: {0}")]
    Header(#[source] csv::Error),
    #[error("CSV is missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("CSV row {row}: {source}")]
    Malformed {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a results table from a comma-delimited file with a header row.
///
/// The header must contain `type`, `size` and `asgs`; extra columns are
/// carried through untouched.
pub fn load_results(path: &Path) -> Result<ResultsTable, DataLoadError> {
    let reader = csv::Reader::from_path(path).map_err(|source| DataLoadError::Open {
        path: path.display().to_string(),
        source,
    })?;
    read_results(reader)
}

/// Parse an already-opened CSV stream. Split out so tests can feed bytes.
pub fn read_results<R: Read>(mut reader: csv::Reader<R>) -> Result<ResultsTable, DataLoadError> {
    let headers: Vec<String> = reader
        .headers()
        .map_err(DataLoadError::Header)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(DataLoadError::MissingColumn(required));
        }
    }

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|source| DataLoadError::Malformed { row: row_no, source })?;

        let mut row = Row::new();
        for (col_idx, cell) in record.iter().enumerate() {
            row.insert(headers[col_idx].clone(), infer_value(cell));
        }
        rows.push(row);
    }

    promote_mixed_numeric_columns(&mut rows, &headers);

    Ok(ResultsTable::new(headers, rows))
}

// ---------------------------------------------------------------------------
// Cell typing
// ---------------------------------------------------------------------------

fn infer_value(s: &str) -> Value {
    let s = s.trim();
    if s.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return Value::Float(f);
    }
    Value::String(s.to_string())
}

/// Give each column a single numeric flavor, the way a dataframe assigns one
/// dtype per column: if a column mixes integers and floats, widen the
/// integers so `1` and `1.0` compare and group as the same value.
fn promote_mixed_numeric_columns(rows: &mut [Row], columns: &[String]) {
    for col in columns {
        let mut has_int = false;
        let mut has_float = false;
        for row in rows.iter() {
            match row.get(col.as_str()) {
                Some(Value::Integer(_)) => has_int = true,
                Some(Value::Float(_)) => has_float = true,
                _ => {}
            }
        }
        if !(has_int && has_float) {
            continue;
        }
        for row in rows.iter_mut() {
            if let Some(v) = row.get_mut(col.as_str()) {
                if let Value::Integer(i) = *v {
                    *v = Value::Float(i as f64);
                }
            }
        }
    }
}

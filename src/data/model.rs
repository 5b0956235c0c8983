use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Column holding the x-axis category (operation-type factor).
pub const TYPE_COLUMN: &str = "type";
/// Column holding the line grouping (size factor).
pub const SIZE_COLUMN: &str = "size";
/// Column holding the y-axis metric (solver assignment count).
pub const ASGS_COLUMN: &str = "asgs";

/// Columns a results file must provide; anything else is carried but ignored.
pub const REQUIRED_COLUMNS: [&str; 3] = [TYPE_COLUMN, SIZE_COLUMN, ASGS_COLUMN];

// ---------------------------------------------------------------------------
// Value – a single cell of the results table
// ---------------------------------------------------------------------------

/// A dynamically-typed CSV cell. Using `BTreeMap` / `BTreeSet` downstream so
/// `Value` must be `Ord`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Null,
}

// -- Manual Eq/Ord so we can put Value in BTreeSet --

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use Value::*;
        fn discriminant(v: &Value) -> u8 {
            match v {
                Null => 0,
                Integer(_) => 1,
                Float(_) => 2,
                String(_) => 3,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (String(a), String(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Null => write!(f, "<null>"),
        }
    }
}

impl Value {
    /// Numeric view of the cell; integers widen to float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Row / ResultsTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// One CSV record: column name → cell value.
pub type Row = BTreeMap<String, Value>;

/// The full parsed results table with a pre-computed unique-value index.
#[derive(Debug, Clone)]
pub struct ResultsTable {
    /// All records, in file order.
    pub rows: Vec<Row>,
    /// Column names in header order.
    pub column_names: Vec<String>,
    /// For each column the sorted set of unique values.
    pub unique_values: BTreeMap<String, BTreeSet<Value>>,
}

impl ResultsTable {
    /// Build the unique-value index from the loaded rows.
    pub fn new(column_names: Vec<String>, rows: Vec<Row>) -> Self {
        let mut unique_values: BTreeMap<String, BTreeSet<Value>> = BTreeMap::new();
        for row in &rows {
            for (col, val) in row {
                unique_values
                    .entry(col.clone())
                    .or_default()
                    .insert(val.clone());
            }
        }
        ResultsTable {
            rows,
            column_names,
            unique_values,
        }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

use super::model::{ResultsTable, Value};

// ---------------------------------------------------------------------------
// Rounding transform
// ---------------------------------------------------------------------------

/// Round a value to `places` decimal places (half away from zero).
pub fn round_to_places(v: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (v * factor).round() / factor
}

/// Round every float cell in every column to `places` decimal places.
///
/// Integer, string and null cells pass through untouched. The result has the
/// same row count and column set as the input.
pub fn round_numeric_columns(table: ResultsTable, places: u32) -> ResultsTable {
    let columns = table.column_names.clone();
    let rows = table
        .rows
        .into_iter()
        .map(|mut row| {
            for val in row.values_mut() {
                if let Value::Float(f) = *val {
                    *val = Value::Float(round_to_places(f, places));
                }
            }
            row
        })
        .collect();
    ResultsTable::new(columns, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_results;

    fn sample_table() -> ResultsTable {
        let data = "type,size,asgs\n\
                    0.1,0.5,1.23456\n\
                    0.2,0.5,2.71828\n\
                    0.1,0.6,3\n";
        read_results(csv::Reader::from_reader(data.as_bytes())).unwrap()
    }

    #[test]
    fn test_round_to_places() {
        assert_eq!(round_to_places(1.23456, 3), 1.235);
        assert_eq!(round_to_places(2.71828, 3), 2.718);
        assert_eq!(round_to_places(-1.23456, 3), -1.235);
        assert_eq!(round_to_places(5.0, 3), 5.0);
    }

    #[test]
    fn test_round_preserves_shape() {
        let table = sample_table();
        let columns = table.column_names.clone();
        let n = table.len();

        let rounded = round_numeric_columns(table, 3);
        assert_eq!(rounded.len(), n);
        assert_eq!(rounded.column_names, columns);
    }

    #[test]
    fn test_round_values() {
        let rounded = round_numeric_columns(sample_table(), 3);
        assert_eq!(rounded.rows[0]["asgs"], Value::Float(1.235));
        assert_eq!(rounded.rows[1]["asgs"], Value::Float(2.718));
        // Integer cells are untouched.
        assert_eq!(rounded.rows[2]["asgs"], Value::Integer(3));
    }

    #[test]
    fn test_round_idempotent() {
        let once = round_numeric_columns(sample_table(), 3);
        let twice = round_numeric_columns(once.clone(), 3);
        for (a, b) in once.rows.iter().zip(twice.rows.iter()) {
            assert_eq!(a, b);
        }
    }
}

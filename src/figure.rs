use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use thiserror::Error;

use crate::color::ColorMap;
use crate::data::model::{ResultsTable, Value, ASGS_COLUMN, SIZE_COLUMN, TYPE_COLUMN};
use crate::theme::Theme;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// A results table could not be turned into a renderable [`Figure`].
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no data rows to plot")]
    EmptyTable,
    #[error("row {row}: column '{column}' is not numeric (got '{value}')")]
    NonNumeric {
        row: usize,
        column: &'static str,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Figure – the fully resolved renderable chart
// ---------------------------------------------------------------------------

/// One line on the chart: all measurements sharing a `size` value.
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub color: Color32,
    /// Points in category-position space: `[category index, mean asgs]`,
    /// ascending by category index.
    pub points: Vec<[f64; 2]>,
}

/// The complete chart, resolved before any window opens.
#[derive(Debug, Clone)]
pub struct Figure {
    /// One series per distinct `size` value, ascending by value.
    pub series: Vec<Series>,
    /// X-axis tick labels; index `i` labels category position `i`.
    pub categories: Vec<String>,
    pub x_label: String,
    pub y_label: String,
    pub theme: Theme,
}

impl Figure {
    /// Group the table into per-`size` series over the distinct `type`
    /// categories, averaging repeated measurements per (`size`, `type`) cell.
    pub fn build(table: &ResultsTable, theme: Theme) -> Result<Self, RenderError> {
        if table.is_empty() {
            return Err(RenderError::EmptyTable);
        }

        let mut category_set: BTreeSet<Value> = BTreeSet::new();
        let mut size_set: BTreeSet<Value> = BTreeSet::new();
        for row in &table.rows {
            category_set.insert(row.get(TYPE_COLUMN).cloned().unwrap_or(Value::Null));
            size_set.insert(row.get(SIZE_COLUMN).cloned().unwrap_or(Value::Null));
        }

        // Distinct categories, ascending, become x positions 0..n.
        let positions: BTreeMap<Value, usize> = category_set
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, v)| (v, i))
            .collect();

        let color_map = ColorMap::new(&size_set);

        // Per size, per category position: running (sum, count) of asgs.
        let mut acc: BTreeMap<Value, BTreeMap<usize, (f64, usize)>> = BTreeMap::new();
        for (row_no, row) in table.rows.iter().enumerate() {
            let asgs = row.get(ASGS_COLUMN).cloned().unwrap_or(Value::Null);
            let y = asgs.as_f64().ok_or_else(|| RenderError::NonNumeric {
                row: row_no,
                column: ASGS_COLUMN,
                value: asgs.to_string(),
            })?;

            let category = row.get(TYPE_COLUMN).cloned().unwrap_or(Value::Null);
            let size = row.get(SIZE_COLUMN).cloned().unwrap_or(Value::Null);

            let cell = acc
                .entry(size)
                .or_default()
                .entry(positions[&category])
                .or_insert((0.0, 0));
            cell.0 += y;
            cell.1 += 1;
        }

        let series: Vec<Series> = acc
            .into_iter()
            .map(|(size, cells)| Series {
                label: size.to_string(),
                color: color_map.color_for(&size),
                points: cells
                    .into_iter()
                    .map(|(pos, (sum, n))| [pos as f64, sum / n as f64])
                    .collect(),
            })
            .collect();

        let categories = category_set.iter().map(|v| v.to_string()).collect();

        Ok(Figure {
            series,
            categories,
            x_label: TYPE_COLUMN.to_string(),
            y_label: ASGS_COLUMN.to_string(),
            theme,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_results;

    fn table_from(data: &str) -> ResultsTable {
        read_results(csv::Reader::from_reader(data.as_bytes())).unwrap()
    }

    #[test]
    fn test_one_series_per_size() {
        let table = table_from(
            "type,size,asgs\n\
             A,small,1.0\n\
             A,large,2.0\n\
             B,small,3.0\n",
        );
        let figure = Figure::build(&table, Theme::ticks()).unwrap();

        assert_eq!(figure.series.len(), 2);
        assert_eq!(figure.categories, vec!["A", "B"]);

        // Series are ordered by size value ("large" < "small").
        let large = &figure.series[0];
        let small = &figure.series[1];
        assert_eq!(large.label, "large");
        assert_eq!(large.points, vec![[0.0, 2.0]]);
        assert_eq!(small.label, "small");
        assert_eq!(small.points, vec![[0.0, 1.0], [1.0, 3.0]]);
    }

    #[test]
    fn test_repeated_measurements_are_averaged() {
        let table = table_from(
            "type,size,asgs\n\
             0.1,0.5,10\n\
             0.1,0.5,20\n",
        );
        let figure = Figure::build(&table, Theme::ticks()).unwrap();

        assert_eq!(figure.series.len(), 1);
        assert_eq!(figure.series[0].points, vec![[0.0, 15.0]]);
    }

    #[test]
    fn test_numeric_categories_sorted_ascending() {
        let table = table_from(
            "type,size,asgs\n\
             0.3,0.5,1\n\
             0.1,0.5,2\n\
             0.2,0.5,3\n",
        );
        let figure = Figure::build(&table, Theme::ticks()).unwrap();

        assert_eq!(figure.categories, vec!["0.1", "0.2", "0.3"]);
        // y values follow the sorted category order, not file order.
        assert_eq!(
            figure.series[0].points,
            vec![[0.0, 2.0], [1.0, 3.0], [2.0, 1.0]]
        );
    }

    #[test]
    fn test_series_colors_distinct() {
        let table = table_from(
            "type,size,asgs\n\
             0.1,0.5,1\n\
             0.1,0.6,2\n\
             0.1,0.7,3\n",
        );
        let figure = Figure::build(&table, Theme::ticks()).unwrap();

        assert_ne!(figure.series[0].color, figure.series[1].color);
        assert_ne!(figure.series[1].color, figure.series[2].color);
        assert_ne!(figure.series[0].color, figure.series[2].color);
    }

    #[test]
    fn test_non_numeric_asgs_rejected() {
        let table = table_from("type,size,asgs\n0.1,0.5,oops\n");
        let err = Figure::build(&table, Theme::ticks()).unwrap_err();
        assert!(matches!(
            err,
            RenderError::NonNumeric { row: 0, column: "asgs", .. }
        ));
    }

    #[test]
    fn test_empty_table_rejected() {
        let table = table_from("type,size,asgs\n");
        let err = Figure::build(&table, Theme::ticks()).unwrap_err();
        assert!(matches!(err, RenderError::EmptyTable));
    }
}

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::analytics::{period_key, AnalyticsPoint, ProgramMetric, RawSheetRow};

pub const MONTHS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

lazy_static! {
    static ref LEADING_INT: Regex = Regex::new(r"^\s*([+-]?\d+)").expect("valid integer pattern");
}

/// Turns one year's rows into monthly points. Implementations own the
/// sheet layout; aggregation and presentation only see the points.
pub trait SheetParser: Send + Sync {
    fn parse_year(&self, year: i32, rows: &[RawSheetRow]) -> Vec<AnalyticsPoint>;
}

/// Reads education enrollment/attendance rows from a sheet whose header row
/// carries month names.
///
/// Only rows whose program label contains "education" and whose metric label
/// contains "enrollment" or "attendance" count. Every other program category
/// is left out of the dashboard figures.
#[derive(Debug, Clone, Copy, Default)]
pub struct EducationEnrollmentParser;

impl SheetParser for EducationEnrollmentParser {
    fn parse_year(&self, year: i32, rows: &[RawSheetRow]) -> Vec<AnalyticsPoint> {
        let Some(header_idx) = find_header_row(rows) else {
            tracing::warn!("Sheet {}: no header row containing 'January', skipping", year);
            return Vec::new();
        };
        let month_cols = month_columns(&rows[header_idx]);
        if month_cols.is_empty() {
            tracing::warn!("Sheet {}: header row has no month columns, skipping", year);
            return Vec::new();
        }

        let mut points: BTreeMap<u32, AnalyticsPoint> = BTreeMap::new();
        let mut qualifying = 0usize;
        for row in &rows[header_idx + 1..] {
            if !is_qualifying(row) {
                continue;
            }
            qualifying += 1;
            for (i, &col) in month_cols.iter().enumerate() {
                let month = i as u32 + 1;
                let value = parse_int(cell(row, col));
                if value > 0 {
                    let point = points
                        .entry(month)
                        .or_insert_with(|| AnalyticsPoint::empty(period_key(year, month)));
                    point.beneficiaries = point.beneficiaries.saturating_add(value);
                    point.programs = point.programs.saturating_add(1);
                }
            }
        }
        tracing::debug!(
            "Sheet {}: {} qualifying rows, {} months with data",
            year,
            qualifying,
            points.len()
        );
        points.into_values().collect()
    }
}

/// Index of the first row with a cell mentioning January.
pub fn find_header_row(rows: &[RawSheetRow]) -> Option<usize> {
    rows.iter().position(is_header_row)
}

pub fn is_header_row(row: &RawSheetRow) -> bool {
    row.iter().any(|c| c.to_lowercase().contains("january"))
}

/// Month column indices in left-to-right order, at most twelve.
pub fn month_columns(header: &RawSheetRow) -> Vec<usize> {
    header
        .iter()
        .enumerate()
        .filter(|(_, c)| {
            let lower = c.to_lowercase();
            MONTHS.iter().any(|m| lower.contains(m))
        })
        .map(|(i, _)| i)
        .take(12)
        .collect()
}

pub fn is_qualifying(row: &RawSheetRow) -> bool {
    let program = cell(row, 0).to_lowercase();
    let metric = cell(row, 1).to_lowercase();
    program.contains("education") && (metric.contains("enrollment") || metric.contains("attendance"))
}

/// Leading integer of a cell (`"12.7"` is 12, `"42 kids"` is 42); anything
/// else is 0.
pub fn parse_int(text: &str) -> i64 {
    LEADING_INT
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .unwrap_or(0)
}

fn cell(row: &RawSheetRow, idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// Yearly totals for every labelled row below the header, any program.
pub fn program_metrics(year: i32, rows: &[RawSheetRow]) -> Vec<ProgramMetric> {
    let Some(header_idx) = find_header_row(rows) else {
        return Vec::new();
    };
    let month_cols = month_columns(&rows[header_idx]);
    rows[header_idx + 1..]
        .iter()
        .filter(|row| !cell(row, 0).trim().is_empty() && !cell(row, 1).trim().is_empty())
        // a later tab of the same year repeats its header
        .filter(|row| !is_header_row(row))
        .map(|row| ProgramMetric {
            year,
            program: cell(row, 0).trim().to_string(),
            metric: cell(row, 1).trim().to_string(),
            total: month_cols
                .iter()
                .map(|&c| parse_int(cell(row, c)).max(0))
                .fold(0i64, i64::saturating_add),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> RawSheetRow {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn parse_int_behaves_like_leading_integer() {
        assert_eq!(parse_int("42"), 42);
        assert_eq!(parse_int(" 17 students"), 17);
        assert_eq!(parse_int("12.9"), 12);
        assert_eq!(parse_int("-3"), -3);
        assert_eq!(parse_int(""), 0);
        assert_eq!(parse_int("n/a"), 0);
    }

    #[test]
    fn header_is_first_row_mentioning_january() {
        let rows = vec![
            row(&["Shomajgori Foundation monthly report"]),
            row(&["Program", "Metric", "JANUARY 2025", "February 2025"]),
            row(&["Education", "Enrollment", "january", "x"]),
        ];
        assert_eq!(find_header_row(&rows), Some(1));
    }

    #[test]
    fn month_columns_skip_other_cells_and_cap_at_twelve() {
        let header = row(&["Program", "Metric", "Jan", "January", "Notes", "February"]);
        assert_eq!(month_columns(&header), vec![3, 5]);

        let mut many = vec!["Program".to_string()];
        for _ in 0..2 {
            many.extend(MONTHS.iter().map(|m| m.to_string()));
        }
        let cols = month_columns(&many);
        assert_eq!(cols.len(), 12);
        assert_eq!(cols[11], 12);
    }

    #[test]
    fn qualifying_filter_is_narrow() {
        assert!(is_qualifying(&row(&["Pre-school Education", "Daily Attendance"])));
        assert!(is_qualifying(&row(&["EDUCATION", "enrollment (new)"])));
        assert!(!is_qualifying(&row(&["Health camp", "Attendance"])));
        assert!(!is_qualifying(&row(&["Education", "Books distributed"])));
        assert!(!is_qualifying(&row(&["Education"])));
    }

    #[test]
    fn rows_above_header_are_ignored() {
        let rows = vec![
            row(&["Education", "Enrollment", "99"]),
            row(&["Program", "Metric", "January"]),
            row(&["Education", "Enrollment", "10"]),
        ];
        let points = EducationEnrollmentParser.parse_year(2025, &rows);
        assert_eq!(points, vec![AnalyticsPoint::new("2025-01", 10, 1, 0, 0)]);
    }

    #[test]
    fn zero_and_negative_cells_do_not_create_points() {
        let rows = vec![
            row(&["Program", "Metric", "January", "February", "March"]),
            row(&["Education", "Attendance", "0", "-4", "abc"]),
        ];
        assert!(EducationEnrollmentParser.parse_year(2025, &rows).is_empty());
    }

    #[test]
    fn huge_cells_saturate_instead_of_overflowing() {
        let rows = vec![
            row(&["Program", "Metric", "January", "February"]),
            row(&["Education", "Enrollment", "9000000000000000000", "9000000000000000000"]),
            row(&["Education", "Attendance", "9000000000000000000", "1"]),
        ];
        let points = EducationEnrollmentParser.parse_year(2025, &rows);
        assert_eq!(points[0], AnalyticsPoint::new("2025-01", i64::MAX, 2, 0, 0));
        assert_eq!(points[1].beneficiaries, 9000000000000000001);
        assert_eq!(program_metrics(2025, &rows)[0].total, i64::MAX);
    }

    #[test]
    fn program_metrics_cover_every_category() {
        let rows = vec![
            row(&["Program", "Metric", "January", "February"]),
            row(&["Education", "Enrollment", "10", "12"]),
            row(&["Health", "Patients", "30", ""]),
            row(&["", "", "5"]),
        ];
        let metrics = program_metrics(2024, &rows);
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0].total, 22);
        assert_eq!(metrics[1].program, "Health");
        assert_eq!(metrics[1].total, 30);
    }
}

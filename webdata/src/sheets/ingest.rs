use std::collections::BTreeMap;
use std::future::Future;

use lazy_static::lazy_static;

use crate::models::analytics::{
    AnalyticsLoad, AnalyticsPoint, CumulativeStats, DataSource, ProgramMetric, RawSheetRow,
};
use crate::models::config::SheetTab;
use crate::sheets::error::FetchError;
use crate::sheets::parser::{self, EducationEnrollmentParser, SheetParser};
use crate::sheets::report::TabReport;

lazy_static! {
    static ref MOCK_2024: Vec<AnalyticsPoint> = vec![
        AnalyticsPoint::new("2024-01", 45, 3, 12500, 12),
        AnalyticsPoint::new("2024-02", 52, 4, 15200, 15),
        AnalyticsPoint::new("2024-03", 48, 3, 11800, 13),
        AnalyticsPoint::new("2024-04", 61, 5, 18900, 18),
        AnalyticsPoint::new("2024-05", 58, 4, 16700, 16),
        AnalyticsPoint::new("2024-06", 67, 6, 22100, 20),
        AnalyticsPoint::new("2024-07", 72, 5, 19800, 19),
        AnalyticsPoint::new("2024-08", 78, 7, 25600, 22),
        AnalyticsPoint::new("2024-09", 85, 6, 23400, 21),
        AnalyticsPoint::new("2024-10", 92, 8, 28900, 25),
        AnalyticsPoint::new("2024-11", 88, 7, 26700, 23),
        AnalyticsPoint::new("2024-12", 95, 9, 31200, 28),
    ];
}

/// Rows of every configured year, keyed by year.
pub type YearSheets = BTreeMap<i32, Vec<RawSheetRow>>;

/// Appends a tab's rows under its year. Tabs sharing a year are read as one
/// sheet laid out by the first tab's header row.
pub fn add_tab(sheets: &mut YearSheets, year: i32, rows: Vec<RawSheetRow>) {
    sheets.entry(year).or_default().extend(rows);
}

/// Fetches every tab with `fetch`. A failing tab is logged and skipped;
/// the result is an error only when no tab could be read.
pub async fn collect_tabs<F, Fut>(
    tabs: &[SheetTab],
    mut fetch: F,
) -> Result<(YearSheets, Vec<TabReport>), FetchError>
where
    F: FnMut(SheetTab) -> Fut,
    Fut: Future<Output = Result<Vec<RawSheetRow>, FetchError>>,
{
    let mut sheets = YearSheets::new();
    let mut reports = Vec::new();
    let mut last_err = None;
    for tab in tabs {
        match fetch(tab.clone()).await {
            Ok(rows) => {
                tracing::info!("Sheet {}: {} rows", tab.name(), rows.len());
                reports.push(TabReport::new(&tab.name(), &rows));
                add_tab(&mut sheets, tab.year, rows);
            }
            Err(e) => {
                tracing::error!("Failed to fetch sheet {}: {}", tab.name(), e);
                last_err = Some(e);
            }
        }
    }
    match (sheets.is_empty(), last_err) {
        (true, Some(e)) => Err(e),
        _ => Ok((sheets, reports)),
    }
}

/// The fixed 2024 series shown whenever live data is unavailable.
pub fn mock_data() -> Vec<AnalyticsPoint> {
    MOCK_2024.clone()
}

/// Parses every year with `parser`, then orders the points by calendar month.
/// Returns an empty vector when nothing qualified.
pub fn parse_sheets<P: SheetParser + ?Sized>(parser: &P, sheets: &YearSheets) -> Vec<AnalyticsPoint> {
    let mut points: Vec<AnalyticsPoint> = sheets
        .iter()
        .flat_map(|(year, rows)| parser.parse_year(*year, rows))
        .collect();
    points.sort_by_key(|p| p.period_date());
    points
}

pub fn try_ingest_with<P: SheetParser + ?Sized>(
    parser: &P,
    sheets: &YearSheets,
) -> Result<Vec<AnalyticsPoint>, FetchError> {
    let points = parse_sheets(parser, sheets);
    if points.is_empty() {
        Err(FetchError::NoData)
    } else {
        Ok(points)
    }
}

pub fn try_ingest(sheets: &YearSheets) -> Result<Vec<AnalyticsPoint>, FetchError> {
    try_ingest_with(&EducationEnrollmentParser, sheets)
}

/// Sheets in, dashboard points out; falls back to [`mock_data`] when no
/// year yields anything.
pub fn ingest(sheets: &YearSheets) -> Vec<AnalyticsPoint> {
    resolve(try_ingest(sheets)).points
}

/// Substitutes the fallback dataset for any error, remembering why.
pub fn resolve(result: Result<Vec<AnalyticsPoint>, FetchError>) -> AnalyticsLoad {
    match result {
        Ok(points) => AnalyticsLoad { points, source: DataSource::Live },
        Err(e) => {
            tracing::warn!("Using mock analytics data: {}", e);
            AnalyticsLoad {
                points: mock_data(),
                source: DataSource::Fallback(e.to_string()),
            }
        }
    }
}

pub fn aggregate(points: &[AnalyticsPoint]) -> CumulativeStats {
    let mut stats = CumulativeStats::default();
    for p in points {
        stats.total_beneficiaries = stats.total_beneficiaries.saturating_add(p.beneficiaries);
        stats.total_programs = stats.total_programs.saturating_add(p.programs);
        stats.total_donations = stats.total_donations.saturating_add(p.donations);
        stats.total_volunteers = stats.total_volunteers.saturating_add(p.volunteers);
    }
    stats.monthly_growth = monthly_growth(points);
    stats
}

/// Last three months against the three before them, in percent.
fn monthly_growth(points: &[AnalyticsPoint]) -> f64 {
    let n = points.len();
    if n < 6 {
        return 0.0;
    }
    let mean = |slice: &[AnalyticsPoint]| {
        slice.iter().map(|p| p.beneficiaries as f64).sum::<f64>() / 3.0
    };
    let avg_recent = mean(&points[n - 3..]);
    let avg_older = mean(&points[n - 6..n - 3]);
    if avg_older > 0.0 {
        (avg_recent - avg_older) / avg_older * 100.0
    } else {
        0.0
    }
}

pub fn program_metrics(sheets: &YearSheets) -> Vec<ProgramMetric> {
    sheets
        .iter()
        .flat_map(|(year, rows)| parser::program_metrics(*year, rows))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(period: &str, beneficiaries: i64) -> AnalyticsPoint {
        AnalyticsPoint::new(period, beneficiaries, 1, 0, 0)
    }

    #[test]
    fn mock_series_is_twelve_months_of_2024() {
        let data = mock_data();
        assert_eq!(data.len(), 12);
        assert_eq!(data[0], AnalyticsPoint::new("2024-01", 45, 3, 12500, 12));
        assert_eq!(data[11], AnalyticsPoint::new("2024-12", 95, 9, 31200, 28));
        assert_eq!(mock_data(), data);
    }

    #[test]
    fn empty_input_falls_back() {
        assert_eq!(ingest(&YearSheets::new()), mock_data());
        assert_eq!(try_ingest(&YearSheets::new()), Err(FetchError::NoData));
    }

    fn row(cells: &[&str]) -> RawSheetRow {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn half_year(value: &str) -> Vec<RawSheetRow> {
        vec![
            row(&["Program", "Metric", "January", "February"]),
            row(&["Education", "Enrollment", value, value]),
        ]
    }

    #[tokio::test]
    async fn tabs_sharing_a_year_are_both_counted() {
        let tabs = vec![
            SheetTab { year: 2025, name: "FY 2025 H1".to_string() },
            SheetTab { year: 2025, name: "FY 2025 H2".to_string() },
        ];
        let (sheets, reports) = collect_tabs(&tabs, |tab| async move {
            Ok::<_, FetchError>(half_year(if tab.name.ends_with("H1") { "10" } else { "5" }))
        })
        .await
        .unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(sheets[&2025].len(), 4);
        assert_eq!(
            try_ingest(&sheets).unwrap(),
            vec![
                AnalyticsPoint::new("2025-01", 15, 2, 0, 0),
                AnalyticsPoint::new("2025-02", 15, 2, 0, 0),
            ]
        );
    }

    #[tokio::test]
    async fn failing_tab_is_skipped_unless_all_fail() {
        let tabs = vec![SheetTab::new(2024), SheetTab::new(2025)];
        let (sheets, reports) = collect_tabs(&tabs, |tab| async move {
            if tab.year == 2024 {
                Err(FetchError::Status { tab: tab.name(), status: 404 })
            } else {
                Ok(half_year("3"))
            }
        })
        .await
        .unwrap();
        assert_eq!(sheets.keys().copied().collect::<Vec<_>>(), vec![2025]);
        assert_eq!(reports[0].tab, "2025");

        let all_fail = collect_tabs(&tabs, |_| async {
            Err::<Vec<RawSheetRow>, _>(FetchError::Network("down".to_string()))
        }).await;
        assert_eq!(all_fail, Err(FetchError::Network("down".to_string())));
    }

    #[test]
    fn aggregate_of_nothing_is_zero() {
        assert_eq!(aggregate(&[]), CumulativeStats::default());
    }

    #[test]
    fn totals_saturate_on_huge_values() {
        let stats = aggregate(&[point("2025-01", i64::MAX), point("2025-02", 1)]);
        assert_eq!(stats.total_beneficiaries, i64::MAX);
        assert_eq!(stats.total_programs, 2);
    }

    #[test]
    fn growth_doubles() {
        let points: Vec<_> = [40, 50, 60, 90, 100, 110]
            .iter()
            .enumerate()
            .map(|(i, b)| point(&format!("2025-{:02}", i + 1), *b))
            .collect();
        let stats = aggregate(&points);
        assert_eq!(stats.total_beneficiaries, 450);
        assert_eq!(stats.total_programs, 6);
        assert!((stats.monthly_growth - 100.0).abs() < 1e-9);
    }

    #[test]
    fn growth_needs_six_points() {
        let points: Vec<_> = (1..=5).map(|m| point(&format!("2025-{:02}", m), m * 10)).collect();
        assert_eq!(aggregate(&points).monthly_growth, 0.0);
    }

    #[test]
    fn growth_is_zero_when_older_months_are_empty() {
        let points: Vec<_> = [0, 0, 0, 5, 6, 7]
            .iter()
            .enumerate()
            .map(|(i, b)| point(&format!("2025-{:02}", i + 1), *b))
            .collect();
        assert_eq!(aggregate(&points).monthly_growth, 0.0);
    }

    #[test]
    fn growth_can_be_negative() {
        let points: Vec<_> = [100, 100, 100, 50, 50, 50]
            .iter()
            .enumerate()
            .map(|(i, b)| point(&format!("2025-{:02}", i + 1), *b))
            .collect();
        assert!((aggregate(&points).monthly_growth + 50.0).abs() < 1e-9);
    }

    #[test]
    fn mock_totals() {
        let stats = aggregate(&mock_data());
        assert_eq!(stats.total_beneficiaries, 841);
        assert_eq!(stats.total_programs, 67);
        assert_eq!(stats.total_donations, 252800);
        assert_eq!(stats.total_volunteers, 232);
        // Oct-Dec average 91.67 against Jul-Sep average 78.33
        assert!((stats.monthly_growth - 17.021276595744681).abs() < 1e-9);
    }
}

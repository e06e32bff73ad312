use webdata::models::analytics::{AnalyticsPoint, DataSource, RawSheetRow};
use webdata::models::config::{SheetTab, SheetsConfig};
use webdata::sheets::client::SheetsClient;
use webdata::sheets::ingest::{aggregate, ingest, mock_data, try_ingest, YearSheets};
use webdata::sheets::FetchError;

fn row(cells: &[&str]) -> RawSheetRow {
    cells.iter().map(|c| c.to_string()).collect()
}

fn header() -> RawSheetRow {
    let mut cells = vec!["Program", "Metric"];
    cells.extend([
        "January", "February", "March", "April", "May", "June",
        "July", "August", "September", "October", "November", "December",
    ]);
    row(&cells)
}

#[test]
fn qualifying_rows_sum_per_month() {
    let mut sheets = YearSheets::new();
    sheets.insert(
        2025,
        vec![
            row(&["Shomajgori Foundation 2025"]),
            header(),
            row(&["Education", "Preschool Enrollment", "40", "0", "12"]),
            row(&["Education", "Daily Attendance", "35", "30"]),
            row(&["Health", "Camp Attendance", "99", "99", "99"]),
            row(&["Education", "Books distributed", "500"]),
        ],
    );
    let points = try_ingest(&sheets).unwrap();
    assert_eq!(
        points,
        vec![
            AnalyticsPoint::new("2025-01", 75, 2, 0, 0),
            AnalyticsPoint::new("2025-02", 30, 1, 0, 0),
            AnalyticsPoint::new("2025-03", 12, 1, 0, 0),
        ]
    );
}

#[test]
fn year_without_header_is_skipped() {
    let mut sheets = YearSheets::new();
    sheets.insert(2024, vec![row(&["Education", "Enrollment", "10"])]);
    sheets.insert(2025, vec![header(), row(&["Education", "Enrollment", "7"])]);
    let points = try_ingest(&sheets).unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].period, "2025-01");
}

#[test]
fn nothing_qualifying_falls_back_to_mock() {
    let mut sheets = YearSheets::new();
    sheets.insert(2024, vec![row(&["no header here"])]);
    assert!(matches!(try_ingest(&sheets), Err(FetchError::NoData)));
    assert_eq!(ingest(&sheets), mock_data());
}

#[test]
fn points_are_ordered_across_years() {
    let mut sheets = YearSheets::new();
    sheets.insert(2025, vec![header(), row(&["Education", "Enrollment", "5"])]);
    sheets.insert(2024, vec![header(), row(&["Education", "Enrollment", "", "", "", "", "", "", "", "", "", "", "", "8"])]);
    let periods: Vec<String> = try_ingest(&sheets).unwrap().into_iter().map(|p| p.period).collect();
    assert_eq!(periods, vec!["2024-12", "2025-01"]);
}

#[test]
fn growth_compares_last_two_quarters() {
    let points: Vec<AnalyticsPoint> = [50, 50, 50, 100, 100, 100]
        .iter()
        .enumerate()
        .map(|(i, &b)| AnalyticsPoint::new(&format!("2025-{:02}", i + 1), b, 1, 0, 0))
        .collect();
    assert_eq!(aggregate(&points).monthly_growth, 100.0);
    assert_eq!(aggregate(&[]).monthly_growth, 0.0);
    assert_eq!(aggregate(&[]).total_beneficiaries, 0);
}

#[tokio::test]
async fn unreachable_api_shows_mock_series() {
    let config = SheetsConfig {
        base_url: "http://127.0.0.1:1/v4/spreadsheets".to_string(),
        tabs: vec![SheetTab::new(2024), SheetTab::new(2025)],
        ..SheetsConfig::default()
    }
    .with_api_key(Some("test-key"));
    let load = SheetsClient::new(config).load().await;
    assert_eq!(load.points, mock_data());
    assert!(matches!(load.source, DataSource::Fallback(_)));
}

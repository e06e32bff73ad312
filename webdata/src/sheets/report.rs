use serde::{Deserialize, Serialize};

use crate::models::analytics::{CumulativeStats, RawSheetRow};
use crate::sheets::error::FetchError;
use crate::sheets::ingest::{aggregate, parse_sheets, program_metrics, YearSheets};
use crate::sheets::parser::EducationEnrollmentParser;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabReport {
    pub tab: String,
    pub rows: usize,
    pub headers: Vec<String>,
}

impl TabReport {
    pub fn new(tab: &str, rows: &[RawSheetRow]) -> Self {
        Self {
            tab: tab.to_string(),
            rows: rows.len(),
            headers: rows.first().map(|r| r.iter().take(5).cloned().collect()).unwrap_or_default(),
        }
    }
}

/// Outcome of the manual "test integration" action. This is the only place
/// a fetch problem becomes visible to a visitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationReport {
    pub success: bool,
    pub analytics_records: usize,
    pub program_metrics: usize,
    pub tabs: Vec<TabReport>,
    pub summary: CumulativeStats,
    pub error: Option<String>,
}

impl IntegrationReport {
    pub fn from_sheets(tabs: Vec<TabReport>, sheets: &YearSheets) -> Self {
        let points = parse_sheets(&EducationEnrollmentParser, sheets);
        Self {
            success: true,
            analytics_records: points.len(),
            program_metrics: program_metrics(sheets).len(),
            tabs,
            summary: aggregate(&points),
            error: None,
        }
    }

    pub fn failed(err: &FetchError) -> Self {
        Self {
            success: false,
            analytics_records: 0,
            program_metrics: 0,
            tabs: Vec::new(),
            summary: CumulativeStats::default(),
            error: Some(err.to_string()),
        }
    }

    pub fn status_line(&self) -> String {
        if self.success {
            format!(
                "✅ Success! Found {} analytics records and {} program metrics.",
                self.analytics_records, self.program_metrics
            )
        } else {
            format!("❌ Error: {}", self.error.as_deref().unwrap_or("Unknown error"))
        }
    }
}

pub struct SetupInstructions {
    pub steps: [&'static str; 7],
    pub note: &'static str,
}

pub fn setup_instructions() -> SetupInstructions {
    SetupInstructions {
        steps: [
            "1. Go to Google Cloud Console (console.cloud.google.com)",
            "2. Create a new project or select existing one",
            "3. Enable Google Sheets API",
            "4. Create credentials (API Key)",
            "5. Add the API key to your .env file as GOOGLE_SHEETS_API_KEY",
            "6. Make sure your Google Sheet is publicly readable or shared with the API key",
            "7. Add one tab per reporting year (e.g. 2024, 2025) with month names in the header row",
        ],
        note: "Each tab needs a header row with January..December columns; column A holds the program, column B the metric",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> RawSheetRow {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn status_line_reports_counts() {
        let rows = vec![
            row(&["Program", "Metric", "January", "February"]),
            row(&["Education", "Enrollment", "20", "25"]),
            row(&["Health", "Checkups", "8", "9"]),
        ];
        let mut sheets = YearSheets::new();
        sheets.insert(2025, rows.clone());
        let report = IntegrationReport::from_sheets(vec![TabReport::new("2025", &rows)], &sheets);
        assert_eq!(report.analytics_records, 2);
        assert_eq!(report.program_metrics, 2);
        assert_eq!(report.summary.total_beneficiaries, 45);
        assert_eq!(report.tabs[0].headers, vec!["Program", "Metric", "January", "February"]);
        assert_eq!(report.status_line(), "✅ Success! Found 2 analytics records and 2 program metrics.");
    }

    #[test]
    fn failure_status_line() {
        let report = IntegrationReport::failed(&FetchError::MissingApiKey);
        assert!(!report.success);
        assert_eq!(report.status_line(), "❌ Error: Google Sheets API key not configured");
    }
}

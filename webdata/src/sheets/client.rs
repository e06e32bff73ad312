use std::time::Duration;

use reqwest::Client;

use crate::models::analytics::{AnalyticsLoad, AnalyticsPoint, RawSheetRow};
use crate::models::config::{SheetTab, SheetsConfig};
use crate::models::sheet_values::SheetValues;
use crate::sheets::error::FetchError;
use crate::sheets::ingest::{collect_tabs, resolve, try_ingest_with, YearSheets};
use crate::sheets::parser::{EducationEnrollmentParser, SheetParser};
use crate::sheets::report::{IntegrationReport, TabReport};

/// Reads the yearly tabs of the reporting spreadsheet.
#[derive(Clone)]
pub struct SheetsClient {
    http: Client,
    config: SheetsConfig,
}

impl SheetsClient {
    pub fn new(config: SheetsConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { http, config }
    }

    pub fn config(&self) -> &SheetsConfig {
        &self.config
    }

    pub async fn fetch_tab(&self, tab: &SheetTab) -> Result<Vec<RawSheetRow>, FetchError> {
        let url = self.config.values_url(tab).ok_or(FetchError::MissingApiKey)?;
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(FetchError::Status { tab: tab.name(), status: resp.status().as_u16() });
        }
        let values = resp
            .json::<SheetValues>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(values.into_rows())
    }

    /// Fetches every configured tab; see [`collect_tabs`].
    pub async fn fetch_sheets(&self) -> Result<(YearSheets, Vec<TabReport>), FetchError> {
        if !self.config.has_api_key() {
            return Err(FetchError::MissingApiKey);
        }
        collect_tabs(&self.config.tabs, |tab| async move { self.fetch_tab(&tab).await }).await
    }

    pub async fn fetch_analytics_with<P: SheetParser + ?Sized>(
        &self,
        parser: &P,
    ) -> Result<Vec<AnalyticsPoint>, FetchError> {
        let (sheets, _) = self.fetch_sheets().await?;
        try_ingest_with(parser, &sheets)
    }

    pub async fn fetch_analytics(&self) -> Result<Vec<AnalyticsPoint>, FetchError> {
        self.fetch_analytics_with(&EducationEnrollmentParser).await
    }

    /// One fetch cycle with the fallback dataset substituted on failure.
    pub async fn load(&self) -> AnalyticsLoad {
        resolve(self.fetch_analytics().await)
    }

    pub async fn test_integration(&self) -> IntegrationReport {
        match self.fetch_sheets().await {
            Ok((sheets, tabs)) => IntegrationReport::from_sheets(tabs, &sheets),
            Err(e) => {
                tracing::error!("Google Sheets integration test failed: {}", e);
                IntegrationReport::failed(&e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analytics::DataSource;
    use crate::sheets::ingest::mock_data;
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    async fn values(Path((_id, range)): Path<(String, String)>) -> Response {
        if range.contains("2025") {
            Json(json!({
                "range": range,
                "majorDimension": "ROWS",
                "values": [
                    ["Program", "Metric", "January", "February"],
                    ["Education", "Enrollment", 30, 35],
                    ["Education", "Attendance", 20, "n/a"],
                    ["Health", "Patients", 50, 40]
                ]
            }))
            .into_response()
        } else {
            StatusCode::BAD_REQUEST.into_response()
        }
    }

    async fn serve() -> String {
        let app = Router::new().route("/v4/spreadsheets/{id}/values/{range}", get(values));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/v4/spreadsheets", addr)
    }

    fn config(base_url: String, years: &[i32]) -> SheetsConfig {
        SheetsConfig {
            base_url,
            tabs: years.iter().map(|y| SheetTab::new(*y)).collect(),
            ..SheetsConfig::default()
        }
        .with_api_key(Some("test-key"))
    }

    #[tokio::test]
    async fn missing_key_skips_network() {
        let client = SheetsClient::new(SheetsConfig::default());
        assert_eq!(client.fetch_analytics().await, Err(FetchError::MissingApiKey));
        let load = client.load().await;
        assert_eq!(load.points, mock_data());
        assert!(load.is_degraded());
    }

    #[tokio::test]
    async fn network_failure_degrades_to_mock() {
        let client = SheetsClient::new(config("http://127.0.0.1:1/v4/spreadsheets".to_string(), &[2025]));
        assert!(matches!(client.fetch_analytics().await, Err(FetchError::Network(_))));
        let load = client.load().await;
        assert_eq!(load.points, mock_data());
        assert!(matches!(load.source, DataSource::Fallback(_)));
    }

    #[tokio::test]
    async fn live_sheet_is_ingested_and_failing_tab_skipped() {
        let base = serve().await;
        let client = SheetsClient::new(config(base, &[2024, 2025]));
        let load = client.load().await;
        assert_eq!(load.source, DataSource::Live);
        assert_eq!(
            load.points,
            vec![
                AnalyticsPoint::new("2025-01", 50, 2, 0, 0),
                AnalyticsPoint::new("2025-02", 35, 1, 0, 0),
            ]
        );
    }

    #[tokio::test]
    async fn duplicate_year_tabs_add_up() {
        let base = serve().await;
        let client = SheetsClient::new(config(base, &[2025, 2025]));
        let load = client.load().await;
        assert_eq!(
            load.points,
            vec![
                AnalyticsPoint::new("2025-01", 100, 4, 0, 0),
                AnalyticsPoint::new("2025-02", 70, 2, 0, 0),
            ]
        );
        let (sheets, _) = client.fetch_sheets().await.unwrap();
        let totals: Vec<i64> = crate::sheets::ingest::program_metrics(&sheets).iter().map(|m| m.total).collect();
        assert_eq!(totals, vec![65, 20, 90, 65, 20, 90]);
    }

    #[tokio::test]
    async fn all_tabs_failing_reports_status() {
        let base = serve().await;
        let client = SheetsClient::new(config(base, &[2024]));
        assert_eq!(
            client.fetch_analytics().await,
            Err(FetchError::Status { tab: "2024".to_string(), status: 400 })
        );
        let report = client.test_integration().await;
        assert!(!report.success);
        assert_eq!(report.status_line(), "❌ Error: sheet '2024' returned HTTP 400");
    }

    #[tokio::test]
    async fn integration_report_counts_metrics() {
        let base = serve().await;
        let client = SheetsClient::new(config(base, &[2025]));
        let report = client.test_integration().await;
        assert!(report.success);
        assert_eq!(report.analytics_records, 2);
        assert_eq!(report.program_metrics, 3);
        assert_eq!(report.tabs[0].rows, 4);
    }
}

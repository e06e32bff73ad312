use gloo_net::http::Request;
use webdata::models::analytics::{AnalyticsLoad, AnalyticsPoint, RawSheetRow};
use webdata::models::config::{SheetTab, SheetsConfig};
use webdata::models::sheet_values::SheetValues;
use webdata::sheets::ingest::{collect_tabs, resolve, try_ingest};
use webdata::sheets::report::{IntegrationReport, TabReport};
use webdata::sheets::{FetchError, YearSheets};

/// Spreadsheet settings baked in at build time.
pub fn sheets_config() -> SheetsConfig {
    SheetsConfig::default().with_api_key(option_env!("GOOGLE_SHEETS_API_KEY"))
}

pub async fn fetch_tab(config: &SheetsConfig, tab: &SheetTab) -> Result<Vec<RawSheetRow>, FetchError> {
    let url = config.values_url(tab).ok_or(FetchError::MissingApiKey)?;

    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(format!("{e:?}")))?;

    if !resp.ok() {
        return Err(FetchError::Status { tab: tab.name(), status: resp.status() });
    }

    resp.json::<SheetValues>()
        .await
        .map(SheetValues::into_rows)
        .map_err(|e| FetchError::Decode(format!("{e:?}")))
}

/// Every configured tab; a failing tab is skipped unless all of them fail.
pub async fn fetch_sheets(config: &SheetsConfig) -> Result<(YearSheets, Vec<TabReport>), FetchError> {
    if !config.has_api_key() {
        return Err(FetchError::MissingApiKey);
    }
    collect_tabs(&config.tabs, |tab| async move {
        let result = fetch_tab(config, &tab).await;
        if let Err(e) = &result {
            leptos::logging::error!("Failed to fetch sheet {}: {}", tab.name(), e);
        }
        result
    })
    .await
}

pub async fn fetch_analytics() -> Result<Vec<AnalyticsPoint>, FetchError> {
    let (sheets, _) = fetch_sheets(&sheets_config()).await?;
    try_ingest(&sheets)
}

/// Never fails: errors are logged and replaced by the sample series.
pub async fn load_analytics() -> AnalyticsLoad {
    let result = fetch_analytics().await;
    if let Err(e) = &result {
        leptos::logging::warn!("Google Sheets unavailable, using sample data: {}", e);
    }
    resolve(result)
}

pub async fn test_integration() -> IntegrationReport {
    match fetch_sheets(&sheets_config()).await {
        Ok((sheets, tabs)) => IntegrationReport::from_sheets(tabs, &sheets),
        Err(e) => IntegrationReport::failed(&e),
    }
}

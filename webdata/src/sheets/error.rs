use thiserror::Error;

/// Why a fetch cycle produced no live data. Callers substitute the
/// fallback dataset on any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Google Sheets API key not configured")]
    MissingApiKey,
    #[error("network error: {0}")]
    Network(String),
    #[error("sheet '{tab}' returned HTTP {status}")]
    Status { tab: String, status: u16 },
    #[error("could not decode sheet response: {0}")]
    Decode(String),
    #[error("no qualifying rows in any sheet")]
    NoData,
}

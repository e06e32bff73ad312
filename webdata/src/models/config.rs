use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

pub const SPREADSHEET_ID: &str = "1XTKAYoCk7MHTAYh5ot55LzoLzS5XBWDp";
pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
pub const API_KEY_ENV: &str = "GOOGLE_SHEETS_API_KEY";

/// One yearly tab of the reporting spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetTab {
    pub year: i32,
    #[serde(default)]
    pub name: String,
}

impl SheetTab {
    pub fn new(year: i32) -> Self {
        Self { year, name: year.to_string() }
    }

    pub fn name(&self) -> String {
        if self.name.is_empty() {
            self.year.to_string()
        } else {
            self.name.clone()
        }
    }

    /// Quoted A1 sheet reference. Numeric tab names must be quoted.
    pub fn a1_name(&self) -> String {
        format!("'{}'", self.name().replace('\'', "''"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetsConfig {
    #[serde(default = "default_spreadsheet_id")]
    pub spreadsheet_id: String,
    #[serde(default = "default_tabs")]
    pub tabs: Vec<SheetTab>,
    #[serde(default = "default_range")]
    pub range: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: default_spreadsheet_id(),
            tabs: default_tabs(),
            range: default_range(),
            api_key: None,
            base_url: default_base_url(),
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

impl SheetsConfig {
    pub fn with_api_key(mut self, key: Option<&str>) -> Self {
        self.api_key = key.map(str::trim).filter(|k| !k.is_empty()).map(str::to_string);
        self
    }

    /// Reads a YAML config; a missing file yields the built-in defaults.
    /// Environment variables take precedence over the file.
    pub fn read_config(path: &str) -> Result<SheetsConfig> {
        let mut config = if Path::new(path).exists() {
            let file = File::open(path).with_context(|| format!("Failed to open config {}", path))?;
            serde_yaml::from_reader(file).with_context(|| format!("Failed to parse config {}", path))?
        } else {
            tracing::debug!("Config {} not found, using defaults", path);
            SheetsConfig::default()
        };
        config.apply_env();
        Ok(config)
    }

    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.api_key = Some(key.trim().to_string());
            }
        }
        if let Ok(id) = std::env::var("SHEETS_SPREADSHEET_ID") {
            if !id.trim().is_empty() {
                self.spreadsheet_id = id.trim().to_string();
            }
        }
        if let Ok(tabs) = std::env::var("SHEETS_TABS") {
            let parsed: Vec<SheetTab> = tabs
                .split(',')
                .filter_map(|t| t.trim().parse::<i32>().ok())
                .map(SheetTab::new)
                .collect();
            if !parsed.is_empty() {
                self.tabs = parsed;
            }
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().map_or(false, |k| !k.is_empty())
    }

    /// `values` endpoint for one tab, `None` without an API key.
    pub fn values_url(&self, tab: &SheetTab) -> Option<String> {
        let key = self.api_key.as_deref().filter(|k| !k.is_empty())?;
        let mut url = Url::parse(&self.base_url).ok()?;
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .push(&self.spreadsheet_id)
            .push("values")
            .push(&format!("{}!{}", tab.a1_name(), self.range));
        url.query_pairs_mut()
            .append_pair("key", key)
            .append_pair("valueRenderOption", "UNFORMATTED_VALUE");
        Some(url.to_string())
    }
}

fn default_spreadsheet_id() -> String {
    SPREADSHEET_ID.to_string()
}

fn default_tabs() -> Vec<SheetTab> {
    vec![SheetTab::new(2024), SheetTab::new(2025)]
}

fn default_range() -> String {
    "A:AB".to_string()
}

fn default_base_url() -> String {
    SHEETS_API_BASE.to_string()
}

fn default_poll_interval_secs() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn no_url_without_key() {
        let config = SheetsConfig::default();
        assert!(!config.has_api_key());
        assert!(config.values_url(&SheetTab::new(2025)).is_none());
        let blank = SheetsConfig::default().with_api_key(Some("  "));
        assert!(!blank.has_api_key());
    }

    #[test]
    fn values_url_quotes_tab() {
        let config = SheetsConfig::default().with_api_key(Some("abc"));
        let url = config.values_url(&SheetTab::new(2025)).unwrap();
        assert_eq!(
            url,
            "https://sheets.googleapis.com/v4/spreadsheets/1XTKAYoCk7MHTAYh5ot55LzoLzS5XBWDp/values/'2025'!A:AB?key=abc&valueRenderOption=UNFORMATTED_VALUE"
        );
    }

    #[test]
    fn tab_names_with_spaces_are_encoded() {
        let config = SheetsConfig::default().with_api_key(Some("k"));
        let tab = SheetTab { year: 2023, name: "FY 2023".to_string() };
        let url = config.values_url(&tab).unwrap();
        assert!(url.contains("/values/'FY%202023'!A:AB?"));
    }

    #[test]
    fn read_config_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tabs:\n  - year: 2023\npoll_interval_secs: 60").unwrap();
        let config = SheetsConfig::read_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.tabs, vec![SheetTab { year: 2023, name: String::new() }]);
        assert_eq!(config.tabs[0].name(), "2023");
        assert_eq!(config.range, "A:AB");
        assert_eq!(config.poll_interval_secs, 60);
        assert_eq!(config.spreadsheet_id, SPREADSHEET_ID);
    }

    #[test]
    fn missing_config_file_is_default() {
        let config = SheetsConfig::read_config("/nonexistent/sheets.yaml").unwrap();
        assert_eq!(config.tabs.len(), 2);
        assert_eq!(config.poll_interval_secs, 300);
    }
}

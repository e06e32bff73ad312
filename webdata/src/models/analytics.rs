use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::sheets::ingest::aggregate;

/// One spreadsheet row as text cells. Only positions carry meaning.
pub type RawSheetRow = Vec<String>;

/// A calendar-month bucket of dashboard figures, keyed by `period` (`YYYY-MM`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsPoint {
    pub period: String,
    pub beneficiaries: i64,
    pub programs: i64,
    pub donations: i64,
    pub volunteers: i64,
}

impl AnalyticsPoint {
    pub fn empty(period: impl Into<String>) -> Self {
        Self {
            period: period.into(),
            beneficiaries: 0,
            programs: 0,
            donations: 0,
            volunteers: 0,
        }
    }

    pub fn new(period: &str, beneficiaries: i64, programs: i64, donations: i64, volunteers: i64) -> Self {
        Self {
            period: period.to_string(),
            beneficiaries,
            programs,
            donations,
            volunteers,
        }
    }

    /// First day of the period's month, `None` when the period is not `YYYY-MM`.
    pub fn period_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&format!("{}-01", self.period), "%Y-%m-%d").ok()
    }
}

pub fn period_key(year: i32, month: u32) -> String {
    format!("{}-{:02}", year, month)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CumulativeStats {
    pub total_beneficiaries: i64,
    pub total_programs: i64,
    pub total_donations: i64,
    pub total_volunteers: i64,
    pub monthly_growth: f64,
}

/// Where a point collection came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum DataSource {
    Live,
    Fallback(String),
}

/// Result of one fetch cycle after fallback substitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsLoad {
    pub points: Vec<AnalyticsPoint>,
    pub source: DataSource,
}

impl AnalyticsLoad {
    pub fn is_degraded(&self) -> bool {
        matches!(self.source, DataSource::Fallback(_))
    }
}

/// What a dashboard shows after one completed fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub load: AnalyticsLoad,
    pub stats: CumulativeStats,
    pub fetched_at: DateTime<Utc>,
    pub cycle: u64,
}

impl AnalyticsSnapshot {
    pub fn new(load: AnalyticsLoad, cycle: u64) -> Self {
        let stats = aggregate(&load.points);
        Self { load, stats, fetched_at: Utc::now(), cycle }
    }
}

/// Yearly total of one labelled program/metric row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramMetric {
    pub year: i32,
    pub program: String,
    pub metric: String,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_key_pads_month() {
        assert_eq!(period_key(2025, 3), "2025-03");
        assert_eq!(period_key(2024, 12), "2024-12");
    }

    #[test]
    fn period_date_rejects_garbage() {
        assert_eq!(
            AnalyticsPoint::empty("2025-02").period_date(),
            NaiveDate::from_ymd_opt(2025, 2, 1)
        );
        assert!(AnalyticsPoint::empty("Feb 2025").period_date().is_none());
    }
}

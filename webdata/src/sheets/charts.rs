use serde::Serialize;

use crate::models::analytics::AnalyticsPoint;
use crate::site::i18n::{localize_digits, Bilingual, Lang};

const MONTH_ABBR: [Bilingual; 12] = [
    Bilingual::new("Jan", "জানু"),
    Bilingual::new("Feb", "ফেব্রু"),
    Bilingual::new("Mar", "মার্চ"),
    Bilingual::new("Apr", "এপ্রি"),
    Bilingual::new("May", "মে"),
    Bilingual::new("Jun", "জুন"),
    Bilingual::new("Jul", "জুলা"),
    Bilingual::new("Aug", "আগ"),
    Bilingual::new("Sep", "সেপ্টে"),
    Bilingual::new("Oct", "অক্টো"),
    Bilingual::new("Nov", "নভে"),
    Bilingual::new("Dec", "ডিসে"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: &'static str,
    pub values: Vec<i64>,
}

/// Labels and one or more aligned value rows for a dashboard chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartSeries {
    pub fn max_value(&self) -> i64 {
        self.datasets.iter().flat_map(|d| d.values.iter().copied()).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// "2024-03" becomes "Mar 2024" or "মার্চ ২০২৪". Anything unparsable is
/// passed through.
pub fn period_label(lang: Lang, period: &str) -> String {
    let label = match period.split_once('-') {
        Some((year, month)) => match month.parse::<usize>() {
            Ok(m @ 1..=12) => format!("{} {}", MONTH_ABBR[m - 1].get(lang), year),
            _ => period.to_string(),
        },
        None => period.to_string(),
    };
    localize_digits(&label, lang)
}

fn period_labels(points: &[AnalyticsPoint], lang: Lang) -> Vec<String> {
    points.iter().map(|p| period_label(lang, &p.period)).collect()
}

pub fn progress_series(points: &[AnalyticsPoint], lang: Lang) -> ChartSeries {
    ChartSeries {
        labels: period_labels(points, lang),
        datasets: vec![
            Dataset { label: "beneficiaries", values: points.iter().map(|p| p.beneficiaries).collect() },
            Dataset { label: "programs", values: points.iter().map(|p| p.programs).collect() },
        ],
    }
}

pub fn donation_series(points: &[AnalyticsPoint], lang: Lang) -> ChartSeries {
    ChartSeries {
        labels: period_labels(points, lang),
        datasets: vec![Dataset { label: "donations", values: points.iter().map(|p| p.donations).collect() }],
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionSlice {
    pub label: Bilingual,
    pub percent: u32,
    pub color: &'static str,
}

/// Static share of activity per program area for the donut chart.
pub const PROGRAM_DISTRIBUTION: [DistributionSlice; 4] = [
    DistributionSlice { label: Bilingual::new("Education", "শিক্ষা"), percent: 35, color: "#3B82F6" },
    DistributionSlice { label: Bilingual::new("Health", "স্বাস্থ্য"), percent: 25, color: "#14B8A6" },
    DistributionSlice { label: Bilingual::new("Social", "সামাজিক"), percent: 20, color: "#F97316" },
    DistributionSlice { label: Bilingual::new("Economic", "অর্থনৈতিক"), percent: 20, color: "#EC4899" },
];

pub fn format_number(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_currency(n: i64) -> String {
    format!("BDT {}", format_number(n))
}

pub fn format_growth(growth: f64) -> String {
    if growth >= 0.0 {
        format!("+{growth:.1}%")
    } else {
        format!("{growth:.1}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::ingest::mock_data;

    #[test]
    fn formats() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(12500), "12,500");
        assert_eq!(format_number(-1234567), "-1,234,567");
        assert_eq!(format_currency(252800), "BDT 252,800");
        assert_eq!(format_growth(12.34), "+12.3%");
        assert_eq!(format_growth(-4.0), "-4.0%");
    }

    #[test]
    fn series_follow_points() {
        let points = mock_data();
        let progress = progress_series(&points, Lang::En);
        assert_eq!(progress.labels.len(), 12);
        assert_eq!(progress.labels[0], "Jan 2024");
        assert_eq!(progress.datasets.len(), 2);
        assert_eq!(progress.max_value(), 95);
        let donations = donation_series(&points, Lang::Bn);
        assert_eq!(donations.labels[2], "মার্চ ২০২৪");
        assert_eq!(donations.datasets[0].values.iter().sum::<i64>(), 252800);
    }

    #[test]
    fn distribution_is_whole() {
        assert_eq!(PROGRAM_DISTRIBUTION.iter().map(|s| s.percent).sum::<u32>(), 100);
        assert_eq!(PROGRAM_DISTRIBUTION[0].label.get(Lang::Bn), "শিক্ষা");
        assert_eq!(period_label(Lang::En, "2024-13"), "2024-13");
    }
}

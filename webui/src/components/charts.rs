use std::f64::consts::PI;
use leptos::prelude::*;
use webdata::sheets::charts::{ChartSeries, PROGRAM_DISTRIBUTION};
use webdata::site::i18n::Lang;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 260.0;
const PAD: f64 = 36.0;
const COLORS: [&str; 2] = ["#0F766E", "#F97316"];

fn scale_y(value: i64, max: i64) -> f64 {
    if max <= 0 {
        return HEIGHT - PAD;
    }
    HEIGHT - PAD - (value as f64 / max as f64) * (HEIGHT - 2.0 * PAD)
}

fn step_x(count: usize) -> f64 {
    if count > 1 {
        (WIDTH - 2.0 * PAD) / (count - 1) as f64
    } else {
        0.0
    }
}

fn baseline() -> impl IntoView {
    let y = format!("{:.1}", HEIGHT - PAD);
    view! { <line x1=format!("{PAD}") y1=y.clone() x2=format!("{}", WIDTH - PAD) y2=y stroke="#E5E7EB" /> }
}

fn x_labels(labels: &[String], step: f64, offset: f64) -> impl IntoView {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let x = PAD + offset + i as f64 * step;
            view! {
                <text x=format!("{x:.1}") y=format!("{:.1}", HEIGHT - 10.0) font-size="10" text-anchor="middle" fill="#6B7280">{label.clone()}</text>
            }
        })
        .collect_view()
}

/// One polyline per dataset over shared x labels.
#[component]
pub fn LineChart(series: ChartSeries) -> impl IntoView {
    let max = series.max_value();
    let step = step_x(series.labels.len());
    let lines = series
        .datasets
        .iter()
        .enumerate()
        .map(|(n, dataset)| {
            let points = dataset
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| format!("{:.1},{:.1}", PAD + i as f64 * step, scale_y(*v, max)))
                .collect::<Vec<_>>()
                .join(" ");
            let color = COLORS[n % COLORS.len()];
            view! { <polyline points=points fill="none" stroke=color stroke-width="2.5" /> }
        })
        .collect_view();

    view! {
        <svg viewBox=format!("0 0 {WIDTH} {HEIGHT}") class="w-full h-auto">
            {baseline()}
            {lines}
            {x_labels(&series.labels, step, 0.0)}
        </svg>
    }
}

/// Bars for the first dataset.
#[component]
pub fn BarChart(series: ChartSeries) -> impl IntoView {
    let max = series.max_value();
    let count = series.labels.len().max(1);
    let slot = (WIDTH - 2.0 * PAD) / count as f64;
    let bar = slot * 0.6;
    let bars = series
        .datasets
        .first()
        .map(|dataset| {
            dataset
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    let y = scale_y(*v, max);
                    let x = PAD + i as f64 * slot + (slot - bar) / 2.0;
                    view! { <rect x=format!("{x:.1}") y=format!("{y:.1}") width=format!("{bar:.1}") height=format!("{:.1}", HEIGHT - PAD - y) rx="3" fill=COLORS[1] /> }
                })
                .collect_view()
        });

    view! {
        <svg viewBox=format!("0 0 {WIDTH} {HEIGHT}") class="w-full h-auto">
            {baseline()}
            {bars}
            {x_labels(&series.labels, slot, slot / 2.0)}
        </svg>
    }
}

/// Donut of the fixed program distribution.
#[component]
pub fn DistributionChart(#[prop(into)] lang: Signal<Lang>) -> impl IntoView {
    let radius = 70.0;
    let circumference = 2.0 * PI * radius;
    let mut offset = 0.0;
    let slices = PROGRAM_DISTRIBUTION
        .iter()
        .map(|slice| {
            let len = circumference * slice.percent as f64 / 100.0;
            let dash = format!("{:.2} {:.2}", len, circumference - len);
            let dash_offset = format!("{:.2}", -offset);
            offset += len;
            view! {
                <circle cx="100" cy="100" r=format!("{radius}") fill="none" stroke=slice.color stroke-width="32"
                    stroke-dasharray=dash stroke-dashoffset=dash_offset transform="rotate(-90 100 100)" />
            }
        })
        .collect_view();
    let legend = PROGRAM_DISTRIBUTION
        .iter()
        .map(|slice| {
            let label = slice.label;
            view! {
                <li class="flex items-center gap-2">
                    <span class="inline-block w-3 h-3 rounded-full" style=format!("background:{}", slice.color)></span>
                    <span>{move || label.get(lang.get())}</span>
                    <span class="ml-auto font-semibold">{format!("{}%", slice.percent)}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="flex flex-col items-center gap-4 md:flex-row">
            <svg viewBox="0 0 200 200" class="w-48 h-48">{slices}</svg>
            <ul class="w-full space-y-2 text-sm">{legend}</ul>
        </div>
    }
}

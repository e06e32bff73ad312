use std::time::Duration;
use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api::{load_analytics, sheets_config, test_integration};
use crate::app_state::use_lang;
use crate::components::charts::{BarChart, DistributionChart, LineChart};
use crate::i18n::{use_i18n, t};
use webdata::models::analytics::{AnalyticsLoad, AnalyticsPoint, CumulativeStats, DataSource};
use webdata::sheets::charts::{ChartSeries, donation_series, format_currency, format_growth, format_number, progress_series};
use webdata::sheets::ingest::aggregate;
use webdata::sheets::report::setup_instructions;
use webdata::site::i18n::{localize_digits, Lang};
use webdata::site::lifecycle::MountGuard;

fn stat_card(title: impl IntoView, value: impl Fn() -> String + Send + Sync + 'static) -> impl IntoView {
    view! {
        <div class="shadow stats bg-base-100">
            <div class="stat">
                <div class="stat-title">{title}</div>
                <div class="text-3xl stat-value text-teal-700">{value}</div>
            </div>
        </div>
    }
}

fn localized(lang: Memo<Lang>, stats: Memo<CumulativeStats>, f: fn(&CumulativeStats) -> String) -> impl Fn() -> String + Send + Sync + 'static {
    move || localize_digits(&stats.with(f), lang.get())
}

/// Dashboard fed from the reporting spreadsheet. Loads on mount and every
/// poll interval until unmounted; the latest completed fetch wins.
#[component]
pub fn AnalyticsView() -> impl IntoView {
    let i18n = use_i18n();
    let lang = use_lang();
    let (load, set_load) = signal(Option::<AnalyticsLoad>::None);
    let (updated_at, set_updated_at) = signal(Option::<DateTime<Utc>>::None);
    let (status_line, set_status_line) = signal(Option::<String>::None);
    let (testing, set_testing) = signal(false);

    let guard = MountGuard::new();
    let refresh = {
        let guard = guard.clone();
        move || {
            let guard = guard.clone();
            spawn_local(async move {
                let fresh = load_analytics().await;
                guard.deliver(fresh, |fresh| {
                    set_load.set(Some(fresh));
                    set_updated_at.set(Some(Utc::now()));
                });
            });
        }
    };
    refresh();
    let period = Duration::from_secs(sheets_config().poll_interval_secs.max(1));
    let timer = set_interval_with_handle(refresh.clone(), period).ok();
    on_cleanup(move || {
        guard.retire();
        if let Some(handle) = timer {
            handle.clear();
        }
    });

    let refresh_click = move |_| refresh();

    let run_test = move |_| {
        set_testing.set(true);
        set_status_line.set(None);
        spawn_local(async move {
            let report = test_integration().await;
            leptos::logging::log!("{}", report.status_line());
            set_status_line.set(Some(report.status_line()));
            set_testing.set(false);
        });
    };

    let stats = Memo::new(move |_| load.with(|l| l.as_ref().map(|l| aggregate(&l.points)).unwrap_or_default()));
    let localized_series = move |series: fn(&[AnalyticsPoint], Lang) -> ChartSeries| {
        let lang = lang.get();
        load.with(|l| l.as_ref().map(|l| series(&l.points, lang)))
    };

    view! {
        <div class="container p-4 mx-auto">
            <div class="mb-8 text-center">
                <h2 class="pb-2 mx-auto mb-3 text-4xl font-bold text-gray-800 border-b-4 border-yellow-500 w-fit">{t!(i18n, analytics_title)}</h2>
                <p class="text-gray-600">{t!(i18n, analytics_subtitle)}</p>
            </div>

            <div class="flex flex-wrap items-center justify-between gap-3 mb-6">
                {move || match load.get().map(|l| l.source) {
                    Some(DataSource::Live) => view! { <span class="badge badge-success">{t!(i18n, data_live)}</span> }.into_any(),
                    Some(DataSource::Fallback(reason)) => view! {
                        <span class="badge badge-warning" title=reason>{t!(i18n, data_fallback)}</span>
                    }.into_any(),
                    None => view! { <span class="loading loading-dots loading-sm"></span> }.into_any(),
                }}
                <span class="text-sm text-gray-500">
                    {t!(i18n, last_updated)} ": "
                    {move || updated_at.get().map(|t| t.format("%H:%M:%S").to_string()).unwrap_or_else(|| "-".to_string())}
                </span>
                <div class="flex gap-2">
                    <button class="btn btn-sm btn-outline" on:click=refresh_click>{t!(i18n, refresh)}</button>
                    <button class="btn btn-sm btn-accent" disabled=move || testing.get() on:click=run_test>
                        {move || if testing.get() { view! { {t!(i18n, testing)} }.into_any() } else { view! { {t!(i18n, test_sheets)} }.into_any() }}
                    </button>
                </div>
            </div>

            {move || status_line.get().map(|line| view! {
                <div class="mb-6 alert" class:alert-success=line.starts_with('✅') class:alert-error=!line.starts_with('✅')>
                    <span>{line.clone()}</span>
                </div>
            })}

            {move || if load.with(|l| l.is_none()) {
                view! {
                    <div class="flex justify-center py-8">
                        <span class="loading loading-spinner loading-lg"></span>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="grid grid-cols-1 gap-4 mb-8 md:grid-cols-3 lg:grid-cols-5">
                        {stat_card(t!(i18n, stat_beneficiaries), localized(lang, stats, |s| format_number(s.total_beneficiaries)))}
                        {stat_card(t!(i18n, stat_programs), localized(lang, stats, |s| format_number(s.total_programs)))}
                        {stat_card(t!(i18n, stat_donations), localized(lang, stats, |s| format_currency(s.total_donations)))}
                        {stat_card(t!(i18n, stat_volunteers), localized(lang, stats, |s| format_number(s.total_volunteers)))}
                        {stat_card(t!(i18n, stat_growth), localized(lang, stats, |s| format_growth(s.monthly_growth)))}
                    </div>
                    <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
                        <div class="shadow card bg-base-100">
                            <div class="card-body">
                                <h3 class="card-title">{t!(i18n, chart_progress)}</h3>
                                {move || localized_series(progress_series).map(|series| view! { <LineChart series=series /> })}
                            </div>
                        </div>
                        <div class="shadow card bg-base-100">
                            <div class="card-body">
                                <h3 class="card-title">{t!(i18n, chart_donations)}</h3>
                                {move || localized_series(donation_series).map(|series| view! { <BarChart series=series /> })}
                            </div>
                        </div>
                        <div class="shadow card bg-base-100 lg:col-span-2">
                            <div class="card-body">
                                <h3 class="card-title">{t!(i18n, chart_distribution)}</h3>
                                <DistributionChart lang=lang />
                            </div>
                        </div>
                    </div>
                }.into_any()
            }}

            {move || load.with(|l| l.as_ref().map_or(false, |l| l.is_degraded())).then(|| {
                let setup = setup_instructions();
                view! {
                    <div class="mt-8 shadow card bg-base-100">
                        <div class="card-body">
                            <h3 class="card-title">{t!(i18n, setup_title)}</h3>
                            <ol class="space-y-1 text-sm">
                                {setup.steps.iter().map(|step| view! { <li>{*step}</li> }).collect_view()}
                            </ol>
                            <p class="mt-2 text-sm text-gray-500">{setup.note}</p>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}

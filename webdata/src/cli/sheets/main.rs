use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use tokio_util::sync::CancellationToken;
use webdata::models::analytics::{AnalyticsPoint, CumulativeStats, DataSource};
use webdata::models::config::SheetsConfig;
use webdata::sheets::charts::{format_currency, format_growth, format_number};
use webdata::sheets::client::SheetsClient;
use webdata::sheets::ingest::{aggregate, mock_data, program_metrics};
use webdata::sheets::monitor::start_monitor;
use webdata::sheets::report::setup_instructions;

fn cli() -> Command {
    Command::new("sheets")
        .about("Fetches and summarizes the foundation's Google Sheets analytics")
        .arg(Arg::new("config")
            .long("config")
            .value_name("CONFIG_FILE")
            .help("Path to config file")
            .default_value("sheets.yaml")
            .global(true))
        .arg(Arg::new("log_file")
            .long("log-file")
            .value_name("LOG_FILE")
            .help("Path to log file")
            .default_value("logs/sheets.log")
            .global(true))
        .arg(Arg::new("json")
            .long("json")
            .help("Print JSON instead of tables")
            .action(ArgAction::SetTrue)
            .global(true))
        .subcommand_required(true)
        .subcommand(Command::new("fetch").about("Run one ingestion cycle"))
        .subcommand(Command::new("watch").about("Poll until Ctrl-C"))
        .subcommand(Command::new("test").about("Check the Google Sheets integration"))
        .subcommand(Command::new("metrics").about("Yearly totals for every program row"))
        .subcommand(Command::new("mock").about("Print the fallback dataset"))
        .subcommand(Command::new("setup").about("How to configure the API key"))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let matches = cli().get_matches();

    let log_file = matches.get_one::<String>("log_file").context("log_file argument missing")?;
    webdata::init_tracing(log_file)?;
    tracing::info!("sheets started");

    let config_path = matches.get_one::<String>("config").context("config argument missing")?;
    let json = matches.get_flag("json");
    let config = SheetsConfig::read_config(config_path)?;
    if !config.has_api_key() {
        tracing::warn!("GOOGLE_SHEETS_API_KEY is not set, live fetches will fall back to mock data");
    }

    match matches.subcommand() {
        Some(("fetch", _)) => fetch(config, json).await,
        Some(("watch", _)) => watch(config, json).await,
        Some(("test", _)) => test(config, json).await,
        Some(("metrics", _)) => metrics(config, json).await,
        Some(("mock", _)) => print_points(&mock_data(), json),
        Some(("setup", _)) => setup(),
        _ => Ok(()),
    }
}

async fn fetch(config: SheetsConfig, json: bool) -> Result<()> {
    let client = SheetsClient::new(config);
    let load = client.load().await;
    if let DataSource::Fallback(reason) = &load.source {
        tracing::warn!("Showing fallback data: {}", reason);
    }
    print_points(&load.points, json)
}

async fn watch(config: SheetsConfig, json: bool) -> Result<()> {
    let cancel = CancellationToken::new();
    let mut rx = start_monitor(SheetsClient::new(config), cancel.clone());

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Ctrl-C received, stopping monitor");
                cancel.cancel();
                break;
            }
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = rx.borrow_and_update().clone();
                if let Some(snapshot) = snapshot {
                    if json {
                        println!("{}", serde_json::to_string(&snapshot)?);
                    } else {
                        println!(
                            "[{}] cycle {} ({}): {}",
                            snapshot.fetched_at.format("%H:%M:%S"),
                            snapshot.cycle,
                            if snapshot.load.is_degraded() { "fallback" } else { "live" },
                            stats_line(&snapshot.stats)
                        );
                    }
                }
            }
        }
    }
    Ok(())
}

async fn test(config: SheetsConfig, json: bool) -> Result<()> {
    let report = SheetsClient::new(config).test_integration().await;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    println!("{}", report.status_line());
    for tab in &report.tabs {
        println!("  {}: {} rows, headers {:?}", tab.tab, tab.rows, tab.headers);
    }
    if report.success {
        println!("  {}", stats_line(&report.summary));
    }
    Ok(())
}

async fn metrics(config: SheetsConfig, json: bool) -> Result<()> {
    let client = SheetsClient::new(config);
    let (sheets, _) = client.fetch_sheets().await.context("Failed to fetch sheets")?;
    let metrics = program_metrics(&sheets);
    if json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }
    for m in &metrics {
        println!("{:<6}{:<32}{:<32}{:>10}", m.year, m.program, m.metric, format_number(m.total));
    }
    tracing::info!("{} program metrics", metrics.len());
    Ok(())
}

fn setup() -> Result<()> {
    let instructions = setup_instructions();
    for step in instructions.steps {
        println!("{}", step);
    }
    println!();
    println!("Note: {}", instructions.note);
    Ok(())
}

fn print_points(points: &[AnalyticsPoint], json: bool) -> Result<()> {
    let stats = aggregate(points);
    if json {
        let out = serde_json::json!({ "points": points, "stats": stats });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    println!("{:<10}{:>14}{:>10}{:>14}{:>12}", "period", "beneficiaries", "programs", "donations", "volunteers");
    for p in points {
        println!(
            "{:<10}{:>14}{:>10}{:>14}{:>12}",
            p.period,
            format_number(p.beneficiaries),
            p.programs,
            format_number(p.donations),
            p.volunteers
        );
    }
    println!("{}", stats_line(&stats));
    Ok(())
}

fn stats_line(stats: &CumulativeStats) -> String {
    format!(
        "beneficiaries {}, programs {}, donations {}, volunteers {}, growth {}",
        format_number(stats.total_beneficiaries),
        format_number(stats.total_programs),
        format_currency(stats.total_donations),
        format_number(stats.total_volunteers),
        format_growth(stats.monthly_growth)
    )
}

//! Casefile CLI
//!
//! Command-line interface for the Casefile incident analytics engine:
//! - Run the full analysis over a dataset
//! - Search records with filters
//! - Build and export reports
//! - Generate a default config file

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use casefile::analysis::CrimeAnalyzer;
use casefile::clock::SystemClock;
use casefile::config::{generate_default_config, Config};
use casefile::ingest::{import_json, sample_records, CsvImporter};
use casefile::query::{search, SearchFilters};
use casefile::report::{self, Period, ReportBuilder, ReportType};
use casefile::store::RecordStore;

#[derive(Parser)]
#[command(name = "casefile")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Crime incident analytics engine")]
#[command(
    long_about = "Casefile loads an incident dataset and derives frequency rankings,\nhotspots, time-of-day patterns, temporal clusters and exportable reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dataset file (.csv or .json); the embedded sample is used when
    /// neither this nor the config file names one
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis and print an overview
    Analyze {
        /// Cluster detection window, in active dates
        #[arg(short, long)]
        window: Option<usize>,
        /// How many entries to show in ranked listings
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Search records
    Search {
        /// Free-text query over type, location and description
        query: Option<String>,
        /// Exact crime type (case-insensitive)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Location substring
        #[arg(short, long)]
        location: Option<String>,
        /// Earliest date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: Option<String>,
        /// Latest date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: Option<String>,
    },

    /// Build a report
    Report {
        /// Report type
        #[arg(value_enum, default_value = "summary")]
        report_type: ReportType,
        /// Time period to cover
        #[arg(short, long, value_enum, default_value = "all")]
        period: Period,
        /// Export directory (prints to stdout when absent)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "casefile=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::load_default();

    match cli.command {
        Commands::Analyze { window, top } => {
            let store = load_store(cli.data.as_deref(), &config)?;
            let window = window.unwrap_or(config.analysis.window_days);
            let top = top.unwrap_or(config.analysis.top_n);
            run_analysis(&store, window, top, &cli.format)?;
        }

        Commands::Search {
            query,
            kind,
            location,
            from,
            to,
        } => {
            let store = load_store(cli.data.as_deref(), &config)?;

            let mut filters = SearchFilters::new();
            if let Some(query) = query {
                filters = filters.query(query);
            }
            if let Some(kind) = kind {
                filters = filters.crime_type(kind);
            }
            if let Some(location) = location {
                filters = filters.location(location);
            }
            if let Some(from) = from {
                filters = filters.date_from(parse_date(&from)?);
            }
            if let Some(to) = to {
                filters = filters.date_to(parse_date(&to)?);
            }

            let results = search(&store, &filters);
            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                println!("{} matching record(s)", results.len());
                for record in results {
                    println!(
                        "#{:<4} {} {}  {:<12} {:<18} {}",
                        record.id, record.date, record.time, record.kind, record.location,
                        record.description
                    );
                }
            }
        }

        Commands::Report {
            report_type,
            period,
            output,
        } => {
            let store = load_store(cli.data.as_deref(), &config)?;
            let clock = SystemClock;
            let built = ReportBuilder::new(&store, &clock).build(report_type, period);

            match output {
                Some(dir) => {
                    std::fs::create_dir_all(&dir)
                        .with_context(|| format!("creating output directory {}", dir.display()))?;
                    let path = report::export(&built, &dir)
                        .with_context(|| format!("exporting report to {}", dir.display()))?;
                    println!("Report written to {}", path.display());
                }
                None if cli.format == "json" => {
                    println!("{}", serde_json::to_string_pretty(&built)?);
                }
                None => print!("{}", report::to_text(&built)),
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing config to {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{content}"),
            }
        }
    }

    Ok(())
}

/// Load the record store from the CLI path, the config path or the
/// embedded sample, in that order of preference.
fn load_store(data: Option<&std::path::Path>, config: &Config) -> anyhow::Result<RecordStore> {
    let configured = config.dataset.path.as_ref().map(PathBuf::from);
    let path = data.map(PathBuf::from).or(configured);

    let records = match path {
        Some(path) => match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => {
                let result = CsvImporter::new()
                    .import(&path)
                    .with_context(|| format!("importing {}", path.display()))?;
                for error in &result.errors {
                    tracing::warn!("{error}");
                }
                result.records
            }
            Some("json") => import_json(&path)
                .with_context(|| format!("importing {}", path.display()))?,
            _ => anyhow::bail!(
                "unsupported dataset format: {} (expected .csv or .json)",
                path.display()
            ),
        },
        None => {
            tracing::info!("no dataset supplied, using embedded sample");
            sample_records()
        }
    };

    Ok(RecordStore::from_records(records)?)
}

fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("invalid date {value:?} (expected YYYY-MM-DD)"))
}

fn run_analysis(
    store: &RecordStore,
    window: usize,
    top: usize,
    format: &str,
) -> anyhow::Result<()> {
    let analyzer = CrimeAnalyzer::new(store);
    let overview = analyzer.overview();

    if format == "json" {
        let payload = serde_json::json!({
            "overview": overview,
            "frequent_types": analyzer.frequent_types(top),
            "hotspots": analyzer.hotspots(),
            "time_patterns": analyzer.time_patterns(),
            "clusters": analyzer.detect_clusters(window),
            "trend": analyzer.trend_summary(),
            "prediction": analyzer.predict_next_week(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("OVERVIEW");
    println!("  Total crimes:     {}", overview.total_crimes);
    println!("  Crime types:      {}", overview.distinct_types);
    println!("  Locations:        {}", overview.distinct_locations);
    println!("  Most common type: {}", overview.most_common_type);
    println!("  Top hotspot:      {}", overview.top_hotspot);
    println!("  Active clusters:  {}", overview.active_clusters);

    println!("\nTOP CRIME TYPES");
    for (i, entry) in analyzer.frequent_types(top).iter().enumerate() {
        println!("  {}. {}: {}", i + 1, entry.key, entry.count);
    }

    println!("\nHOTSPOTS");
    for entry in analyzer.hotspots().iter().take(top) {
        println!(
            "  {} - {} incidents ({:.1}%), risk {}",
            entry.location, entry.count, entry.percentage, entry.risk_level
        );
    }

    println!("\nTIME PATTERNS");
    for (period, count) in &analyzer.time_patterns().periods {
        println!("  {}: {}", period.label(), count);
    }

    let clusters = analyzer.detect_clusters(window);
    println!("\nCLUSTERS (window = {window})");
    if clusters.is_empty() {
        println!("  none detected");
    }
    for cluster in &clusters {
        println!(
            "  {} to {}: {} crimes, {:.1}/day, risk {}",
            cluster.start_date,
            cluster.end_date,
            cluster.total_crimes,
            cluster.avg_daily_crimes,
            cluster.risk_level
        );
    }

    let trend = analyzer.trend_summary();
    let prediction = analyzer.predict_next_week();
    println!("\nTRENDS");
    println!("  Average per day: {:.1}", trend.average_per_day);
    if let Some((date, count)) = trend.peak_day {
        println!("  Peak day:        {date} ({count} incidents)");
    }
    println!("  Direction:       {}", trend.direction);
    println!(
        "  Next week:       ~{} incidents (confidence {})",
        prediction.next_week, prediction.confidence
    );
    println!("  Recommendation:  {}", prediction.recommendation);

    Ok(())
}

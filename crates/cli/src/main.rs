//! # zstream
//!
//! Command-line interface for streaming Z-score anomaly detection.

mod input;
mod plot;

use std::fs::File;
use std::path::{Path, PathBuf};

use anomaly::{
    run_simulation_with, Alert, AlertSink, DetectionSummary, DetectorConfigBuilder,
    SeriesRecorder, SimulationConfig, StreamMonitor, TracingSink, ZScoreDetector,
};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliResult<T> = std::result::Result<T, String>;

const PLOT_WIDTH: usize = 100;
const PLOT_HEIGHT: usize = 20;

#[derive(Parser)]
#[command(name = "zstream")]
#[command(about = "Sliding-window Z-score anomaly detection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the detector over a synthetic stream
    Simulate {
        /// Number of points to generate (default: 1000)
        #[arg(short = 'n', long)]
        points: Option<usize>,

        /// Sliding window size (default: 100)
        #[arg(short, long)]
        window_size: Option<usize>,

        /// Z-score threshold (default: 3.0)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Seed for a reproducible stream
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON configuration file; flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file for the JSON report (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Draw the stream with anomalies marked
        #[arg(long)]
        plot: bool,
    },

    /// Stream a data file through the detector in order
    Detect {
        /// Input file (CSV or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Column name or index for the values
        #[arg(short, long)]
        column: Option<String>,

        /// Sliding window size
        #[arg(short, long, default_value = "100")]
        window_size: usize,

        /// Z-score threshold
        #[arg(short, long, default_value = "3.0")]
        threshold: f64,

        /// Output file for the JSON report (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Draw the stream with anomalies marked
        #[arg(long)]
        plot: bool,
    },
}

/// Format the anomaly listing, one line per flagged point.
fn format_summary(summary: &DetectionSummary) -> String {
    let mut out = format!("Detected {} anomalies\n", summary.anomaly_count());
    for record in &summary.anomalies {
        out.push_str(&format!(
            "Anomaly at point {}: {}\n",
            record.position, record.value
        ));
    }
    out
}

/// Write the JSON report to a file.
fn write_report(summary: &DetectionSummary, alerts: &[Alert], path: &Path) -> CliResult<()> {
    let json = serde_json::json!({
        "total_points": summary.total_points,
        "window_size": summary.window_size,
        "threshold": summary.threshold,
        "anomaly_count": summary.anomaly_count(),
        "anomaly_rate": summary.anomaly_rate(),
        "anomalies": summary.anomalies,
        "alerts": alerts,
    });

    let mut file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
    serde_json::to_writer_pretty(&mut file, &json)
        .map_err(|e| format!("Failed to write JSON: {}", e))?;
    println!("\nResults written to {:?}", path);
    Ok(())
}

/// Run simulate command
fn run_simulate(
    points: Option<usize>,
    window_size: Option<usize>,
    threshold: Option<f64>,
    seed: Option<u64>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    plot: bool,
) -> CliResult<()> {
    let mut config = match config {
        Some(path) => SimulationConfig::from_json_file(&path).map_err(|e| e.to_string())?,
        None => SimulationConfig::default(),
    };
    if let Some(points) = points {
        config.num_points = points;
    }
    if let Some(window_size) = window_size {
        config.detector.window_size = window_size;
    }
    if let Some(threshold) = threshold {
        config.detector.threshold = threshold;
    }
    if seed.is_some() {
        config.simulator.seed = seed;
    }

    info!(
        points = config.num_points,
        window_size = config.detector.window_size,
        threshold = config.detector.threshold,
        seed = config.simulator.seed,
        "running simulation"
    );

    let mut recorder = SeriesRecorder::new();
    let mut alerts = AlertSink::new();
    let summary = run_simulation_with(&config, (&mut recorder, &mut alerts))
        .map_err(|e| e.to_string())?;

    print!("{}", format_summary(&summary));
    if plot {
        println!();
        print!("{}", plot::render(&recorder, PLOT_WIDTH, PLOT_HEIGHT));
    }
    if let Some(path) = output {
        write_report(&summary, alerts.alerts(), &path)?;
    }

    Ok(())
}

/// Run detect command
fn run_detect(
    input: PathBuf,
    column: Option<String>,
    window_size: usize,
    threshold: f64,
    output: Option<PathBuf>,
    plot: bool,
) -> CliResult<()> {
    let config = DetectorConfigBuilder::new()
        .window_size(window_size)
        .threshold(threshold)
        .build()
        .map_err(|e| e.to_string())?;
    let data = input::load_data(&input, column.as_deref())?;
    println!(
        "Loaded {} data points from {:?}",
        data.len(),
        input.file_name().unwrap_or_default()
    );
    println!("Window size: {}", config.window_size);
    println!("Threshold: {}\n", config.threshold);

    let detector = ZScoreDetector::from_config(config).map_err(|e| e.to_string())?;
    let sinks = ((SeriesRecorder::new(), AlertSink::new()), TracingSink::new());
    let mut monitor = StreamMonitor::new(detector, sinks);
    let total = data.len();
    let summary = monitor.run(data, total).map_err(|e| e.to_string())?;
    let (_, ((recorder, alerts), _)) = monitor.into_parts();

    print!("{}", format_summary(&summary));
    if plot {
        println!();
        print!("{}", plot::render(&recorder, PLOT_WIDTH, PLOT_HEIGHT));
    }
    if let Some(path) = output {
        write_report(&summary, alerts.alerts(), &path)?;
    }

    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zstream=info,anomaly_core=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            points,
            window_size,
            threshold,
            seed,
            config,
            output,
            plot,
        } => run_simulate(points, window_size, threshold, seed, config, output, plot),

        Commands::Detect {
            input,
            column,
            window_size,
            threshold,
            output,
            plot,
        } => run_detect(input, column, window_size, threshold, output, plot),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

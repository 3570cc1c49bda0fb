mod config;
mod groundtrack;
mod render;
mod web;

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::Config;
use crate::groundtrack::{sampler::sample_epochs, PlotRequest, Session};
use crate::render::Canvas;

#[derive(Parser)]
#[command(name = "groundtrack")]
#[command(about = "Satellite ground track and altitude plotter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a plot request file
    Validate {
        request: String,
        #[arg(long)]
        config: Option<String>,
    },
    /// Plot request files onto one canvas and export it as JSON
    Plot {
        #[arg(long)]
        config: Option<String>,
        /// Output file, defaults to `<title>.json`
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(required = true)]
        requests: Vec<String>,
    },
    /// Serve the HTTP API
    Serve {
        #[arg(long)]
        config: Option<String>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { request, config } => validate(&request, config.as_deref()),
        Commands::Plot {
            config,
            out,
            requests,
        } => plot(&requests, config.as_deref(), out),
        Commands::Serve { config } => serve(config.as_deref()),
    }
}

fn load_config(path: Option<&str>) -> Option<Config> {
    match Config::load(path) {
        Ok(config) => Some(config),
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            None
        }
    }
}

fn read_request(path: &str) -> Option<PlotRequest> {
    let yaml = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading file {}: {}", path, e);
            return None;
        }
    };

    match serde_yaml::from_str(&yaml) {
        Ok(request) => Some(request),
        Err(e) => {
            eprintln!("Parse error in {}: {}", path, e);
            None
        }
    }
}

fn validate(path: &str, config_path: Option<&str>) -> ExitCode {
    let Some(config) = load_config(config_path) else {
        return ExitCode::FAILURE;
    };
    let Some(request) = read_request(path) else {
        return ExitCode::FAILURE;
    };

    match request.validate(config.plot.color) {
        Ok(validated) => {
            let samples = sample_epochs(validated.start, validated.end, validated.increment);
            println!("Request is valid ({} samples)", samples.len());
            println!("{}", validated);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Validation error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn plot(paths: &[String], config_path: Option<&str>, out: Option<PathBuf>) -> ExitCode {
    let Some(config) = load_config(config_path) else {
        return ExitCode::FAILURE;
    };

    let mut session = Session::new();
    let mut canvas = Canvas::new();
    let mut failed = false;

    for path in paths {
        let Some(request) = read_request(path) else {
            failed = true;
            continue;
        };

        match groundtrack::plot(&request, &config.plot, &mut session, &mut canvas) {
            Ok(plot) => println!(
                "{}: {} points in {} segments",
                path,
                plot.track.len(),
                plot.segments.len()
            ),
            Err(e) => {
                eprintln!("{} error in {}: {}", e.domain(), path, e);
                failed = true;
            }
        }
    }

    if canvas.plots.is_empty() {
        eprintln!("Nothing was plotted");
        return ExitCode::FAILURE;
    }

    let out = out.unwrap_or_else(|| PathBuf::from(canvas.default_file_name()));
    if let Err(e) = canvas.export(&out) {
        eprintln!("Export error: {}", e);
        return ExitCode::FAILURE;
    }
    println!("Saved {} plot(s) to {}", canvas.plots.len(), out.display());

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn serve(config_path: Option<&str>) -> ExitCode {
    let Some(config) = load_config(config_path) else {
        return ExitCode::FAILURE;
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error starting runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(web::run_server(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

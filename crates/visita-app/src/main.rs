// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Visita — site-visit report generation
//
// Entry point. Initialises logging, parses the command line, and runs the
// requested report operation.

mod services;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use visita_core::VisitaError;
use visita_core::human_errors::humanize_error;

use services::data_dir;
use services::report_service::{self, ReportService};

#[derive(Parser, Debug)]
#[command(name = "visita", version, about = "Build site-visit PDF reports from a form and photos")]
struct Cli {
    /// JSON pipeline configuration; environment variables override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize the photos and write the PDF report.
    Generate {
        /// Report form JSON.
        #[arg(long)]
        data: PathBuf,
        /// Evidence photos, in report order.
        #[arg(long = "image", required = true)]
        images: Vec<PathBuf>,
        /// Where to write the PDF (defaults to the data directory).
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Validate the inputs and estimate the output size without rendering.
    Preview {
        #[arg(long)]
        data: PathBuf,
        #[arg(long = "image", required = true)]
        images: Vec<PathBuf>,
    },
    /// Print the public configuration.
    Config,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "Visita starting");

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let human = humanize_error(&err);
            tracing::error!(code = err.code(), error = %err, "command failed");
            eprintln!("error: {}", human.message);
            eprintln!("hint: {}", human.suggestion);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), VisitaError> {
    let service = ReportService::init(cli.config.as_deref())?;

    match cli.command {
        Command::Generate {
            data,
            images,
            out_dir,
        } => generate(&service, &data, &images, out_dir.as_deref()).await,
        Command::Preview { data, images } => {
            let report = report_service::read_report(&data)?;
            let sizes = report_service::upload_sizes(&images)?;
            let estimate = service.preview(&report, &sizes)?;
            println!("{}", serde_json::to_string_pretty(&estimate)?);
            Ok(())
        }
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(&service.info())?);
            Ok(())
        }
    }
}

async fn generate(
    service: &ReportService,
    data: &Path,
    images: &[PathBuf],
    out_dir: Option<&Path>,
) -> Result<(), VisitaError> {
    let report = report_service::read_report(data)?;
    let uploads = report_service::read_uploads(images)?;
    let out_dir = data_dir::output_dir(out_dir)?;

    let (artifact, path) = tokio::select! {
        result = service.generate(report, uploads, &out_dir) => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("interrupted, abandoning report assembly");
            return Err(VisitaError::Cancelled("interrupted by user".into()));
        }
    };

    let summary = serde_json::json!({
        "path": path.display().to_string(),
        "headers": artifact
            .response_headers()
            .into_iter()
            .map(|(name, value)| (name.to_string(), serde_json::Value::String(value)))
            .collect::<serde_json::Map<_, _>>(),
        "metrics": &artifact.metrics,
        "images": &artifact.images,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

//! CLI for the polling unit results service.

use clap::{Parser, Subcommand};
use polls_db::{DbPool, PollingUnitTotal, StateId};
use polls_ingestion::{read_script, sanitize, sanitize_with_report, write_sanitized};
use polls_presenter::{render_results, run_pipeline, serve, AppState, PipelineConfig};
use polls_telemetry::{init_logging, write_audit_sample, LogFormat};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "polls")]
#[command(about = "Load a MySQL election results dump and report polling unit totals")]
struct Cli {
    /// Log filter (e.g., "info", "polls_db=debug"); defaults to RUST_LOG, then info
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format: json or text
    #[arg(long, global = true, default_value = "json")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the results table on a single HTTP route
    Serve {
        /// Path to the MySQL dump
        #[arg(long, default_value = "bincom_test.sql")]
        script: PathBuf,

        /// State id to aggregate
        #[arg(long, default_value = "25")]
        state_id: i64,

        /// State name shown in the page heading
        #[arg(long, default_value = "Delta State")]
        state_name: String,

        /// Bind address
        #[arg(long, default_value = "127.0.0.1:5000")]
        bind: String,
    },
    /// Run the pipeline once and print the totals
    Report {
        /// Path to the MySQL dump
        #[arg(long, default_value = "bincom_test.sql")]
        script: PathBuf,

        /// State id to aggregate
        #[arg(long, default_value = "25")]
        state_id: i64,

        /// State name shown in the page heading
        #[arg(long, default_value = "Delta State")]
        state_name: String,

        /// Also write the rendered HTML page here
        #[arg(long)]
        html_output: Option<PathBuf>,

        /// Append a JSON audit sample of the totals here
        #[arg(long)]
        results_json: Option<PathBuf>,
    },
    /// Write the sanitized script for inspection
    Sanitize {
        /// Path to the MySQL dump
        #[arg(long, default_value = "bincom_test.sql")]
        script: PathBuf,

        /// Output path for the sanitized SQL
        #[arg(long, default_value = "cleaned_bincom_test.sql")]
        output: PathBuf,
    },
    /// Load the script and list the tables it creates
    Tables {
        /// Path to the MySQL dump
        #[arg(long, default_value = "bincom_test.sql")]
        script: PathBuf,
    },
}

fn pipeline_config(state_id: i64, state_name: String) -> PipelineConfig {
    PipelineConfig {
        state_id: StateId(state_id),
        state_name,
    }
}

#[derive(Serialize)]
struct AuditReport<'a> {
    script: &'a str,
    state_id: i64,
    state_name: &'a str,
    polling_units: &'a [PollingUnitTotal],
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref(), cli.log_format)?;

    match cli.command {
        Commands::Serve {
            script,
            state_id,
            state_name,
            bind,
        } => {
            run_server(&script, pipeline_config(state_id, state_name), &bind).await?;
        }
        Commands::Report {
            script,
            state_id,
            state_name,
            html_output,
            results_json,
        } => {
            run_report(
                &script,
                pipeline_config(state_id, state_name),
                html_output,
                results_json,
            )
            .await?;
        }
        Commands::Sanitize { script, output } => {
            sanitize_script(&script, &output)?;
        }
        Commands::Tables { script } => {
            list_tables(&script).await?;
        }
    }

    Ok(())
}

async fn run_server(script_path: &Path, config: PipelineConfig, bind: &str) -> anyhow::Result<()> {
    info!("Starting polling results server");

    // Read once; each request sanitizes and loads it into its own store.
    let script = read_script(script_path)?;
    serve(bind, AppState::new(script, config)).await?;
    Ok(())
}

async fn run_report(
    script_path: &Path,
    config: PipelineConfig,
    html_output: Option<PathBuf>,
    results_json: Option<PathBuf>,
) -> anyhow::Result<()> {
    let script = read_script(script_path)?;
    let rows = run_pipeline(&script, config.state_id).await?;

    for row in &rows {
        println!("{}\t{}", row.polling_unit_name, row.total_score);
    }

    if let Some(path) = html_output {
        std::fs::write(&path, render_results(&rows, &config.state_name))?;
        info!("Wrote results page to {:?}", path);
    }

    let script_name = script_path.display().to_string();
    write_audit_sample(
        results_json,
        &AuditReport {
            script: &script_name,
            state_id: config.state_id.get(),
            state_name: &config.state_name,
            polling_units: &rows,
        },
    )?;

    Ok(())
}

fn sanitize_script(script_path: &Path, output: &Path) -> anyhow::Result<()> {
    let script = read_script(script_path)?;
    let (sql, report) = sanitize_with_report(&script);
    write_sanitized(output, &sql)?;
    info!(
        line_comments = report.line_comments,
        block_comments = report.block_comments,
        set_statements = report.set_statements,
        auto_increments = report.auto_increments,
        "Sanitized {:?} into {:?}",
        script_path,
        output
    );
    Ok(())
}

async fn list_tables(script_path: &Path) -> anyhow::Result<()> {
    for table in load_table_names(script_path).await? {
        println!("{}", table);
    }
    Ok(())
}

/// Load the sanitized script into a fresh store and list its tables. The
/// store is closed before any load or query error is returned.
async fn load_table_names(script_path: &Path) -> anyhow::Result<Vec<String>> {
    let script = read_script(script_path)?;
    let db = DbPool::in_memory().await?;
    let tables = match db.load_script(&sanitize(&script)).await {
        Ok(()) => db.table_names().await,
        Err(e) => Err(e),
    };
    db.close().await;

    Ok(tables?)
}

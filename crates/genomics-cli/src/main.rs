use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{ArgAction, Parser, ValueEnum};
use genomics_core::app::samples::stage_samples;
use genomics_core::observability::{LogFormat, PipelineCounts, init_logging};
use genomics_core::{AppBuilder, PipelineConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "genomics")]
#[command(about = "Run the genomics pipeline against in-memory services", long_about = None)]
struct Args {
    /// Simulate the pipeline locally (only the value 1 enables it). Cloud deployment is not handled here.
    #[arg(
        long,
        env = "LOCAL_MODE",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value = "0",
        default_missing_value = "1",
        value_parser = parse_local_mode
    )]
    local_mode: bool,

    /// JSON file with pipeline settings
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    bucket: Option<String>,

    #[arg(long)]
    table: Option<String>,

    #[arg(long)]
    workflow: Option<String>,

    /// File to process, in order (repeatable). Defaults to the bundled samples.
    /// Only bundled samples named here are staged; other files are validated by name.
    #[arg(long = "file")]
    files: Vec<String>,

    #[arg(long, value_enum, default_value_t = LogFormatArg::Pretty)]
    log_format: LogFormatArg,

    /// Print the full pipeline report as JSON
    #[arg(long)]
    report: bool,
}

/// LOCAL_MODE は "1" のときだけ有効（それ以外の値はすべて無効扱い）
fn parse_local_mode(value: &str) -> Result<bool, String> {
    Ok(value == "1")
}

/// ローカルモード以外では何もせずにエラーで終了する
fn ensure_local(args: &Args) -> anyhow::Result<()> {
    if !args.local_mode {
        bail!("cloud deployment is not supported by this binary; set LOCAL_MODE=1 to run the local simulation");
    }
    Ok(())
}

/// 設定ファイル（無ければデフォルト）にコマンドライン引数を上書きする
fn build_config(args: &Args) -> anyhow::Result<PipelineConfig> {
    let mut config = match &args.config {
        Some(path) => PipelineConfig::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PipelineConfig::default(),
    };

    if let Some(bucket) = &args.bucket {
        config.bucket = bucket.clone();
    }
    if let Some(table) = &args.table {
        config.table = table.clone();
    }
    if let Some(workflow) = &args.workflow {
        config.workflow = workflow.clone();
    }
    if !args.files.is_empty() {
        config.files = args.files.clone();
    }

    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_format.into());

    ensure_local(&args)?;
    tracing::info!("running in local mode, skipping cloud stack creation");

    let config = build_config(&args)?;
    let driver = AppBuilder::local(config).build().await?;

    let staged = stage_samples(&driver).await;
    tracing::info!(staged, files = driver.config().files.len(), "sample files staged");

    let report = driver.run().await;

    let counts = PipelineCounts::from_report(&report);
    tracing::info!(
        validated = counts.validated,
        rejected = counts.rejected,
        skipped = counts.skipped,
        executed = counts.executed,
        "run complete"
    );

    let table = driver.metadata_table().scan(&driver.config().table).await;
    println!("final {} table:", driver.config().table);
    println!("{}", serde_json::to_string_pretty(&table)?);

    if args.report {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use casino_offers_to_json::catalog::{DEFAULT_BASE_URL, OfferMonth, catalog};
use casino_offers_to_json::download::{DownloadOutcome, Downloader};
use casino_offers_to_json::{
    DEFAULT_MIN_COLS, ExtractOptions, ExtractionReport, PageSelection, extract_pdf_to_json,
};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "offers2json",
    version,
    about = "Turn casino offer PDFs into JSON offer records"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Extract one PDF into one JSON file.
    Extract(ExtractArgs),
    /// Extract every PDF in a directory.
    Batch(BatchArgs),
    /// Download a month of offer PDFs, optionally extracting each one.
    Fetch(FetchArgs),
}

#[derive(Debug, Args)]
struct TableArgs {
    /// Page selection like 1-3,5.
    #[arg(long)]
    pages: Option<String>,

    /// Minimum cells required per candidate table row.
    #[arg(long, default_value_t = DEFAULT_MIN_COLS)]
    min_cols: usize,

    /// List every warning instead of a summary.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Args)]
struct ExtractArgs {
    /// Input PDF path.
    #[arg(short, long)]
    input: PathBuf,

    /// Output JSON path.
    #[arg(short, long)]
    output: PathBuf,

    #[command(flatten)]
    table: TableArgs,
}

#[derive(Debug, Args)]
struct BatchArgs {
    #[arg(long, default_value = "pdfs")]
    input_dir: PathBuf,

    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    #[command(flatten)]
    table: TableArgs,
}

#[derive(Debug, Args)]
struct FetchArgs {
    /// Where downloaded PDFs are saved.
    #[arg(long, default_value = "pdfs")]
    pdf_dir: PathBuf,

    /// Extract each downloaded PDF into this directory.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Offer month as YYMM; defaults to next month.
    #[arg(long)]
    month: Option<String>,

    #[arg(long, env = "OFFERS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(flatten)]
    table: TableArgs,
}

fn parse_options(args: &TableArgs) -> Result<ExtractOptions> {
    let pages = args
        .pages
        .as_deref()
        .map(PageSelection::from_str)
        .transpose()
        .context("failed to parse --pages")?;

    Ok(ExtractOptions {
        pages,
        min_cols: args.min_cols,
    })
}

fn log_report(name: &str, report: &ExtractionReport, verbose: bool) {
    if report.warnings.is_empty() {
        return;
    }

    eprintln!("warning: {name}: {} issue(s) detected", report.warnings.len());
    if verbose {
        for warning in &report.warnings {
            eprintln!(
                "  - {:?} page={:?} table_id={:?}: {}",
                warning.code, warning.page, warning.table_id, warning.message
            );
        }
    }
}

fn extract_one(
    input: &Path,
    output: &Path,
    options: &ExtractOptions,
    verbose: bool,
) -> Result<bool> {
    let report = extract_pdf_to_json(input, output, options)
        .with_context(|| format!("failed to extract offers from '{}'", input.display()))?;
    let name = input.display().to_string();
    log_report(&name, &report, verbose);

    if report.row_count == 0 {
        warn!(input = %name, "no offer table data found; nothing written");
        return Ok(false);
    }
    info!(
        input = %name,
        output = %output.display(),
        rows = report.row_count,
        tables = report.table_count,
        "offers extracted"
    );
    Ok(true)
}

fn json_path_for(output_dir: &Path, pdf: &Path) -> PathBuf {
    let mut name = pdf.file_stem().unwrap_or_default().to_os_string();
    name.push(".json");
    output_dir.join(name)
}

fn pdf_files_sorted(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = fs::read_dir(dir)
        .with_context(|| format!("failed to read '{}'", dir.display()))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
        })
        .collect::<Vec<_>>();
    files.sort_by(|left, right| left.file_stem().cmp(&right.file_stem()));
    Ok(files)
}

fn run_extract(args: &ExtractArgs) -> Result<bool> {
    let options = parse_options(&args.table)?;
    extract_one(&args.input, &args.output, &options, args.table.verbose)
}

fn run_batch(args: &BatchArgs) -> Result<usize> {
    let options = parse_options(&args.table)?;
    let files = pdf_files_sorted(&args.input_dir)?;
    if files.is_empty() {
        anyhow::bail!("no PDF files found in '{}'", args.input_dir.display());
    }

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("failed to create '{}'", args.output_dir.display()))?;
    info!(count = files.len(), dir = %args.input_dir.display(), "found PDF files to process");

    let mut written = 0;
    for pdf in &files {
        let output = json_path_for(&args.output_dir, pdf);
        match extract_one(pdf, &output, &options, args.table.verbose) {
            Ok(true) => written += 1,
            Ok(false) => {}
            Err(error) => eprintln!("error: {error:#}"),
        }
    }
    Ok(written)
}

fn run_fetch(args: &FetchArgs) -> Result<usize> {
    let options = parse_options(&args.table)?;
    let month = match args.month.as_deref() {
        Some(value) => OfferMonth::from_str(value).map_err(|error| anyhow!(error))?,
        None => OfferMonth::next(),
    };
    let entries = catalog(&args.base_url, month).context("failed to build offer catalog")?;
    let downloader = Downloader::new()?;

    fs::create_dir_all(&args.pdf_dir)
        .with_context(|| format!("failed to create '{}'", args.pdf_dir.display()))?;
    if let Some(output_dir) = &args.output_dir {
        fs::create_dir_all(output_dir)
            .with_context(|| format!("failed to create '{}'", output_dir.display()))?;
    }
    info!(documents = entries.len(), %month, "processing offer documents");

    let mut downloaded = 0;
    for entry in &entries {
        let pdf_path = args.pdf_dir.join(entry.file_name("pdf"));
        let bytes = match downloader.fetch_pdf(&entry.url) {
            Ok(DownloadOutcome::Pdf(bytes)) => bytes,
            Ok(DownloadOutcome::Skipped {
                status,
                content_type,
            }) => {
                warn!(code = %entry.code, status, content_type = %content_type, "not a PDF; skipped");
                continue;
            }
            Err(error) => {
                warn!(code = %entry.code, error = %error, "download failed; skipped");
                continue;
            }
        };

        fs::write(&pdf_path, bytes)
            .with_context(|| format!("failed to write '{}'", pdf_path.display()))?;
        downloaded += 1;
        info!(code = %entry.code, path = %pdf_path.display(), "downloaded");

        if let Some(output_dir) = &args.output_dir {
            let output = output_dir.join(entry.file_name("json"));
            if let Err(error) = extract_one(&pdf_path, &output, &options, args.table.verbose) {
                eprintln!("error: {error:#}");
            }
        }
    }
    Ok(downloaded)
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("casino_offers_to_json=warn,offers2json=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    let outcome = match &cli.command {
        Commands::Extract(args) => run_extract(args).map(|written| if written { 0 } else { 2 }),
        Commands::Batch(args) => run_batch(args).map(|_| 0),
        Commands::Fetch(args) => run_fetch(args).map(|_| 0),
    };

    match outcome {
        Ok(code) => ExitCode::from(code),
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(1)
        }
    }
}

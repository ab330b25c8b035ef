//! Command-line interface.
//!
//! Usage: `pads -a "doe, j" -b apj -y 2000-2001 --print-row`

use crate::backend::Backend;
use crate::client::AdsClient;
use crate::error::{PadsError, Result};
use crate::logging;
use crate::output::{render, row_line, select_rows, OutputMode, Row};
use crate::query::{Constraints, YearRange, DEFAULT_ROWS};
use crate::sandbox::Sandbox;
use crate::types::Sort;
use clap::{Args, Parser};
use std::io::Write;

#[derive(Debug, Parser)]
#[command(
    name = "pads",
    about = "Query the ADS database.",
    version,
    after_help = "Example: pads -a \"doe, j\" -b apj -y 2000-2001 --print-row"
)]
pub struct Cli {
    #[command(flatten)]
    pub query: QueryArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Only output the record in this row (1-based, as listed by --print-row)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub row: Option<u32>,

    /// API token (overrides ADS_API_TOKEN / ADS_DEV_KEY and ~/.ads/dev_key)
    #[arg(long)]
    pub token: Option<String>,

    /// Query an offline sandbox instead of the ADS API
    #[arg(long)]
    pub debug: bool,

    /// Log requests and responses to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments for ADS query control.
#[derive(Debug, Args)]
#[command(next_help_heading = "Query arguments")]
pub struct QueryArgs {
    /// Author search string, e.g. "doe, john"
    #[arg(short, long)]
    pub author: Option<String>,

    /// Bibstem search string, e.g. apj
    #[arg(short, long)]
    pub bibstem: Option<String>,

    /// ADS bibcode search string
    #[arg(short = 'c', long)]
    pub bibcode: Option<String>,

    /// Full text search, e.g. gravity
    #[arg(short, long)]
    pub full: Option<String>,

    /// Number of rows to fetch
    #[arg(short = 'n', long, default_value_t = DEFAULT_ROWS, value_parser = clap::value_parser!(u32).range(1..))]
    pub rows: u32,

    /// Sort string, e.g. "citation_count desc"
    #[arg(short, long, default_value = "citation_count desc")]
    pub sort: Sort,

    /// Year or year range, e.g. 2000, 2000-2001, 2010-, -1999 (default: current year)
    #[arg(short, long, allow_hyphen_values = true)]
    pub year: Option<YearRange>,
}

/// Output selection; exactly one is required.
#[derive(Debug, Args)]
#[command(next_help_heading = "Output (pick one)")]
#[group(required = true, multiple = false)]
pub struct OutputArgs {
    /// Print a row (number, bibcode, first author, title) for each result
    #[arg(long, alias = "print_row")]
    pub print_row: bool,

    /// Print the bibcode of each result
    #[arg(long, alias = "print_bibcode")]
    pub print_bibcode: bool,

    /// Print the full abstract
    #[arg(long, alias = "print_abstract")]
    pub print_abstract: bool,

    /// Print the BibTeX entry
    #[arg(long, alias = "print_bibtex")]
    pub print_bibtex: bool,

    /// Print the ADS URL of the abstract page
    #[arg(long, alias = "print_url_abs")]
    pub print_url_abs: bool,

    /// Print the ADS URL for the downloadable full text
    #[arg(long, alias = "print_url_pdf")]
    pub print_url_pdf: bool,

    /// Choose a result from an interactive menu and print its BibTeX
    #[arg(long)]
    pub pick: bool,
}

/// What to do with the search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Print(OutputMode),
    Pick,
}

impl OutputArgs {
    pub fn action(&self) -> Action {
        let modes = [
            (self.print_row, OutputMode::Row),
            (self.print_bibcode, OutputMode::Bibcode),
            (self.print_abstract, OutputMode::Abstract),
            (self.print_bibtex, OutputMode::Bibtex),
            (self.print_url_abs, OutputMode::UrlAbs),
            (self.print_url_pdf, OutputMode::UrlPdf),
        ];
        modes
            .into_iter()
            .find_map(|(set, mode)| set.then_some(Action::Print(mode)))
            .unwrap_or(Action::Pick)
    }
}

impl Cli {
    /// The query constraint set described by the flags.
    pub fn constraints(&self) -> Constraints {
        let q = &self.query;
        Constraints {
            author: q.author.clone(),
            bibstem: q.bibstem.clone(),
            bibcode: q.bibcode.clone(),
            full: q.full.clone(),
            year: Some(q.year.unwrap_or_else(YearRange::current)),
            rows: q.rows,
            sort: q.sort.clone(),
        }
    }
}

/// Search once through `backend` and write the requested output to `out`.
///
/// `choose` is only called for `--pick`, with the row lines to choose from.
pub async fn execute<B, W, C>(cli: &Cli, backend: &B, out: &mut W, choose: C) -> Result<()>
where
    B: Backend + ?Sized,
    W: Write,
    C: FnOnce(&[String]) -> Result<Option<usize>>,
{
    let constraints = cli.constraints();
    let response = backend.search(&constraints).await?;
    tracing::info!(
        returned = response.papers.len(),
        num_found = response.num_found,
        "results"
    );

    let rows = select_rows(&response.papers, cli.row.map(|r| r as usize));
    match cli.output.action() {
        Action::Print(mode) => render(mode, &rows, backend, out).await?,
        Action::Pick => pick(&rows, backend, out, choose).await?,
    }

    if let Some(limits) = response.rate_limits {
        eprintln!("{}", limits.report());
    }
    Ok(())
}

/// Let the user choose one row, then print its BibTeX.
async fn pick<B, W, C>(rows: &[Row<'_>], backend: &B, out: &mut W, choose: C) -> Result<()>
where
    B: Backend + ?Sized,
    W: Write,
    C: FnOnce(&[String]) -> Result<Option<usize>>,
{
    if rows.is_empty() {
        return Ok(());
    }

    let items: Vec<String> = rows.iter().map(row_line).collect();
    match choose(&items)? {
        Some(index) if index < rows.len() => {
            render(OutputMode::Bibtex, &rows[index..=index], backend, out).await
        }
        Some(index) => {
            tracing::warn!(index, available = rows.len(), "selection out of range");
            Ok(())
        }
        None => {
            tracing::debug!("selection cancelled");
            Ok(())
        }
    }
}

fn selection_error(e: dialoguer::Error) -> PadsError {
    let dialoguer::Error::IO(io) = e;
    PadsError::Io(io)
}

/// Terminal menu on stderr; `None` when the user cancels.
pub fn terminal_choice(items: &[String]) -> Result<Option<usize>> {
    dialoguer::Select::new()
        .with_prompt("Select a record")
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(selection_error)
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if cli.debug {
        execute(&cli, &Sandbox, &mut out, terminal_choice).await
    } else {
        let client = AdsClient::from_env(cli.token.clone())?;
        execute(&cli, &client, &mut out, terminal_choice).await
    }
}

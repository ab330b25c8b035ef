//! Output modes and line formatting.
//!
//! Every mode writes plain lines so the output can be piped into a selector
//! such as `fzf`. In row mode the first whitespace-separated token of each
//! line is the row number accepted by `--row`.

use crate::backend::Backend;
use crate::error::Result;
use crate::types::Paper;
use std::io::Write;

/// Column limit for the first author in row mode.
pub const AUTHOR_WIDTH: usize = 20;

/// Column limit for the title in row mode.
pub const TITLE_WIDTH: usize = 200;

/// What to print for each selected record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Row number, bibcode, first author and title.
    Row,
    /// Bibcode only.
    Bibcode,
    /// Full abstract.
    Abstract,
    /// BibTeX entry from the export endpoint.
    Bibtex,
    /// ADS abstract page URL.
    UrlAbs,
    /// ADS link-gateway URL for the full text.
    UrlPdf,
}

/// A search result together with its 1-based position in the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    pub number: usize,
    pub paper: &'a Paper,
}

/// Number the papers and keep either all of them or only row `row`.
///
/// A row beyond the end of the list selects nothing.
pub fn select_rows(papers: &[Paper], row: Option<usize>) -> Vec<Row<'_>> {
    let numbered = papers
        .iter()
        .enumerate()
        .map(|(i, paper)| Row { number: i + 1, paper });

    match row {
        None => numbered.collect(),
        Some(n) => {
            let selected: Vec<Row<'_>> = numbered.filter(|r| r.number == n).collect();
            if selected.is_empty() && !papers.is_empty() {
                tracing::warn!(row = n, available = papers.len(), "row out of range");
            }
            selected
        }
    }
}

/// Cut `text` to fewer than `limit` characters, marking the cut with `...`.
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() < limit {
        text.to_string()
    } else {
        let kept: String = text.chars().take(limit.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// One line of row-mode output.
pub fn row_line(row: &Row<'_>) -> String {
    let author = truncate(row.paper.first_author.as_deref().unwrap_or("-"), AUTHOR_WIDTH);
    format!(
        "{:>3} {:<19} {:<20} {}",
        row.number,
        row.paper.bibcode,
        author,
        truncate(&row.paper.title, TITLE_WIDTH)
    )
}

/// The line printed for `row` in a per-record mode; `None` for BibTeX,
/// which is exported in one batch.
pub fn line_for(mode: OutputMode, row: &Row<'_>) -> Option<String> {
    match mode {
        OutputMode::Row => Some(row_line(row)),
        OutputMode::Bibcode => Some(row.paper.bibcode.clone()),
        OutputMode::Abstract => Some(row.paper.abstract_text.clone().unwrap_or_default()),
        OutputMode::UrlAbs => Some(row.paper.abstract_url()),
        OutputMode::UrlPdf => Some(row.paper.pdf_url()),
        OutputMode::Bibtex => None,
    }
}

/// Write the selected rows in the given mode.
///
/// BibTeX mode makes a single export call for all selected rows, and none
/// when the selection is empty.
pub async fn render<B, W>(mode: OutputMode, rows: &[Row<'_>], backend: &B, out: &mut W) -> Result<()>
where
    B: Backend + ?Sized,
    W: Write,
{
    if mode == OutputMode::Bibtex {
        if rows.is_empty() {
            return Ok(());
        }
        let bibcodes: Vec<&str> = rows.iter().map(|r| r.paper.bibcode.as_str()).collect();
        let bibtex = backend.export_bibtex(&bibcodes).await?;
        write!(out, "{}", bibtex)?;
        if !bibtex.ends_with('\n') {
            writeln!(out)?;
        }
    } else {
        for line in rows.iter().filter_map(|row| line_for(mode, row)) {
            writeln!(out, "{}", line)?;
        }
    }
    out.flush()?;
    Ok(())
}

//! Fixed-width text tables
//!
//! Columns are chosen by the caller, so the same renderer serves the name
//! mapping table and the entry table. Each column is as wide as its widest
//! cell or header; cells are left-justified and joined by [`SEPARATOR`].
//!
//! Outcome sentinels (`Not found`, `Skipped`, `Error: ...`) appear in exactly
//! one column per table: `UniProt_ID` for [`TableLayout::Map`] and
//! `Recommended Name` for [`TableLayout::Entries`], whose key column echoes
//! the accession that was asked for.

use crate::batch::ResolvedRow;
use console::{measure_text_width, pad_str, Alignment};
use idmap_common::NOT_AVAILABLE;
use std::collections::HashMap;

/// Gap between columns
pub const SEPARATOR: &str = "  ";

pub const INPUT: &str = "Input";
pub const UNIPROT_ID: &str = "UniProt_ID";
pub const ACCESSION: &str = "UniProt ID";
pub const RECOMMENDED_NAME: &str = "Recommended Name";
pub const SHORT_NAMES: &str = "Short Names";
pub const ALTERNATIVE_NAMES: &str = "Alternative Names";
pub const GENE_NAMES: &str = "Gene Names";
pub const CHAINS: &str = "Chains";

/// Columns of `idmap map` output
pub const MAP_COLUMNS: &[&str] = &[INPUT, UNIPROT_ID, RECOMMENDED_NAME, GENE_NAMES];

/// Columns of `idmap entries` output
pub const ENTRY_COLUMNS: &[&str] = &[
    ACCESSION,
    RECOMMENDED_NAME,
    SHORT_NAMES,
    ALTERNATIVE_NAMES,
    GENE_NAMES,
    CHAINS,
];

/// Column set and sentinel placement of a batch result table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLayout {
    /// `idmap map`: input, accession, name and genes
    Map,
    /// `idmap entries`: the six-column name table
    Entries,
}

impl TableLayout {
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            TableLayout::Map => MAP_COLUMNS,
            TableLayout::Entries => ENTRY_COLUMNS,
        }
    }
}

/// A row that can be rendered by column name
pub trait TableRow {
    /// Cell text for `column`; unknown columns render as `N/A`
    fn cell(&self, column: &str) -> String;
}

impl TableRow for ResolvedRow {
    fn cell(&self, column: &str) -> String {
        let resolution = &self.resolution;
        match column {
            INPUT => self.input.clone(),
            UNIPROT_ID => resolution.accession_cell(),
            ACCESSION => match resolution.record() {
                Some(record) => record.accession.clone(),
                None => self.input.clone(),
            },
            RECOMMENDED_NAME => resolution.field(|r| &r.recommended_name),
            SHORT_NAMES => resolution.field(|r| &r.short_names),
            ALTERNATIVE_NAMES => resolution.field(|r| &r.alternative_names),
            GENE_NAMES => resolution.field(|r| &r.gene_names),
            CHAINS => resolution.field(|r| &r.chains),
            _ => NOT_AVAILABLE.to_string(),
        }
    }
}

/// Entry-table view of a row: unresolved outcomes are reported under
/// `Recommended Name` since the key column holds the input accession
pub struct EntryRow<'a>(pub &'a ResolvedRow);

impl TableRow for EntryRow<'_> {
    fn cell(&self, column: &str) -> String {
        let resolution = &self.0.resolution;
        match (column, resolution.record()) {
            (RECOMMENDED_NAME, None) => resolution.accession_cell(),
            _ => self.0.cell(column),
        }
    }
}

impl TableRow for HashMap<String, String> {
    fn cell(&self, column: &str) -> String {
        self.get(column)
            .cloned()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

/// Per-column display width over the header and every cell
pub fn column_widths<R: TableRow>(rows: &[R], columns: &[&str]) -> Vec<usize> {
    columns
        .iter()
        .map(|column| {
            rows.iter()
                .map(|row| measure_text_width(&row.cell(column)))
                .fold(measure_text_width(column), usize::max)
        })
        .collect()
}

fn render_line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad_str(cell.as_ref(), *width, Alignment::Left, None).into_owned())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Render rows as a header line, a dashed rule and one line per row
pub fn render<R: TableRow>(rows: &[R], columns: &[&str]) -> String {
    let widths = column_widths(rows, columns);

    let header = render_line(columns, &widths);
    let rule = "-".repeat(measure_text_width(&header));

    let mut out = String::with_capacity((rows.len() + 2) * (header.len() + 1));
    out.push_str(&header);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for row in rows {
        let cells: Vec<String> = columns.iter().map(|column| row.cell(column)).collect();
        out.push_str(&render_line(&cells, &widths));
        out.push('\n');
    }

    out
}

/// Render batch rows with the columns and sentinel placement of `layout`
pub fn render_resolved(rows: &[ResolvedRow], layout: TableLayout) -> String {
    match layout {
        TableLayout::Map => render(rows, layout.columns()),
        TableLayout::Entries => {
            let view: Vec<EntryRow<'_>> = rows.iter().map(EntryRow).collect();
            render(&view, layout.columns())
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use idmap_common::{Record, Resolution};

    fn pair(input: &str, id: &str) -> HashMap<String, String> {
        HashMap::from([
            ("Input".to_string(), input.to_string()),
            ("UniProt_ID".to_string(), id.to_string()),
        ])
    }

    #[test]
    fn test_widths_and_rule_length() {
        let rows = vec![pair("BRCA1", "P1"), pair("TP53", "Q2")];
        let columns = ["Input", "UniProt_ID"];

        assert_eq!(column_widths(&rows, &columns), vec![5, 10]);

        let text = render(&rows, &columns);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Input  UniProt_ID");
        assert_eq!(lines[1].len(), lines[0].len());
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "BRCA1  P1        ");
        assert_eq!(lines[3], "TP53   Q2        ");
    }

    #[test]
    fn test_wide_cells_widen_columns() {
        let rows = vec![pair("A", "a-very-long-identifier")];
        let text = render(&rows, &["UniProt_ID", "Input"]);
        let header = text.lines().next().unwrap();
        assert_eq!(header, "UniProt_ID              Input");
    }

    #[test]
    fn test_missing_column_renders_marker() {
        let rows = vec![pair("A", "P1")];
        let text = render(&rows, &["Input", "Chains"]);
        assert_eq!(text.lines().nth(2).unwrap(), "A      N/A   ");
    }

    #[test]
    fn test_width_counts_characters_not_bytes() {
        let rows = vec![pair("β-catenin", "P35222")];
        let widths = column_widths(&rows, &["Input"]);
        assert_eq!(widths, vec![9]);
    }

    #[test]
    fn test_resolved_row_cells() {
        let mut record = Record::new("P04637");
        record.recommended_name = "Cellular tumor antigen p53".to_string();

        let hit = ResolvedRow {
            input: "TP53".to_string(),
            resolution: Resolution::Resolved(record),
        };
        let miss = ResolvedRow {
            input: "Q99999".to_string(),
            resolution: Resolution::Failed("HTTP 500".to_string()),
        };

        assert_eq!(hit.cell(INPUT), "TP53");
        assert_eq!(hit.cell(UNIPROT_ID), "P04637");
        assert_eq!(hit.cell(RECOMMENDED_NAME), "Cellular tumor antigen p53");
        assert_eq!(hit.cell(CHAINS), "N/A");

        assert_eq!(miss.cell(ACCESSION), "Q99999");
        assert_eq!(miss.cell(RECOMMENDED_NAME), "N/A");
        assert_eq!(miss.cell(GENE_NAMES), "N/A");

        let entry = EntryRow(&miss);
        assert_eq!(entry.cell(ACCESSION), "Q99999");
        assert_eq!(entry.cell(RECOMMENDED_NAME), "Error: HTTP 500");
        assert_eq!(entry.cell(CHAINS), "N/A");
        assert_eq!(EntryRow(&hit).cell(RECOMMENDED_NAME), "Cellular tumor antigen p53");
    }

    #[test]
    fn test_map_table_shows_sentinel_once() {
        let rows = vec![ResolvedRow {
            input: "NOTAGENE".to_string(),
            resolution: Resolution::NotFound,
        }];

        let text = render_resolved(&rows, TableLayout::Map);
        let line = text.lines().nth(2).unwrap();

        assert_eq!(line.matches("Not found").count(), 1);
        assert_eq!(
            line,
            "NOTAGENE  Not found   N/A               N/A       "
        );
    }

    #[test]
    fn test_entry_table_reports_outcome_under_name() {
        let rows = vec![ResolvedRow {
            input: "Q00000".to_string(),
            resolution: Resolution::NotFound,
        }];

        let text = render_resolved(&rows, TableLayout::Entries);
        let line = text.lines().nth(2).unwrap();

        assert!(line.starts_with("Q00000      Not found         N/A"));
        assert_eq!(line.matches("Not found").count(), 1);
    }

    #[test]
    fn test_empty_rows_render_header_only() {
        let rows: Vec<ResolvedRow> = Vec::new();
        let text = render(&rows, MAP_COLUMNS);
        assert_eq!(text.lines().count(), 2);
    }
}

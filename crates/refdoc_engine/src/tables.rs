use scraper::ElementRef;

use crate::dom::{element_text, select_all, PageDom};

/// One tabular structure lifted out of the DOM: ordered header cells
/// (possibly empty) plus ordered data rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableModel {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableModel {
    /// Render as a markdown table: header row, dash separator sized to the
    /// header count, then data rows. `None` when there are no headers to
    /// size the separator against, or no data rows remain.
    pub fn to_markdown(&self) -> Option<String> {
        if self.headers.is_empty() || self.rows.is_empty() {
            return None;
        }
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(format!("| {} |", self.headers.join(" | ")));
        lines.push(format!("| {} |", vec!["---"; self.headers.len()].join(" | ")));
        for row in &self.rows {
            lines.push(format!("| {} |", row.join(" | ")));
        }
        Some(lines.join("\n"))
    }
}

/// True when the first collected row merely repeats the header cells.
/// Some markup duplicates the header text as a body row.
pub fn first_row_repeats_header(headers: &[String], rows: &[Vec<String>]) -> bool {
    !headers.is_empty() && rows.first().is_some_and(|row| row == headers)
}

/// Lift every table matching `selector` out of the page, in document order.
pub fn collect_tables(dom: &PageDom, selector: &str) -> Vec<TableModel> {
    dom.query_all(selector)
        .iter()
        .filter_map(read_table)
        .collect()
}

/// Render all tables on the page as markdown blocks joined by a blank line.
pub fn tables_markdown(dom: &PageDom, selector: &str) -> String {
    collect_tables(dom, selector)
        .iter()
        .filter_map(TableModel::to_markdown)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn read_table(table: &ElementRef<'_>) -> Option<TableModel> {
    let mut headers = cell_texts(table, "thead th");
    if headers.is_empty() {
        headers = cell_texts(table, "tr th");
    }

    let mut rows = Vec::new();
    for tr in select_all(table, "tr") {
        let cells: Vec<String> = select_all(&tr, "td,th")
            .iter()
            .map(element_text)
            .collect();
        if !cells.is_empty() {
            rows.push(cells);
        }
    }
    if rows.is_empty() {
        return None;
    }

    if first_row_repeats_header(&headers, &rows) {
        rows.remove(0);
    }

    Some(TableModel { headers, rows })
}

fn cell_texts(element: &ElementRef<'_>, selector: &str) -> Vec<String> {
    select_all(element, selector).iter().map(element_text).collect()
}

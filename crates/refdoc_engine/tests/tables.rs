use pretty_assertions::assert_eq;
use refdoc_engine::{collect_tables, tables_markdown, PageDom};

fn page(tables_html: &str) -> PageDom {
    PageDom::parse(&format!("<html><body>{tables_html}</body></html>"))
}

#[test]
fn header_duplicate_body_row_is_removed() {
    let dom = page(
        "<table>\
         <thead><tr><th>A</th><th>B</th></tr></thead>\
         <tbody><tr><td>1</td><td>2</td></tr></tbody>\
         </table>",
    );
    // The thead row is also collected as a body row and equals the header,
    // so exactly one data row survives.
    assert_eq!(
        tables_markdown(&dom, "table"),
        "| A | B |\n| --- | --- |\n| 1 | 2 |"
    );
}

#[test]
fn headers_fall_back_to_row_header_cells() {
    let dom = page(
        "<table>\
         <tr><th>Name</th><th>Type</th></tr>\
         <tr><td>id</td><td>string</td></tr>\
         </table>",
    );
    assert_eq!(
        tables_markdown(&dom, "table"),
        "| Name | Type |\n| --- | --- |\n| id | string |"
    );
}

#[test]
fn header_less_table_produces_no_output() {
    let dom = page(
        "<table>\
         <tr><td>1</td><td>2</td></tr>\
         <tr><td>3</td><td>4</td></tr>\
         </table>",
    );
    assert_eq!(tables_markdown(&dom, "table"), "");
}

#[test]
fn table_reduced_to_zero_data_rows_produces_no_output() {
    let dom = page("<table><thead><tr><th>A</th></tr></thead></table>");
    assert_eq!(tables_markdown(&dom, "table"), "");
}

#[test]
fn empty_rows_are_skipped() {
    let dom = page(
        "<table>\
         <thead><tr><th>A</th></tr></thead>\
         <tr></tr>\
         <tr><td>1</td></tr>\
         </table>",
    );
    let tables = collect_tables(&dom, "table");
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].rows, vec![vec!["1".to_string()]]);
}

#[test]
fn cell_text_is_whitespace_normalized() {
    let dom = page(
        "<table>\
         <thead><tr><th> Field  name </th></tr></thead>\
         <tr><td>an\n  <b>important</b>\n value</td></tr>\
         </table>",
    );
    assert_eq!(
        tables_markdown(&dom, "table"),
        "| Field name |\n| --- |\n| an important value |"
    );
}

#[test]
fn multiple_tables_become_separate_blocks_in_document_order() {
    let dom = page(
        "<table><thead><tr><th>A</th></tr></thead><tr><td>1</td></tr></table>\
         <p>between</p>\
         <table><thead><tr><th>B</th></tr></thead><tr><td>2</td></tr></table>",
    );
    assert_eq!(
        tables_markdown(&dom, "table"),
        "| A |\n| --- |\n| 1 |\n\n| B |\n| --- |\n| 2 |"
    );
}

use pretty_assertions::assert_eq;
use refdoc_engine::{assemble_document, render_section, PageSection, SECTION_SEPARATOR};

fn section(title: &str) -> PageSection {
    PageSection {
        title: title.to_string(),
        category_id: "20904".to_string(),
        path: "order.get".to_string(),
        method_type: "GET".to_string(),
        source_url: "https://docs.example/api.htm#/api?cid=20904&path=order.get".to_string(),
        code_blocks: None,
        tables: None,
        body: "Returns one order.".to_string(),
    }
}

#[test]
fn minimal_section_renders_heading_metadata_and_content() {
    let rendered = render_section(&section("Get Order"));
    assert_eq!(
        rendered,
        "# Get Order\n\n\
         - **Category ID (cid):** `20904`\n\n\
         - **Path:** `order.get`\n\n\
         - **Method(s):** `GET`\n\n\
         - **Source:** https://docs.example/api.htm#/api?cid=20904&path=order.get\n\n\n\
         ## Page Content\nReturns one order."
    );
}

#[test]
fn code_and_table_subsections_appear_only_when_non_empty() {
    let mut full = section("Get Order");
    full.code_blocks = Some("```text\nGET /orders/42\n```".to_string());
    full.tables = Some("| A |\n| --- |\n| 1 |".to_string());

    let rendered = render_section(&full);
    let code_at = rendered.find("## Code / HTTP blocks").unwrap();
    let tables_at = rendered.find("## Tables").unwrap();
    let content_at = rendered.find("## Page Content").unwrap();
    assert!(code_at < tables_at && tables_at < content_at);
    assert!(rendered.contains("## Code / HTTP blocks\n```text\nGET /orders/42\n```"));
    assert!(rendered.contains("## Tables\n| A |"));

    let bare = render_section(&section("Get Order"));
    assert!(!bare.contains("## Code / HTTP blocks"));
    assert!(!bare.contains("## Tables"));
    assert!(bare.contains("## Page Content"));
}

#[test]
fn document_joins_sections_in_visit_order() {
    let document = assemble_document(&[section("Get Order"), section("List Products")]);
    let parts: Vec<&str> = document.split(SECTION_SEPARATOR).collect();
    assert_eq!(parts.len(), 2);
    assert!(parts[0].starts_with("# Get Order"));
    assert!(parts[1].starts_with("# List Products"));
}

#[test]
fn empty_section_list_assembles_to_an_empty_document() {
    assert_eq!(assemble_document(&[]), "");
}

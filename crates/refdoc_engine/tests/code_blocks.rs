use pretty_assertions::assert_eq;
use refdoc_engine::{extract_code_blocks, is_example_block, PageDom};

fn page(body: &str) -> PageDom {
    PageDom::parse(&format!("<html><body>{body}</body></html>"))
}

#[test]
fn http_request_lines_are_classified_as_examples() {
    assert!(is_example_block("GET /path/to/resource"));
    assert!(is_example_block("POST /v1/orders?expand=items"));
    assert!(!is_example_block("This endpoint returns JSON"));
}

#[test]
fn matching_fragments_are_fenced_in_page_order() {
    let dom = page(
        "<pre>GET /orders/42</pre>\
         <p>prose</p>\
         <pre>curl https://api.example.com/orders</pre>",
    );
    assert_eq!(
        extract_code_blocks(&dom),
        "```text\nGET /orders/42\n```\n\n```text\ncurl https://api.example.com/orders\n```"
    );
}

#[test]
fn non_matching_fragments_are_discarded() {
    let dom = page("<pre>let x = compute();</pre><code>a JSON object</code>");
    assert_eq!(extract_code_blocks(&dom), "");
}

#[test]
fn fragment_text_is_trimmed_but_inner_layout_is_kept() {
    let dom = page("<pre>\n  GET /a\n  Host: api.example.com\n</pre>");
    assert_eq!(
        extract_code_blocks(&dom),
        "```text\nGET /a\n  Host: api.example.com\n```"
    );
}

#[test]
fn code_nested_in_pre_is_scanned_twice() {
    // Both the pre and its code child match the selector.
    let dom = page("<pre><code>DELETE /items/7</code></pre>");
    assert_eq!(
        extract_code_blocks(&dom),
        "```text\nDELETE /items/7\n```\n\n```text\nDELETE /items/7\n```"
    );
}

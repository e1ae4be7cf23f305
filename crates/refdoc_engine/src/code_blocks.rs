use std::sync::LazyLock;

use regex::Regex;

use crate::dom::PageDom;

/// `GET /some/path` style signature: an HTTP method token followed by a
/// rooted path.
static HTTP_EXAMPLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(GET|POST|PUT|PATCH|DELETE|HEAD|OPTIONS)\b\s+/").unwrap()
});

const SHELL_PREFIX: &str = "curl ";

/// True when a pre/code fragment reads like an HTTP or shell example.
///
/// Precision over recall: fragments matching neither signature are
/// discarded rather than guessed at.
pub fn is_example_block(text: &str) -> bool {
    HTTP_EXAMPLE_RE.is_match(text) || text.starts_with(SHELL_PREFIX)
}

/// Wrap every matching pre/code fragment as a fenced text block, joined by
/// blank lines in page order. Empty string when nothing matches.
pub fn extract_code_blocks(dom: &PageDom) -> String {
    let mut blocks = Vec::new();
    for element in dom.query_all("pre, code") {
        let raw: String = element.text().collect();
        let text = raw.trim();
        if is_example_block(text) {
            blocks.push(format!("```text\n{text}\n```"));
        }
    }
    blocks.join("\n\n")
}

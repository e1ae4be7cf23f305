use crate::code_blocks::extract_code_blocks;
use crate::config::HarvestConfig;
use crate::content_root::resolve_content_root;
use crate::convert::MarkdownConverter;
use crate::dom::{element_text, PageDom};
use crate::render::{RenderError, Renderer};
use crate::tables::tables_markdown;
use crate::types::{PageLink, PageSection};

/// Visit one discovered link and lift a section out of the rendered page:
/// navigate, settle, resolve title and content root, convert the prose,
/// run the table and code-block extractors against the DOM snapshot.
///
/// There is no retry; a render failure propagates and aborts the run.
pub async fn process_page(
    renderer: &dyn Renderer,
    converter: &dyn MarkdownConverter,
    config: &HarvestConfig,
    link: &PageLink,
) -> Result<PageSection, RenderError> {
    let source_url = format!("{}{}", config.index_url, link.href);
    let rendered = renderer.render(&source_url, config.page_settle).await?;
    let dom = PageDom::parse(&rendered.html);

    let title = resolve_title(&dom, link);
    let root_html = resolve_content_root(&dom, &config.content_root_selectors);
    let body = converter.to_markdown(&root_html);
    let tables = non_empty(tables_markdown(&dom, &config.table_selector));
    let code_blocks = non_empty(extract_code_blocks(&dom));

    Ok(PageSection {
        title,
        category_id: link.category_id.clone(),
        path: link.path.clone(),
        method_type: link.method_type.clone(),
        source_url,
        code_blocks,
        tables,
        body,
    })
}

/// First heading text, then the link's path, then the raw locator.
fn resolve_title(dom: &PageDom, link: &PageLink) -> String {
    if let Some(heading) = dom.query_one("h1, h2") {
        let text = element_text(&heading);
        if !text.is_empty() {
            return text;
        }
    }
    if !link.path.is_empty() {
        return link.path.clone();
    }
    link.href.clone()
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Render a section in its fixed order: heading line, metadata lines, the
/// optional code and table subsections, the mandatory page content.
pub fn render_section(section: &PageSection) -> String {
    let mut pieces = Vec::with_capacity(8);
    pieces.push(format!("# {}", section.title));
    pieces.push(format!("- **Category ID (cid):** `{}`", section.category_id));
    pieces.push(format!("- **Path:** `{}`", section.path));
    pieces.push(format!("- **Method(s):** `{}`", section.method_type));
    pieces.push(format!("- **Source:** {}\n", section.source_url));
    if let Some(code) = &section.code_blocks {
        pieces.push(format!("## Code / HTTP blocks\n{code}"));
    }
    if let Some(tables) = &section.tables {
        pieces.push(format!("## Tables\n{tables}"));
    }
    pieces.push(format!("## Page Content\n{}", section.body));
    pieces.join("\n\n")
}

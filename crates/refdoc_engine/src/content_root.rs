use crate::dom::PageDom;

/// Inner HTML of the first matching candidate region, falling back to the
/// whole rendered document when none match.
///
/// The candidate list is a priority chain, not a union: at most one region
/// is returned. Documentation sites vary in markup; the chain tolerates
/// structural drift without per-site configuration.
pub fn resolve_content_root(dom: &PageDom, candidates: &[String]) -> String {
    for selector in candidates {
        if let Some(element) = dom.query_one(selector) {
            return element.inner_html();
        }
    }
    dom.content()
}

use std::collections::HashSet;

use url::form_urlencoded;

use crate::dom::PageDom;
use crate::types::PageLink;

/// What to look for on the index page and which links to keep.
#[derive(Debug, Clone)]
pub struct DiscoverySettings {
    /// Selector matching navigational link elements on the index page.
    pub link_selector: String,
    /// A candidate locator must begin with this prefix to be kept.
    pub link_prefix: String,
    /// Category allow-list; `None` (or an empty list) admits every category.
    pub category_filter: Option<Vec<String>>,
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            link_selector: r##"a[href^="#/api"]"##.to_string(),
            link_prefix: "#/api".to_string(),
            category_filter: None,
        }
    }
}

/// Collect, deduplicate and filter navigational links from the index page.
///
/// Deduplication is keyed on the raw locator string and preserves the order
/// of first occurrence; later duplicates are dropped. Locators that do not
/// carry the expected prefix, or whose category is not admitted, are dropped
/// silently.
pub fn discover_links(dom: &PageDom, settings: &DiscoverySettings) -> Vec<PageLink> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in dom.query_all(&settings.link_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if !seen.insert(href.to_string()) {
            continue;
        }
        if !href.starts_with(&settings.link_prefix) {
            continue;
        }
        let link = parse_link(href);
        if !category_admitted(&link.category_id, settings.category_filter.as_deref()) {
            continue;
        }
        links.push(link);
    }

    links
}

/// Recover `cid`, `path` and `methodType` from the query portion of a raw
/// locator such as `#/api?cid=20904&path=some.op&methodType=GET/POST`.
fn parse_link(href: &str) -> PageLink {
    let query = href.split_once('?').map(|(_, q)| q).unwrap_or("");

    let mut category_id = String::new();
    let mut path = String::new();
    let mut method_type = String::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "cid" => category_id = value.into_owned(),
            "path" => path = value.into_owned(),
            "methodType" => method_type = value.into_owned(),
            _ => {}
        }
    }

    PageLink {
        href: href.to_string(),
        category_id,
        path,
        method_type,
    }
}

/// A link passes when no allow-list is configured or its category is listed.
fn category_admitted(category_id: &str, filter: Option<&[String]>) -> bool {
    match filter {
        Some(allowed) if !allowed.is_empty() => allowed.iter().any(|cid| cid == category_id),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_link;

    #[test]
    fn query_parameters_are_recovered_from_fragment_locators() {
        let link = parse_link("#/api?cid=20904&path=aliexpress.product.query&methodType=GET%2FPOST");
        assert_eq!(link.category_id, "20904");
        assert_eq!(link.path, "aliexpress.product.query");
        assert_eq!(link.method_type, "GET/POST");
    }

    #[test]
    fn missing_query_yields_empty_parameters() {
        let link = parse_link("#/api");
        assert_eq!(link.category_id, "");
        assert_eq!(link.path, "");
        assert_eq!(link.method_type, "");
    }
}

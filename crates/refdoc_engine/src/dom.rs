use scraper::{ElementRef, Html, Selector};

/// Owned DOM snapshot of one rendered page.
///
/// Mirrors the renderer's query surface: query one element, query all,
/// read the full document. Extractors run against this snapshot, never
/// against already-converted markdown.
pub struct PageDom {
    doc: Html,
}

impl PageDom {
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
        }
    }

    /// First element matching `selector`; invalid selectors match nothing.
    pub fn query_one(&self, selector: &str) -> Option<ElementRef<'_>> {
        let sel = Selector::parse(selector).ok()?;
        self.doc.select(&sel).next()
    }

    /// All elements matching `selector`, in document order; invalid
    /// selectors match nothing.
    pub fn query_all(&self, selector: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(selector) {
            Ok(sel) => self.doc.select(&sel).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Full serialized document HTML.
    pub fn content(&self) -> String {
        self.doc.root_element().html()
    }
}

/// Descendants of `element` matching `selector`, in document order.
pub fn select_all<'a>(element: &ElementRef<'a>, selector: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(selector) {
        Ok(sel) => element.select(&sel).collect(),
        Err(_) => Vec::new(),
    }
}

/// Visible text of an element with runs of whitespace collapsed to single
/// spaces. Suited to cells and headings, not preformatted fragments.
pub fn element_text(element: &ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

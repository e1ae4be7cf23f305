use std::time::Duration;

use chardetng::EncodingDetector;
use encoding_rs::Encoding;

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::types::FetchError;

/// A page as seen after navigation and the settle delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub html: String,
    pub url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("could not decode page bytes as {encoding}")]
    Decode { encoding: String },
}

/// Capability interface over the page-rendering backend.
///
/// `render` navigates to `url`, waits the fixed settle duration so
/// client-side rendering can finish, and returns the document HTML. These
/// are the only suspension points in the pipeline; everything downstream is
/// synchronous.
#[async_trait::async_trait]
pub trait Renderer: Send + Sync {
    async fn render(&self, url: &str, settle: Duration) -> Result<RenderedPage, RenderError>;
}

/// HTTP-backed renderer: fetch the resource, honor the settle delay, decode
/// the body to UTF-8. Stands in for a browser-automation backend behind the
/// same interface.
#[derive(Debug, Clone)]
pub struct HttpRenderer {
    fetcher: ReqwestFetcher,
}

impl HttpRenderer {
    pub fn new(settings: FetchSettings) -> Self {
        Self {
            fetcher: ReqwestFetcher::new(settings),
        }
    }
}

#[async_trait::async_trait]
impl Renderer for HttpRenderer {
    async fn render(&self, url: &str, settle: Duration) -> Result<RenderedPage, RenderError> {
        let page = self.fetcher.fetch(url).await?;
        if !settle.is_zero() {
            tokio::time::sleep(settle).await;
        }
        let html = decode_page(&page.bytes, page.content_type.as_deref())?;
        Ok(RenderedPage {
            html,
            url: page.final_url,
        })
    }
}

/// Decode raw page bytes into UTF-8: BOM -> Content-Type charset ->
/// chardetng detection.
fn decode_page(bytes: &[u8], content_type: Option<&str>) -> Result<String, RenderError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(label) = content_type.and_then(header_charset) {
        if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
            return decode_with(bytes, encoding);
        }
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    decode_with(bytes, detector.guess(None, true))
}

fn header_charset(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .filter_map(|part| {
            let part = part.trim();
            part.strip_prefix("charset=")
                .or_else(|| part.strip_prefix("Charset="))
                .or_else(|| part.strip_prefix("CHARSET="))
                .map(|v| v.trim_matches([' ', '"', '\''].as_ref()))
        })
        .next()
        .map(|s| s.to_string())
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> Result<String, RenderError> {
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(RenderError::Decode {
            encoding: encoding.name().to_string(),
        });
    }
    Ok(text.into_owned())
}

use refdoc_logging::{refdoc_info, refdoc_warn};
use thiserror::Error;

use crate::assemble::{assemble_document, write_document};
use crate::config::{ConfigError, HarvestConfig};
use crate::convert::{Html2MdConverter, MarkdownConverter};
use crate::dom::PageDom;
use crate::links::discover_links;
use crate::page::process_page;
use crate::persist::PersistError;
use crate::render::{HttpRenderer, RenderError, Renderer};
use crate::types::{RunOutcome, RunSummary};

#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("configuration rejected: {0}")]
    Config(#[from] ConfigError),
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
    #[error("persist failed: {0}")]
    Persist(#[from] PersistError),
    #[error("could not start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Sequential harvest over one documentation site.
///
/// Pages are visited strictly one after another; the section list is the
/// only state carried across visits and the single output write happens
/// after every page has succeeded.
pub struct Harvester {
    config: HarvestConfig,
    renderer: Box<dyn Renderer>,
    converter: Box<dyn MarkdownConverter>,
}

impl Harvester {
    /// Harvester with the HTTP renderer and the html2md converter.
    pub fn new(config: HarvestConfig) -> Self {
        let renderer = Box::new(HttpRenderer::new(config.fetch.clone()));
        Self::with_backends(config, renderer, Box::new(Html2MdConverter))
    }

    /// Harvester over explicit renderer/converter backends.
    pub fn with_backends(
        config: HarvestConfig,
        renderer: Box<dyn Renderer>,
        converter: Box<dyn MarkdownConverter>,
    ) -> Self {
        Self {
            config,
            renderer,
            converter,
        }
    }

    /// Run to completion on a caller-provided async context.
    pub async fn run(&self) -> Result<RunOutcome, HarvestError> {
        self.config.validate()?;

        refdoc_info!("Opening docs index {}", self.config.index_url);
        let index_page = self
            .renderer
            .render(&self.config.index_url, self.config.index_settle)
            .await?;
        let links = discover_links(&PageDom::parse(&index_page.html), &self.config.discovery);

        if links.is_empty() {
            refdoc_warn!(
                "No documentation links found; the link selector may need adjusting for this site"
            );
            return Ok(RunOutcome::NoPages);
        }

        let total = links.len();
        refdoc_info!("Found {total} documentation pages");

        let mut sections = Vec::with_capacity(total);
        for (i, link) in links.iter().enumerate() {
            let section = process_page(
                self.renderer.as_ref(),
                self.converter.as_ref(),
                &self.config,
                link,
            )
            .await?;
            refdoc_info!("[{}/{}] {}", i + 1, total, section.title);
            sections.push(section);
        }

        let document = assemble_document(&sections);
        let bytes_written = write_document(&self.config.output_path, &document)?;
        refdoc_info!(
            "Wrote {} pages to {}",
            sections.len(),
            self.config.output_path.display()
        );

        Ok(RunOutcome::Completed(RunSummary {
            page_count: sections.len(),
            output_path: self.config.output_path.clone(),
            bytes_written,
        }))
    }

    /// Run on an engine-owned runtime, for callers without an async context.
    pub fn run_blocking(&self) -> Result<RunOutcome, HarvestError> {
        let runtime = tokio::runtime::Runtime::new().map_err(HarvestError::Runtime)?;
        runtime.block_on(self.run())
    }
}

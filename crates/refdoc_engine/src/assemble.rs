use std::path::Path;

use crate::page::render_section;
use crate::persist::{AtomicFileWriter, PersistError};
use crate::types::PageSection;

/// Fixed horizontal-rule separator between page sections.
pub const SECTION_SEPARATOR: &str = "\n\n---\n\n";

/// Join all sections, in visit order, into the final document.
pub fn assemble_document(sections: &[PageSection]) -> String {
    sections
        .iter()
        .map(render_section)
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR)
}

/// Write the assembled document in one atomic step, replacing any previous
/// artifact at `path`. Returns the number of bytes written.
pub fn write_document(path: &Path, document: &str) -> Result<u64, PersistError> {
    let writer = AtomicFileWriter::new(path.to_path_buf());
    writer.write(document)?;
    Ok(document.len() as u64)
}

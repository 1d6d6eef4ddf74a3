//! File I/O: loading source documents and writing assembled output.
//!
//! # Examples
//!
//! ```no_run
//! use pdfbind::io::load_document;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), pdfbind::LoadError> {
//! let doc = load_document(Path::new("input.pdf")).await?;
//! println!("{} pages, {} bytes", doc.page_count(), doc.file_size());
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod writer;

pub use loader::{LoadResult, PdfLoader, SourceDocument};
pub use writer::{DocumentWriter, WriteOptions};

use std::path::Path;

/// Load a single PDF with default settings.
///
/// Convenience wrapper around [`PdfLoader::load`].
pub async fn load_document(path: &Path) -> LoadResult {
    PdfLoader::new().load(path).await
}

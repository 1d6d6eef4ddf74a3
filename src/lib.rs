//! pdfbind - Page-level assembly and disassembly of PDF documents.
//!
//! This library is the engine behind a PDF merge/split tool: it loads source
//! documents, takes an ordered sequence of (document, page) references, and
//! produces new structurally valid PDF files. It supports:
//!
//! - Merging pages from any number of documents, interleaved in any order
//! - Splitting one document into fixed-size chunks or explicit page ranges
//! - Atomic output writes (temp file + rename)
//! - Progress and cancellation hooks for a UI shell
//! - Comprehensive error handling
//!
//! # Examples
//!
//! ## Merge
//!
//! ```no_run
//! use pdfbind::assemble::merge;
//! use pdfbind::io::load_document;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let report = load_document(Path::new("report.pdf")).await?;
//! let appendix = load_document(Path::new("appendix.pdf")).await?;
//!
//! let mut pages = report.pages();
//! pages.extend(appendix.pages());
//!
//! let outcome = merge(&pages, Path::new("combined.pdf")).await?;
//! println!("Created {} page document", outcome.page_count);
//! # Ok(())
//! # }
//! ```
//!
//! ## Split
//!
//! ```no_run
//! use pdfbind::assemble::split;
//! use pdfbind::io::load_document;
//! use pdfbind::plan::SplitSpec;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = load_document(Path::new("big.pdf")).await?;
//!
//! let outcome = split(&doc, &SplitSpec::fixed_size(10), Path::new("parts")).await?;
//! println!("Wrote {} part files", outcome.part_count());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assemble;
pub mod error;
pub mod io;
pub mod plan;
pub mod utils;

// Re-export commonly used types
pub use assemble::{MergeOutcome, SplitOutcome, merge, split};
pub use error::{AssemblyError, LoadError, Result};
pub use io::{PdfLoader, SourceDocument};
pub use plan::{AssemblyPlan, PageRef, PageSpan, SplitSpec};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

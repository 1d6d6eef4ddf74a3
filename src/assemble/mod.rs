//! Document assembly: merging pages into one output and splitting one
//! document into several.
//!
//! The two operations share one code path: an ordered list of
//! [`PageRef`](crate::plan::PageRef)s is copied page by page into a fresh
//! document, which is then written atomically. Progress and cancellation
//! hooks are polled between page copies, so a UI shell can drive a progress
//! bar and a cancel button without owning any of the machinery here.
//!
//! # Examples
//!
//! ```no_run
//! use pdfbind::assemble::merge;
//! use pdfbind::io::load_document;
//! use std::path::Path;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let a = load_document(Path::new("a.pdf")).await?;
//! let b = load_document(Path::new("b.pdf")).await?;
//!
//! let mut pages = a.pages();
//! pages.extend(b.pages());
//! let outcome = merge(&pages, Path::new("combined.pdf")).await?;
//! println!("wrote {} pages", outcome.page_count);
//! # Ok(())
//! # }
//! ```

mod builder;
pub mod merge;
pub mod split;

pub use merge::{merge, merge_with_hooks};
pub use split::{split, split_with_hooks};

use crate::error::{AssemblyError, Result};
use crate::plan::PageRef;
use builder::OutputBuilder;
use lopdf::Document;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Result of a completed merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeOutcome {
    /// Final path of the written document.
    pub output_path: PathBuf,
    /// Number of pages in the output.
    pub page_count: usize,
}

/// Result of a completed split.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitOutcome {
    /// Paths of the written part files, in part order. Empty when every
    /// requested range fell outside the document.
    pub outputs: Vec<PathBuf>,
}

impl SplitOutcome {
    /// Number of part files written.
    pub fn part_count(&self) -> usize {
        self.outputs.len()
    }
}

/// Copy `pages` in order into a fresh document.
///
/// The cancel hook is polled before each page copy; the page hook fires
/// after each copy with the 1-based count of pages done.
pub(crate) fn assemble_pages<P, C>(
    pages: &[PageRef],
    on_page: &mut P,
    is_cancelled: &C,
) -> Result<Document>
where
    P: FnMut(usize, &PageRef),
    C: Fn() -> bool,
{
    let mut builder = OutputBuilder::new();
    for (done, page) in pages.iter().enumerate() {
        if is_cancelled() {
            return Err(AssemblyError::Cancelled);
        }
        builder.append_page(page)?;
        on_page(done + 1, page);
    }
    Ok(builder.finish())
}

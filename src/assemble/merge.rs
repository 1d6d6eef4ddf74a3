//! Merging pages from any number of documents into one output file.

use crate::assemble::{MergeOutcome, assemble_pages};
use crate::error::{AssemblyError, Result};
use crate::io::DocumentWriter;
use crate::plan::PageRef;
use std::path::Path;

/// Merge `pages`, in order, into a single PDF at `output_path`.
///
/// The output page count always equals `pages.len()`; a page that cannot be
/// copied fails the whole operation rather than being skipped. The file is
/// written atomically, so `output_path` either holds the complete result or
/// is untouched.
///
/// # Errors
///
/// - [`AssemblyError::EmptyInput`] when `pages` is empty.
/// - [`AssemblyError::SourceUnavailable`] when a page object is missing or
///   malformed.
/// - [`AssemblyError::Io`] when the output cannot be written.
pub async fn merge(pages: &[PageRef], output_path: &Path) -> Result<MergeOutcome> {
    merge_with_hooks(pages, output_path, |_, _| (), || false).await
}

/// [`merge`] with progress and cancellation hooks.
///
/// `on_progress` fires after each page copy with the number of pages done
/// and a label for the page just copied. `is_cancelled` is polled before
/// each copy and once more before the write; when it returns `true` the
/// operation stops with [`AssemblyError::Cancelled`] and no file is created.
pub async fn merge_with_hooks<P, C>(
    pages: &[PageRef],
    output_path: &Path,
    mut on_progress: P,
    is_cancelled: C,
) -> Result<MergeOutcome>
where
    P: FnMut(usize, &str),
    C: Fn() -> bool,
{
    if pages.is_empty() {
        return Err(AssemblyError::EmptyInput);
    }

    let document = assemble_pages(
        pages,
        &mut |done, page| on_progress(done, &page.label()),
        &is_cancelled,
    )?;

    if is_cancelled() {
        return Err(AssemblyError::Cancelled);
    }

    DocumentWriter::new().save(document, output_path).await?;

    Ok(MergeOutcome {
        output_path: output_path.to_path_buf(),
        page_count: pages.len(),
    })
}

//! Splitting one document into multiple part files.

use crate::assemble::{SplitOutcome, assemble_pages};
use crate::error::{AssemblyError, Result};
use crate::io::{DocumentWriter, SourceDocument};
use crate::plan::SplitSpec;
use std::path::Path;
use std::sync::Arc;

/// Split `source` into part files in `output_dir` according to `spec`.
///
/// Part files are named `{stem}_part{NNN}.pdf` after the source file's stem,
/// numbered from 1 with gapless, zero-padded numbering over the parts that
/// actually contain pages. Ranges that fall entirely outside the document
/// produce no file; if nothing remains, the result is `Ok` with an empty
/// output list. Existing files with the same names are overwritten.
///
/// # Errors
///
/// - [`AssemblyError::InvalidParameter`] for a zero chunk size.
/// - [`AssemblyError::Io`] when a part cannot be written. Parts already
///   written stay on disk; the failing part is never left behind partially.
pub async fn split(
    source: &Arc<SourceDocument>,
    spec: &SplitSpec,
    output_dir: &Path,
) -> Result<SplitOutcome> {
    split_with_hooks(source, spec, output_dir, |_, _| (), || false).await
}

/// [`split`] with progress and cancellation hooks.
///
/// `on_progress` fires after each part file is written with the number of
/// parts done and a label. `is_cancelled` is polled between page copies and
/// before each part; cancellation keeps parts already written and leaves no
/// partial file behind.
pub async fn split_with_hooks<P, C>(
    source: &Arc<SourceDocument>,
    spec: &SplitSpec,
    output_dir: &Path,
    mut on_progress: P,
    is_cancelled: C,
) -> Result<SplitOutcome>
where
    P: FnMut(usize, &str),
    C: Fn() -> bool,
{
    let plans = spec.resolve(source)?;
    let total = plans.len();
    let stem = source.file_stem();
    let writer = DocumentWriter::new();

    let mut outputs = Vec::with_capacity(total);
    for (index, plan) in plans.iter().enumerate() {
        if is_cancelled() {
            return Err(AssemblyError::Cancelled);
        }

        let document = assemble_pages(plan.pages(), &mut |_, _| (), &is_cancelled)?;
        let path = output_dir.join(part_file_name(&stem, index + 1));
        writer.save(document, &path).await?;
        outputs.push(path);
        on_progress(index + 1, &format!("part {} of {}", index + 1, total));
    }

    Ok(SplitOutcome { outputs })
}

/// `{stem}_part{NNN}.pdf`: 1-based, zero-padded to at least three digits.
fn part_file_name(stem: &str, part: usize) -> String {
    format!("{stem}_part{part:03}.pdf")
}

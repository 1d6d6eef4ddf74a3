//! Assembly planning types.
//!
//! A [`PageRef`] names one page of a loaded [`SourceDocument`]. An
//! [`AssemblyPlan`] is an ordered list of page references destined for a
//! single output file. [`SplitSpec`] describes how to partition one source
//! document into several plans, either as fixed-size chunks or as explicit
//! 1-based page spans.
//!
//! Page indices inside the crate are 0-based; [`PageSpan`] is the only
//! 1-based, user-facing type, matching how people write page ranges.

use crate::error::AssemblyError;
use crate::io::SourceDocument;
use anyhow::{Context, bail};
use std::sync::Arc;

/// A reference to a single page of a loaded source document.
///
/// Cheap to clone; the underlying document is shared, not copied.
#[derive(Debug, Clone)]
pub struct PageRef {
    source: Arc<SourceDocument>,
    index: usize,
}

impl PageRef {
    /// Callers go through [`SourceDocument::page`], which bounds-checks.
    pub(crate) fn new(source: Arc<SourceDocument>, index: usize) -> Self {
        PageRef { source, index }
    }

    /// The document this page belongs to.
    pub fn source(&self) -> &Arc<SourceDocument> {
        &self.source
    }

    /// 0-based page index within the source document.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Human-readable label for progress reporting, e.g. `"report.pdf page 3"`.
    pub fn label(&self) -> String {
        let name = self
            .source
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.file_stem());
        format!("{} page {}", name, self.index + 1)
    }
}

/// An ordered sequence of pages destined for one output file.
#[derive(Debug, Clone, Default)]
pub struct AssemblyPlan {
    pages: Vec<PageRef>,
}

impl AssemblyPlan {
    /// Create a plan from an ordered list of page references.
    pub fn new(pages: Vec<PageRef>) -> Self {
        AssemblyPlan { pages }
    }

    /// The pages in output order.
    pub fn pages(&self) -> &[PageRef] {
        &self.pages
    }

    /// Number of pages in the plan.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the plan contains no pages.
    ///
    /// An empty plan never produces an output file.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl From<Vec<PageRef>> for AssemblyPlan {
    fn from(pages: Vec<PageRef>) -> Self {
        AssemblyPlan::new(pages)
    }
}

/// A 1-based inclusive page span, as users write them ("3-7", "12").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpan {
    /// First page of the span, 1-based.
    pub start: usize,
    /// Last page of the span, 1-based inclusive.
    pub end: usize,
}

impl PageSpan {
    /// Create a span covering pages `start` through `end` inclusive.
    pub fn new(start: usize, end: usize) -> Self {
        PageSpan { start, end }
    }

    /// Create a span covering a single page.
    pub fn single(page: usize) -> Self {
        PageSpan {
            start: page,
            end: page,
        }
    }

    /// Clamp the span into `[1, page_count]`.
    ///
    /// Returns the clamped 1-based bounds, or `None` when nothing of the
    /// span falls inside the document (inverted spans included).
    fn clamp(&self, page_count: usize) -> Option<(usize, usize)> {
        if page_count == 0 {
            return None;
        }
        let start = self.start.max(1);
        let end = self.end.min(page_count);
        (start <= end).then_some((start, end))
    }
}

/// How to partition a source document into output files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitSpec {
    /// Consecutive chunks of `pages_per_file` pages; the last chunk may be
    /// shorter.
    FixedSize {
        /// Chunk size in pages. Must be at least 1.
        pages_per_file: usize,
    },

    /// One output file per span. Spans may overlap or repeat pages, and are
    /// clamped to the document at resolution time.
    Ranges(Vec<PageSpan>),
}

impl SplitSpec {
    /// Fixed-size chunking with `pages_per_file` pages per output.
    pub fn fixed_size(pages_per_file: usize) -> Self {
        SplitSpec::FixedSize { pages_per_file }
    }

    /// Explicit spans, one output file per span.
    pub fn ranges(spans: Vec<PageSpan>) -> Self {
        SplitSpec::Ranges(spans)
    }

    /// Parse a ranges spec from user text.
    ///
    /// One span per line or comma-separated entry, each either a single page
    /// number ("12") or an inclusive range ("3-7"). Blank entries are
    /// skipped. Malformed entries are parse errors; spans that merely fall
    /// outside the document are not — they are clamped at resolution time.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfbind::SplitSpec;
    ///
    /// let spec = SplitSpec::parse_ranges("1-5\n6-10\n15").unwrap();
    /// assert!(matches!(spec, SplitSpec::Ranges(ref spans) if spans.len() == 3));
    /// ```
    pub fn parse_ranges(text: &str) -> anyhow::Result<Self> {
        let mut spans = Vec::new();

        for entry in text.split(['\n', ',']) {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }

            if let Some((start_str, end_str)) = entry.split_once('-') {
                let start: usize = start_str
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid range start: '{}'", start_str.trim()))?;
                let end: usize = end_str
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid range end: '{}'", end_str.trim()))?;
                spans.push(PageSpan::new(start, end));
            } else {
                let page: usize = entry
                    .parse()
                    .with_context(|| format!("Invalid page number: '{entry}'"))?;
                spans.push(PageSpan::single(page));
            }
        }

        if spans.is_empty() {
            bail!("No page ranges given");
        }

        Ok(SplitSpec::Ranges(spans))
    }

    /// Resolve the spec against a concrete document into assembly plans.
    ///
    /// Plans come back in spec order with empty ones dropped, so output
    /// numbering over the result is gapless. An empty result is valid — it
    /// means no output files will be produced.
    ///
    /// # Errors
    ///
    /// [`AssemblyError::InvalidParameter`] when `pages_per_file` is zero.
    pub fn resolve(
        &self,
        source: &Arc<SourceDocument>,
    ) -> Result<Vec<AssemblyPlan>, AssemblyError> {
        let page_count = source.page_count();

        match self {
            SplitSpec::FixedSize { pages_per_file } => {
                if *pages_per_file == 0 {
                    return Err(AssemblyError::invalid_parameter(
                        "pages per file must be at least 1",
                    ));
                }

                let mut plans = Vec::new();
                let mut start = 0;
                while start < page_count {
                    let end = (start + pages_per_file).min(page_count);
                    let pages = (start..end)
                        .map(|index| PageRef::new(Arc::clone(source), index))
                        .collect();
                    plans.push(AssemblyPlan::new(pages));
                    start = end;
                }
                Ok(plans)
            }

            SplitSpec::Ranges(spans) => {
                let mut plans = Vec::new();
                for span in spans {
                    let Some((start, end)) = span.clamp(page_count) else {
                        continue;
                    };
                    let pages = (start..=end)
                        .map(|page| PageRef::new(Arc::clone(source), page - 1))
                        .collect();
                    plans.push(AssemblyPlan::new(pages));
                }
                Ok(plans)
            }
        }
    }
}

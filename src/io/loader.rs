//! Source document loading.
//!
//! [`PdfLoader`] opens PDF files from disk and wraps them in
//! [`SourceDocument`] handles. Parsing happens on the blocking thread pool;
//! the async surface stays responsive while large files are read.
//!
//! Loaded documents are shared as `Arc<SourceDocument>` so any number of
//! [`PageRef`](crate::plan::PageRef)s can point into them without copying.
//!
//! # Examples
//!
//! ```no_run
//! use pdfbind::io::PdfLoader;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), pdfbind::LoadError> {
//! let loader = PdfLoader::new();
//! let doc = loader.load(Path::new("report.pdf")).await?;
//! println!("{} pages", doc.page_count());
//! # Ok(())
//! # }
//! ```

use crate::error::LoadError;
use crate::plan::PageRef;
use futures::stream::{self, StreamExt};
use lopdf::{Document, ObjectId};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task;

/// Result of a single load attempt.
pub type LoadResult = std::result::Result<Arc<SourceDocument>, LoadError>;

/// An opened, parsed source PDF.
///
/// Read-only after load. The parsed object tree stays in memory for the
/// lifetime of the handle, so later assembly steps never touch the original
/// file again.
#[derive(Debug)]
pub struct SourceDocument {
    path: PathBuf,
    file_size: u64,
    page_count: usize,
    page_ids: Vec<ObjectId>,
    document: Document,
}

impl SourceDocument {
    pub(crate) fn from_document(document: Document, path: impl Into<PathBuf>, file_size: u64) -> Self {
        let page_ids: Vec<ObjectId> = document.get_pages().into_values().collect();
        SourceDocument {
            path: path.into(),
            file_size,
            page_count: page_ids.len(),
            page_ids,
            document,
        }
    }

    /// Path the document was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size of the source file in bytes.
    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Number of pages in the document. May be zero.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// File name without the `.pdf` extension, for output naming.
    ///
    /// Falls back to `"document"` when the path has no usable stem.
    pub fn file_stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string())
    }

    /// Reference to the page at 0-based `index`, or `None` if out of range.
    pub fn page(self: &Arc<Self>, index: usize) -> Option<PageRef> {
        (index < self.page_count).then(|| PageRef::new(Arc::clone(self), index))
    }

    /// References to every page, in document order.
    pub fn pages(self: &Arc<Self>) -> Vec<PageRef> {
        (0..self.page_count)
            .map(|index| PageRef::new(Arc::clone(self), index))
            .collect()
    }

    /// Object id of the page at `index` inside the underlying document.
    pub(crate) fn page_object_id(&self, index: usize) -> Option<ObjectId> {
        self.page_ids.get(index).copied()
    }

    pub(crate) fn inner(&self) -> &Document {
        &self.document
    }
}

/// Loads PDF documents from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfLoader;

impl PdfLoader {
    /// Create a new loader.
    pub fn new() -> Self {
        PdfLoader
    }

    /// Load a single PDF file.
    ///
    /// # Errors
    ///
    /// - [`LoadError::NotFound`] if the path does not exist.
    /// - [`LoadError::Corrupt`] if the file cannot be parsed as a PDF, or
    ///   cannot be read at all (the I/O detail is carried in the message).
    ///
    /// A document with zero pages loads successfully.
    pub async fn load(&self, path: &Path) -> LoadResult {
        let path_buf = path.to_path_buf();

        let metadata = match tokio::fs::metadata(&path_buf).await {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(LoadError::not_found(path_buf));
            }
            Err(err) => return Err(LoadError::corrupt(path_buf, err.to_string())),
        };

        if !metadata.is_file() {
            return Err(LoadError::corrupt(path_buf, "not a regular file"));
        }

        let file_size = metadata.len();
        task::spawn_blocking(move || {
            let document = Document::load(&path_buf)
                .map_err(|err| LoadError::corrupt(&path_buf, err.to_string()))?;
            Ok(Arc::new(SourceDocument::from_document(
                document, path_buf, file_size,
            )))
        })
        .await
        .map_err(|err| LoadError::corrupt(path, format!("load task failed: {err}")))?
    }

    /// Load multiple PDF files with bounded parallelism.
    ///
    /// Results come back in input order regardless of completion order.
    /// Individual failures do not abort the batch.
    pub async fn load_many(&self, paths: &[PathBuf], workers: usize) -> Vec<LoadResult> {
        let workers = workers.max(1);
        let loader = *self;

        let tasks = paths.iter().enumerate().map(|(index, path)| {
            let path = path.clone();
            async move { (index, loader.load(&path).await) }
        });

        let mut indexed: Vec<(usize, LoadResult)> =
            stream::iter(tasks).buffer_unordered(workers).collect().await;
        indexed.sort_by_key(|(index, _)| *index);
        indexed.into_iter().map(|(_, result)| result).collect()
    }

    /// Load files one at a time, reporting each completion.
    ///
    /// The callback receives the number of files finished so far (1-based)
    /// and the result for the file that just completed.
    pub async fn load_with_progress<F>(&self, paths: &[PathBuf], mut on_loaded: F) -> Vec<LoadResult>
    where
        F: FnMut(usize, &LoadResult),
    {
        let mut results = Vec::with_capacity(paths.len());
        for (index, path) in paths.iter().enumerate() {
            let result = self.load(path).await;
            on_loaded(index + 1, &result);
            results.push(result);
        }
        results
    }
}

//! Output document construction.
//!
//! [`OutputBuilder`] assembles a fresh document from page references, in
//! order, across any number of source documents. Each distinct source is
//! cloned and renumbered past the output's current id range exactly once;
//! pages then carry their reachable object graphs over by reference walking,
//! so resources are copied per source with no cross-document deduplication.

use crate::error::AssemblyError;
use crate::io::SourceDocument;
use crate::plan::PageRef;
use crate::utils::copy_references;
use lopdf::{Dictionary, Document, Object, ObjectId, dictionary};
use std::sync::Arc;

/// Page-tree attributes a page may inherit from its ancestors. They must be
/// materialized on the page itself before it is reparented into the output.
const INHERITED_PAGE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

struct ImportedSource {
    /// Identity of the `Arc<SourceDocument>` this clone came from.
    key: usize,
    /// Renumbered clone of the source; its ids are disjoint from the output's.
    document: Document,
    /// Page object ids of the clone, in document order.
    page_ids: Vec<ObjectId>,
}

/// Builds one output document from an ordered sequence of pages.
pub(crate) struct OutputBuilder {
    document: Document,
    pages_id: ObjectId,
    kids: Vec<ObjectId>,
    imported: Vec<ImportedSource>,
}

impl OutputBuilder {
    pub(crate) fn new() -> Self {
        let mut document = Document::with_version("1.7");
        // Reserved up front so pages can name their parent before the
        // Pages node exists.
        let pages_id = document.new_object_id();
        OutputBuilder {
            document,
            pages_id,
            kids: Vec::new(),
            imported: Vec::new(),
        }
    }

    /// Append one page to the output, copying its object graph.
    ///
    /// # Errors
    ///
    /// [`AssemblyError::SourceUnavailable`] when the referenced page object
    /// is missing or malformed. Pages are never silently skipped.
    pub(crate) fn append_page(&mut self, page: &PageRef) -> Result<(), AssemblyError> {
        let source_index = self.import_source(page.source());
        let imported = &self.imported[source_index];

        let Some(page_id) = imported.page_ids.get(page.index()).copied() else {
            return Err(AssemblyError::source_unavailable(
                page.source().path(),
                format!("page {} missing from page tree", page.index() + 1),
            ));
        };

        let mut dict = match imported.document.get_object(page_id) {
            Ok(Object::Dictionary(dict)) => dict.clone(),
            _ => {
                return Err(AssemblyError::source_unavailable(
                    page.source().path(),
                    format!("page {} is not a dictionary object", page.index() + 1),
                ));
            }
        };

        // Inherited attributes must be resolved against the source page tree
        // before the Parent link is rewritten.
        for key in INHERITED_PAGE_KEYS {
            if !dict.has(key)
                && let Some(value) = inherited_attribute(&imported.document, &dict, key)
            {
                dict.set(key, value);
            }
        }
        dict.set("Parent", Object::Reference(self.pages_id));

        // The same source page may appear more than once in a plan; give
        // repeats a fresh id so each Kids entry stays distinct.
        let target_id = if self.kids.contains(&page_id) {
            self.document.new_object_id()
        } else {
            page_id
        };

        let object = Object::Dictionary(dict);
        copy_references(&mut self.document, &imported.document, &object);
        self.document.objects.insert(target_id, object);
        self.kids.push(target_id);
        Ok(())
    }

    /// Number of pages appended so far.
    pub(crate) fn page_count(&self) -> usize {
        self.kids.len()
    }

    /// Finalize the page tree and catalog and return the document.
    ///
    /// Compression is left to the writer.
    pub(crate) fn finish(mut self) -> Document {
        let count = self.kids.len() as i64;
        let kids: Vec<Object> = self.kids.iter().map(|&id| Object::Reference(id)).collect();

        self.document.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = self.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.document.trailer.set("Root", catalog_id);

        self.document.renumber_objects();
        self.document
    }

    /// Clone and renumber `source` into the builder on first use; later
    /// pages from the same handle reuse the clone.
    fn import_source(&mut self, source: &Arc<SourceDocument>) -> usize {
        let key = Arc::as_ptr(source) as usize;
        if let Some(index) = self.imported.iter().position(|s| s.key == key) {
            return index;
        }

        let mut document = source.inner().clone();
        document.renumber_objects_with(self.document.max_id + 1);
        self.document.max_id = document.max_id;

        let page_ids = document.get_pages().into_values().collect();
        self.imported.push(ImportedSource {
            key,
            document,
            page_ids,
        });
        self.imported.len() - 1
    }
}

/// Look `key` up along the page's Parent chain.
///
/// Depth-limited so a cyclic page tree in a damaged file cannot hang the
/// merge.
fn inherited_attribute(document: &Document, page: &Dictionary, key: &[u8]) -> Option<Object> {
    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
    let mut depth = 0;

    while let Some(id) = parent {
        if depth > 64 {
            return None;
        }
        depth += 1;

        let node = document.get_object(id).ok()?.as_dict().ok()?;
        if let Ok(value) = node.get(key) {
            return Some(value.clone());
        }
        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }
    None
}

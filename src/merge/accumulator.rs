//! In-memory output document.
//!
//! Each appended source keeps its whole page tree: the source's root
//! `Pages` node becomes a child of the accumulator's root, so attributes
//! pages inherit from their tree (MediaBox, Resources, Rotate) survive the
//! merge. The source catalog is dropped; anything else it referenced and
//! nothing else uses is pruned when the document is finished.

use lopdf::{Document, Object, ObjectId, dictionary};

use crate::config::CompressionProfile;
use crate::error::{FolderMergeError, Result};
use crate::io::LoadedPdf;

/// Accumulates the pages of several documents into one.
#[derive(Debug)]
pub struct PageAccumulator {
    document: Document,
    pages_id: ObjectId,
    page_count: usize,
    documents: usize,
}

impl PageAccumulator {
    /// Create an accumulator holding an empty document.
    pub fn new() -> Self {
        let mut document = Document::with_version("1.5");

        let pages_id = document.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => Vec::<Object>::new(),
            "Count" => 0,
        });

        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);

        Self {
            document,
            pages_id,
            page_count: 0,
            documents: 0,
        }
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Number of documents appended so far.
    pub fn document_count(&self) -> usize {
        self.documents
    }

    /// Check if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.page_count == 0
    }

    /// Append every page of a loaded document, after the pages already held.
    ///
    /// Returns the number of pages appended.
    ///
    /// # Errors
    ///
    /// Returns [`FolderMergeError::CorruptedPdf`] if the source has no usable
    /// catalog or page tree; the accumulator is unchanged in that case.
    /// Returns [`FolderMergeError::MergeFailed`] if the accumulator's own
    /// page tree is broken.
    pub fn append(&mut self, loaded: LoadedPdf) -> Result<usize> {
        let LoadedPdf {
            document: mut source,
            path,
            ..
        } = loaded;

        let added = source.get_pages().len();
        if added == 0 {
            return Err(FolderMergeError::corrupted_pdf(path, "PDF has no pages"));
        }

        source.renumber_objects_with(self.document.max_id + 1);

        let catalog_id = source
            .trailer
            .get(b"Root")
            .and_then(Object::as_reference)
            .map_err(|e| FolderMergeError::corrupted_pdf(path.clone(), format!("no catalog: {e}")))?;

        let tree_id = source
            .catalog()
            .and_then(|catalog| catalog.get(b"Pages"))
            .and_then(Object::as_reference)
            .map_err(|e| {
                FolderMergeError::corrupted_pdf(path.clone(), format!("no page tree: {e}"))
            })?;

        source
            .get_object_mut(tree_id)
            .and_then(Object::as_dict_mut)
            .map_err(|e| {
                FolderMergeError::corrupted_pdf(path.clone(), format!("invalid page tree: {e}"))
            })?
            .set("Parent", self.pages_id);

        source.objects.remove(&catalog_id);

        if source.version > self.document.version {
            self.document.version = source.version.clone();
        }

        let max_id = source.max_id;
        self.document.objects.extend(source.objects);
        self.document.max_id = self.document.max_id.max(max_id);

        let root = self
            .document
            .get_object_mut(self.pages_id)
            .and_then(Object::as_dict_mut)
            .map_err(|e| FolderMergeError::merge_failed(format!("Output page tree missing: {e}")))?;

        root.get_mut(b"Kids")
            .and_then(Object::as_array_mut)
            .map_err(|e| FolderMergeError::merge_failed(format!("Output Kids array missing: {e}")))?
            .push(Object::Reference(tree_id));

        self.page_count += added;
        self.documents += 1;
        root.set("Count", self.page_count as i64);

        Ok(added)
    }

    /// Finish the document, applying the compression profile.
    pub fn finish(self, profile: CompressionProfile) -> Document {
        let mut document = self.document;

        document.prune_objects();

        if profile == CompressionProfile::Maximum {
            document.delete_zero_length_streams();
            document.compress();
        }

        document.renumber_objects();
        document
    }
}

impl Default for PageAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

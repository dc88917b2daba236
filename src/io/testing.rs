//! PDF fixtures for unit tests.
//!
//! Every page carries a `Tag` entry (`"<tag>#<n>"`) so tests can check
//! which document a page came from and in which order pages ended up.

use lopdf::{Document, Object, ObjectId, dictionary};
use std::path::Path;

/// Build a document with `pages` tagged pages.
pub fn tagged_document(tag: &str, pages: usize) -> Document {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let kids: Vec<Object> = (1..=pages)
        .map(|n| {
            let page = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Tag" => Object::string_literal(format!("{tag}#{n}")),
            };
            doc.add_object(page).into()
        })
        .collect();

    // MediaBox lives on the tree node so pages rely on inheritance.
    let tree = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => pages as i64,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    };
    doc.objects.insert(pages_id, tree.into());

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc
}

/// Write a tagged document to `path`.
pub fn write_tagged_pdf(path: &Path, tag: &str, pages: usize) {
    tagged_document(tag, pages).save(path).unwrap();
}

/// Page tags of a document, in page order.
pub fn page_tags(doc: &Document) -> Vec<String> {
    doc.get_pages()
        .into_values()
        .map(|id: ObjectId| {
            let page = doc.get_object(id).and_then(Object::as_dict).unwrap();
            let tag = page.get(b"Tag").and_then(Object::as_str).unwrap();
            String::from_utf8_lossy(tag).into_owned()
        })
        .collect()
}

//! End-to-end merge tests: load real files, assemble, verify the output on
//! disk page by page.

use pdfbind::assemble::{merge, merge_with_hooks};
use pdfbind::io::PdfLoader;
use tempfile::TempDir;

use crate::common::{page_markers, write_fixture, written_page_count};

#[tokio::test]
async fn test_merge_interleaved_three_documents() {
    let dir = TempDir::new().unwrap();
    let loader = PdfLoader::new();

    let a = loader
        .load(&write_fixture(&dir, "a.pdf", "A", 2))
        .await
        .unwrap();
    let b = loader
        .load(&write_fixture(&dir, "b.pdf", "B", 3))
        .await
        .unwrap();
    let c = loader
        .load(&write_fixture(&dir, "c.pdf", "C", 1))
        .await
        .unwrap();

    let pages = vec![
        a.page(0).unwrap(),
        b.page(0).unwrap(),
        c.page(0).unwrap(),
        a.page(1).unwrap(),
        b.page(1).unwrap(),
        b.page(2).unwrap(),
    ];

    let output = dir.path().join("merged.pdf");
    let outcome = merge(&pages, &output).await.unwrap();

    assert_eq!(outcome.page_count, 6);
    assert_eq!(
        page_markers(&output),
        vec!["A-1", "B-1", "C-1", "A-2", "B-2", "B-3"]
    );
}

#[tokio::test]
async fn test_merge_whole_documents_in_sequence() {
    let dir = TempDir::new().unwrap();
    let loader = PdfLoader::new();

    let a = loader
        .load(&write_fixture(&dir, "a.pdf", "A", 2))
        .await
        .unwrap();
    let b = loader
        .load(&write_fixture(&dir, "b.pdf", "B", 2))
        .await
        .unwrap();

    let mut pages = a.pages();
    pages.extend(b.pages());

    let output = dir.path().join("merged.pdf");
    merge(&pages, &output).await.unwrap();

    assert_eq!(page_markers(&output), vec!["A-1", "A-2", "B-1", "B-2"]);
}

#[tokio::test]
async fn test_merge_same_path_loaded_twice() {
    let dir = TempDir::new().unwrap();
    let loader = PdfLoader::new();
    let path = write_fixture(&dir, "a.pdf", "A", 2);

    // Two loads of the same file are independent handles.
    let first = loader.load(&path).await.unwrap();
    let second = loader.load(&path).await.unwrap();

    let mut pages = first.pages();
    pages.extend(second.pages());

    let output = dir.path().join("doubled.pdf");
    let outcome = merge(&pages, &output).await.unwrap();

    assert_eq!(outcome.page_count, 4);
    assert_eq!(page_markers(&output), vec!["A-1", "A-2", "A-1", "A-2"]);
}

#[tokio::test]
async fn test_merge_is_deterministic_across_runs() {
    let dir = TempDir::new().unwrap();
    let loader = PdfLoader::new();

    let a = loader
        .load(&write_fixture(&dir, "a.pdf", "A", 3))
        .await
        .unwrap();

    let first = dir.path().join("first.pdf");
    let second = dir.path().join("second.pdf");
    merge(&a.pages(), &first).await.unwrap();
    merge(&a.pages(), &second).await.unwrap();

    assert_eq!(written_page_count(&first), written_page_count(&second));
    assert_eq!(page_markers(&first), page_markers(&second));
}

#[tokio::test]
async fn test_merge_progress_reaches_total() {
    let dir = TempDir::new().unwrap();
    let loader = PdfLoader::new();

    let a = loader
        .load(&write_fixture(&dir, "a.pdf", "A", 4))
        .await
        .unwrap();

    let output = dir.path().join("merged.pdf");
    let mut progress = Vec::new();
    merge_with_hooks(
        &a.pages(),
        &output,
        |done, _label| progress.push(done),
        || false,
    )
    .await
    .unwrap();

    assert_eq!(progress, vec![1, 2, 3, 4]);
}

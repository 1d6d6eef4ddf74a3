//! Failure-path tests: bad inputs, unwritable outputs, cancellation.

use pdfbind::assemble::{merge, merge_with_hooks, split};
use pdfbind::io::PdfLoader;
use pdfbind::plan::SplitSpec;
use pdfbind::{AssemblyError, LoadError};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

use crate::common::write_fixture;

#[tokio::test]
async fn test_load_missing_file() {
    let result = PdfLoader::new()
        .load(Path::new("/nonexistent/never.pdf"))
        .await;
    assert!(matches!(result, Err(LoadError::NotFound { .. })));
}

#[tokio::test]
async fn test_load_non_pdf_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.pdf");
    std::fs::write(&path, b"plain text, not a pdf").unwrap();

    let result = PdfLoader::new().load(&path).await;
    match result {
        Err(LoadError::Corrupt { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected Corrupt, got {other:?}"),
    }
}

#[tokio::test]
async fn test_merge_empty_plan_creates_nothing() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("merged.pdf");

    let result = merge(&[], &output).await;
    assert!(matches!(result, Err(AssemblyError::EmptyInput)));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_merge_into_missing_directory() {
    let dir = TempDir::new().unwrap();
    let loader = PdfLoader::new();
    let source = loader
        .load(&write_fixture(&dir, "a.pdf", "A", 2))
        .await
        .unwrap();

    let output = dir.path().join("no_such_dir").join("merged.pdf");
    let result = merge(&source.pages(), &output).await;

    assert!(matches!(result, Err(AssemblyError::Io { .. })));
    assert!(!output.exists());
    assert!(!output.with_extension("tmp").exists());
}

#[tokio::test]
async fn test_split_into_missing_directory() {
    let dir = TempDir::new().unwrap();
    let loader = PdfLoader::new();
    let source = loader
        .load(&write_fixture(&dir, "a.pdf", "A", 2))
        .await
        .unwrap();

    let result = split(
        &source,
        &SplitSpec::fixed_size(1),
        &dir.path().join("no_such_dir"),
    )
    .await;
    assert!(matches!(result, Err(AssemblyError::Io { .. })));
}

#[tokio::test]
async fn test_cancellation_mid_merge_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let loader = PdfLoader::new();
    let source = loader
        .load(&write_fixture(&dir, "big.pdf", "B", 12))
        .await
        .unwrap();

    let output = dir.path().join("merged.pdf");
    let polls = AtomicUsize::new(0);
    let result = merge_with_hooks(&source.pages(), &output, |_, _| (), || {
        polls.fetch_add(1, Ordering::SeqCst) >= 5
    })
    .await;

    let err = result.unwrap_err();
    assert!(err.is_cancelled());
    assert!(!output.exists());
    assert!(!output.with_extension("tmp").exists());
}

#[tokio::test]
async fn test_zero_page_document_is_valid_input() {
    let dir = TempDir::new().unwrap();
    let loader = PdfLoader::new();
    let source = loader
        .load(&write_fixture(&dir, "empty.pdf", "E", 0))
        .await
        .unwrap();

    assert_eq!(source.page_count(), 0);

    // Merging it contributes no pages, so an all-empty plan is EmptyInput.
    let output = dir.path().join("merged.pdf");
    let result = merge(&source.pages(), &output).await;
    assert!(matches!(result, Err(AssemblyError::EmptyInput)));

    // Splitting it succeeds with no output files.
    let parts_dir = TempDir::new().unwrap();
    let outcome = split(&source, &SplitSpec::fixed_size(3), parts_dir.path())
        .await
        .unwrap();
    assert!(outcome.outputs.is_empty());
}

#[tokio::test]
async fn test_invalid_chunk_size_reports_parameter() {
    let dir = TempDir::new().unwrap();
    let loader = PdfLoader::new();
    let source = loader
        .load(&write_fixture(&dir, "a.pdf", "A", 3))
        .await
        .unwrap();

    let parts_dir = TempDir::new().unwrap();
    let result = split(&source, &SplitSpec::fixed_size(0), parts_dir.path()).await;

    match result {
        Err(AssemblyError::InvalidParameter { message }) => {
            assert!(message.contains("at least 1"));
        }
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
}

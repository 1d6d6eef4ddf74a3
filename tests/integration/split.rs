//! End-to-end split tests, including a split-then-merge round trip.

use pdfbind::assemble::{merge, split};
use pdfbind::io::PdfLoader;
use pdfbind::plan::SplitSpec;
use tempfile::TempDir;

use crate::common::{page_markers, write_fixture, written_page_count};

#[tokio::test]
async fn test_fixed_size_split_end_to_end() {
    let dir = TempDir::new().unwrap();
    let loader = PdfLoader::new();
    let source = loader
        .load(&write_fixture(&dir, "d.pdf", "D", 7))
        .await
        .unwrap();

    let parts_dir = TempDir::new().unwrap();
    let outcome = split(&source, &SplitSpec::fixed_size(3), parts_dir.path())
        .await
        .unwrap();

    let names: Vec<_> = outcome
        .outputs
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["d_part001.pdf", "d_part002.pdf", "d_part003.pdf"]);

    assert_eq!(page_markers(&outcome.outputs[0]), vec!["D-1", "D-2", "D-3"]);
    assert_eq!(page_markers(&outcome.outputs[1]), vec!["D-4", "D-5", "D-6"]);
    assert_eq!(page_markers(&outcome.outputs[2]), vec!["D-7"]);
}

#[tokio::test]
async fn test_range_split_from_parsed_text() {
    let dir = TempDir::new().unwrap();
    let loader = PdfLoader::new();
    let source = loader
        .load(&write_fixture(&dir, "report.pdf", "R", 10))
        .await
        .unwrap();

    let spec = SplitSpec::parse_ranges("1-5\n6-10").unwrap();
    let parts_dir = TempDir::new().unwrap();
    let outcome = split(&source, &spec, parts_dir.path()).await.unwrap();

    assert_eq!(outcome.part_count(), 2);
    assert_eq!(written_page_count(&outcome.outputs[0]), 5);
    assert_eq!(page_markers(&outcome.outputs[1])[0], "R-6");
}

#[tokio::test]
async fn test_range_split_clamps_to_document() {
    let dir = TempDir::new().unwrap();
    let loader = PdfLoader::new();
    let source = loader
        .load(&write_fixture(&dir, "d.pdf", "D", 10))
        .await
        .unwrap();

    let spec = SplitSpec::parse_ranges("8-15").unwrap();
    let parts_dir = TempDir::new().unwrap();
    let outcome = split(&source, &spec, parts_dir.path()).await.unwrap();

    assert_eq!(outcome.part_count(), 1);
    assert_eq!(page_markers(&outcome.outputs[0]), vec!["D-8", "D-9", "D-10"]);
}

#[tokio::test]
async fn test_split_then_merge_round_trip() {
    let dir = TempDir::new().unwrap();
    let loader = PdfLoader::new();
    let source = loader
        .load(&write_fixture(&dir, "d.pdf", "D", 7))
        .await
        .unwrap();

    let parts_dir = TempDir::new().unwrap();
    let outcome = split(&source, &SplitSpec::fixed_size(3), parts_dir.path())
        .await
        .unwrap();

    // Reload the parts and merge them back together.
    let mut pages = Vec::new();
    for part in &outcome.outputs {
        let doc = loader.load(part).await.unwrap();
        pages.extend(doc.pages());
    }

    let rejoined = dir.path().join("rejoined.pdf");
    let merged = merge(&pages, &rejoined).await.unwrap();

    assert_eq!(merged.page_count, 7);
    assert_eq!(
        page_markers(&rejoined),
        vec!["D-1", "D-2", "D-3", "D-4", "D-5", "D-6", "D-7"]
    );
}

#[tokio::test]
async fn test_split_overwrites_previous_output() {
    let dir = TempDir::new().unwrap();
    let loader = PdfLoader::new();
    let source = loader
        .load(&write_fixture(&dir, "d.pdf", "D", 2))
        .await
        .unwrap();

    let parts_dir = TempDir::new().unwrap();
    let spec = SplitSpec::fixed_size(1);
    split(&source, &spec, parts_dir.path()).await.unwrap();
    let outcome = split(&source, &spec, parts_dir.path()).await.unwrap();

    assert_eq!(outcome.part_count(), 2);
    assert_eq!(std::fs::read_dir(parts_dir.path()).unwrap().count(), 2);
}

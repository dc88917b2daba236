//! Unreadable inputs and interrupted writes.

use foldermerge::io::PdfWriter;
use foldermerge::merge::SourceRole;
use foldermerge::{FolderMergeError, RunOutcome, run};

use crate::common::{TestFolder, page_tags, tags};

#[tokio::test]
async fn test_corrupt_candidate_is_skipped_and_kept() {
    let folder = TestFolder::new("Mixed");
    folder.pdf("A.pdf", 1);
    folder.file("B.pdf", b"%PDF-1.4\nthis is not really a pdf");
    folder.pdf("C.pdf", 1);

    let report = run(&folder.config()).await.unwrap();

    assert_eq!(report.exit_code(), 0);
    assert_eq!(
        page_tags(&folder.join("merged_Mixed.pdf")),
        tags(&["A#1", "C#1"])
    );
    assert_eq!(folder.entries(), vec!["B.pdf", "merged_Mixed.pdf"]);

    match report.outcome {
        RunOutcome::Completed { skipped, removed, .. } => {
            assert_eq!(removed, 2);
            assert_eq!(skipped.len(), 1);
            assert_eq!(skipped[0].path, folder.join("B.pdf"));
            assert_eq!(skipped[0].role, SourceRole::Candidate);
        }
        other => panic!("expected completed run, got {other:?}"),
    }
}

#[tokio::test]
async fn test_all_candidates_unreadable() {
    let folder = TestFolder::new("Broken");
    folder.file("A.pdf", b"garbage");
    folder.file("B.pdf", b"more garbage");

    let err = run(&folder.config()).await.unwrap_err();

    assert!(matches!(err, FolderMergeError::NothingMerged { attempted: 2 }));
    assert_eq!(err.exit_code(), 6);
    assert_eq!(folder.entries(), vec!["A.pdf", "B.pdf"]);
}

#[tokio::test]
async fn test_stale_temp_file_is_ignored_and_replaced() {
    let folder = TestFolder::new("Resume");
    folder.pdf("A.pdf", 1);
    folder.pdf("B.pdf", 1);
    let temp = PdfWriter::temp_path_for(&folder.join("merged_Resume.pdf"));
    std::fs::write(&temp, b"interrupted write").unwrap();

    let report = run(&folder.config()).await.unwrap();

    assert_eq!(report.exit_code(), 0);
    assert!(!temp.exists());
    assert_eq!(folder.entries(), vec!["merged_Resume.pdf"]);
    assert_eq!(
        page_tags(&folder.join("merged_Resume.pdf")),
        tags(&["A#1", "B#1"])
    );
}

#[tokio::test]
async fn test_failed_promotion_keeps_sources() {
    let folder = TestFolder::new("Blocked");
    folder.pdf("A.pdf", 1);
    folder.pdf("B.pdf", 1);

    // A directory at the output path makes the final rename fail. Scanning
    // ignores entries that are not regular files, so it is not a marker.
    let config = folder.config();
    std::fs::create_dir(folder.join("merged_Blocked.pdf")).unwrap();

    let result = run(&config).await;

    match result {
        Err(err) => {
            assert_eq!(err.exit_code(), 5);
            assert!(folder.join("A.pdf").exists());
            assert!(folder.join("B.pdf").exists());
            assert!(folder.join("merged_Blocked.pdf").is_dir());
            assert!(!PdfWriter::temp_path_for(&folder.join("merged_Blocked.pdf")).exists());
        }
        Ok(report) => panic!("expected write failure, got {report:?}"),
    }
}

//! Business-rule aborts and idempotence.

use foldermerge::pipeline::EXIT_SKIPPED;
use foldermerge::{AbortReason, RunOutcome, run};
use rstest::rstest;

use crate::common::TestFolder;

fn aborted(reason: AbortReason) -> RunOutcome {
    RunOutcome::Aborted { reason }
}

#[tokio::test]
async fn test_marker_short_circuits() {
    let folder = TestFolder::new("Done");
    folder.file("Merged_Done.pdf", b"previous output");
    folder.pdf("A.pdf", 1);
    folder.pdf("B.pdf", 1);

    let before = folder.entries();
    let report = run(&folder.config()).await.unwrap();

    assert_eq!(report.outcome, aborted(AbortReason::AlreadyMerged));
    assert_eq!(report.exit_code(), EXIT_SKIPPED);
    assert_eq!(folder.entries(), before);
}

#[rstest]
#[case::empty(&[], AbortReason::NoEligibleDocuments)]
#[case::only_other_files(&["notes.txt", "scan.jpg"], AbortReason::NoEligibleDocuments)]
#[case::one_candidate(&["A.pdf"], AbortReason::NothingToMerge)]
#[case::candidate_and_letter(&["A.pdf", "Carta.pdf"], AbortReason::NothingToMerge)]
#[case::letters_only(&["Carta1.pdf", "carta2.pdf"], AbortReason::NoEligibleDocuments)]
#[tokio::test]
async fn test_folders_left_alone(#[case] files: &[&str], #[case] expected: AbortReason) {
    let folder = TestFolder::new("Client");
    for name in files {
        if name.ends_with(".pdf") {
            folder.pdf(name, 1);
        } else {
            folder.file(name, b"x");
        }
    }

    let before = folder.entries();
    let report = run(&folder.config()).await.unwrap();

    assert_eq!(report.outcome, aborted(expected));
    assert_eq!(folder.entries(), before);
}

#[tokio::test]
async fn test_second_run_is_a_no_op() {
    let folder = TestFolder::new("Twice");
    folder.pdf("A.pdf", 1);
    folder.pdf("B.pdf", 1);

    let first = run(&folder.config()).await.unwrap();
    assert_eq!(first.exit_code(), 0);
    let after_first = folder.entries();

    // New documents arriving later do not trigger another merge.
    folder.pdf("C.pdf", 1);
    let second = run(&folder.config()).await.unwrap();

    assert_eq!(second.outcome, aborted(AbortReason::AlreadyMerged));
    assert_eq!(folder.entries(), vec!["C.pdf", "merged_Twice.pdf"]);
    assert!(after_first.contains(&"merged_Twice.pdf".to_string()));
}

#[tokio::test]
async fn test_not_a_directory() {
    let folder = TestFolder::new("Parent");
    let file = folder.pdf("A.pdf", 1);

    let mut config = folder.config();
    config.folder = file;
    let err = run(&config).await.unwrap_err();

    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_missing_folder() {
    let folder = TestFolder::new("Parent");

    let mut config = folder.config();
    config.folder = folder.join("missing");
    let err = run(&config).await.unwrap_err();

    assert!(matches!(
        err,
        foldermerge::FolderMergeError::NotADirectory { .. }
    ));
}

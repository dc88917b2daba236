//! Letter documents are never deleted.

use foldermerge::merge::SourceRole;
use foldermerge::{AbortReason, RunOutcome, run};
use rstest::rstest;

use crate::common::{TestFolder, page_tags, tags};

#[rstest]
#[case::excluded(false)]
#[case::included(true)]
#[tokio::test]
async fn test_letters_survive(#[case] include_letters: bool) {
    let folder = TestFolder::new("Client");
    folder.pdf("A.pdf", 1);
    folder.pdf("B.pdf", 1);
    folder.pdf("CARTA_intro.pdf", 1);
    folder.pdf("z_carta.pdf", 1);

    let mut config = folder.config();
    config.include_letters = include_letters;
    let report = run(&config).await.unwrap();

    assert_eq!(report.letters_found, 2);
    assert!(folder.join("CARTA_intro.pdf").exists());
    assert!(folder.join("z_carta.pdf").exists());
    assert!(!folder.join("A.pdf").exists());
    assert!(!folder.join("B.pdf").exists());

    let expected = if include_letters {
        tags(&["CARTA_intro#1", "z_carta#1", "A#1", "B#1"])
    } else {
        tags(&["A#1", "B#1"])
    };
    assert_eq!(page_tags(&folder.join("merged_Client.pdf")), expected);
    assert_eq!(report.letters_kept_separate(), !include_letters);
}

#[tokio::test]
async fn test_single_candidate_with_included_letter() {
    let folder = TestFolder::new("Pair");
    folder.pdf("A.pdf", 1);
    folder.pdf("Carta.pdf", 2);

    let mut config = folder.config();
    config.include_letters = true;
    run(&config).await.unwrap();

    assert_eq!(folder.entries(), vec!["Carta.pdf", "merged_Pair.pdf"]);
    assert_eq!(
        page_tags(&folder.join("merged_Pair.pdf")),
        tags(&["Carta#1", "Carta#2", "A#1"])
    );
}

#[tokio::test]
async fn test_letters_only_with_inclusion_merges_and_keeps_letters() {
    let folder = TestFolder::new("Letters");
    folder.pdf("Carta1.pdf", 1);
    folder.pdf("Carta2.pdf", 1);

    let mut config = folder.config();
    config.include_letters = true;
    let report = run(&config).await.unwrap();

    match &report.outcome {
        RunOutcome::Completed {
            merged,
            letters_merged,
            removed,
            ..
        } => {
            assert!(merged.is_empty());
            assert_eq!(letters_merged.len(), 2);
            assert_eq!(*removed, 0);
        }
        other => panic!("expected completed run, got {other:?}"),
    }
    assert_eq!(
        folder.entries(),
        vec!["Carta1.pdf", "Carta2.pdf", "merged_Letters.pdf"]
    );
}

#[tokio::test]
async fn test_single_letter_with_inclusion_is_nothing_to_merge() {
    let folder = TestFolder::new("Lonely");
    folder.pdf("Carta.pdf", 1);

    let mut config = folder.config();
    config.include_letters = true;
    let report = run(&config).await.unwrap();

    assert_eq!(
        report.outcome,
        RunOutcome::Aborted {
            reason: AbortReason::NothingToMerge
        }
    );
}

#[tokio::test]
async fn test_unreadable_included_letter_with_single_candidate() {
    let folder = TestFolder::new("Pair");
    folder.pdf("A.pdf", 2);
    folder.file("Carta.pdf", b"not a pdf at all");

    let mut config = folder.config();
    config.include_letters = true;
    let report = run(&config).await.unwrap();

    // The plan counts planned inputs, so the run goes ahead; the letter is
    // skipped at load time and the output holds the candidate alone.
    assert_eq!(report.exit_code(), 0);
    match &report.outcome {
        RunOutcome::Completed {
            merged,
            letters_merged,
            removed,
            skipped,
            ..
        } => {
            assert_eq!(merged, &vec![folder.join("A.pdf")]);
            assert!(letters_merged.is_empty());
            assert_eq!(*removed, 1);
            assert_eq!(skipped.len(), 1);
            assert_eq!(skipped[0].path, folder.join("Carta.pdf"));
            assert_eq!(skipped[0].role, SourceRole::Letter);
        }
        other => panic!("expected completed run, got {other:?}"),
    }

    assert!(report.letters_kept_separate());
    assert_eq!(folder.entries(), vec!["Carta.pdf", "merged_Pair.pdf"]);
    assert_eq!(
        page_tags(&folder.join("merged_Pair.pdf")),
        tags(&["A#1", "A#2"])
    );
}

#[tokio::test]
async fn test_unreadable_letter_without_candidates_merges_nothing() {
    let folder = TestFolder::new("Letters");
    folder.pdf("Carta1.pdf", 1);
    folder.file("Carta2.pdf", b"broken");

    let mut config = folder.config();
    config.include_letters = true;
    let report = run(&config).await.unwrap();

    match &report.outcome {
        RunOutcome::Completed {
            letters_merged,
            removed,
            ..
        } => {
            assert_eq!(letters_merged, &vec![folder.join("Carta1.pdf")]);
            assert_eq!(*removed, 0);
        }
        other => panic!("expected completed run, got {other:?}"),
    }
    assert_eq!(
        folder.entries(),
        vec!["Carta1.pdf", "Carta2.pdf", "merged_Letters.pdf"]
    );
}

//! Dry runs report the plan and touch nothing.

use foldermerge::{RunOutcome, run};

use crate::common::TestFolder;

#[tokio::test]
async fn test_dry_run_reports_plan() {
    let folder = TestFolder::new("Preview");
    folder.pdf("B.pdf", 1);
    folder.pdf("A.pdf", 1);
    folder.pdf("Carta.pdf", 1);
    folder.file("broken.pdf", b"never opened during a dry run");

    let mut config = folder.config();
    config.dry_run = true;

    let before = folder.entries();
    let report = run(&config).await.unwrap();

    assert_eq!(report.exit_code(), 0);
    assert!(report.letters_kept_separate());
    assert_eq!(folder.entries(), before);

    match report.outcome {
        RunOutcome::DryRun { plan } => {
            assert_eq!(
                plan.candidates,
                vec![
                    folder.join("A.pdf"),
                    folder.join("B.pdf"),
                    folder.join("broken.pdf")
                ]
            );
            assert!(plan.letters.is_empty());
            assert_eq!(plan.output, folder.join("merged_Preview.pdf"));
        }
        other => panic!("expected dry run, got {other:?}"),
    }
}

#[tokio::test]
async fn test_dry_run_still_honours_rules() {
    let folder = TestFolder::new("Single");
    folder.pdf("A.pdf", 1);

    let mut config = folder.config();
    config.dry_run = true;
    let report = run(&config).await.unwrap();

    assert_eq!(report.exit_code(), 10);
}

#[tokio::test]
async fn test_dry_run_with_letters_included() {
    let folder = TestFolder::new("Preview");
    folder.pdf("A.pdf", 1);
    folder.pdf("Carta.pdf", 1);

    let mut config = folder.config();
    config.dry_run = true;
    config.include_letters = true;
    let report = run(&config).await.unwrap();

    match report.outcome {
        RunOutcome::DryRun { plan } => {
            assert_eq!(plan.letters, vec![folder.join("Carta.pdf")]);
            assert_eq!(plan.input_count(), 2);
        }
        other => panic!("expected dry run, got {other:?}"),
    }
    assert!(folder.join("A.pdf").exists());
}

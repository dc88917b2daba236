use clap::Parser;
use std::process::ExitCode;

use foldermerge::cli::Cli;
use foldermerge::output::OutputFormatter;
use foldermerge::{FolderMergeError, logging, pipeline};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.to_config() {
        Ok(config) => config,
        Err(e) => return fail(&OutputFormatter::default(), &e),
    };

    logging::init(config.verbose);
    let formatter = OutputFormatter::from_config(&config);

    if config.dry_run {
        formatter.info("DRY RUN - no files will be written or deleted");
    }

    let report = match pipeline::run(&config).await {
        Ok(report) => report,
        Err(e) => return fail(&formatter, &e),
    };

    if config.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                formatter.error(&format!("Could not serialize report: {e}"));
                return ExitCode::FAILURE;
            }
        }
    } else {
        formatter.display_report(&report);
    }

    exit_code(report.exit_code())
}

fn fail(formatter: &OutputFormatter, error: &FolderMergeError) -> ExitCode {
    formatter.error(&error.to_string());
    exit_code(error.exit_code())
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

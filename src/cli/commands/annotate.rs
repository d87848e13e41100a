//! Annotate command - Insert instructional comments into configuration files

use colored::Colorize;
use std::path::Path;
use tracing::{info, warn};

use super::AnnotateArgs;
use crate::annotate::Annotator;
use crate::config::Config;
use crate::error::ConfwardenError;
use crate::exit_codes;
use crate::scanner;

/// Totals of an annotation batch
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnnotateSummary {
    pub processed: usize,
    pub inserted: usize,
    pub missing: usize,
    pub failed: usize,
}

pub fn execute(args: AnnotateArgs, mut config: Config) -> Result<i32, ConfwardenError> {
    if let Some(manifest) = args.manifest {
        config.manifest = manifest;
    }
    if let Some(backup_dir) = args.backup_dir {
        config.backup_dir = backup_dir;
    }

    let targets = scanner::annotation_targets(&config, &args.files)?;
    println!("Found {} configuration files to process", targets.len());

    let annotator = Annotator::new(&config.backup_dir);
    let summary = run(&annotator, &targets, args.dry_run);

    println!();
    if args.dry_run {
        println!(
            "{} {} comment(s) would be added; no files were modified.",
            "Dry run:".yellow().bold(),
            summary.inserted
        );
        return Ok(exit_codes::SUCCESS);
    }

    println!("{}", "Annotation complete!".green().bold());
    println!(
        "Original files backed up to: {}",
        annotator.backups().dir().display().to_string().cyan()
    );
    println!(
        "{} file(s) processed, {} comment(s) added, {} not found, {} failed",
        summary.processed, summary.inserted, summary.missing, summary.failed
    );
    println!("\nNext steps:");
    println!("1. Review the annotated files");
    println!("2. Update the values according to the comments");
    println!("3. Test your configuration");
    println!("4. Run '{}' before deploying", "confwarden verify".cyan());

    Ok(exit_codes::SUCCESS)
}

/// Annotate (or preview) every target, reporting per-file failures without
/// aborting the batch.
pub fn run(annotator: &Annotator, targets: &[String], dry_run: bool) -> AnnotateSummary {
    let mut summary = AnnotateSummary::default();

    for target in targets {
        let path = Path::new(target);

        if !path.exists() {
            println!("{} {}", "File not found:".yellow(), target);
            warn!(file = %target, "File not found, skipping");
            summary.missing += 1;
            continue;
        }

        println!("Processing: {}", target);

        let result = if dry_run {
            annotator.preview(path)
        } else {
            annotator.annotate(path)
        };

        match result {
            Ok(annotated) => {
                summary.processed += 1;
                summary.inserted += annotated.annotations.len();

                if let Some(backup) = &annotated.backup {
                    println!("Backed up: {} -> {}", target, backup.display());
                }

                if dry_run {
                    if annotated.is_changed() {
                        print!("{}", annotated.diff());
                    }
                } else {
                    println!(
                        "{} {} ({} added, {} already present)",
                        "Annotated:".green(),
                        target,
                        annotated.annotations.len(),
                        annotated.already_annotated
                    );
                }
            }
            Err(e) => {
                summary.failed += 1;
                warn!(file = %target, error = %e, "Error processing file");
                println!("{} {}: {}", "Error processing".red(), target, e);
            }
        }
    }

    info!(
        processed = summary.processed,
        inserted = summary.inserted,
        missing = summary.missing,
        failed = summary.failed,
        "Annotation batch finished"
    );

    summary
}

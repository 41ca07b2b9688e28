//! Batch processing of a directory of statements.

use std::path::Path;
use std::time::Instant;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use ccparse_core::{BatchRunner, TextExtractor};

use super::{format_record, header};

/// Parse every statement in `dir`, then write the summary.
///
/// Unreadable statements are skipped and listed at the end.
pub fn run<E: TextExtractor>(dir: &Path, runner: &BatchRunner<'_, E>) -> anyhow::Result<()> {
    let start = Instant::now();

    let files = runner.discover(dir)?;
    if files.is_empty() {
        println!(
            "{} No PDF files found in {}",
            style("ℹ").blue(),
            dir.display()
        );
        return Ok(());
    }

    println!(
        "{} Found {} PDF statement(s)",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let report = runner.run_files_with(dir, &files, |path, outcome| {
        // suspend, not println: the bar is hidden when stdout is not a tty
        pb.suspend(|| {
            println!("{}", header(path));
            match outcome {
                Ok((record, output_path)) => {
                    println!("{}", format_record(record));
                    println!(
                        "{} Saved results to: {}",
                        style("✓").green(),
                        output_path.display()
                    );
                }
                Err(e) => println!("{} Skipped: {}", style("✗").red(), e),
            }
            println!();
        });
        pb.inc(1);
    })?;

    pb.finish_and_clear();

    if let Some(summary_path) = &report.summary_path {
        println!(
            "{} Parsing complete! Summary saved to: {}",
            style("✓").green(),
            summary_path.display()
        );
    }
    println!(
        "   {} parsed, {} skipped in {:?}",
        style(report.entries.len()).green(),
        style(report.skipped.len()).red(),
        start.elapsed()
    );

    if !report.skipped.is_empty() {
        println!();
        println!("{}", style("Skipped files:").red());
        for skipped in &report.skipped {
            println!("  - {}: {}", skipped.path.display(), skipped.error);
        }
    }

    Ok(())
}

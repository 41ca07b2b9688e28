//! Process a single statement file.

use std::path::Path;
use std::time::{Duration, Instant};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use ccparse_core::{BatchRunner, CcParseError, TextExtractor};

use super::{format_record, header};

/// Parse `path` and write its record beside it.
///
/// An unreadable document is reported and is not an error.
pub fn run<E: TextExtractor>(path: &Path, runner: &BatchRunner<'_, E>) -> anyhow::Result<()> {
    let start = Instant::now();
    println!("{}", header(path));

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message("Extracting statement fields...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let outcome = runner.process_file(path);
    pb.finish_and_clear();

    match outcome {
        Ok((record, output_path)) => {
            println!("{}", format_record(&record));
            println!();
            println!(
                "{} Saved results to: {}",
                style("✓").green(),
                output_path.display()
            );
            println!("{} Parsing successful!", style("✓").green());
        }
        Err(CcParseError::Pdf(e)) => {
            eprintln!("{} Error reading PDF: {}", style("✗").red(), e);
        }
        Err(e) => return Err(e.into()),
    }

    debug!("Total processing time: {:?}", start.elapsed());
    Ok(())
}

//! Entry points behind the two command-line tools.
//!
//! `run_ranker` reads a results log, ranks its stats lines and prints the best
//! ones. `run_templater` validates the mapping arguments, renders the
//! template into the output file and echoes the invocation. Both write their
//! console output to a caller-supplied writer so they can be driven from
//! tests, and both fail fast on the first error.

use std::io::Write;

use super::cli::{RankCli, TemplateCli};
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::{verbose_eprintln, verbose_println};
use crate::ranker;
use crate::templater::{self, PlaceholderMap};

/// Installs the verbose logger when a log file was requested, and removes
/// any logger left over from an earlier run when not.
///
/// A logger that fails to open is not fatal; the run continues without it.
fn init_logging(log_file: Option<&std::path::Path>) {
    let Some(path) = log_file else {
        if let Err(e) = logger::reset_global_logger() {
            eprintln!("[WARNING] Failed to close the previous log file: {}", e);
        }
        return;
    };
    if let Err(e) = logger::init_global_logger(path) {
        eprintln!(
            "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
            path.display(),
            e
        );
    }
}

fn final_flush() {
    if let Err(e) = logger::flush_global_logger() {
        eprintln!("[WARNING] Failed to perform final flush of the log file: {}", e);
    }
}

/// Ranks the stats lines of `cli.input` and prints the top `cli.top` as
/// Python tuples, one per line.
///
/// # Errors
/// `InputNotFound` when the log is missing, `Rank` when a score does not
/// parse, `Io` when stdout cannot be written.
pub fn run_ranker<W: Write>(cli: &RankCli, stdout: &mut W) -> Result<(), AppError> {
    init_logging(cli.log_file.as_deref());
    let result = rank_and_print(cli, stdout);
    if let Err(e) = &result {
        verbose_eprintln!("[ERROR] Ranking {} failed: {}", cli.input.display(), e);
    }
    final_flush();
    result
}

fn rank_and_print<W: Write>(cli: &RankCli, stdout: &mut W) -> Result<(), AppError> {
    verbose_println!("Ranking results log: {}", cli.input.display());
    let text = file_handler::read_text_file(&cli.input)?;

    let entries = ranker::parse_log(&text)?;
    verbose_println!("   => Found {} stats line(s).", entries.len());

    let ranked = ranker::rank(entries, cli.top);
    for ranked_entry in &ranked {
        verbose_println!(
            "   score {} <- {}",
            ranked_entry.score,
            ranked_entry.entry.stats_line.trim_end()
        );
        writeln!(stdout, "{}", ranker::format_entry(&ranked_entry.entry))?;
    }
    stdout.flush()?;

    verbose_println!("   => Printed {} of top {}.", ranked.len(), cli.top);
    Ok(())
}

/// Renders `cli.template_file` into `cli.output_file`, then prints the
/// provenance line built from `invocation` (program name first).
///
/// Mappings are validated before any file is touched. If a placeholder is
/// undefined, the output file keeps whatever was rendered before it and no
/// provenance line is printed.
pub fn run_templater<W: Write>(
    cli: &TemplateCli,
    invocation: &[String],
    stdout: &mut W,
) -> Result<(), AppError> {
    init_logging(cli.log_file.as_deref());
    let result = render_and_echo(cli, invocation, stdout);
    if let Err(e) = &result {
        verbose_eprintln!(
            "[ERROR] Rendering {} failed: {}",
            cli.template_file.display(),
            e
        );
    }
    final_flush();
    result
}

fn render_and_echo<W: Write>(
    cli: &TemplateCli,
    invocation: &[String],
    stdout: &mut W,
) -> Result<(), AppError> {
    let placeholders = PlaceholderMap::from_args(&cli.mappings)?;
    verbose_println!("Loaded {} placeholder(s):", placeholders.len());
    for (key, placeholder) in placeholders.sorted_entries() {
        verbose_println!(
            "   ^{} ({}) -> {:?}",
            key,
            placeholder.name,
            placeholder.value
        );
    }

    let template = file_handler::read_text_file(&cli.template_file)?;
    let mut writer = file_handler::create_output_writer(&cli.output_file).map_err(|e| {
        verbose_eprintln!(
            "Failed to open output {}: {}",
            cli.output_file.display(),
            e
        );
        AppError::Io(e)
    })?;

    let summary = templater::substitute(&template, &placeholders, &mut writer)?;
    writer.flush()?;
    verbose_println!(
        "Wrote {} byte(s) with {} substitution(s) to {}",
        summary.bytes_written,
        summary.substitutions,
        cli.output_file.display()
    );

    stdout.write_all(templater::provenance_line(invocation).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

//! Console rendering of sync progress and command summaries.
//!
//! Separate from the sync flows so locosync can be used as a library: the
//! flows emit [`SyncEvent`]s and this module turns them into lines.

use std::{
    borrow::Cow,
    io::{self, Write},
};

use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::commands::{CommandResult, CommandSummary, InitSummary, ValidateSummary};
use crate::{
    config::CONFIG_FILE_NAME,
    core::SyncEvent,
    sync::{ExtractSummary, ImportSummary},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Display width of asset names in progress lines.
const MAX_NAME_WIDTH: usize = 50;

/// Display width of asset ids in progress lines.
const MAX_ID_WIDTH: usize = 30;

const ELLIPSIS: &str = "[...]";

/// Renders [`SyncEvent`]s to stdout as they arrive.
pub struct Progress {
    verbose: bool,
}

impl Progress {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn on_event(&mut self, event: &SyncEvent) {
        print_event_to(event, self.verbose, &mut io::stdout().lock());
    }
}

/// Print one progress line for `event` to a custom writer.
///
/// Events only relevant for debugging are skipped unless `verbose` is set.
pub fn print_event_to<W: Write>(event: &SyncEvent, verbose: bool, writer: &mut W) {
    let line = match event {
        SyncEvent::StaleFileRemoved { path } => {
            done(format!("Removed old file {}", path.display()))
        }
        SyncEvent::HookStarted { event, command } => {
            if verbose {
                format!("Running {} hook: {}", event.cyan(), command.dimmed())
            } else {
                format!("Running {} hook", event.cyan())
            }
        }
        SyncEvent::FileScanned { path, tag, ids } => {
            if !verbose {
                return;
            }
            format!(
                "Scanned {} ({} {}, tag {})",
                path.display(),
                ids,
                plural(*ids, "id", "ids"),
                tag.cyan()
            )
        }
        SyncEvent::InventoryFetched { assets } => done(format!(
            "Grabbed the list of {} existing {}",
            assets,
            plural(*assets, "asset", "assets")
        )),
        SyncEvent::AssetCreated {
            name,
            plural_of: None,
            ..
        } => done(format!(
            "Uploaded asset \"{}\"",
            truncate(name, MAX_NAME_WIDTH)
        )),
        SyncEvent::AssetCreated {
            name,
            plural_of: Some(parent),
            ..
        } => done(format!(
            "Uploaded plural \"{}\" of \"{}\"",
            truncate(name, MAX_NAME_WIDTH),
            truncate(parent, MAX_ID_WIDTH)
        )),
        SyncEvent::TagAttached { asset_id, tag } => done(format!(
            "Uploaded tag \"{}\" for asset \"{}\"",
            tag,
            truncate(asset_id, MAX_ID_WIDTH)
        )),
        SyncEvent::LocaleDownloaded { language, tag } => {
            done(format!("Imported \"{}\" {} assets", language, tag))
        }
        SyncEvent::DirectoryCreated { path } => {
            done(format!("Created folder {}", path.display()))
        }
        SyncEvent::FileWritten { path } => {
            if !verbose {
                return;
            }
            format!("Wrote {}", path.display())
        }
        SyncEvent::FileValidated { path } => {
            if !verbose {
                return;
            }
            format!("Validated {}", path.display())
        }
    };
    let _ = writeln!(writer, "{}", line);
}

fn done(message: String) -> String {
    format!("{} {}", SUCCESS_MARK.green(), message)
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

/// Cut `text` to at most `max_width` display columns, marking the cut.
pub fn truncate(text: &str, max_width: usize) -> Cow<'_, str> {
    if text.width() <= max_width {
        return Cow::Borrowed(text);
    }

    let budget = max_width.saturating_sub(ELLIPSIS.width());
    let mut width = 0;
    let mut cut = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > budget {
            break;
        }
        width += ch_width;
        cut.push(ch);
    }
    cut.push_str(ELLIPSIS);
    Cow::Owned(cut)
}

/// Print the final summary of a command.
pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Init(summary) => {
            print_init_to(summary, &mut io::stdout().lock(), &mut io::stderr().lock())
        }
        summary => print_summary_to(summary, verbose, &mut io::stdout().lock()),
    }
}

fn print_init_to<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            err,
            "{} {} already exists",
            FAILURE_MARK.red(),
            CONFIG_FILE_NAME
        );
    }
}

/// Print a command summary to a custom writer.
pub fn print_summary_to<W: Write>(summary: &CommandSummary, verbose: bool, writer: &mut W) {
    let line = match summary {
        CommandSummary::Extract(summary) => extract_line(summary, verbose),
        CommandSummary::Import(summary) => import_line(summary),
        CommandSummary::Validate(ValidateSummary { file_count }) => format!(
            "Validated {} {} - no errors found",
            file_count,
            plural(*file_count, "file", "files")
        ),
        CommandSummary::Init(_) => return,
    };
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), line.green());
}

fn extract_line(summary: &ExtractSummary, verbose: bool) -> String {
    let stats = &summary.stats;
    let scanned = format!(
        "{} {} in {} {}",
        summary.messages,
        plural(summary.messages, "message", "messages"),
        summary.files_scanned,
        plural(summary.files_scanned, "file", "files")
    );

    let mut line = if stats.mutations() == 0 {
        format!("Remote assets already up to date ({})", scanned)
    } else {
        format!(
            "All done! {} {}, {} {}, {} {} uploaded ({})",
            stats.assets_created,
            plural(stats.assets_created, "asset", "assets"),
            stats.plurals_created,
            plural(stats.plurals_created, "plural", "plurals"),
            stats.tags_attached,
            plural(stats.tags_attached, "tag", "tags"),
            scanned
        )
    };
    if verbose {
        line.push_str(&format!(
            "; {} remote, {} unchanged, {} stale removed",
            summary.remote_assets, stats.unchanged, summary.stale_files_removed
        ));
    }
    line
}

fn import_line(summary: &ImportSummary) -> String {
    format!(
        "All done! {} {} written from {} {}",
        summary.files_written,
        plural(summary.files_written, "file", "files"),
        summary.downloads,
        plural(summary.downloads, "download", "downloads")
    )
}

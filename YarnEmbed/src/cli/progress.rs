//! CLI progress display utilities
//!
//! Step lines go to stderr so they never mix with declarations on stdout.

use std::time::Duration;

use console::{Emoji, style};
use indicatif::HumanDuration;

use crate::pipeline::{EmbedPhase, EmbedProgress};

// =============================================================================
// Emoji Constants (with ASCII fallbacks for terminals without emoji support)
// =============================================================================

/// Magnifying glass - for reading/scanning operations
pub static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
/// Document - for CSV tables
pub static DOCUMENT: Emoji<'_, '_> = Emoji("📄 ", "");
/// Package - for the compiled program
pub static PACKAGE: Emoji<'_, '_> = Emoji("📦 ", "");
/// Floppy disk - for writing/saving operations
pub static DISK: Emoji<'_, '_> = Emoji("💾 ", "");
/// Sparkles - for completion
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

/// Print a step indicator: `[1/3] 📄 Message...`
pub fn print_step(current: usize, total: usize, emoji: &Emoji, msg: &str) {
    eprintln!(
        "{} {}{}",
        style(format!("[{current}/{total}]")).bold().dim(),
        emoji,
        msg
    );
}

/// Print completion message: `✨ Done in 2s`
pub fn print_done(elapsed: Duration) {
    eprintln!("{} Done in {}", SPARKLE, HumanDuration(elapsed));
}

/// Render a pipeline progress update as a step line.
pub fn print_embed_progress(progress: &EmbedProgress) {
    let emoji = match progress.phase {
        EmbedPhase::ReadingStrings | EmbedPhase::ReadingMetadata => &DOCUMENT,
        EmbedPhase::ReadingProgram => &PACKAGE,
        EmbedPhase::Emitting => &DISK,
    };
    let msg = match &progress.current_file {
        Some(file) => format!("{} ({})...", progress.phase.as_str(), file.display()),
        None => format!("{}...", progress.phase.as_str()),
    };
    print_step(progress.current, progress.total, emoji, &msg);
}

//! Types for embed progress tracking and run summaries

use std::path::PathBuf;

use crate::emitter::EmitReport;

// ============================================================================
// Progress Types
// ============================================================================

/// Progress callback type for embed runs
pub type EmbedProgressCallback<'a> = &'a dyn Fn(&EmbedProgress);

/// Progress information during an embed run
#[derive(Debug, Clone)]
pub struct EmbedProgress {
    /// Current operation phase
    pub phase: EmbedPhase,
    /// Current step number (1-indexed)
    pub current: usize,
    /// Total number of steps
    pub total: usize,
    /// Input or output file being handled (if applicable)
    pub current_file: Option<PathBuf>,
}

impl EmbedProgress {
    #[must_use]
    pub fn new(phase: EmbedPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: None,
        }
    }

    #[must_use]
    pub fn with_file(
        phase: EmbedPhase,
        current: usize,
        total: usize,
        file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: Some(file.into()),
        }
    }
}

/// Phase of an embed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedPhase {
    /// Reading and encoding the string table
    ReadingStrings,
    /// Reading and encoding the metadata table
    ReadingMetadata,
    /// Reading and encoding the compiled program
    ReadingProgram,
    /// Writing declarations
    Emitting,
}

impl EmbedPhase {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadingStrings => "Reading string table",
            Self::ReadingMetadata => "Reading line metadata",
            Self::ReadingProgram => "Reading compiled program",
            Self::Emitting => "Emitting declarations",
        }
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Result of a successful embed run
#[derive(Debug, Clone, Default)]
pub struct EmbedSummary {
    /// String table entries
    pub strings: usize,
    /// Metadata entries, if the metadata table was enabled
    pub metadata: Option<usize>,
    /// Program size in bytes, if the program table was enabled
    pub program_bytes: Option<usize>,
    /// Ids that appear more than once in the string table
    pub duplicate_ids: Vec<String>,
    /// Metadata ids with no string table entry
    pub unmatched_metadata: Vec<String>,
    /// Where the declarations went
    pub report: EmitReport,
}

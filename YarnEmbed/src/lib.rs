//! # YarnEmbed
//!
//! Turns the output of the Yarn Spinner compiler into source-code literals
//! that can be embedded in a static module.
//!
//! ## Tables
//!
//! - **Strings** - `Output.csv` (`id`, `text`) as an id → text object
//! - **Metadata** - `Output-metadata.csv` (`id`, `node`, `lineNumber`, `tags`)
//!   as an id → record object
//! - **Program** - the compiled `.yarnc` blob as a byte array
//!
//! ## Quick Start
//!
//! ```no_run
//! use yarnembed::prelude::*;
//!
//! // Strings and program data to stdout
//! run(&EmbedConfig::default())?;
//!
//! // Or from a config file that also writes files
//! let config = EmbedConfig::load("yarnembed.toml")?;
//! let summary = run(&config)?;
//! eprintln!("{} lines", summary.strings);
//! # Ok::<(), yarnembed::Error>(())
//! ```
//!
//! ### Encoding by hand
//!
//! ```
//! use yarnembed::encoder::{EscapeRules, escape_literal, hex_tokens};
//!
//! assert_eq!(escape_literal(r#"say "hi""#, EscapeRules::Minimal), r#"say \"hi\""#);
//! assert_eq!(hex_tokens(&[0x00, 0xff]), ["0x00", "0xff"]);
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `yarnembed` command-line binary

pub mod emitter;
pub mod encoder;
pub mod error;
pub mod formats;
pub mod pipeline;

// Re-exports for convenience
pub use error::{Error, ErrorKind, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, ErrorKind, Result};

    pub use crate::formats::{
        LineMetadata, LocalizedLine, Record, RecordSource, read_metadata_table, read_program,
        read_string_table,
    };

    pub use crate::encoder::{EscapeRules, encode_metadata, escape_literal, hex_tokens};

    pub use crate::emitter::{
        Declaration, EmitReport, Emitter, OutputFile, OutputPlan, TableKind, TableTemplate,
        Templates,
    };

    pub use crate::pipeline::{
        EmbedConfig, EmbedPhase, EmbedProgress, EmbedSummary, build_declarations, run,
        run_with_progress,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

//! Declaration emitting
//!
//! A [`Declaration`] is a fixed opener, the comma-joined encoded entries of
//! one table and a fixed closer. The default templates target TypeScript.

mod output;

pub use output::{EmitReport, Emitter, OutputFile, OutputPlan};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Logical tables a run can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    /// Line id to localized text
    Strings,
    /// Line id to provenance record
    Metadata,
    /// Compiled program bytes
    Program,
}

impl TableKind {
    pub const ALL: [TableKind; 3] = [TableKind::Strings, TableKind::Metadata, TableKind::Program];

    pub fn name(self) -> &'static str {
        match self {
            Self::Strings => "strings",
            Self::Metadata => "metadata",
            Self::Program => "program",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strings" | "string" => Ok(Self::Strings),
            "metadata" | "meta" => Ok(Self::Metadata),
            "program" | "data" => Ok(Self::Program),
            _ => Err(format!(
                "Invalid table '{s}'. Valid values: strings, metadata, program"
            )),
        }
    }
}

/// Fixed text wrapped around a table's entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableTemplate {
    pub opener: String,
    pub closer: String,
}

impl TableTemplate {
    pub fn new(opener: impl Into<String>, closer: impl Into<String>) -> Self {
        Self {
            opener: opener.into(),
            closer: closer.into(),
        }
    }

    /// TypeScript declaration matching what the web runner loads
    pub fn typescript(kind: TableKind) -> Self {
        match kind {
            TableKind::Strings => Self::new("const stringTable: { [key: string]: string } = {", "};"),
            TableKind::Metadata => Self::new(
                "const metadataTable: { [key: string]: MetadataEntry } = {",
                "};",
            ),
            TableKind::Program => Self::new("const data = Uint8Array.from([", "]);"),
        }
    }
}

/// Per-table templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Templates {
    pub strings: TableTemplate,
    pub metadata: TableTemplate,
    pub program: TableTemplate,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            strings: TableTemplate::typescript(TableKind::Strings),
            metadata: TableTemplate::typescript(TableKind::Metadata),
            program: TableTemplate::typescript(TableKind::Program),
        }
    }
}

impl Templates {
    pub fn get(&self, kind: TableKind) -> &TableTemplate {
        match kind {
            TableKind::Strings => &self.strings,
            TableKind::Metadata => &self.metadata,
            TableKind::Program => &self.program,
        }
    }
}

/// Entry separator within a declaration body
pub const ENTRY_SEPARATOR: &str = ",";

/// One fully encoded table, ready to emit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: TableKind,
    pub template: TableTemplate,
    pub entries: Vec<String>,
}

impl Declaration {
    pub fn new(kind: TableKind, template: TableTemplate, entries: Vec<String>) -> Self {
        Self {
            kind,
            template,
            entries,
        }
    }

    /// `opener + entries.join(",") + closer`
    pub fn render(&self) -> String {
        let body = self.entries.join(ENTRY_SEPARATOR);
        let mut out =
            String::with_capacity(self.template.opener.len() + body.len() + self.template.closer.len());
        out.push_str(&self.template.opener);
        out.push_str(&body);
        out.push_str(&self.template.closer);
        out
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_joins_entries() {
        let decl = Declaration::new(
            TableKind::Program,
            TableTemplate::typescript(TableKind::Program),
            vec!["0x00".into(), "0xff".into(), "0x0a".into()],
        );
        assert_eq!(decl.render(), "const data = Uint8Array.from([0x00,0xff,0x0a]);");
    }

    #[test]
    fn test_render_empty_body() {
        let decl = Declaration::new(
            TableKind::Strings,
            TableTemplate::typescript(TableKind::Strings),
            Vec::new(),
        );
        assert_eq!(decl.render(), "const stringTable: { [key: string]: string } = {};");
    }

    #[test]
    fn test_table_kind_parse() {
        assert_eq!("Strings".parse::<TableKind>(), Ok(TableKind::Strings));
        assert_eq!("meta".parse::<TableKind>(), Ok(TableKind::Metadata));
        assert!("bytes".parse::<TableKind>().is_err());
        assert_eq!(TableKind::Program.to_string(), "program");
    }
}

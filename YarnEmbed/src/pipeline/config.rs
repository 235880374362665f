//! Embed configuration
//!
//! A run is described by one [`EmbedConfig`], loadable from TOML:
//!
//! ```toml
//! escape = "minimal"
//!
//! [inputs]
//! strings = "Output.csv"
//! metadata = "Output-metadata.csv"
//! program = "Output.yarnc"   # or `false` to skip the program table
//!
//! [output]
//! stdout = false
//!
//! [[output.files]]
//! path = "src/dev-data.ts"
//! tables = ["strings", "program"]
//!
//! [[output.files]]
//! path = "src/dev-metadata.ts"
//! tables = ["metadata"]
//! ```
//!
//! Relative paths in a loaded file resolve against the file's directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize, Serializer};

use crate::emitter::{OutputPlan, TableKind, Templates};
use crate::encoder::EscapeRules;
use crate::error::{Error, Result};

/// Conventional string table file name
pub const DEFAULT_STRINGS_PATH: &str = "Output.csv";
/// Conventional line metadata file name
pub const DEFAULT_METADATA_PATH: &str = "Output-metadata.csv";
/// Conventional compiled program file name
pub const DEFAULT_PROGRAM_PATH: &str = "Output.yarnc";
/// Conventional configuration file name
pub const DEFAULT_CONFIG_NAME: &str = "yarnembed.toml";

/// Input files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inputs {
    /// String table CSV (`id`, `text`)
    pub strings: PathBuf,
    /// Line metadata CSV (`id`, `node`, `lineNumber`, `tags`); no metadata
    /// table is produced when unset
    #[serde(with = "metadata_setting")]
    pub metadata: Option<PathBuf>,
    /// Compiled program; no program table is produced when unset
    #[serde(with = "program_setting")]
    pub program: Option<PathBuf>,
}

/// A table input written as a path, or as `true`/`false` to use the
/// conventional path or disable the table
#[derive(Deserialize)]
#[serde(untagged)]
enum InputSetting {
    Path(PathBuf),
    Toggle(bool),
}

impl InputSetting {
    fn resolve(self, conventional: &str) -> Option<PathBuf> {
        match self {
            Self::Path(path) => Some(path),
            Self::Toggle(true) => Some(PathBuf::from(conventional)),
            Self::Toggle(false) => None,
        }
    }
}

#[allow(clippy::ref_option)]
fn serialize_setting<S: Serializer>(
    value: &Option<PathBuf>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match value {
        Some(path) => path.serialize(serializer),
        None => serializer.serialize_bool(false),
    }
}

mod metadata_setting {
    use super::{DEFAULT_METADATA_PATH, InputSetting, PathBuf};
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub(super) fn serialize<S: Serializer>(
        value: &Option<PathBuf>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        super::serialize_setting(value, serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<PathBuf>, D::Error> {
        Ok(InputSetting::deserialize(deserializer)?.resolve(DEFAULT_METADATA_PATH))
    }
}

mod program_setting {
    use super::{DEFAULT_PROGRAM_PATH, InputSetting, PathBuf};
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub(super) fn serialize<S: Serializer>(
        value: &Option<PathBuf>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        super::serialize_setting(value, serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<PathBuf>, D::Error> {
        Ok(InputSetting::deserialize(deserializer)?.resolve(DEFAULT_PROGRAM_PATH))
    }
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            strings: PathBuf::from(DEFAULT_STRINGS_PATH),
            metadata: None,
            program: Some(PathBuf::from(DEFAULT_PROGRAM_PATH)),
        }
    }
}

/// Everything one embed run needs
///
/// The default reproduces the plain script: string table and program data
/// printed to stdout, no metadata, minimal escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    pub escape: EscapeRules,
    pub inputs: Inputs,
    pub output: OutputPlan,
    pub templates: Templates,
}

impl EmbedConfig {
    /// Load a TOML configuration file.
    ///
    /// # Errors
    /// Returns [`Error::FileNotFound`] if the file is missing or
    /// [`Error::TomlError`] if it does not parse.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => Error::Io(e),
        })?;

        let mut config = Self::from_toml(&text)?;
        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            config.resolve_relative_to(base);
        }
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse a configuration from TOML text. Paths are left as written.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Tables this configuration produces, in emit order
    pub fn tables(&self) -> Vec<TableKind> {
        let mut tables = vec![TableKind::Strings];
        if self.inputs.metadata.is_some() {
            tables.push(TableKind::Metadata);
        }
        if self.inputs.program.is_some() {
            tables.push(TableKind::Program);
        }
        tables
    }

    /// Check the output plan against the enabled tables.
    pub fn validate(&self) -> Result<()> {
        self.output.validate(&self.tables())
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        resolve(&mut self.inputs.strings);
        if let Some(p) = self.inputs.metadata.as_mut() {
            resolve(p);
        }
        if let Some(p) = self.inputs.program.as_mut() {
            resolve(p);
        }
        for file in &mut self.output.files {
            resolve(&mut file.path);
        }
    }
}

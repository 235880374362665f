//! Init-config command

use std::path::{Path, PathBuf};

use crate::pipeline::{DEFAULT_CONFIG_NAME, DEFAULT_METADATA_PATH, EmbedConfig};

/// Write the default configuration as TOML.
pub fn execute(path: Option<&Path>, with_metadata: bool, force: bool) -> anyhow::Result<()> {
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME), Path::to_path_buf);

    if path.exists() && !force {
        anyhow::bail!(
            "File already exists: {}. Use --force to overwrite.",
            path.display()
        );
    }

    let mut config = EmbedConfig::default();
    if with_metadata {
        config.inputs.metadata = Some(DEFAULT_METADATA_PATH.into());
    }
    std::fs::write(&path, config.to_toml()?)?;

    println!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_NAME);

        execute(Some(path.as_path()), true, false).unwrap();
        let config = EmbedConfig::load(&path).unwrap();
        assert_eq!(config.inputs.metadata, Some(dir.path().join(DEFAULT_METADATA_PATH)));

        assert!(execute(Some(path.as_path()), false, false).is_err());
        execute(Some(path.as_path()), false, true).unwrap();
        assert_eq!(EmbedConfig::load(&path).unwrap().inputs.metadata, None);
    }
}

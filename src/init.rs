//! Config initialization.
//!
//! Writes the built-in `folio.toml` as a starting point.

use crate::config::{BUILTIN, CONFIG_FILE};
use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Write the built-in config to `path` (default `./folio.toml`).
///
/// Refuses to overwrite an existing file.
pub fn new_config(path: Option<&Path>) -> Result<PathBuf> {
    let path = path.map_or_else(|| PathBuf::from(CONFIG_FILE), Path::to_path_buf);

    if path.exists() {
        bail!(
            "`{}` already exists. Remove it manually or init in a different path.",
            path.display()
        );
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(&path, BUILTIN).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_new_config_writes_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let written = new_config(Some(&path)).unwrap();
        assert_eq!(written, path);

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.site, SiteConfig::builtin().unwrap().site);
    }

    #[test]
    fn test_new_config_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "keep me").unwrap();

        let err = new_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }
}

// src/config/validation.rs

use super::Config;
use crate::errors::{Error, Result};
use crate::lifecycle::output_file_name;
use std::collections::HashMap;

/// Validates a fully merged configuration.
///
/// At least one root is required and the roots must map to distinct output
/// file names, since two lifecycles must never share a temporary file. Roots
/// that are missing or not directories are accepted here; their lifecycle
/// fails on its own without stopping the others.
pub(super) fn validate_config(config: &Config) -> Result<()> {
    if config.roots.is_empty() {
        return Err(Error::NoRoots);
    }

    let mut seen: HashMap<String, &std::path::Path> = HashMap::new();
    for root in &config.roots {
        let name = output_file_name(root);
        if let Some(previous) = seen.insert(name.clone(), root) {
            return Err(Error::Config(format!(
                "Roots '{}' and '{}' would both write '{}'",
                previous.display(),
                root.display(),
                name
            )));
        }
    }

    if !config.dry_run && !config.output_dir.is_dir() {
        return Err(Error::Config(format!(
            "Output directory '{}' does not exist",
            config.output_dir.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_no_roots() {
        let config = Config::new_for_test();
        assert!(matches!(validate_config(&config), Err(Error::NoRoots)));
    }

    #[test]
    fn test_missing_root_is_left_to_its_lifecycle() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file = temp.path().join("a.ts");
        fs::write(&file, "x")?;

        let mut config = Config::new_for_test();
        config.roots = vec![file, temp.path().join("gone")];
        validate_config(&config)?;
        Ok(())
    }

    #[test]
    fn test_colliding_output_names() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let first = temp.path().join("one").join("app");
        let second = temp.path().join("two").join("app");
        fs::create_dir_all(&first)?;
        fs::create_dir_all(&second)?;

        let mut config = Config::new_for_test();
        config.roots = vec![first, second];
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("Output_app.txt"));
        Ok(())
    }

    #[test]
    fn test_missing_output_dir_only_matters_outside_dry_run() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let mut config = Config::new_for_test();
        config.roots = vec![temp.path().to_path_buf()];
        config.output_dir = temp.path().join("missing");
        assert!(validate_config(&config).is_err());

        config.dry_run = true;
        validate_config(&config)?;
        Ok(())
    }
}

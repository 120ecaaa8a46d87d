//! `ipu list` / `ipu describe` / `ipu validate` — device listing and description.

use std::path::Path;

use anyhow::{bail, Result};

use ipu_device::config::{config_to_toml, discover_devices, validate_config, DeviceConfig};

use crate::builtins::{builtin_devices, resolve_device};

/// Print the builtin ipu report (the bare `ipu` invocation).
pub fn describe_builtin_ipu() -> Result<()> {
    let target = DeviceConfig::ipu().build()?;
    println!("{}", target.get_device_info());
    Ok(())
}

/// List builtin device configurations and any discovered in `devices/`.
pub fn list(project_dir: &Path) -> Result<()> {
    println!("Builtin devices:");
    println!();
    for (name, description) in builtin_devices() {
        println!("  {name:<12} {description}");
    }

    let discovered = discover_devices(project_dir)?;
    if !discovered.is_empty() {
        println!();
        println!("Project devices:");
        println!();
        for (name, path) in &discovered {
            println!("  {name:<12} {}", path.display());
        }
    }

    println!();
    println!("Use 'ipu describe <name>' for details.");
    Ok(())
}

/// Describe a device configuration.
///
/// Default output is the human-readable device report; `--format toml`
/// emits the configuration, `--format json` the assembled device tree.
pub fn describe(name: &str, project_dir: &Path, format: Option<&str>) -> Result<()> {
    let config = match resolve_device(name, project_dir)? {
        Some(c) => c,
        None => bail!("unknown device: '{name}'. Use 'ipu list' to see available devices."),
    };

    match format {
        None => {
            let target = config.build()?;
            println!("{}", target.get_device_info());
        }
        Some("toml") => {
            print!("{}", config_to_toml(&config)?);
        }
        Some("json") => {
            let target = config.build()?;
            println!("{}", serde_json::to_string_pretty(&target)?);
        }
        Some(other) => bail!("unknown format: '{other}' (expected \"toml\" or \"json\")"),
    }

    Ok(())
}

/// Validate a device configuration, printing each issue found.
///
/// Warnings alone pass; any error-severity issue fails the command.
pub fn validate(name: &str, project_dir: &Path) -> Result<()> {
    let config = match resolve_device(name, project_dir)? {
        Some(c) => c,
        None => bail!("unknown device: '{name}'. Use 'ipu list' to see available devices."),
    };

    match validate_config(&config) {
        Ok(()) => {
            println!("Device '{name}': OK");
            Ok(())
        }
        Err(issues) => {
            for issue in &issues {
                println!("  {}: {}", issue.severity, issue.message);
            }
            if issues.iter().any(|i| i.severity == "error") {
                bail!("device '{name}' failed validation");
            }
            println!("Device '{name}': OK (with warnings)");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_includes_builtins() {
        let devices = builtin_devices();
        assert!(devices.iter().any(|(name, _)| *name == "ipu"));
        assert!(devices.iter().any(|(name, _)| *name == "ipu-mini"));
    }

    #[test]
    fn list_runs() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list(dir.path()).is_ok());
    }

    #[test]
    fn describe_known_device() {
        let dir = tempfile::tempdir().unwrap();
        assert!(describe("ipu", dir.path(), None).is_ok());
        assert!(describe("ipu", dir.path(), Some("toml")).is_ok());
        assert!(describe("ipu", dir.path(), Some("json")).is_ok());
    }

    #[test]
    fn describe_unknown_device() {
        let dir = tempfile::tempdir().unwrap();
        assert!(describe("nonexistent", dir.path(), None).is_err());
    }

    #[test]
    fn describe_unknown_format() {
        let dir = tempfile::tempdir().unwrap();
        assert!(describe("ipu", dir.path(), Some("yaml")).is_err());
    }

    #[test]
    fn validate_builtins_pass() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate("ipu", dir.path()).is_ok());
        assert!(validate("ipu-mini", dir.path()).is_ok());
    }

    #[test]
    fn validate_flags_bad_device_file() {
        let dir = tempfile::tempdir().unwrap();
        let devices_dir = dir.path().join("devices");
        std::fs::create_dir_all(&devices_dir).unwrap();
        std::fs::write(
            devices_dir.join("broken.device.toml"),
            r#"
name = "broken"
global-memory-bytes = 1024
compute-cores = 1
local-memory-bytes = 512
mm-units-per-core = 1
tile-sizes = [32, 32]
"#,
        )
        .unwrap();

        let result = validate("broken", dir.path());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("failed validation"));
    }

    #[test]
    fn validate_warning_only_passes() {
        let dir = tempfile::tempdir().unwrap();
        let devices_dir = dir.path().join("devices");
        std::fs::create_dir_all(&devices_dir).unwrap();
        // No cores: a warning, not an error.
        std::fs::write(
            devices_dir.join("coreless.device.toml"),
            r#"
name = "coreless"
global-memory-bytes = 1024
compute-cores = 0
local-memory-bytes = 512
mm-units-per-core = 1
tile-sizes = [32, 32, 32]
"#,
        )
        .unwrap();

        assert!(validate("coreless", dir.path()).is_ok());
    }
}

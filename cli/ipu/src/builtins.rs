//! Builtin device configurations and name resolution.

use std::path::Path;

use anyhow::Result;

use ipu_device::config::{self, DeviceConfig};

/// Resolve a device name to a configuration.
///
/// Builtin names win; otherwise `devices/<name>.device.toml` under
/// `project_dir` is tried. Returns `None` for an unknown name.
pub fn resolve_device(name: &str, project_dir: &Path) -> Result<Option<DeviceConfig>> {
    match name {
        "ipu" => Ok(Some(DeviceConfig::ipu())),
        "ipu-mini" => Ok(Some(DeviceConfig::ipu_mini())),
        _ => {
            let path = project_dir
                .join("devices")
                .join(format!("{name}.device.toml"));
            if path.is_file() {
                Ok(Some(config::load_config_toml(&path)?))
            } else {
                Ok(None)
            }
        }
    }
}

/// List all builtin device configuration names.
pub fn builtin_devices() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "ipu",
            "IPU (1 GiB global, 4 cores x 512 KiB, 4 matmul units/core, 32x32x32 tiles)",
        ),
        (
            "ipu-mini",
            "Reduced IPU (256 MiB global, 2 cores x 256 KiB, 2 matmul units/core, 16x16x16 tiles)",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_builtin_devices() {
        let dir = tempfile::tempdir().unwrap();
        assert!(resolve_device("ipu", dir.path()).unwrap().is_some());
        assert!(resolve_device("ipu-mini", dir.path()).unwrap().is_some());
        assert!(resolve_device("nonexistent", dir.path()).unwrap().is_none());
    }

    #[test]
    fn resolve_device_file() {
        let dir = tempfile::tempdir().unwrap();
        let devices_dir = dir.path().join("devices");
        std::fs::create_dir_all(&devices_dir).unwrap();
        let template = config::generate_template("board").unwrap();
        std::fs::write(devices_dir.join("board.device.toml"), &template).unwrap();

        let resolved = resolve_device("board", dir.path()).unwrap().unwrap();
        assert_eq!(resolved.name, "board");
    }

    #[test]
    fn builtins_build() {
        for (name, _) in builtin_devices() {
            let dir = tempfile::tempdir().unwrap();
            let config = resolve_device(name, dir.path()).unwrap().unwrap();
            assert!(config.build().is_ok());
        }
    }
}

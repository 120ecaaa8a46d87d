//! TOML parsing, serialization, validation, and discovery for device definitions.
//!
//! Device definitions are stored as `.device.toml` files in the `devices/`
//! directory of a project. A [`DeviceConfig`] holds the factory inputs;
//! the assembled [`Processor`] is always rebuilt through
//! [`create_target`], which is what preserves the shared unit sequence
//! across cores (field-wise deserialization of a processor would produce
//! per-core copies).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DeviceError, Result};
use crate::processor::{create_target, Processor};

/// Configuration of a device: the inputs to [`create_target`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DeviceConfig {
    /// Device name (e.g., "ipu").
    pub name: String,
    /// Global memory capacity in bytes.
    pub global_memory_bytes: u64,
    /// Number of compute cores.
    pub compute_cores: u32,
    /// Local memory per core in bytes.
    pub local_memory_bytes: u64,
    /// Number of matmul units per core.
    pub mm_units_per_core: u32,
    /// Tile dimensions, exactly three entries: M, N, K.
    pub tile_sizes: Vec<u32>,
}

impl DeviceConfig {
    /// Assemble the processor described by this configuration.
    pub fn build(&self) -> Result<Processor> {
        create_target(
            self.name.clone(),
            self.global_memory_bytes,
            self.compute_cores,
            self.local_memory_bytes,
            self.mm_units_per_core,
            &self.tile_sizes,
        )
    }

    /// The builtin ipu configuration: 1 GiB global memory, 4 cores with
    /// 512 KiB local memory, 4 matmul units per core, 32x32x32 tiles.
    pub fn ipu() -> Self {
        Self {
            name: "ipu".into(),
            global_memory_bytes: 1024 * 1024 * 1024,
            compute_cores: 4,
            local_memory_bytes: 512 * 1024,
            mm_units_per_core: 4,
            tile_sizes: vec![32, 32, 32],
        }
    }

    /// A reduced variant for constrained deployments: 256 MiB global
    /// memory, 2 cores with 256 KiB local memory, 2 matmul units per
    /// core, 16x16x16 tiles.
    pub fn ipu_mini() -> Self {
        Self {
            name: "ipu-mini".into(),
            global_memory_bytes: 256 * 1024 * 1024,
            compute_cores: 2,
            local_memory_bytes: 256 * 1024,
            mm_units_per_core: 2,
            tile_sizes: vec![16, 16, 16],
        }
    }
}

/// A validation issue found in a device definition.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Severity: "error" or "warning".
    pub severity: &'static str,
    /// Human-readable description.
    pub message: String,
}

/// Load a device configuration from a `.device.toml` file.
pub fn load_config_toml(path: &Path) -> Result<DeviceConfig> {
    if !path.exists() {
        return Err(DeviceError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_config_toml(&content)
}

/// Parse a device configuration from a TOML string.
pub fn parse_config_toml(toml_str: &str) -> Result<DeviceConfig> {
    let config: DeviceConfig = toml::from_str(toml_str)?;
    Ok(config)
}

/// Serialize a device configuration to pretty TOML.
pub fn config_to_toml(config: &DeviceConfig) -> Result<String> {
    let toml_str = toml::to_string_pretty(config)?;
    Ok(toml_str)
}

/// Validate a device configuration for structural soundness.
///
/// Returns `Ok(())` if valid, or `Err(issues)` with a list of problems.
/// This is advisory: [`create_target`] itself only enforces the
/// tile-count precondition and accepts degenerate values otherwise.
pub fn validate_config(config: &DeviceConfig) -> std::result::Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    // 1. Exactly three tile dimensions
    if config.tile_sizes.len() != 3 {
        issues.push(ValidationIssue {
            severity: "error",
            message: format!(
                "tile-sizes has {} entries, expected exactly 3 (M, N, K)",
                config.tile_sizes.len()
            ),
        });
    }

    // 2. Tile dimensions are non-zero
    for (axis, &dim) in ["M", "N", "K"].iter().zip(&config.tile_sizes) {
        if dim == 0 {
            issues.push(ValidationIssue {
                severity: "error",
                message: format!("tile dimension {axis} is 0"),
            });
        }
    }

    // 3. At least one compute core
    if config.compute_cores == 0 {
        issues.push(ValidationIssue {
            severity: "warning",
            message: "device has no compute cores".into(),
        });
    }

    // 4. At least one matmul unit per core
    if config.mm_units_per_core == 0 {
        issues.push(ValidationIssue {
            severity: "warning",
            message: "cores have no matmul units".into(),
        });
    }

    // 5. Aggregate local memory fits in global memory
    let aggregate_local = config.compute_cores as u128 * config.local_memory_bytes as u128;
    if aggregate_local > config.global_memory_bytes as u128 {
        issues.push(ValidationIssue {
            severity: "warning",
            message: format!(
                "aggregate local memory ({} bytes over {} cores) exceeds global memory ({} bytes)",
                aggregate_local, config.compute_cores, config.global_memory_bytes
            ),
        });
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Generate a template `.device.toml` for a new device.
///
/// Seeds from the builtin ipu configuration with the given custom name.
pub fn generate_template(name: &str) -> Result<String> {
    let mut config = DeviceConfig::ipu();
    config.name = name.into();
    config_to_toml(&config)
}

/// Discover all `.device.toml` files in a project's `devices/` directory.
///
/// Returns a list of (device_name, file_path) pairs sorted by name.
pub fn discover_devices(project_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let devices_dir = project_dir.join("devices");
    if !devices_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut devices = Vec::new();
    let entries = std::fs::read_dir(&devices_dir)?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
            if file_name.ends_with(".device.toml") {
                let name = file_name.strip_suffix(".device.toml").unwrap().to_string();
                devices.push((name, path));
            }
        }
    }
    devices.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(devices)
}

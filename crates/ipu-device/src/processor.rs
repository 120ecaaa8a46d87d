//! Processor model and device factory.
//!
//! The root of the device tree: a named processor with a global memory
//! pool and an ordered sequence of compute cores. [`create_target`] is
//! the sole construction entry point.

use std::sync::Arc;

use serde::Serialize;

use crate::core::ComputeCore;
use crate::error::{DeviceError, Result};
use crate::matmul::MatmulUnit;

/// A processor: the assembled device model.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Processor {
    /// Device name (e.g., "ipu").
    pub name: String,
    /// Global memory capacity in bytes.
    pub global_memory: u64,
    /// Compute cores, in construction order.
    pub compute_cores: Vec<ComputeCore>,
}

impl Processor {
    /// Construct a processor. The core sequence is stored as given;
    /// no validation is performed.
    pub fn new(name: impl Into<String>, global_memory: u64, compute_cores: Vec<ComputeCore>) -> Self {
        Self {
            name: name.into(),
            global_memory,
            compute_cores,
        }
    }

    /// Device name.
    pub fn device_name(&self) -> &str {
        &self.name
    }

    /// Global memory capacity in bytes.
    pub fn global_memory(&self) -> u64 {
        self.global_memory
    }

    /// Number of compute cores.
    pub fn number_of_cores(&self) -> usize {
        self.compute_cores.len()
    }

    /// Local memory of the first core, or 0 for a core-less device.
    /// All cores of a factory-built processor have the same capacity.
    pub fn local_memory_per_core(&self) -> u64 {
        self.compute_cores
            .first()
            .map(|core| core.local_memory())
            .unwrap_or(0)
    }

    /// The compute cores.
    pub fn compute_cores(&self) -> &[ComputeCore] {
        &self.compute_cores
    }

    /// Build the full device report.
    ///
    /// Core lines are indented two spaces, unit lines four, all in
    /// construction order. Recomputed on every call; the returned string
    /// ends with a final newline.
    pub fn get_device_info(&self) -> String {
        let mut info = String::new();
        info.push_str(&format!("Device: {}\n", self.name));
        info.push_str(&format!("Global Memory: {} bytes\n", self.global_memory));
        info.push_str(&format!(
            "Number of Compute Cores: {}\n",
            self.compute_cores.len()
        ));
        for core in &self.compute_cores {
            info.push_str(&format!("  {}\n", core.get_info()));
            for mm_unit in core.matmul_units() {
                info.push_str(&format!("    {}\n", mm_unit.get_info()));
            }
        }
        info
    }
}

/// Assemble a processor from its configuration values.
///
/// Builds `number_of_mm_units_per_core` matmul units with ids `0..n`,
/// all sharing the given tile sizes, then gives every one of the
/// `number_of_compute_cores` cores a handle to that same unit sequence,
/// and wraps the cores in a [`Processor`].
///
/// The only validated input is `mm_tile_sizes`, which must hold exactly
/// the three M/N/K dimensions. Zero counts and zero sizes are accepted
/// silently.
pub fn create_target(
    name: impl Into<String>,
    global_memory: u64,
    number_of_compute_cores: u32,
    local_memory_per_core: u64,
    number_of_mm_units_per_core: u32,
    mm_tile_sizes: &[u32],
) -> Result<Processor> {
    let &[tile_m, tile_n, tile_k] = mm_tile_sizes else {
        return Err(DeviceError::Validation {
            detail: "mm_tile_sizes must be a tuple of (tile_m, tile_n, tile_k)".into(),
        });
    };

    let mm_units: Arc<[MatmulUnit]> = (0..number_of_mm_units_per_core)
        .map(|i| MatmulUnit::new(i, tile_m, tile_n, tile_k))
        .collect();

    let compute_cores = (0..number_of_compute_cores)
        .map(|i| ComputeCore::new(i, local_memory_per_core, Arc::clone(&mm_units)))
        .collect();

    Ok(Processor::new(name, global_memory, compute_cores))
}

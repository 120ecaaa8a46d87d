//! Compute core model.
//!
//! A core holds local memory and a handle to the device's matmul unit
//! sequence. The sequence is shared across every core of a processor,
//! never copied per core.

use std::sync::Arc;

use serde::Serialize;

use crate::matmul::MatmulUnit;

/// A compute core with local memory and a shared set of matmul units.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ComputeCore {
    /// Core id, unique within the processor.
    pub id: u32,
    /// Local memory capacity in bytes.
    pub local_memory: u64,
    /// The device's matmul units. Every core of one processor holds a
    /// handle to the same underlying sequence.
    pub matmul_units: Arc<[MatmulUnit]>,
}

impl ComputeCore {
    /// Construct a core. The unit sequence handle is stored as given,
    /// not copied; `local_memory` is not validated.
    pub fn new(id: u32, local_memory: u64, matmul_units: Arc<[MatmulUnit]>) -> Self {
        Self {
            id,
            local_memory,
            matmul_units,
        }
    }

    /// One-line description of the core.
    ///
    /// The printed label is "Compute Unit" rather than "Compute Core";
    /// kept verbatim for output compatibility.
    pub fn get_info(&self) -> String {
        format!(
            "Compute Unit ID: {} with Local Memory: {} bytes",
            self.id, self.local_memory
        )
    }

    /// The core's matmul units.
    pub fn matmul_units(&self) -> &[MatmulUnit] {
        &self.matmul_units
    }

    /// Local memory capacity in bytes.
    pub fn local_memory(&self) -> u64 {
        self.local_memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units() -> Arc<[MatmulUnit]> {
        vec![MatmulUnit::new(0, 32, 32, 32), MatmulUnit::new(1, 32, 32, 32)].into()
    }

    #[test]
    fn info_format() {
        let core = ComputeCore::new(0, 524288, units());
        assert_eq!(
            core.get_info(),
            "Compute Unit ID: 0 with Local Memory: 524288 bytes"
        );
    }

    #[test]
    fn info_does_not_enumerate_units() {
        // Unit enumeration happens one level up, in the processor report.
        let core = ComputeCore::new(3, 1024, units());
        assert!(!core.get_info().contains("Matmul"));
    }

    #[test]
    fn stores_unit_handle_without_copying() {
        let shared = units();
        let core = ComputeCore::new(0, 1024, Arc::clone(&shared));
        assert!(Arc::ptr_eq(&core.matmul_units, &shared));
        assert_eq!(core.matmul_units().len(), 2);
    }

    #[test]
    fn zero_local_memory_accepted() {
        let core = ComputeCore::new(0, 0, units());
        assert_eq!(core.local_memory(), 0);
    }
}

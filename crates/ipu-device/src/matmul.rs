//! Matrix-multiply execution unit model.
//!
//! The leaf of the device tree: one execution unit with fixed
//! M/N/K tile dimensions.

use serde::Serialize;

/// A matrix-multiply execution unit with configured tile dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct MatmulUnit {
    /// Unit id, unique within its containing sequence.
    pub id: u32,
    /// Tile M dimension.
    pub tile_m: u32,
    /// Tile N dimension.
    pub tile_n: u32,
    /// Tile K dimension.
    pub tile_k: u32,
}

impl MatmulUnit {
    /// Construct a unit. The tile dimensions are stored verbatim;
    /// no validation is performed.
    pub fn new(id: u32, tile_m: u32, tile_n: u32, tile_k: u32) -> Self {
        Self {
            id,
            tile_m,
            tile_n,
            tile_k,
        }
    }

    /// One-line description of the unit.
    pub fn get_info(&self) -> String {
        format!(
            "Matmul Unit ID: {}, with tile sizes M: {}, N: {}, K: {}",
            self.id, self.tile_m, self.tile_n, self.tile_k
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_format() {
        let unit = MatmulUnit::new(0, 32, 32, 32);
        assert_eq!(
            unit.get_info(),
            "Matmul Unit ID: 0, with tile sizes M: 32, N: 32, K: 32"
        );
    }

    #[test]
    fn stores_dimensions_verbatim() {
        let unit = MatmulUnit::new(7, 16, 8, 64);
        assert_eq!(unit.id, 7);
        assert_eq!(unit.tile_m, 16);
        assert_eq!(unit.tile_n, 8);
        assert_eq!(unit.tile_k, 64);
    }

    #[test]
    fn zero_dimensions_accepted() {
        // Degenerate tiles are not rejected at construction.
        let unit = MatmulUnit::new(0, 0, 0, 0);
        assert_eq!(
            unit.get_info(),
            "Matmul Unit ID: 0, with tile sizes M: 0, N: 0, K: 0"
        );
    }
}

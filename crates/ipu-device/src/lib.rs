//! IPU device model definitions and configuration parsing.
//!
//! Implements the 3-layer model: MatmulUnit + ComputeCore + Processor.
//!
//! A complete device model is assembled from:
//! - **MatmulUnit:** a matrix-multiply execution unit with fixed M/N/K tile sizes
//! - **ComputeCore:** a compute core with local memory and a shared set of matmul units
//! - **Processor:** the device root, holding global memory and the core sequence
//!
//! Construction goes through [`create_target`], which builds the unit
//! sequence once and shares it across every core of the processor.

pub mod config;
pub mod core;
pub mod error;
pub mod matmul;
pub mod processor;

pub use self::config::DeviceConfig;
pub use self::core::ComputeCore;
pub use error::{DeviceError, Result};
pub use matmul::MatmulUnit;
pub use processor::{create_target, Processor};

//! Configuration loading and management for the Payroll Engine.
//!
//! This module provides functionality to load the salary policy from YAML
//! files: policy metadata and the leave types with their allowed days.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Loaded policy: {}", config.policy().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LeaveType, LeaveTypesConfig, PayrollConfig, PolicyMetadata};

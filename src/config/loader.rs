//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading salary policy
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::LeaveTypeAllowance;
use crate::store::LeavePolicy;

use super::types::{LeaveType, LeaveTypesConfig, PayrollConfig, PolicyMetadata};

/// Loads and provides access to the salary policy.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/payroll/
/// ├── policy.yaml       # Policy metadata
/// └── leave_types.yaml  # Leave types and their allowed days
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
/// let casual = loader.get_allowance("casual").unwrap();
/// println!("Casual leave allowance: {} days", casual);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - No leave types are configured
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let metadata = Self::load_yaml::<PolicyMetadata>(&policy_path)?;

        let leave_types_path = path.join("leave_types.yaml");
        let leave_types = Self::load_yaml::<LeaveTypesConfig>(&leave_types_path)?;

        if leave_types.leave_types.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no leave types)", leave_types_path.display()),
            });
        }

        debug!(
            policy = %metadata.code,
            leave_types = leave_types.leave_types.len(),
            "Loaded salary policy"
        );

        Ok(Self {
            config: PayrollConfig::new(metadata, leave_types.leave_types),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the policy metadata.
    pub fn policy(&self) -> &PolicyMetadata {
        self.config.policy()
    }

    /// Gets a leave type by name.
    ///
    /// Returns `LeaveTypeNotFound` if the type is not configured.
    pub fn get_leave_type(&self, leave_type: &str) -> EngineResult<&LeaveType> {
        self.config
            .leave_types()
            .get(leave_type)
            .ok_or_else(|| EngineError::LeaveTypeNotFound {
                leave_type: leave_type.to_string(),
            })
    }

    /// Gets the allowed days for a leave type.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/payroll")?;
    /// assert_eq!(loader.get_allowance("casual")?, 5);
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn get_allowance(&self, leave_type: &str) -> EngineResult<u32> {
        self.get_leave_type(leave_type).map(|t| t.allowed_days)
    }

    /// Returns the full allowance table.
    pub fn leave_allowances(&self) -> Vec<LeaveTypeAllowance> {
        self.config.leave_allowances()
    }
}

impl LeavePolicy for ConfigLoader {
    fn get_allowance(&self, leave_type: &str) -> Option<u32> {
        ConfigLoader::get_allowance(self, leave_type).ok()
    }
}

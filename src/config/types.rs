//! Configuration types for salary calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::models::LeaveTypeAllowance;

/// Metadata about the salary policy.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// Short policy code.
    pub code: String,
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
    /// Currency salaries are paid in.
    pub currency: String,
}

/// A leave type and its allowance.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveType {
    /// Maximum days credited for this leave type.
    pub allowed_days: u32,
    /// A description of the leave type.
    #[serde(default)]
    pub description: String,
}

/// Leave types configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveTypesConfig {
    /// Map of leave type name to its allowance.
    pub leave_types: BTreeMap<String, LeaveType>,
}

/// The complete salary policy loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    metadata: PolicyMetadata,
    leave_types: BTreeMap<String, LeaveType>,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(metadata: PolicyMetadata, leave_types: BTreeMap<String, LeaveType>) -> Self {
        Self {
            metadata,
            leave_types,
        }
    }

    /// Returns the policy metadata.
    pub fn policy(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns all leave types keyed by name.
    pub fn leave_types(&self) -> &BTreeMap<String, LeaveType> {
        &self.leave_types
    }

    /// Returns the leave types as an allowance table, ordered by name.
    pub fn leave_allowances(&self) -> Vec<LeaveTypeAllowance> {
        self.leave_types
            .iter()
            .map(|(name, leave_type)| LeaveTypeAllowance {
                leave_type: name.clone(),
                allowed_days: leave_type.allowed_days,
            })
            .collect()
    }
}

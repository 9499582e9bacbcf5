//! Payroll Engine for monthly salaries
//!
//! This crate calculates an employee's monthly salary from the days they
//! attended, the overtime they worked, and the leave they took against the
//! allowance for each leave type.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

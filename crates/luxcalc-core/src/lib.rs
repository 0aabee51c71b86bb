//! LuxCalc Core - Reference tables, lighting calculation engine, and configuration
//!
//! This crate contains the pure lighting computation engine and the domain models
//! shared by the LuxCalc front-ends.

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod share;
pub mod tables;

pub use engine::{optimal_fixture_layout, perform_full_calculation};
pub use error::{LuxcalcError, Result};

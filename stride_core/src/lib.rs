#![forbid(unsafe_code)]

//! Core domain model and business logic for the Stride fitness tracker.
//!
//! This crate provides:
//! - Domain types (workout types, user profile, progress, history)
//! - Calorie/distance/step estimation
//! - Pure state transitions over the aggregate state
//! - Persistence (JSON state file, CSV history export)
//! - Configuration

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod estimator;
pub mod progress;
pub mod state;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use estimator::{estimate, Estimate};
pub use progress::CALORIES_PER_KG;
pub use export::export_history;

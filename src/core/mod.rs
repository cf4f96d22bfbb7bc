//! Core types shared by every component: configuration, the per-run
//! context, and the crate error.

pub mod config;
pub mod context;
pub mod error;

pub use config::AnalysisConfig;
pub use context::{compile_effect_filter, AnalysisContext};
pub use error::{Result, SynergyError};

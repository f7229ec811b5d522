//! Core types and utilities for capalloc.

pub mod config;
pub mod error;
pub mod types;

pub use config::AllocationConfig;
pub use error::{AllocError, Result};
pub use types::*;

//! HTTP request handlers.
//!
//! This module contains all HTTP handlers organized by feature.

pub mod cart;
pub mod contest;
pub mod health;
pub mod newsletter;
pub mod pages;
pub mod process;

// Re-export common handler utilities
pub use health::health_check;

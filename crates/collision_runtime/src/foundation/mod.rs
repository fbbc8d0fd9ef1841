//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the runtime:
//! - 2D math types and rotation helpers

pub mod math;

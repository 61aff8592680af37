//! Infrastructure Layer: Debugging
//!
//! Provides the debug channel used across the workspace.
//! Depends on the Infrastructure utilities for environment configuration.

pub mod debug_utils;

pub use debug_utils::{DebugUtils, DEBUG_ENV, VERBOSE_ENV};

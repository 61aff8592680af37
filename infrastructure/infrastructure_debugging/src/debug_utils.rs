//! Debug Utilities Module
//!
//! Provides a process-wide debug channel on stderr.
//!
//! Output is off by default. It is switched on programmatically or from the
//! environment:
//! - `UTIL_DEBUG` enables `[DEBUG]` lines
//! - `UTIL_DEBUG_VERBOSE` additionally enables `[VERBOSE]` lines

use infrastructure_utilities::EnvUtils;
use std::sync::atomic::{AtomicBool, Ordering};

/// Environment variable that enables debug output
pub const DEBUG_ENV: &str = "UTIL_DEBUG";
/// Environment variable that enables verbose debug output
pub const VERBOSE_ENV: &str = "UTIL_DEBUG_VERBOSE";

/// Global debug state
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);
static VERBOSE_DEBUG: AtomicBool = AtomicBool::new(false);

/// Debug utilities for debugging operations
pub struct DebugUtils;

impl DebugUtils {
    /// Enable debug output
    ///
    /// # Examples
    ///
    /// ```rust
    /// use infrastructure_debugging::DebugUtils;
    ///
    /// DebugUtils::enable();
    /// DebugUtils::debug_output("This will be printed");
    /// DebugUtils::disable();
    /// DebugUtils::debug_output("This will be suppressed");
    /// ```
    pub fn enable() {
        DEBUG_ENABLED.store(true, Ordering::Release);
    }

    /// Disable debug output
    pub fn disable() {
        DEBUG_ENABLED.store(false, Ordering::Release);
    }

    /// Check if debug output is enabled
    pub fn is_enabled() -> bool {
        DEBUG_ENABLED.load(Ordering::Acquire)
    }

    /// Enable verbose debug output
    ///
    /// Verbose lines still require debug output to be enabled.
    pub fn enable_verbose() {
        VERBOSE_DEBUG.store(true, Ordering::Release);
    }

    /// Disable verbose debug output
    pub fn disable_verbose() {
        VERBOSE_DEBUG.store(false, Ordering::Release);
    }

    /// Check if verbose debug is enabled
    pub fn is_verbose() -> bool {
        VERBOSE_DEBUG.load(Ordering::Acquire)
    }

    /// Set both flags from `UTIL_DEBUG` and `UTIL_DEBUG_VERBOSE`
    ///
    /// Flags whose variable is absent or unrecognized keep their current value.
    pub fn init_from_env() {
        let debug = EnvUtils::getenv_bool(DEBUG_ENV, Self::is_enabled());
        let verbose = EnvUtils::getenv_bool(VERBOSE_ENV, Self::is_verbose());
        DEBUG_ENABLED.store(debug, Ordering::Release);
        VERBOSE_DEBUG.store(verbose, Ordering::Release);
    }

    /// Output a debug message if debug output is enabled
    pub fn debug_output(message: &str) {
        if let Some(line) = Self::debug_line(message) {
            eprintln!("{}", line);
        }
    }

    /// Output a verbose message if both debug and verbose output are enabled
    pub fn verbose_output(message: &str) {
        if let Some(line) = Self::verbose_line(message) {
            eprintln!("{}", line);
        }
    }

    /// The line `debug_output` would print, if any
    pub fn debug_line(message: &str) -> Option<String> {
        Self::is_enabled().then(|| format!("[DEBUG] {}", message))
    }

    /// The line `verbose_output` would print, if any
    pub fn verbose_line(message: &str) -> Option<String> {
        (Self::is_enabled() && Self::is_verbose()).then(|| format!("[VERBOSE] {}", message))
    }
}

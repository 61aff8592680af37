//! Integration tests for infrastructure_debugging crate
//!
//! Kept to a single test so no other test in this binary races on the flags.

use infrastructure_debugging::*;

#[test]
fn test_debug_channel_from_environment() {
    std::env::set_var(DEBUG_ENV, "true");
    std::env::set_var(VERBOSE_ENV, "yes");
    DebugUtils::init_from_env();

    assert!(DebugUtils::is_enabled());
    assert!(DebugUtils::is_verbose());
    assert_eq!(
        DebugUtils::verbose_line("wrote envelope"),
        Some("[VERBOSE] wrote envelope".to_string())
    );

    std::env::set_var(DEBUG_ENV, "false");
    DebugUtils::init_from_env();
    assert!(!DebugUtils::is_enabled());
    assert_eq!(DebugUtils::verbose_line("wrote envelope"), None);
    assert_eq!(DebugUtils::debug_line("anything"), None);
}

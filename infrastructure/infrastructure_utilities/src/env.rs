//! Environment Utilities
//!
//! Provides read-only access to process environment variables with fallbacks.
//! A variable that is unset, set to the empty string, or not valid Unicode is
//! treated as absent by every function here.

use std::env;
use std::str::FromStr;

/// Environment variable helpers
pub struct EnvUtils;

impl EnvUtils {
    /// Get an environment variable, or a fallback if it is absent or empty
    ///
    /// # Arguments
    /// * `key` - The environment variable name
    /// * `fallback` - Value returned when the variable is absent or empty
    ///
    /// # Returns
    /// The variable's value, or `fallback`
    ///
    /// # Examples
    /// ```
    /// use infrastructure_utilities::EnvUtils;
    ///
    /// std::env::set_var("ENV_UTILS_DOC_KEY", "example_value");
    /// assert_eq!(EnvUtils::getenv("ENV_UTILS_DOC_KEY", "default_value"), "example_value");
    /// assert_eq!(EnvUtils::getenv("ENV_UTILS_DOC_MISSING", "default_value"), "default_value");
    /// ```
    pub fn getenv(key: &str, fallback: &str) -> String {
        Self::getenv_opt(key).unwrap_or_else(|| fallback.to_string())
    }

    /// Get an environment variable as an `Option`
    ///
    /// # Returns
    /// * `Some(value)` - If the variable is set and non-empty
    /// * `None` - Otherwise
    pub fn getenv_opt(key: &str) -> Option<String> {
        env::var(key).ok().filter(|value| !value.is_empty())
    }

    /// Get an environment variable parsed into `T`
    ///
    /// Falls back when the variable is absent, empty, or does not parse.
    ///
    /// # Examples
    /// ```
    /// use infrastructure_utilities::EnvUtils;
    ///
    /// std::env::set_var("ENV_UTILS_DOC_PORT", "8080");
    /// assert_eq!(EnvUtils::getenv_parsed("ENV_UTILS_DOC_PORT", 80u16), 8080);
    /// std::env::set_var("ENV_UTILS_DOC_PORT", "eighty");
    /// assert_eq!(EnvUtils::getenv_parsed("ENV_UTILS_DOC_PORT", 80u16), 80);
    /// ```
    pub fn getenv_parsed<T: FromStr>(key: &str, fallback: T) -> T {
        Self::getenv_opt(key)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(fallback)
    }

    /// Get an environment variable as a boolean flag
    ///
    /// `1`, `true`, `yes`, `on` are true and `0`, `false`, `no`, `off` are false,
    /// case-insensitive with surrounding whitespace ignored. Anything else,
    /// including an absent or empty variable, yields `fallback`.
    pub fn getenv_bool(key: &str, fallback: bool) -> bool {
        match Self::getenv_opt(key) {
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => fallback,
            },
            None => fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_getenv_present() {
        env::set_var("ENV_UTILS_TEST_PRESENT", "value");
        assert_eq!(EnvUtils::getenv("ENV_UTILS_TEST_PRESENT", "fallback"), "value");
    }

    #[test]
    fn test_getenv_absent() {
        env::remove_var("ENV_UTILS_TEST_ABSENT");
        assert_eq!(EnvUtils::getenv("ENV_UTILS_TEST_ABSENT", "fallback"), "fallback");
    }

    #[test]
    fn test_getenv_empty_uses_fallback() {
        env::set_var("ENV_UTILS_TEST_EMPTY", "");
        assert_eq!(EnvUtils::getenv("ENV_UTILS_TEST_EMPTY", "fallback"), "fallback");
    }

    #[test]
    fn test_getenv_whitespace_is_a_value() {
        env::set_var("ENV_UTILS_TEST_SPACES", "  ");
        assert_eq!(EnvUtils::getenv("ENV_UTILS_TEST_SPACES", "fallback"), "  ");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_value_is_absent() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        env::set_var("ENV_UTILS_TEST_NON_UNICODE", OsStr::from_bytes(b"\xff"));
        assert_eq!(EnvUtils::getenv("ENV_UTILS_TEST_NON_UNICODE", "fb"), "fb");
        assert_eq!(EnvUtils::getenv_opt("ENV_UTILS_TEST_NON_UNICODE"), None);
        assert!(EnvUtils::getenv_bool("ENV_UTILS_TEST_NON_UNICODE", true));
    }

    #[test]
    fn test_getenv_opt() {
        env::set_var("ENV_UTILS_TEST_OPT", "x");
        env::set_var("ENV_UTILS_TEST_OPT_EMPTY", "");
        assert_eq!(EnvUtils::getenv_opt("ENV_UTILS_TEST_OPT"), Some("x".to_string()));
        assert_eq!(EnvUtils::getenv_opt("ENV_UTILS_TEST_OPT_EMPTY"), None);
        assert_eq!(EnvUtils::getenv_opt("ENV_UTILS_TEST_OPT_MISSING"), None);
    }

    #[test]
    fn test_getenv_parsed() {
        env::set_var("ENV_UTILS_TEST_PARSED", " 42 ");
        env::set_var("ENV_UTILS_TEST_PARSED_BAD", "forty-two");
        assert_eq!(EnvUtils::getenv_parsed("ENV_UTILS_TEST_PARSED", 0i32), 42);
        assert_eq!(EnvUtils::getenv_parsed("ENV_UTILS_TEST_PARSED_BAD", 7i32), 7);
        assert_eq!(EnvUtils::getenv_parsed("ENV_UTILS_TEST_PARSED_MISSING", 1.5f64), 1.5);
    }

    #[test]
    fn test_getenv_bool() {
        for (i, raw) in ["1", "true", "YES", " On "].iter().enumerate() {
            let key = format!("ENV_UTILS_TEST_BOOL_T{}", i);
            env::set_var(&key, raw);
            assert!(EnvUtils::getenv_bool(&key, false), "{:?} should be true", raw);
        }
        for (i, raw) in ["0", "false", "No", "OFF"].iter().enumerate() {
            let key = format!("ENV_UTILS_TEST_BOOL_F{}", i);
            env::set_var(&key, raw);
            assert!(!EnvUtils::getenv_bool(&key, true), "{:?} should be false", raw);
        }
        env::set_var("ENV_UTILS_TEST_BOOL_JUNK", "maybe");
        assert!(EnvUtils::getenv_bool("ENV_UTILS_TEST_BOOL_JUNK", true));
        assert!(!EnvUtils::getenv_bool("ENV_UTILS_TEST_BOOL_MISSING", false));
    }
}

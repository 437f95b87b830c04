//! Infrastructure constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "fieldlogic.toml";

/// Environment variable prefix; nested keys follow after `__`
pub const CONFIG_ENV_PREFIX: &str = "FIELDLOGIC";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "FIELDLOGIC_LOG";

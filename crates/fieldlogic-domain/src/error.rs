//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for fieldlogic
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Malformed or unsafe expression
    #[error("Expression error: {message}")]
    Expression {
        /// Description of what could not be evaluated
        message: String,
    },

    /// Rule name not present in the registry
    #[error("Unknown rule: {name}")]
    UnknownRule {
        /// The rule name as written in the chain
        name: String,
    },

    /// Rule chain that cannot be interpreted
    #[error("Invalid rule chain: {message}")]
    InvalidRuleChain {
        /// Description of the problem
        message: String,
    },

    /// Form schema problem
    #[error("Schema error: {message}")]
    Schema {
        /// Description of the schema problem
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Evaluation error creation methods
impl Error {
    /// Create an expression error
    pub fn expression<S: Into<String>>(message: S) -> Self {
        Self::Expression {
            message: message.into(),
        }
    }

    /// Create an unknown rule error
    pub fn unknown_rule<S: Into<String>>(name: S) -> Self {
        Self::UnknownRule { name: name.into() }
    }

    /// Create an invalid rule chain error
    pub fn invalid_rule_chain<S: Into<String>>(message: S) -> Self {
        Self::InvalidRuleChain {
            message: message.into(),
        }
    }

    /// Create a schema error
    pub fn schema<S: Into<String>>(message: S) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

//! Domain layer constants
//!
//! Names and limits shared by the expression evaluator and the rule engine.

// ============================================================================
// EXPRESSION CONTEXT CONSTANTS
// ============================================================================

/// Context key holding the subject field's current value
pub const CONTEXT_KEY_VALUE: &str = "value";

/// Prefix routing an operand to the caller's field resolver
pub const FIELDS_PREFIX: &str = "fields.";

/// Prefix aliasing a direct context lookup
pub const SOURCE_PREFIX: &str = "source.";

/// Path segments that stop resolution and yield `null`
pub const GUARDED_SEGMENTS: [&str; 3] = ["__proto__", "constructor", "prototype"];

/// Default limit on parenthesised group nesting during evaluation
pub const DEFAULT_MAX_EXPRESSION_DEPTH: usize = 32;

// ============================================================================
// RULE CHAIN CONSTANTS
// ============================================================================

/// Separator between rule tokens in a chain
pub const RULE_SEPARATOR: char = ',';

/// Characters separating a rule name from its parameter (first match wins)
pub const RULE_PARAM_SEPARATORS: [char; 2] = ['=', ':'];

/// Name of the presence rule dependency actions add and remove
///
/// Together with `required_with` and `required_without` it forms the
/// presence family, the only rules evaluated against empty values.
pub const RULE_REQUIRED: &str = "required";

/// Extensions the `ext:image` preset expands to
pub const IMAGE_EXTENSIONS: [&str; 12] = [
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "svg", "ico", "tif", "tiff", "avif", "heic",
];

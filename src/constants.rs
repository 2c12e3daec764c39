//! Constants for model path validation.

/// Maximum length of a single component, in bytes.
///
/// Applies to each of domain, namespace, name, tag and build on its own;
/// the separators between them are not counted.
pub const MAX_COMPONENT_LENGTH: usize = 255;

/// Scheme prefixes stripped before scanning, in the order they are checked.
pub const SCHEME_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Prefix of the placeholder [`ModelPath::full`](crate::ModelPath::full)
/// writes in place of an empty component.
pub const MISSING_PREFIX: &str = "!(MISSING ";

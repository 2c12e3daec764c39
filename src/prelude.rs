//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use model_path::prelude::*;
//!
//! let p = ModelPath::parse("mistral:latest");
//! assert_eq!(p.get(Part::Tag), "latest");
//! ```

pub use crate::{
    // Core types
    ModelPath, ModelPathRef, Part,
    // Operations
    merge, strip_scheme,
    // Errors
    ParseError,
    // Constants
    MAX_COMPONENT_LENGTH, MISSING_PREFIX, SCHEME_PREFIXES,
};

//! Parser and validator for model references.
//!
//! A model reference names a model artifact in a registry. This crate turns
//! the textual form into a validated [`ModelPath`] and renders it back.
//!
//! # Overview
//!
//! References have the structure:
//!
//! ```text
//! [http(s)://][[domain/]namespace/]name[:tag][+build]
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use model_path::ModelPath;
//!
//! let p = ModelPath::parse("registry.example.com/library/mistral:7b+q4_0");
//! assert!(p.is_valid());
//! assert_eq!(p.domain(), "registry.example.com");
//! assert_eq!(p.namespace(), "library");
//! assert_eq!(p.name_tag_and_build(), "mistral:7b+Q4_0");
//!
//! // Malformed input yields the zero value rather than an error
//! let bad = ModelPath::parse("x/y/z/foo");
//! assert!(!bad.is_valid());
//! assert_eq!(bad.name(), "");
//! ```
//!
//! # Merging
//!
//! A partial reference can be completed from a default one:
//!
//! ```rust
//! use model_path::{merge, ModelPath};
//!
//! let r = merge(
//!     &ModelPath::parse("mistral"),
//!     &ModelPath::parse("registry.example.com/XXXXX:latest+Q4_0"),
//! );
//! assert_eq!(r.to_string(), "registry.example.com/mistral:latest+Q4_0");
//! ```
//!
//! # Grammar
//!
//! | Rule | Constraint |
//! |------|------------|
//! | Component bytes | ASCII letters, digits, `.`, `-`, `_` |
//! | Component length | 1 to 255 bytes when present |
//! | Segments | at most three `/`-separated segments |
//! | Name | required |
//! | Tag | after the first `:` in the last segment |
//! | Build | after the `+`; stored upper-cased |
//!
//! One `/` means `namespace/name`; two mean `domain/namespace/name`.
//!
//! Scanning is done over borrowed slices ([`ModelPathRef`]) without heap
//! allocation; only the conversion to an owned [`ModelPath`] allocates.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod constants;
mod error;
#[cfg(kani)]
mod kani_impls;
mod part;
mod path;
mod path_ref;
pub mod prelude;
mod scanner;
mod scheme;

pub use constants::{MAX_COMPONENT_LENGTH, MISSING_PREFIX, SCHEME_PREFIXES};
pub use error::ParseError;
pub use part::Part;
pub use path::{ModelPath, merge};
pub use path_ref::ModelPathRef;
pub use scheme::strip_scheme;

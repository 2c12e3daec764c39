//! OpenAI-compatible model listing and resolution for `model-path`.
//!
//! This crate holds the parts of an OpenAI-dialect compatibility layer that
//! touch model references:
//!
//! - **Listing**: [`ModelList`] converts native [`ListedModel`] entries into
//!   the `{"object": "list", "data": [...]}` shape, attributing each model to
//!   the namespace of its reference
//! - **Resolution**: [`resolve_model`] parses the `model` field of a request
//!   and completes it from registry defaults
//! - **Errors**: [`ErrorResponse`] renders failures in the OpenAI error
//!   envelope
//!
//! No HTTP server is included; callers plug these into their own handlers.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::{DateTime, Utc};
//! use model_path_openai::{ListConfig, ListedModel, ModelList};
//!
//! let modified = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
//! let models = vec![ListedModel::new("registry.example.com/library/mistral:latest", modified)];
//!
//! let list = ModelList::from_listed(&models, &ListConfig::default());
//! assert_eq!(list.data[0].owned_by, "library");
//! assert_eq!(list.data[0].created, 1_700_000_000);
//! ```
//!
//! # Logging
//!
//! Events are emitted through `tracing`; no subscriber is installed here.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod config;
mod error;
mod list;
mod resolve;

pub use config::ListConfig;
pub use error::{ErrorBody, ErrorResponse, ErrorType, STATUS_BAD_REQUEST, STATUS_NOT_FOUND};
pub use list::{ListedModel, ModelCard, ModelList};
pub use resolve::resolve_model;

//! XZuFi Harvester - Extract online service links from XZuFi 2.2 messages.
//!
//! This crate decodes XZuFi messages, the German federal exchange format for
//! administrative service descriptions, into typed records and derives the
//! list of online service entry points from them.
//!
//! # Example
//!
//! ```
//! use xzufi_harvester::config;
//!
//! // Both spellings of the supported version are accepted
//! assert!(config::validate_version(Some("2.2")).is_ok());
//! assert!(config::validate_version(Some("2.2.0")).is_ok());
//! ```
//!
//! # Architecture
//!
//! The harvester is organized into several modules:
//!
//! - [`config`]: Configuration constants and validation
//! - [`types`]: Record types (Identifier, ServiceRecord, OnlineServiceRecord, etc.)
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Namespace-aware XML utilities
//! - [`envelope`]: Message envelope validation
//! - [`parser`]: Record parsers
//! - [`walker`]: Element classification and dispatch
//! - [`collector`]: Link output
//! - [`harvester`]: Single-message entry points
//! - [`batch`]: Index-driven processing of data dumps
//! - [`cli`]: Command-line interface

pub mod batch;
pub mod cli;
pub mod collector;
pub mod config;
pub mod envelope;
pub mod error;
pub mod harvester;
pub mod parser;
pub mod types;
pub mod walker;
pub mod xml;

// Re-export main functions
pub use harvester::{extract_file, extract_links, parse_file, parse_message};

// Re-export commonly used items
pub use collector::LinkCollector;
pub use error::{EnvelopeError, HarvesterError, Result};
pub use types::{
    CompetencyAssignment, Identifier, LinkEntry, Message, OnlineServiceRecord,
    OrganizationalUnit, ServiceRecord, SpecializationRecord,
};
pub use walker::{MessageWalker, WalkState};

//! Decoders for the XZuFi records carried in a `schreibe` block.
//!
//! Each parser receives an element that the walker has already classified
//! and returns the typed record. Parsers are pure: they read the DOM and
//! nothing else.

mod identifier;
mod online_service;
mod organization;
mod service;
mod specialization;

pub use identifier::parse_identifier;
pub use online_service::{parse_link, parse_online_service, ONLINE_SERVICE_TAG};
pub use organization::{parse_competency, parse_organizational_unit, ORGANIZATIONAL_UNIT_TAG};
pub use service::{parse_service, SERVICE_TAG};
pub use specialization::{parse_specialization, SPECIALIZATION_TAG};

use roxmltree::Node;

use crate::error::{HarvesterError, Result};
use crate::xml::{find_unqualified_child, get_raw_text};

/// Read the unqualified `code` child of a code list value.
///
/// The code is returned untrimmed; code list values compare exactly.
fn read_code(node: Node<'_, '_>, context: &str) -> Result<String> {
    find_unqualified_child(node, "code")
        .map(get_raw_text)
        .ok_or_else(|| HarvesterError::MissingElement {
            element: format!("{}/code", crate::xml::get_tag_name(node)),
            context: context.to_string(),
        })
}

/// Describe a record for error messages, e.g. `<leistung> 'L100001'`.
fn record_context(tag: &str, id: &str) -> String {
    format!("<{tag}> '{id}'")
}

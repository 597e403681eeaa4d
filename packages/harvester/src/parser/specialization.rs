//! Specialization (`spezialisierung`) parser.

use roxmltree::Node;

use crate::types::SpecializationRecord;

/// Local name of a specialization record.
pub const SPECIALIZATION_TAG: &str = "spezialisierung";

/// Accept a `spezialisierung` element.
///
/// Specializations are recognized but their content is not decoded yet.
pub fn parse_specialization(_node: Node<'_, '_>) -> SpecializationRecord {
    SpecializationRecord::default()
}

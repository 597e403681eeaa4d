//! Organizational unit (`organisationseinheit`) and competency
//! (`zustaendigkeit`) parsers.

use roxmltree::Node;

use super::{parse_identifier, record_context};
use crate::error::{HarvesterError, Result};
use crate::types::{CompetencyAssignment, OrganizationalUnit};
use crate::xml::{describe, find_children, get_raw_text, require_attribute, require_path};

/// Local name of an organizational unit record.
pub const ORGANIZATIONAL_UNIT_TAG: &str = "organisationseinheit";

/// Decode an `organisationseinheit` element.
///
/// # Errors
/// `MissingAttribute` if the id carries no `schemeAgencyID`, plus any error
/// of the embedded competencies.
pub fn parse_organizational_unit(node: Node<'_, '_>) -> Result<OrganizationalUnit> {
    let id_node = require_path(node, "id", &describe(node))?;
    require_attribute(id_node, "schemeAgencyID")?;
    let id = parse_identifier(id_node);
    let context = record_context(ORGANIZATIONAL_UNIT_TAG, &id.id);

    let name = get_raw_text(require_path(node, "name/name", &context)?);

    let competencies = find_children(node, "zustaendigkeit")
        .map(|competency| parse_competency(competency, &context))
        .collect::<Result<Vec<_>>>()?;

    Ok(OrganizationalUnit {
        id,
        name,
        competencies,
    })
}

/// Decode a `zustaendigkeit` element.
///
/// # Arguments
/// * `node` - The `zustaendigkeit` element
/// * `context` - Description of the enclosing record for error messages
///
/// # Errors
/// `Cardinality` unless exactly one `leistungID` is present.
pub fn parse_competency(node: Node<'_, '_>, context: &str) -> Result<CompetencyAssignment> {
    let service_ids: Vec<_> = find_children(node, "leistungID").collect();
    let [service_id] = service_ids.as_slice() else {
        return Err(HarvesterError::Cardinality {
            element: "leistungID".to_string(),
            context: format!("<zustaendigkeit> of {context}"),
            found: service_ids.len(),
        });
    };

    Ok(CompetencyAssignment {
        service_id: parse_identifier(*service_id),
        region_ids: find_children(node, "gebietID").map(parse_identifier).collect(),
    })
}
